//! Password strength analysis and personal wordlist generation
//!
//! This library provides two independent tools:
//!
//! - strength estimation behind the [`StrengthEstimator`] trait, backed by
//!   zxcvbn or by a local section-based heuristic;
//! - generation of candidate passwords from personal keywords (names, pets,
//!   dates) through case variants, leetspeak and common suffixes.
//!
//! # Features
//!
//! - `zxcvbn` (default): Enables the zxcvbn-backed estimator
//! - `tracing` (default): Enables logging via tracing crate
//! - `cli-logging` (default): Installs a `tracing-subscriber` log writer in the
//!   `pwd-forge` binary; library users can leave it off
//!
//! # Environment Variables
//!
//! - `PWD_FORGE_BLACKLIST_PATH`: Custom common password list for the
//!   heuristic estimator (default: embedded list)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_forge::{estimator_for, generate, EstimatorKind, GeneratorConfig, KeywordKind, KeywordSet};
//! use secrecy::SecretString;
//!
//! let estimator = estimator_for(EstimatorKind::Heuristic, &[], None).expect("estimator");
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = estimator.estimate(&password).expect("estimate");
//! println!("Score: {}", report.score);
//!
//! let keywords = KeywordSet::new()
//!     .with(KeywordKind::Name, "raj")
//!     .with(KeywordKind::Pet, "tommy");
//! let wordlist = generate(&keywords, &GeneratorConfig::default());
//! pwd_forge::write_wordlist(&wordlist, "custom_wordlist.txt").expect("write");
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod sections;
mod strength;
pub mod wordlist;
#[cfg(feature = "zxcvbn")]
mod zxcvbn_estimator;

// Public API
pub use blacklist::{get_blacklist_path, Blacklist, BlacklistError, BLACKLIST_PATH_ENV};
pub use evaluator::{Evaluation, HeuristicEstimator};
pub use sections::{Finding, FindingKind};
pub use strength::{
    crack_time_seconds, display_crack_time, estimator_for, EstimatorKind, StrengthError,
    StrengthEstimator, StrengthReport, StrengthScore, OFFLINE_SLOW_HASH_GUESSES_PER_SECOND,
};
pub use wordlist::{
    generate, write_wordlist, GeneratorConfig, KeywordKind, KeywordSet, Wordlist, WordlistError,
    DEFAULT_MAX_LEET_VARIANTS, DEFAULT_OUTPUT_PATH, DEFAULT_SUFFIXES,
};

#[cfg(feature = "zxcvbn")]
pub use zxcvbn_estimator::ZxcvbnEstimator;
