//! Strength estimation interface.
//!
//! A [`StrengthEstimator`] turns a password into a [`StrengthReport`]. Two
//! estimators ship with the crate: the zxcvbn-backed one (feature `zxcvbn`)
//! and the local [`HeuristicEstimator`](crate::HeuristicEstimator).

use std::fmt;
use std::path::Path;

use secrecy::SecretString;
use thiserror::Error;

use crate::blacklist::{Blacklist, BlacklistError};
use crate::evaluator::HeuristicEstimator;

/// Guess rate of the offline slow-hash attack scenario (bcrypt/scrypt class).
pub const OFFLINE_SLOW_HASH_GUESSES_PER_SECOND: f64 = 1e4;

#[derive(Error, Debug)]
pub enum StrengthError {
    #[error("No password provided")]
    EmptyPassword,
    #[error("Strength estimator `{name}` is unavailable. {remedy}")]
    EstimatorUnavailable { name: &'static str, remedy: &'static str },
    #[error("Strength estimation failed: {0}")]
    Estimator(String),
    #[error(transparent)]
    Blacklist(#[from] BlacklistError),
}

/// Discrete strength score, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthScore {
    VeryWeak = 0,
    Weak = 1,
    Fair = 2,
    Strong = 3,
    VeryStrong = 4,
}

impl StrengthScore {
    pub const MAX: StrengthScore = StrengthScore::VeryStrong;

    /// Builds a score from its numeric value, clamping anything above 4.
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => StrengthScore::VeryWeak,
            1 => StrengthScore::Weak,
            2 => StrengthScore::Fair,
            3 => StrengthScore::Strong,
            _ => StrengthScore::VeryStrong,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthScore::VeryWeak => "very weak",
            StrengthScore::Weak => "weak",
            StrengthScore::Fair => "fair",
            StrengthScore::Strong => "strong",
            StrengthScore::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value(), self.label())
    }
}

/// Result of a strength estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    pub score: StrengthScore,
    /// Base-10 logarithm of the estimated number of guesses.
    pub guesses_log10: f64,
    /// Offline slow-hash crack time, in seconds.
    pub crack_time_seconds: f64,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    /// Builds a report from a guess count estimate, deriving the crack time.
    pub fn from_guesses_log10(
        score: StrengthScore,
        guesses_log10: f64,
        warning: Option<String>,
        suggestions: Vec<String>,
    ) -> Self {
        let guesses_log10 = guesses_log10.max(0.0);
        Self {
            score,
            guesses_log10,
            crack_time_seconds: crack_time_seconds(guesses_log10),
            warning,
            suggestions,
        }
    }

    /// Entropy estimate in bits.
    pub fn entropy_bits(&self) -> f64 {
        self.guesses_log10 * std::f64::consts::LOG2_10
    }

    pub fn crack_time_display(&self) -> String {
        display_crack_time(self.crack_time_seconds)
    }

    /// Warning followed by suggestions, as display lines.
    pub fn feedback(&self) -> Vec<String> {
        self.warning
            .iter()
            .cloned()
            .chain(self.suggestions.iter().cloned())
            .collect()
    }
}

/// Seconds needed to exhaust `10^guesses_log10` guesses at the slow-hash rate.
pub fn crack_time_seconds(guesses_log10: f64) -> f64 {
    10f64.powf(guesses_log10) / OFFLINE_SLOW_HASH_GUESSES_PER_SECOND
}

/// Human readable crack time, e.g. `"3 hours"` or `"centuries"`.
pub fn display_crack_time(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = MINUTE * 60.0;
    const DAY: f64 = HOUR * 24.0;
    const MONTH: f64 = DAY * 31.0;
    const YEAR: f64 = MONTH * 12.0;
    const CENTURY: f64 = YEAR * 100.0;

    // (unit size, name, size of the next unit)
    const UNITS: [(f64, &str, f64); 6] = [
        (1.0, "second", MINUTE),
        (MINUTE, "minute", HOUR),
        (HOUR, "hour", DAY),
        (DAY, "day", MONTH),
        (MONTH, "month", YEAR),
        (YEAR, "year", CENTURY),
    ];

    if seconds < 1.0 {
        return "less than a second".to_string();
    }

    // Rounding may carry into the next unit: 59.6 s is "1 minute".
    for (size, unit, next) in UNITS {
        let amount = (seconds / size).round();
        if amount * size < next {
            let amount = amount as u64;
            return if amount == 1 {
                format!("1 {}", unit)
            } else {
                format!("{} {}s", amount, unit)
            };
        }
    }

    "centuries".to_string()
}

/// Estimates password strength.
pub trait StrengthEstimator {
    fn name(&self) -> &'static str;

    fn estimate(&self, password: &SecretString) -> Result<StrengthReport, StrengthError>;
}

/// Available estimator implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorKind {
    Zxcvbn,
    Heuristic,
}

/// Builds the requested estimator.
///
/// `user_inputs` are personal tokens (name, pet, ...) the estimators treat as
/// guessable. `blacklist_path` overrides the heuristic estimator's common
/// password list.
///
/// # Errors
///
/// Returns [`StrengthError::EstimatorUnavailable`] when zxcvbn is requested
/// but the crate was built without the `zxcvbn` feature, and
/// [`StrengthError::Blacklist`] when a custom blacklist cannot be loaded.
pub fn estimator_for(
    kind: EstimatorKind,
    user_inputs: &[String],
    blacklist_path: Option<&Path>,
) -> Result<Box<dyn StrengthEstimator>, StrengthError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(?kind, inputs = user_inputs.len(), "selecting strength estimator");

    match kind {
        #[cfg(feature = "zxcvbn")]
        EstimatorKind::Zxcvbn => Ok(Box::new(crate::zxcvbn_estimator::ZxcvbnEstimator::new(
            user_inputs.to_vec(),
        ))),
        #[cfg(not(feature = "zxcvbn"))]
        EstimatorKind::Zxcvbn => Err(StrengthError::EstimatorUnavailable {
            name: "zxcvbn",
            remedy: "Reinstall with: cargo install pwd-forge --features zxcvbn (or use --estimator heuristic)",
        }),
        EstimatorKind::Heuristic => {
            let blacklist = match blacklist_path {
                Some(path) => Blacklist::from_path(path)?,
                None => Blacklist::load()?,
            };
            Ok(Box::new(HeuristicEstimator::new(blacklist, user_inputs.to_vec())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_score_from_value_clamps() {
        assert_eq!(StrengthScore::from_value(0), StrengthScore::VeryWeak);
        assert_eq!(StrengthScore::from_value(3), StrengthScore::Strong);
        assert_eq!(StrengthScore::from_value(9), StrengthScore::VeryStrong);
        assert_eq!(StrengthScore::MAX.value(), 4);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(StrengthScore::Fair.to_string(), "2 (fair)");
    }

    #[test]
    fn test_crack_time_seconds_slow_hash() {
        assert!((crack_time_seconds(4.0) - 1.0).abs() < 1e-9);
        assert!((crack_time_seconds(6.0) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_display_crack_time_units() {
        assert_eq!(display_crack_time(0.2), "less than a second");
        assert_eq!(display_crack_time(1.0), "1 second");
        assert_eq!(display_crack_time(42.0), "42 seconds");
        assert_eq!(display_crack_time(3.0 * 3600.0), "3 hours");
        assert_eq!(display_crack_time(2.0 * 86400.0), "2 days");
        assert_eq!(display_crack_time(1e12), "centuries");
    }

    #[test]
    fn test_display_crack_time_rounds_into_next_unit() {
        assert_eq!(display_crack_time(59.6), "1 minute");
        assert_eq!(display_crack_time(59.4), "59 seconds");
        assert_eq!(display_crack_time(23.7 * 3600.0), "1 day");
        assert_eq!(display_crack_time(59.7 * 60.0), "1 hour");
        assert_eq!(display_crack_time(99.6 * 372.0 * 86400.0), "centuries");
    }

    #[test]
    fn test_report_feedback_order() {
        let report = StrengthReport::from_guesses_log10(
            StrengthScore::Weak,
            5.0,
            Some("This is a common password".to_string()),
            vec!["Add another word or two".to_string()],
        );
        assert_eq!(
            report.feedback(),
            vec!["This is a common password", "Add another word or two"]
        );
        assert!((report.crack_time_seconds - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_negative_guesses_clamped() {
        let report =
            StrengthReport::from_guesses_log10(StrengthScore::VeryWeak, -3.0, None, Vec::new());
        assert_eq!(report.guesses_log10, 0.0);
        assert_eq!(report.entropy_bits(), 0.0);
    }

    #[test]
    #[serial]
    fn test_estimator_for_heuristic() {
        let estimator = estimator_for(EstimatorKind::Heuristic, &[], None).unwrap();
        assert_eq!(estimator.name(), "heuristic");
    }

    #[cfg(feature = "zxcvbn")]
    #[test]
    fn test_estimator_for_zxcvbn() {
        let estimator = estimator_for(EstimatorKind::Zxcvbn, &[], None).unwrap();
        assert_eq!(estimator.name(), "zxcvbn");
    }

    #[cfg(not(feature = "zxcvbn"))]
    #[test]
    fn test_estimator_for_zxcvbn_unavailable() {
        let result = estimator_for(EstimatorKind::Zxcvbn, &[], None);
        assert!(matches!(
            result,
            Err(StrengthError::EstimatorUnavailable { name: "zxcvbn", .. })
        ));
    }

    #[test]
    fn test_estimator_for_missing_blacklist() {
        let result = estimator_for(
            EstimatorKind::Heuristic,
            &[],
            Some(Path::new("/nonexistent/path/blacklist.txt")),
        );
        assert!(matches!(
            result,
            Err(StrengthError::Blacklist(BlacklistError::FileNotFound(_)))
        ));
    }
}
