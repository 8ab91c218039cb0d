//! Heuristic strength estimator - runs the evaluation sections and turns
//! their findings into a score and a crack-time estimate.

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::Blacklist;
use crate::sections::{CharClasses, Finding, FindingKind, SectionContext, SECTIONS};
use crate::strength::{StrengthError, StrengthEstimator, StrengthReport, StrengthScore};

const GENERIC_SUGGESTION: &str = "Add another word or two. Uncommon words are better.";

/// Outcome of running every section against a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Points on a 0-100 scale.
    pub points: u8,
    pub findings: Vec<Finding>,
}

impl Evaluation {
    pub fn score(&self) -> StrengthScore {
        let score = match self.points {
            0..=29 => StrengthScore::VeryWeak,
            30..=49 => StrengthScore::Weak,
            50..=69 => StrengthScore::Fair,
            70..=84 => StrengthScore::Strong,
            _ => StrengthScore::VeryStrong,
        };

        if self.findings.iter().any(|f| f.kind.is_guessable()) {
            score.min(StrengthScore::Weak)
        } else {
            score
        }
    }
}

/// Local estimator built from the evaluation sections.
#[derive(Debug, Clone)]
pub struct HeuristicEstimator {
    blacklist: Blacklist,
    user_inputs: Vec<String>,
}

impl HeuristicEstimator {
    pub fn new(blacklist: Blacklist, user_inputs: Vec<String>) -> Self {
        Self {
            blacklist,
            user_inputs,
        }
    }

    /// Evaluates password strength and returns the points and findings.
    pub fn evaluate(&self, password: &SecretString) -> Evaluation {
        let ctx = SectionContext {
            blacklist: &self.blacklist,
            user_inputs: &self.user_inputs,
        };

        // Orchestrator: execute sections in sequence
        let mut findings = Vec::new();
        for (_section_name, section_fn) in SECTIONS {
            if let Some(finding) = section_fn(password, &ctx) {
                #[cfg(feature = "tracing")]
                tracing::debug!(section = _section_name, kind = ?finding.kind, "section flagged password");
                findings.push(finding);
            }
        }

        let pwd = password.expose_secret();
        let pwd_len = pwd.chars().count();
        let mut score: i64 = 0;

        // Length bonus: up to 20 points (0.5 per character, max 20)
        score += (pwd_len as f64 * 0.5).min(20.0) as i64;

        // Character variety: up to 60 points (15 per type)
        score += (CharClasses::of(pwd).count() * 15) as i64;

        // Extra length bonus: +5 if > 12, +10 if > 16
        if pwd_len > 16 {
            score += 10;
        } else if pwd_len > 12 {
            score += 5;
        }

        // Multiple special chars bonus: +5 if 2+ special chars
        if pwd.chars().filter(|c| !c.is_alphanumeric()).count() >= 2 {
            score += 5;
        }

        // Entropy bonus: based on unique chars
        let unique_count = pwd.chars().collect::<std::collections::HashSet<_>>().len();
        if unique_count >= 16 {
            score += 10;
        } else if unique_count >= 12 {
            score += 5;
        }

        // Penalties: each finding subtracts 10 points
        score -= findings.len() as i64 * 10;

        Evaluation {
            points: score.clamp(0, 100) as u8,
            findings,
        }
    }

    /// Brute-force guess estimate, lowered for each finding.
    fn guesses_log10(pwd: &str, findings: &[Finding]) -> f64 {
        let pool = CharClasses::of(pwd).pool_size();
        let mut guesses_log10 = if pool == 0 {
            0.0
        } else {
            pwd.chars().count() as f64 * f64::from(pool).log10()
        };

        for finding in findings {
            guesses_log10 = match finding.kind {
                FindingKind::Blacklisted => guesses_log10.min(4.0),
                FindingKind::Dictionary => guesses_log10.min(6.0),
                FindingKind::PersonalInfo => guesses_log10.min(8.0),
                _ => guesses_log10 - 1.0,
            };
        }
        guesses_log10.max(0.0)
    }
}

impl StrengthEstimator for HeuristicEstimator {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn estimate(&self, password: &SecretString) -> Result<StrengthReport, StrengthError> {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return Err(StrengthError::EmptyPassword);
        }

        let evaluation = self.evaluate(password);
        let score = evaluation.score();

        let warning = evaluation.findings.first().map(|f| f.warning.clone());
        let mut suggestions: Vec<String> = Vec::new();
        for finding in &evaluation.findings {
            if !suggestions.contains(&finding.suggestion) {
                suggestions.push(finding.suggestion.clone());
            }
        }
        if suggestions.is_empty() && score < StrengthScore::Strong {
            suggestions.push(GENERIC_SUGGESTION.to_string());
        }

        Ok(StrengthReport::from_guesses_log10(
            score,
            Self::guesses_log10(pwd, &evaluation.findings),
            warning,
            suggestions,
        ))
    }
}
