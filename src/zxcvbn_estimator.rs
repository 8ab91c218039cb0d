//! zxcvbn-backed strength estimator.

use secrecy::{ExposeSecret, SecretString};

use crate::strength::{StrengthError, StrengthEstimator, StrengthReport, StrengthScore};

/// Delegates estimation to the `zxcvbn` crate.
///
/// User inputs (names, pets, dates...) are passed to zxcvbn as a personal
/// dictionary, so passwords built from them are matched like common words.
#[derive(Debug, Clone, Default)]
pub struct ZxcvbnEstimator {
    user_inputs: Vec<String>,
}

impl ZxcvbnEstimator {
    pub fn new(user_inputs: Vec<String>) -> Self {
        Self { user_inputs }
    }
}

impl StrengthEstimator for ZxcvbnEstimator {
    fn name(&self) -> &'static str {
        "zxcvbn"
    }

    fn estimate(&self, password: &SecretString) -> Result<StrengthReport, StrengthError> {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return Err(StrengthError::EmptyPassword);
        }

        let inputs: Vec<&str> = self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn::zxcvbn(pwd, &inputs)
            .map_err(|e| StrengthError::Estimator(e.to_string()))?;

        let (warning, suggestions) = match entropy.feedback().as_ref() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback
                    .suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            score = entropy.score(),
            guesses_log10 = entropy.guesses_log10(),
            "zxcvbn estimate"
        );

        Ok(StrengthReport::from_guesses_log10(
            StrengthScore::from_value(entropy.score()),
            entropy.guesses_log10(),
            warning,
            suggestions,
        ))
    }
}
