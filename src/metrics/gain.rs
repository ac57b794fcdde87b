//! Gain transforms applied to relevance grades before discounting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Gain form used when turning a relevance grade into a gain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GainForm {
    /// gain(x) = x
    #[default]
    Linear,
    /// gain(x) = 2^x - 1, emphasizes highly relevant items
    #[serde(alias = "exp")]
    Exponential,
}

impl GainForm {
    /// Apply the gain transform to a single grade
    pub fn gain(self, relevance: f64) -> f64 {
        match self {
            GainForm::Linear => relevance,
            GainForm::Exponential => relevance.exp2() - 1.0,
        }
    }

    /// Canonical name of the form
    pub fn as_str(self) -> &'static str {
        match self {
            GainForm::Linear => "linear",
            GainForm::Exponential => "exponential",
        }
    }
}

impl FromStr for GainForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(GainForm::Linear),
            "exponential" | "exp" => Ok(GainForm::Exponential),
            other => Err(Error::InvalidArgument(format!(
                "unsupported gain form '{}': only 'linear' or 'exponential' ('exp') are supported",
                other
            ))),
        }
    }
}

impl fmt::Display for GainForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("linear".parse::<GainForm>().unwrap(), GainForm::Linear);
        assert_eq!("exponential".parse::<GainForm>().unwrap(), GainForm::Exponential);
        assert_eq!("exp".parse::<GainForm>().unwrap(), GainForm::Exponential);
    }

    #[test]
    fn test_parse_unknown_form() {
        let err = "quadratic".parse::<GainForm>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let message = err.to_string();
        assert!(message.contains("quadratic"));
        assert!(message.contains("linear"));
        assert!(message.contains("exponential"));
    }

    #[test]
    fn test_gain_values() {
        assert_eq!(GainForm::Linear.gain(3.0), 3.0);
        assert_eq!(GainForm::Exponential.gain(0.0), 0.0);
        assert_eq!(GainForm::Exponential.gain(1.0), 1.0);
        assert_eq!(GainForm::Exponential.gain(3.0), 7.0);
    }

    #[test]
    fn test_display_is_canonical() {
        let form: GainForm = "exp".parse().unwrap();
        assert_eq!(form.to_string(), "exponential");
    }
}
