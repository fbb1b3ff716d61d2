use serde::{Deserialize, Serialize};
use std::fmt;

/// A language or speech register offered as translation source or target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Register {
    #[serde(rename = "American English")]
    AmericanEnglish,
    #[serde(rename = "Gen Z")]
    GenZ,
    Millennial,
    Hindi,
    Spanish,
    French,
    Boomer,
}

impl Register {
    pub const ALL: [Register; 7] = [
        Register::AmericanEnglish,
        Register::GenZ,
        Register::Millennial,
        Register::Hindi,
        Register::Spanish,
        Register::French,
        Register::Boomer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Register::AmericanEnglish => "American English",
            Register::GenZ => "Gen Z",
            Register::Millennial => "Millennial",
            Register::Hindi => "Hindi",
            Register::Spanish => "Spanish",
            Register::French => "French",
            Register::Boomer => "Boomer",
        }
    }

    pub fn default_source() -> Self {
        Self::ALL[0]
    }

    pub fn default_target() -> Self {
        Self::ALL[1]
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Locally served models the form offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelChoice {
    #[default]
    Llama2,
    Mistral,
    Gemma,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 3] = [ModelChoice::Llama2, ModelChoice::Mistral, ModelChoice::Gemma];

    /// Model name as Ollama knows it.
    pub fn name(self) -> &'static str {
        match self {
            ModelChoice::Llama2 => "llama2",
            ModelChoice::Mistral => "mistral",
            ModelChoice::Gemma => "gemma",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_labels_round_trip_through_serde() {
        for register in Register::ALL {
            let encoded = serde_json::to_string(&register).unwrap();
            assert_eq!(encoded, format!("\"{}\"", register.label()));
        }

        let decoded: Register = serde_json::from_str("\"Gen Z\"").unwrap();
        assert_eq!(decoded, Register::GenZ);
    }

    #[test]
    fn test_defaults_are_first_two_distinct_registers() {
        assert_eq!(Register::default_source(), Register::AmericanEnglish);
        assert_eq!(Register::default_target(), Register::GenZ);
        assert_ne!(Register::default_source(), Register::default_target());
        assert_eq!(ModelChoice::default(), ModelChoice::ALL[0]);
    }

    #[test]
    fn test_unknown_register_is_rejected() {
        assert!(serde_json::from_str::<Register>("\"Pirate\"").is_err());
    }
}
