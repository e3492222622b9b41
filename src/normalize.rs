//! Caller-side text normalization. The aligner itself compares tokens verbatim.
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Normalization policy applied to raw transcripts before tokenization.
///
/// The default lower-cases and drops every `.`, which is what the speech
/// recognition front-end does before computing WER.
#[derive(Parser, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[clap(next_help_heading = "Normalization")]
pub struct Normalizer {
    /// Compare words case-sensitively instead of lower-casing them first.
    #[clap(long = "keep-case", action = clap::ArgAction::SetFalse)]
    pub lowercase: bool,

    /// Characters to delete before splitting into words.
    #[clap(long, default_value = ".")]
    pub strip: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip: ".".to_string(),
        }
    }
}

impl Normalizer {
    pub fn normalize(&self, text: &str) -> String {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        text.chars().filter(|c| !self.strip.contains(*c)).collect()
    }

    /// Normalize and split on whitespace. Blank text gives no words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
