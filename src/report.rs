use std::path::Path;

use log::warn;
use serde::Serialize;

use crate::cli::Cli;
use crate::error::Error;
use crate::normalize::Normalizer;
use crate::stats::SummaryStatistics;
use crate::{align_with_cigar, render, word_error_rate, Alignment, Cigar};

/// The alignment of one reference/hypothesis pair of transcripts.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PairResult {
    pub reference: Vec<String>,
    pub hypothesis: Vec<String>,
    pub alignment: Alignment,
    pub cigar: Cigar,
    /// `None` when the reference is empty.
    pub wer: Option<f64>,
}

impl PairResult {
    pub fn new(normalizer: &Normalizer, reference: &str, hypothesis: &str) -> Self {
        Self::from_words(normalizer.tokenize(reference), normalizer.tokenize(hypothesis))
    }

    /// Align already tokenized transcripts.
    pub fn from_words(reference: Vec<String>, hypothesis: Vec<String>) -> Self {
        let (alignment, cigar) = align_with_cigar(&reference, &hypothesis);
        let wer = match word_error_rate(&alignment) {
            Ok(wer) => Some(wer),
            Err(e) => {
                warn!("{e}");
                None
            }
        };
        Self {
            reference,
            hypothesis,
            alignment,
            cigar,
            wer,
        }
    }

    /// The two aligned `REF:` and `HYP:` lines.
    pub fn render(&self) -> (String, String) {
        render::render(&self.reference, &self.hypothesis, &self.cigar)
    }

    pub fn summary_line(&self) -> String {
        let a = &self.alignment;
        let wer = self
            .wer
            .map_or_else(|| "undefined".to_string(), |wer| format!("{wer:.4}"));
        format!(
            "ref {:>4} hyp {:>4} cor {:>4} sub {:>4} ins {:>4} del {:>4} wer {wer}",
            a.reference_length,
            a.hypothesis_length(),
            a.num_matches,
            a.num_substitutions,
            a.num_insertions,
            a.num_deletions,
        )
    }

    pub fn print(&self, show_alignment: bool) {
        if show_alignment {
            let (r, h) = self.render();
            println!("{r}\n{h}\nCIGAR: {}", self.cigar);
        }
        println!("{}", self.summary_line());
    }
}

/// Everything the binary writes with `--output`.
#[derive(Serialize)]
pub struct Report<'a> {
    pub config: &'a Cli,
    pub pairs: &'a [PairResult],
    pub summary: SummaryStatistics,
    pub wer: Option<f64>,
    pub ser: Option<f64>,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a Cli, pairs: &'a [PairResult], summary: SummaryStatistics) -> Self {
        Self {
            config,
            pairs,
            summary,
            wer: summary.word_error_rate().ok(),
            ser: summary.sentence_error_rate().ok(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_owned(),
            source,
        })
    }
}
