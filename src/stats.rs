use std::fmt::Display;

use derive_more::AddAssign;
use serde::Serialize;

use crate::alignment::Alignment;
use crate::metric::{rate, MetricError};

/// Totals over a corpus of aligned sentence pairs.
#[derive(Default, Clone, Copy, AddAssign, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryStatistics {
    /// Number of aligned pairs.
    pub num_sentences: usize,
    /// Number of pairs with at least one error.
    pub num_sentence_errors: usize,
    /// Summed counts of all pairs.
    pub total: Alignment,
}

impl std::ops::AddAssign<Alignment> for SummaryStatistics {
    fn add_assign(&mut self, alignment: Alignment) {
        self.add(&alignment);
    }
}

impl SummaryStatistics {
    pub fn add(&mut self, alignment: &Alignment) {
        self.num_sentences += 1;
        self.num_sentence_errors += !alignment.is_correct() as usize;
        self.total += *alignment;
    }

    pub fn num_reference_words(&self) -> usize {
        self.total.reference_length
    }

    pub fn num_hypothesis_words(&self) -> usize {
        self.total.hypothesis_length()
    }

    fn word_rate(&self, count: usize) -> Result<f64, MetricError> {
        rate(count, self.total.reference_length, self.total.num_errors())
    }

    pub fn correct_rate(&self) -> Result<f64, MetricError> {
        self.word_rate(self.total.num_matches)
    }

    pub fn substitution_rate(&self) -> Result<f64, MetricError> {
        self.word_rate(self.total.num_substitutions)
    }

    pub fn insertion_rate(&self) -> Result<f64, MetricError> {
        self.word_rate(self.total.num_insertions)
    }

    pub fn deletion_rate(&self) -> Result<f64, MetricError> {
        self.word_rate(self.total.num_deletions)
    }

    pub fn word_error_rate(&self) -> Result<f64, MetricError> {
        self.word_rate(self.total.num_errors())
    }

    /// Fraction of pairs that contain at least one error.
    pub fn sentence_error_rate(&self) -> Result<f64, MetricError> {
        rate(
            self.num_sentence_errors,
            self.num_sentences,
            self.total.num_errors(),
        )
    }

    /// Print the header and value rows of the summary table.
    pub fn print(&self) {
        let (header, vals) = self.values();
        println!("{}", header.concat());
        println!("{}", vals.concat());
    }

    fn format_raw<T: Display>(&self, val: T, width: usize) -> String {
        format!("{val:>width$}")
    }

    fn format_rate(&self, r: Result<f64, MetricError>) -> String {
        match r {
            Ok(r) => format!("{:.4}", r),
            Err(_) => "undef".to_string(),
        }
    }

    /// Header and value columns of the summary table.
    pub fn values(&self) -> (Vec<String>, Vec<String>) {
        let mut header = vec![];
        let mut vals = vec![];
        let mut add = |name: &str, val: String, width: usize| {
            header.push(self.format_raw(name, width));
            vals.push(self.format_raw(val, width));
        };
        add("sents", self.num_sentences.to_string(), 7);
        add("ref", self.num_reference_words().to_string(), 8);
        add("hyp", self.num_hypothesis_words().to_string(), 8);
        add("cor", self.total.num_matches.to_string(), 8);
        add("sub", self.total.num_substitutions.to_string(), 7);
        add("ins", self.total.num_insertions.to_string(), 7);
        add("del", self.total.num_deletions.to_string(), 7);
        add("wer", self.format_rate(self.word_error_rate()), 8);
        add("ser", self.format_rate(self.sentence_error_rate()), 8);
        (header, vals)
    }
}
