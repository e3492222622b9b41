//!
//! # Word sequence alignment
//!
//! Aligns a hypothesis word sequence (e.g. the output of a speech recognizer)
//! against a reference and classifies every word as a match, substitution,
//! insertion or deletion. The counts give the Word Error Rate.
//!
//! - `align` returns the `Alignment` counts.
//! - `align_with_cigar` also returns the operations, for rendering.
//! - `edit_distance` only computes the cost, in linear memory.
//!
//! The aligner compares tokens with `==` and does no normalization of its own;
//! see `normalize::Normalizer` for the default policy used by the `wer` binary.
//! Division by the reference length lives in `metric`, which reports an empty
//! reference as `MetricError::UndefinedMetric`.
//!

pub mod alignment;
pub mod cigar;
pub mod cli;
pub mod error;
pub mod metric;
pub mod normalize;
pub mod nw;
pub mod render;
pub mod report;
pub mod stats;
pub mod types;

#[cfg(test)]
mod tests;

pub use alignment::Alignment;
pub use cigar::{Cigar, CigarElem, CigarOp};
pub use error::Error;
pub use metric::{word_error_rate, MetricError};
pub use stats::SummaryStatistics;
pub use types::{Cost, Seq};

/// Align `hypothesis` against `reference` with unit costs.
///
/// Ties between optimal paths prefer substitutions over deletions over
/// insertions, so e.g. `[a, b]` vs `[b]` is one deletion and one match.
pub fn align<T: PartialEq>(reference: Seq<T>, hypothesis: Seq<T>) -> Alignment {
    align_with_cigar(reference, hypothesis).0
}

/// As `align`, but also return the path of operations.
pub fn align_with_cigar<T: PartialEq>(reference: Seq<T>, hypothesis: Seq<T>) -> (Alignment, Cigar) {
    let (cost, cigar) = nw::align(reference, hypothesis);
    let alignment = cigar.to_alignment();
    debug_assert_eq!(alignment.num_errors(), cost);
    debug_assert_eq!(alignment.reference_length, reference.len());
    debug_assert_eq!(alignment.hypothesis_length(), hypothesis.len());
    (alignment, cigar)
}

/// The number of errors of `align`, without tracing the path.
pub fn edit_distance<T: PartialEq>(reference: Seq<T>, hypothesis: Seq<T>) -> Cost {
    nw::cost(reference, hypothesis)
}
