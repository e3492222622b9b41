use derive_more::AddAssign;
use serde::Serialize;

/// Operation counts of an optimal alignment of a hypothesis against a reference.
///
/// Invariants:
/// - `num_matches + num_substitutions + num_deletions == reference_length`
/// - `num_matches + num_substitutions + num_insertions == hypothesis_length()`
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, AddAssign, Serialize)]
pub struct Alignment {
    pub num_matches: usize,
    pub num_substitutions: usize,
    pub num_insertions: usize,
    pub num_deletions: usize,
    /// Number of words in the reference.
    pub reference_length: usize,
}

impl Alignment {
    pub fn hypothesis_length(&self) -> usize {
        self.num_matches + self.num_substitutions + self.num_insertions
    }

    /// Substitutions + insertions + deletions, i.e. the edit distance.
    pub fn num_errors(&self) -> usize {
        self.num_substitutions + self.num_insertions + self.num_deletions
    }

    /// True when the hypothesis equals the reference.
    pub fn is_correct(&self) -> bool {
        self.num_errors() == 0
    }
}
