/// Number of unit cost edit operations.
pub type Cost = usize;

/// A tokenized word sequence. Tokens are compared with `==` only.
pub type Seq<'a, T> = &'a [T];

/// A position `(i, j)` in the cost matrix: `i` reference words and `j`
/// hypothesis words have been consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos(pub usize, pub usize);

pub type Path = Vec<Pos>;
