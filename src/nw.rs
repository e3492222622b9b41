//! Needleman-Wunsch / Wagner-Fischer alignment of word sequences with unit costs.
//!
//! `C[i][j]` is the edit distance between `a[..i]` and `b[..j]`, where `a` is
//! the reference and `b` the hypothesis:
//! - `C[0][j] = j` and `C[i][0] = i`,
//! - `C[i][j] = C[i-1][j-1]` when `a[i-1] == b[j-1]`,
//! - `C[i][j] = 1 + min(C[i-1][j-1], C[i-1][j], C[i][j-1])` otherwise.
//!
//! When several predecessors are optimal, the traceback prefers the diagonal
//! (match or substitution), then up (deletion), then left (insertion).
use crate::cigar::{Cigar, CigarOp};
use crate::types::{Cost, Pos, Seq};
use log::trace;
use std::cmp::min;

/// The full `(m+1) x (n+1)` DP table, stored row major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMatrix {
    m: usize,
    n: usize,
    cells: Vec<Cost>,
}

impl CostMatrix {
    /// A zeroed matrix for a reference of length `m` and a hypothesis of length `n`.
    pub fn new(m: usize, n: usize) -> Self {
        Self {
            m,
            n,
            cells: vec![0; (m + 1) * (n + 1)],
        }
    }

    /// Compute the full table for `a` against `b`.
    pub fn fill<T: PartialEq>(a: Seq<T>, b: Seq<T>) -> Self {
        let mut matrix = Self::new(a.len(), b.len());
        trace!("NW matrix {} x {}", a.len() + 1, b.len() + 1);

        for j in 0..=b.len() {
            matrix.cells[j] = j;
        }
        for (i0, ca) in a.iter().enumerate() {
            // Change from 0-based to 1-based indexing.
            let i = i0 + 1;
            let (prev, next) = matrix.cells[(i - 1) * (b.len() + 1)..(i + 1) * (b.len() + 1)]
                .split_at_mut(b.len() + 1);
            next_row(i, ca, b, prev, next);
        }
        matrix
    }

    pub fn get(&self, i: usize, j: usize) -> Cost {
        assert!(i <= self.m && j <= self.n, "({i}, {j}) out of bounds");
        self.cells[i * (self.n + 1) + j]
    }

    /// The edit distance between the full sequences.
    pub fn distance(&self) -> Cost {
        self.get(self.m, self.n)
    }

    /// The operation that leads into `(i, j)` on the preferred optimal path.
    fn step<T: PartialEq>(&self, a: Seq<T>, b: Seq<T>, Pos(i, j): Pos) -> CigarOp {
        let cost = self.get(i, j);
        if i > 0 && j > 0 {
            let diagonal = self.get(i - 1, j - 1);
            if a[i - 1] == b[j - 1] {
                if cost == diagonal {
                    return CigarOp::Match;
                }
            } else if cost == diagonal + 1 {
                return CigarOp::Sub;
            }
        }
        if i > 0 && cost == self.get(i - 1, j) + 1 {
            return CigarOp::Del;
        }
        assert!(
            j > 0 && cost == self.get(i, j - 1) + 1,
            "No predecessor for ({i}, {j}) with cost {cost}"
        );
        CigarOp::Ins
    }

    /// Walk back from `(m, n)` to `(0, 0)` and return the operations in forward order.
    pub fn traceback<T: PartialEq>(&self, a: Seq<T>, b: Seq<T>) -> Cigar {
        assert_eq!((a.len(), b.len()), (self.m, self.n));
        let mut cigar = Cigar::default();
        let mut pos = Pos(self.m, self.n);
        while pos != Pos(0, 0) {
            let op = self.step(a, b, pos);
            let Pos(di, dj) = op.delta();
            pos = Pos(pos.0 - di, pos.1 - dj);
            cigar.push(op);
        }
        cigar.reverse();
        trace!("NW cigar {cigar}");
        cigar
    }
}

/// Computes row `i` from row `i-1`.
/// `ca` is the `i-1`th word of `a`.
fn next_row<T: PartialEq>(i: usize, ca: &T, b: Seq<T>, prev: &[Cost], next: &mut [Cost]) {
    // Everything of a[..i] is deleted.
    next[0] = i;
    for (j0, cb) in b.iter().enumerate() {
        let j = j0 + 1;
        next[j] = if ca == cb {
            prev[j - 1]
        } else {
            1 + min(prev[j - 1], min(prev[j], next[j - 1]))
        };
    }
}

/// The cost-only version uses linear memory: two rows over the shorter sequence.
pub fn cost<T: PartialEq>(a: Seq<T>, b: Seq<T>) -> Cost {
    // Unit costs are symmetric, so the roles can be swapped.
    let (a, b) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let ref mut prev: Vec<Cost> = (0..=b.len()).collect();
    let ref mut next = vec![0; b.len() + 1];
    for (i0, ca) in a.iter().enumerate() {
        let i = i0 + 1;
        next_row(i, ca, b, prev, next);
        std::mem::swap(prev, next);
    }
    prev[b.len()]
}

/// Fill the full matrix and trace back the preferred optimal path.
pub fn align<T: PartialEq>(a: Seq<T>, b: Seq<T>) -> (Cost, Cigar) {
    let matrix = CostMatrix::fill(a, b);
    (matrix.distance(), matrix.traceback(a, b))
}
