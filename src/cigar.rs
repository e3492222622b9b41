use crate::alignment::Alignment;
use crate::types::{Cost, Path, Pos, Seq};
use serde::{Serialize, Serializer};
use std::{fmt, slice};

/// A single edit operation on the alignment path.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize)]
pub enum CigarOp {
    Match,
    Sub,
    /// A hypothesis word that is not in the reference.
    Ins,
    /// A reference word that is missing from the hypothesis.
    Del,
}

impl CigarOp {
    pub fn to_char(self) -> char {
        match self {
            CigarOp::Match => '=',
            CigarOp::Sub => 'X',
            CigarOp::Ins => 'I',
            CigarOp::Del => 'D',
        }
    }

    /// The step `(di, dj)` this operation takes through the cost matrix.
    pub fn delta(self) -> Pos {
        match self {
            CigarOp::Match | CigarOp::Sub => Pos(1, 1),
            CigarOp::Ins => Pos(0, 1),
            CigarOp::Del => Pos(1, 0),
        }
    }

    pub fn is_error(self) -> bool {
        self != CigarOp::Match
    }

    fn new(self) -> CigarElem {
        CigarElem { op: self, cnt: 1 }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Copy, Serialize)]
pub struct CigarElem {
    pub op: CigarOp,
    pub cnt: usize,
}

/// Run-length encoded alignment path, from the start of both sequences to the end.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Cigar {
    ops: Vec<CigarElem>,
}

impl Cigar {
    pub fn push(&mut self, op: CigarOp) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == op {
                s.cnt += 1;
                return;
            }
        }
        self.ops.push(op.new());
    }

    pub fn reverse(&mut self) {
        self.ops.reverse()
    }

    /// Iterate the individual operations, with runs expanded.
    pub fn iter_ops(&self) -> impl Iterator<Item = CigarOp> + '_ {
        self.ops
            .iter()
            .flat_map(|elem| std::iter::repeat(elem.op).take(elem.cnt))
    }

    /// The positions visited by the path, starting at `(0, 0)`.
    pub fn to_path(&self) -> Path {
        let mut pos = Pos(0, 0);
        let mut path = vec![pos];
        for op in self.iter_ops() {
            let Pos(di, dj) = op.delta();
            pos = Pos(pos.0 + di, pos.1 + dj);
            path.push(pos);
        }
        path
    }

    /// Count the operations of each kind.
    pub fn to_alignment(&self) -> Alignment {
        let mut alignment = Alignment::default();
        for &CigarElem { op, cnt } in &self.ops {
            match op {
                CigarOp::Match => alignment.num_matches += cnt,
                CigarOp::Sub => alignment.num_substitutions += cnt,
                CigarOp::Ins => alignment.num_insertions += cnt,
                CigarOp::Del => alignment.num_deletions += cnt,
            }
        }
        alignment.reference_length =
            alignment.num_matches + alignment.num_substitutions + alignment.num_deletions;
        alignment
    }

    /// Replay the cigar over `a` and `b` and return its unit cost.
    ///
    /// Panics when the cigar does not consume both sequences exactly, or when a
    /// `Match` covers unequal tokens or a `Sub` covers equal ones.
    pub fn verify<T: PartialEq + fmt::Debug>(&self, a: Seq<T>, b: Seq<T>) -> Cost {
        let mut pos = (0, 0);
        let mut cost = 0;

        for &CigarElem { op, cnt } in &self.ops {
            match op {
                CigarOp::Match => {
                    for _ in 0..cnt {
                        assert_eq!(a.get(pos.0), b.get(pos.1), "Match at {pos:?}");
                        pos.0 += 1;
                        pos.1 += 1;
                    }
                }
                CigarOp::Sub => {
                    for _ in 0..cnt {
                        assert!(pos.0 < a.len() && pos.1 < b.len(), "Sub past end at {pos:?}");
                        assert_ne!(a[pos.0], b[pos.1], "Sub at {pos:?}");
                        pos.0 += 1;
                        pos.1 += 1;
                    }
                    cost += cnt;
                }
                CigarOp::Ins => {
                    pos.1 += cnt;
                    cost += cnt;
                }
                CigarOp::Del => {
                    pos.0 += cnt;
                    cost += cnt;
                }
            }
        }
        assert_eq!(pos, (a.len(), b.len()), "Cigar does not end at the end");
        cost
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in &self.ops {
            write!(f, "{}{}", elem.cnt, elem.op.to_char())?;
        }
        Ok(())
    }
}

/// Serialized as its string form, e.g. `"1X2=1I"`.
impl Serialize for Cigar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'a> IntoIterator for &'a Cigar {
    type Item = &'a CigarElem;

    type IntoIter = slice::Iter<'a, CigarElem>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
