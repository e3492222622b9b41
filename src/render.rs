//! Two-line REF/HYP view of an alignment.
//!
//! ```text
//! REF: THE cat sat ****
//! HYP: A   cat sat DOWN
//! ```
//!
//! Words involved in an error are upper-cased and gaps are filled with `*`.
use crate::cigar::{Cigar, CigarOp};
use crate::types::Seq;
use itertools::Itertools;

/// One column of the rendered alignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub op: CigarOp,
    pub reference: Option<String>,
    pub hypothesis: Option<String>,
}

impl Column {
    fn width(&self) -> usize {
        let len = |w: &Option<String>| w.as_ref().map_or(0, |w| w.chars().count());
        len(&self.reference).max(len(&self.hypothesis))
    }
}

/// Pair up the words of `a` and `b` along `cigar`.
pub fn columns<T: AsRef<str>>(a: Seq<T>, b: Seq<T>, cigar: &Cigar) -> Vec<Column> {
    let mut i = 0;
    let mut j = 0;
    cigar
        .iter_ops()
        .map(|op| {
            let word = |w: &T| {
                if op.is_error() {
                    w.as_ref().to_uppercase()
                } else {
                    w.as_ref().to_string()
                }
            };
            let reference = matches!(op, CigarOp::Match | CigarOp::Sub | CigarOp::Del)
                .then(|| word(&a[i]));
            let hypothesis = matches!(op, CigarOp::Match | CigarOp::Sub | CigarOp::Ins)
                .then(|| word(&b[j]));
            i += reference.is_some() as usize;
            j += hypothesis.is_some() as usize;
            Column {
                op,
                reference,
                hypothesis,
            }
        })
        .collect()
}

/// Render the `REF:` and `HYP:` lines, padded so that columns line up.
pub fn render<T: AsRef<str>>(a: Seq<T>, b: Seq<T>, cigar: &Cigar) -> (String, String) {
    let columns = columns(a, b, cigar);
    let cell = |w: &Option<String>, width: usize| match w {
        Some(w) => format!("{w:<width$}"),
        None => "*".repeat(width),
    };
    let line = |side: fn(&Column) -> &Option<String>| {
        columns
            .iter()
            .map(|c| cell(side(c), c.width()))
            .join(" ")
            .trim_end()
            .to_string()
    };
    (
        format!("REF: {}", line(|c| &c.reference)),
        format!("HYP: {}", line(|c| &c.hypothesis)),
    )
}
