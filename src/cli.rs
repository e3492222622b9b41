use crate::error::Error;
use crate::normalize::Normalizer;
use clap::{value_parser, Parser};
use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(flatten)]
    pub input: Input,

    #[clap(flatten)]
    pub normalize: Normalizer,

    /// Print the aligned REF/HYP lines and the cigar of each pair.
    #[arg(short = 'a', long)]
    pub show_alignment: bool,

    /// Where to write the per-pair results and the summary as JSON.
    #[arg(short, long, value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Print less. Pass twice to also skip the summary table.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub silent: u8,
}

#[derive(Parser, Serialize, Deserialize, Debug)]
#[clap(next_help_heading = "Input")]
pub struct Input {
    /// The .txt or .seq file, or a directory of them, with reference/hypothesis line pairs.
    ///
    /// In .txt files, a reference line is followed by its hypothesis line.
    /// In .seq files, reference lines start with '>' and hypothesis lines with '<'.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1, required_unless_present = "reference")]
    pub input: Option<PathBuf>,

    /// The reference transcript of a single pair.
    #[clap(short, long, conflicts_with = "input", requires = "hypothesis")]
    pub reference: Option<String>,

    /// The hypothesis transcript of a single pair.
    #[clap(short = 'y', long, requires = "reference")]
    pub hypothesis: Option<String>,

    /// Skip pairs where either side has more than this many words after normalization.
    #[clap(long)]
    pub max_words: Option<usize>,
}

/// Line-pair file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Txt,
    Seq,
}

impl Format {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "txt" => Some(Format::Txt),
            "seq" => Some(Format::Seq),
            _ => None,
        }
    }
}

fn strip_marker(path: &Path, line: usize, text: &str, expected: char) -> Result<String, Error> {
    text.strip_prefix(expected)
        .map(str::to_string)
        .ok_or_else(|| Error::MissingPrefix {
            path: path.to_owned(),
            line,
            expected,
        })
}

/// Read all reference/hypothesis pairs from a `.txt` or `.seq` file.
pub fn read_pairs(path: &Path) -> Result<Vec<(String, String)>, Error> {
    let format = Format::of(path).ok_or_else(|| Error::UnknownExtension {
        path: path.to_owned(),
    })?;
    let data = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;
    let lines = data.lines().collect_vec();
    if lines.len() % 2 == 1 {
        return Err(Error::UnpairedLine {
            path: path.to_owned(),
            line: lines.len(),
        });
    }
    // Line numbers are 1-based.
    lines
        .into_iter()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .tuples()
        .map(|((i, a), (j, b))| match format {
            Format::Txt => Ok((a.to_string(), b.to_string())),
            Format::Seq => Ok((
                strip_marker(path, i, a, '>')?,
                strip_marker(path, j, b, '<')?,
            )),
        })
        .collect()
}

impl Input {
    /// The input files, sorted, when `--input` is a directory.
    fn files(&self, input: &Path) -> Result<Vec<PathBuf>, Error> {
        if !input.is_dir() {
            return Ok(vec![input.to_owned()]);
        }
        let read_error = |source| Error::Read {
            path: input.to_owned(),
            source,
        };
        let mut files = vec![];
        for entry in input.read_dir().map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && Format::of(&path).is_some() {
                files.push(path);
            } else {
                debug!("Skipping {}", path.display());
            }
        }
        files.sort();
        Ok(files)
    }

    fn too_long(&self, words: &[String]) -> bool {
        self.max_words.is_some_and(|max| words.len() > max)
    }

    /// Call the given function with the normalized words of each pair in the input.
    ///
    /// `--max-words` applies to the words after normalization.
    pub fn process_input_pairs(
        &self,
        normalizer: &Normalizer,
        mut run_pair: impl FnMut(Vec<String>, Vec<String>),
    ) -> Result<(), Error> {
        let mut run_bounded_pair = |a: &str, b: &str| {
            let (a, b) = (normalizer.tokenize(a), normalizer.tokenize(b));
            if self.too_long(&a) || self.too_long(&b) {
                warn!(
                    "Skipping pair with more than {} words: {:?}",
                    self.max_words.unwrap_or_default(),
                    a.join(" ")
                );
                return;
            }
            run_pair(a, b)
        };

        if let (Some(a), Some(b)) = (&self.reference, &self.hypothesis) {
            run_bounded_pair(a.as_str(), b.as_str());
        }
        if let Some(input) = &self.input {
            for f in self.files(input)? {
                let pairs = read_pairs(&f)?;
                debug!("Read {} pairs from {}", pairs.len(), f.display());
                for (a, b) in &pairs {
                    run_bounded_pair(a.as_str(), b.as_str());
                }
            }
        }
        Ok(())
    }
}
