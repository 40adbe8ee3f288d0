use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, debug_span, info};

use super::{DictError, WordIndex, WordIndexBuilder};

const WORD_FIELD: usize = 0;
const SCORE_FIELD: usize = 2;
const MIN_FIELDS: usize = 3;

/// How to treat lines that do not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Fail the build on the first malformed line instead of skipping it.
    pub strict: bool,
}

/// Line counts gathered while building from a text source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub lines: usize,
    pub inserted: usize,
    pub skipped: usize,
    /// Whitespace-only lines.
    pub blank: usize,
}

/// A single `(word, score)` entry taken from a dictionary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedLine<'a> {
    pub word: &'a str,
    pub score: u64,
}

/// Parse one `word rank score` line.
///
/// `Ok(None)` for blank lines, `Err(reason)` for lines that lack a
/// non-negative integer in the score field. Any other word token is kept
/// verbatim, including ones starting with `#`.
pub(crate) fn parse_line(line: &str) -> Result<Option<ParsedLine<'_>>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(format!(
            "expected at least {MIN_FIELDS} fields, found {}",
            fields.len()
        ));
    }
    let raw = fields[SCORE_FIELD];
    let score: u64 = raw
        .parse()
        .map_err(|_| format!("score field {raw:?} is not a non-negative integer"))?;
    Ok(Some(ParsedLine {
        word: fields[WORD_FIELD],
        score,
    }))
}

impl WordIndex {
    /// Build an index from a line-oriented frequency list.
    ///
    /// Read failures abort the build. Malformed lines (including invalid
    /// UTF-8) are skipped and counted unless `options.strict` is set.
    pub fn from_reader<R: BufRead>(
        reader: R,
        options: BuildOptions,
    ) -> Result<(Self, BuildStats), DictError> {
        let _span = debug_span!("build_index", strict = options.strict).entered();
        let mut builder = WordIndexBuilder::new();
        let mut stats = BuildStats::default();

        for (i, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let line_no = i + 1;
            stats.lines += 1;

            let parsed = std::str::from_utf8(&raw)
                .map_err(|e| format!("invalid UTF-8: {e}"))
                .and_then(parse_line);
            match parsed {
                Ok(Some(entry)) => {
                    if builder.insert(entry.word, entry.score) {
                        stats.inserted += 1;
                    }
                }
                Ok(None) => stats.blank += 1,
                Err(reason) => {
                    if options.strict {
                        return Err(DictError::Malformed {
                            line: line_no,
                            reason,
                        });
                    }
                    debug!(line = line_no, %reason, "skipping malformed entry");
                    stats.skipped += 1;
                }
            }
        }

        Ok((builder.build(), stats))
    }

    /// Open and build from a dictionary file. The file is closed before
    /// this returns.
    pub fn open(path: &Path, options: BuildOptions) -> Result<(Self, BuildStats), DictError> {
        let file = File::open(path)?;
        let (index, stats) = Self::from_reader(BufReader::new(file), options)?;
        let index_stats = index.stats();
        info!(
            path = %path.display(),
            words = index_stats.words,
            nodes = index_stats.nodes,
            skipped = stats.skipped,
            "dictionary loaded"
        );
        Ok((index, stats))
    }
}
