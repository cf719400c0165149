use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::HarnessError;

/// Openers benchmarked when no candidate file is given.
pub const DEFAULT_OPENERS: [&str; 8] = [
    "salet", "trace", "crate", "slate", "reast", "soare", "roate", "raise",
];

/// Banner lines printed by the opener-ranking tool, keyed by rule name.
pub const DEFAULT_SKIP_PATTERNS: [(&str, &str); 5] = [
    ("separator", "---"),
    ("table-banner", "Generating Pattern Table"),
    ("ranking-banner", "openers by entropy"),
    ("ranking-timing", "Ranking calculated in"),
    ("top-banner", "Openers by Entropy"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipPattern {
    pub name: String,
    pub needle: String,
}

impl SkipPattern {
    pub fn new(name: impl Into<String>, needle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            needle: needle.into(),
        }
    }
}

/// Named substrings marking non-data lines in a candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipRules {
    patterns: Vec<SkipPattern>,
}

impl Default for SkipRules {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_SKIP_PATTERNS
                .iter()
                .map(|(name, needle)| SkipPattern::new(*name, *needle))
                .collect(),
        }
    }
}

impl SkipRules {
    pub fn empty() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Adds a user-supplied needle under the `custom` name. Empty needles are ignored.
    pub fn with_custom(mut self, needle: &str) -> Self {
        if !needle.is_empty() {
            self.patterns.push(SkipPattern::new("custom", needle));
        }
        self
    }

    pub fn patterns(&self) -> &[SkipPattern] {
        &self.patterns
    }

    /// First rule whose needle occurs in `line`.
    pub fn matching(&self, line: &str) -> Option<&SkipPattern> {
        self.patterns.iter().find(|p| line.contains(p.needle.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    Default,
    File(PathBuf),
}

/// Ordered candidates, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    source: CandidateSource,
    words: Vec<String>,
}

impl CandidateList {
    pub fn default_openers() -> Self {
        Self {
            source: CandidateSource::Default,
            words: DEFAULT_OPENERS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    pub fn source(&self) -> &CandidateSource {
        &self.source
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn status_line(&self) -> String {
        match &self.source {
            CandidateSource::Default => format!("Using {} default candidates.", self.len()),
            CandidateSource::File(path) => {
                format!("Loaded {} candidates from '{}'.", self.len(), path.display())
            }
        }
    }
}

/// Extracts the candidate on one line of a candidate file, if any.
pub fn parse_candidate_line(line: &str, rules: &SkipRules) -> Option<String> {
    if let Some(rule) = rules.matching(line) {
        log::trace!("Skipping line {:?} (rule {})", line, rule.name);
        return None;
    }
    let token = line.split_whitespace().next()?;
    if token.chars().all(char::is_alphabetic) {
        Some(token.to_string())
    } else {
        None
    }
}

pub fn load_candidates_from_str(data: &str, rules: &SkipRules) -> Vec<String> {
    data.lines()
        .filter_map(|line| parse_candidate_line(line, rules))
        .collect()
}

pub fn load_candidates_from_file<P: AsRef<Path>>(
    path: P,
    rules: &SkipRules,
) -> Result<CandidateList, HarnessError> {
    let path = path.as_ref();
    let read_error = |source: io::Error| HarnessError::CandidateFile {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(read_error)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_candidate_line(&line.map_err(read_error)?, rules) {
            words.push(word);
        }
    }
    Ok(CandidateList {
        source: CandidateSource::File(path.to_path_buf()),
        words,
    })
}
