use std::fmt;
use std::io::{self, Write};

/// A candidate whose benchmark exited cleanly and reported an average.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub candidate: String,
    pub metric: f64,
}

impl ScoreEntry {
    pub fn new(candidate: impl Into<String>, metric: f64) -> Self {
        Self {
            candidate: candidate.into(),
            metric,
        }
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.candidate, self.metric)
    }
}

/// Score entries ordered best (fewest average guesses) first.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    entries: Vec<ScoreEntry>,
}

impl Ranking {
    /// Stable sort: equal metrics keep their discovery order.
    pub fn new(mut entries: Vec<ScoreEntry>) -> Self {
        entries.sort_by(|a, b| a.metric.total_cmp(&b.metric));
        Self { entries }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    pub fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n--- Results ---")?;
        for entry in &self.entries {
            writeln!(out, "{entry}")?;
        }
        match self.best() {
            Some(best) => writeln!(out, "\nBest Opener: {} ({})", best.candidate, best.metric)?,
            None => writeln!(out, "\nNo successful candidates; best opener could not be determined.")?,
        }
        out.flush()
    }
}
