//! Word → sentiment score table.
//!
//! Scores are integers in `1..=10`: 1–4 negative, 5–6 neutral, 7–10 positive.
//! Words are stored lowercase and looked up verbatim, so a table entry must be
//! a single whitespace-free token to ever match.

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

const BUILTIN: &[(&str, u8)] = &[
    // Negative
    ("bankruptcy", 1),
    ("collapse", 1),
    ("crash", 1),
    ("fraud", 1),
    ("plummet", 1),
    ("plummets", 1),
    ("default", 2),
    ("downgrade", 2),
    ("layoffs", 2),
    ("lawsuit", 2),
    ("loss", 2),
    ("losses", 2),
    ("plunge", 2),
    ("recession", 2),
    ("cautious", 3),
    ("concern", 3),
    ("concerns", 3),
    ("decline", 3),
    ("declines", 3),
    ("miss", 3),
    ("misses", 3),
    ("slowdown", 3),
    ("weak", 3),
    ("risk", 4),
    ("uncertain", 4),
    ("uncertainty", 4),
    ("volatile", 4),
    // Neutral
    ("flat", 5),
    ("mixed", 5),
    ("unchanged", 5),
    ("stable", 6),
    ("steady", 6),
    // Positive
    ("gain", 7),
    ("gains", 7),
    ("growth", 7),
    ("improve", 7),
    ("improves", 7),
    ("profit", 7),
    ("beat", 8),
    ("beats", 8),
    ("rally", 8),
    ("strong", 8),
    ("upgrade", 8),
    ("record", 9),
    ("soar", 9),
    ("soars", 9),
    ("surge", 9),
    ("surges", 9),
    ("breakthrough", 9),
    ("exceptional", 10),
    ("outstanding", 10),
    ("stellar", 10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBand {
    Negative,
    Neutral,
    Positive,
}

impl SentimentBand {
    pub fn of(score: u8) -> Self {
        match score {
            0..=4 => Self::Negative,
            5..=6 => Self::Neutral,
            _ => Self::Positive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: HashMap<String, u8>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The bundled financial-news table.
    pub fn builtin() -> Self {
        let words = BUILTIN
            .iter()
            .map(|(word, score)| ((*word).to_string(), *score))
            .collect();
        Self { words }
    }

    /// Builds a table from caller-supplied entries.
    ///
    /// Words are trimmed and lowercased. Rejects empty words, words containing
    /// whitespace, scores outside `1..=10`, and words that collide after
    /// lowercasing.
    pub fn try_from_entries<I, S>(entries: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut words = HashMap::new();
        for (raw, score) in entries {
            let word = raw.as_ref().trim().to_lowercase();
            ensure!(!word.is_empty(), "lexicon word must be non-empty");
            ensure!(
                !word.chars().any(char::is_whitespace),
                "lexicon word must be a single token (got {word:?})"
            );
            ensure!(
                (i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&score),
                "lexicon score for {word:?} must be {MIN_SCORE}..={MAX_SCORE} (got {score})"
            );
            let score = score as u8;
            ensure!(
                words.insert(word.clone(), score).is_none(),
                "duplicate lexicon word: {word:?}"
            );
        }

        Ok(Self { words })
    }

    /// Parses a JSON object of `{"word": score}` pairs.
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let raw = serde_json::from_str::<BTreeMap<String, i64>>(text)
            .context("lexicon must be a JSON object of word -> integer score")?;
        Self::try_from_entries(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read lexicon file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("invalid lexicon file {}", path.display()))
    }

    /// Exact lookup; `word` must already be lowercase.
    pub fn get(&self, word: &str) -> Option<u8> {
        self.words.get(word).copied()
    }

    pub fn band(&self, word: &str) -> Option<SentimentBand> {
        self.get(word).map(SentimentBand::of)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
