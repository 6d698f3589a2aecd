use super::Scorer;
use serde::{Deserialize, Serialize};

/// Returned when a headline (or a batch of them) carries no lexicon words.
pub const NEUTRAL_SCORE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedWord {
    pub word: String,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineAnalysis {
    pub matched: Vec<MatchedWord>,
    pub score: f64,
}

impl Scorer {
    /// Mean lexicon score of the headline's whitespace-separated tokens.
    ///
    /// Tokens are lowercased and matched verbatim: attached punctuation
    /// (`"stellar."`) is not stripped, so such tokens do not match.
    pub fn score_headline(&self, text: &str) -> f64 {
        let (sum, count) = tokens(text)
            .filter_map(|token| self.lexicon.get(&token))
            .fold((0u64, 0u64), |(sum, count), score| {
                (sum + u64::from(score), count + 1)
            });

        mean_or_neutral(sum as f64, count)
    }

    /// Same as [`Scorer::score_headline`], also reporting which tokens matched.
    pub fn analyze_headline(&self, text: &str) -> HeadlineAnalysis {
        let matched: Vec<MatchedWord> = tokens(text)
            .filter_map(|word| {
                let score = self.lexicon.get(&word)?;
                Some(MatchedWord { word, score })
            })
            .collect();

        let sum: u64 = matched.iter().map(|m| u64::from(m.score)).sum();
        let score = mean_or_neutral(sum as f64, matched.len() as u64);

        HeadlineAnalysis { matched, score }
    }

    /// Mean of per-headline scores; an empty collection is neutral.
    pub fn score_headlines<I>(&self, headlines: I) -> f64
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let (sum, count) = headlines
            .into_iter()
            .map(|h| self.score_headline(h.as_ref()))
            .fold((0.0, 0u64), |(sum, count), score| (sum + score, count + 1));

        mean_or_neutral(sum, count)
    }
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

fn mean_or_neutral(sum: f64, count: u64) -> f64 {
    if count == 0 {
        NEUTRAL_SCORE
    } else {
        sum / count as f64
    }
}
