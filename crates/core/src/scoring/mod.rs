//! Headline sentiment blended with price/volume momentum.
//!
//! `Scorer` holds an immutable [`Lexicon`] and is otherwise stateless, so one
//! instance can be shared across threads behind a plain reference or `Arc`.

pub mod sentiment;
pub mod technical;

use crate::domain::recommendation::{Label, Recommendation, RecommendationDetails, StockMetrics};
use crate::error::InvalidInputError;
use crate::lexicon::Lexicon;

pub use sentiment::{HeadlineAnalysis, MatchedWord, NEUTRAL_SCORE};
pub use technical::TechnicalBreakdown;

use technical::pct_vs_average;

const SENTIMENT_WEIGHT: f64 = 0.6;
const TECHNICAL_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    lexicon: Lexicon,
}

impl Scorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Blends headline sentiment (60%) with the technical score (40%) and
    /// labels the result.
    ///
    /// The label comes from the unrounded final score; the reported details
    /// are rounded to two decimals.
    pub fn recommend<I>(
        &self,
        headlines: I,
        metrics: &StockMetrics,
    ) -> Result<Recommendation, InvalidInputError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let technical_score = self.score_technical(metrics)?;
        let sentiment_score = self.score_headlines(headlines);
        let final_score = sentiment_score * SENTIMENT_WEIGHT + technical_score * TECHNICAL_WEIGHT;
        let label = Label::from_final_score(final_score);

        tracing::debug!(
            sentiment_score,
            technical_score,
            final_score,
            %label,
            "scored recommendation"
        );

        Ok(Recommendation {
            label,
            details: RecommendationDetails {
                sentiment_score: round2(sentiment_score),
                technical_score: round2(technical_score),
                final_score: round2(final_score),
                price_vs_50d: round2(pct_vs_average(metrics.price_ratio())),
                volume_vs_50d: round2(pct_vs_average(metrics.volume_ratio())),
            },
        })
    }
}

/// Two decimals, halves rounded away from zero. Never returns `-0.0`.
///
/// Values too large to scale by 100 carry no fractional digits and are
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const NO_MATCH: [&str; 1] = ["nothing to see here"];

    fn scorer() -> Scorer {
        Scorer::new(Lexicon::builtin())
    }

    #[test]
    fn reference_example_holds() {
        let rec = scorer()
            .recommend(
                ["stellar results reported", "market remains cautious"],
                &StockMetrics::new(150.0, 140.0, 1_000_000.0, 800_000.0),
            )
            .unwrap();

        assert_eq!(rec.label, Label::Hold);
        assert_eq!(rec.details.sentiment_score, 6.5);
        assert_eq!(rec.details.technical_score, 5.71);
        assert_eq!(rec.details.final_score, 6.19);
        assert_eq!(rec.details.price_vs_50d, 7.14);
        assert_eq!(rec.details.volume_vs_50d, 25.0);
    }

    #[test]
    fn final_score_of_exactly_seven_buys() {
        // Neutral sentiment (5) with technical pinned at the ceiling (10).
        let rec = scorer()
            .recommend(NO_MATCH, &StockMetrics::new(2.0, 1.0, 2.0, 1.0))
            .unwrap();
        assert_eq!(rec.details.final_score, 7.0);
        assert_eq!(rec.label, Label::Buy);
    }

    #[test]
    fn final_score_of_exactly_four_sells() {
        // Neutral sentiment (5) with both ratios at 0.5 (technical 2.5).
        let rec = scorer()
            .recommend(NO_MATCH, &StockMetrics::new(1.0, 2.0, 1.0, 2.0))
            .unwrap();
        assert_eq!(rec.details.technical_score, 2.5);
        assert_eq!(rec.details.final_score, 4.0);
        assert_eq!(rec.label, Label::Sell);
        assert_eq!(rec.details.price_vs_50d, -50.0);
    }

    #[test]
    fn label_uses_unrounded_final_score() {
        // Technical 9.99 gives a final score of 6.996, reported as 7.0.
        let rec = scorer()
            .recommend(NO_MATCH, &StockMetrics::new(2.0, 1.0, 1.995, 1.0))
            .unwrap();
        assert_eq!(rec.details.final_score, 7.0);
        assert_eq!(rec.label, Label::Hold);

        // Technical 2.51 gives a final score of 4.004, reported as 4.0.
        let rec = scorer()
            .recommend(NO_MATCH, &StockMetrics::new(1.0, 2.0, 0.505, 1.0))
            .unwrap();
        assert_eq!(rec.details.final_score, 4.0);
        assert_eq!(rec.label, Label::Hold);
    }

    #[test]
    fn overflowing_ratios_never_reach_the_details() {
        let err = scorer()
            .recommend(["x"], &StockMetrics::new(1e300, 1e-10, 1e300, 1e-10))
            .unwrap_err();
        assert_eq!(err.field, "price_ratio");

        let err = scorer()
            .recommend(["x"], &StockMetrics::new(10.0, 10.0, 1e300, 1e-10))
            .unwrap_err();
        assert_eq!(err.field, "volume_ratio");
    }

    #[test]
    fn very_large_finite_deviation_stays_finite() {
        let rec = scorer()
            .recommend(["x"], &StockMetrics::new(1e300, 1.0, 1.0, 1.0))
            .unwrap();
        assert!(rec.details.price_vs_50d.is_finite());
        assert_eq!(rec.label, Label::Hold);
    }

    #[test]
    fn exposes_injected_lexicon() {
        let lexicon = Lexicon::try_from_entries([("moon", 10)]).unwrap();
        let s = Scorer::new(lexicon.clone());
        assert_eq!(s.lexicon(), &lexicon);
        assert_eq!(Scorer::default().lexicon(), &Lexicon::builtin());
    }

    #[test]
    fn strong_inputs_buy_and_weak_inputs_sell() {
        let s = scorer();
        let buy = s
            .recommend(
                ["stellar record quarter", "shares surge"],
                &StockMetrics::new(180.0, 120.0, 3_000_000.0, 1_000_000.0),
            )
            .unwrap();
        assert_eq!(buy.label, Label::Buy);

        let sell = s
            .recommend(
                ["accounting fraud alleged", "stock plummets on losses"],
                &StockMetrics::new(60.0, 120.0, 200_000.0, 1_000_000.0),
            )
            .unwrap();
        assert_eq!(sell.label, Label::Sell);
    }

    #[test]
    fn no_headlines_uses_neutral_sentiment() {
        let rec = scorer()
            .recommend(Vec::<String>::new(), &StockMetrics::new(100.0, 100.0, 10.0, 10.0))
            .unwrap();
        assert_eq!(rec.details.sentiment_score, NEUTRAL_SCORE);
        assert_eq!(rec.details.final_score, 5.0);
        assert_eq!(rec.details.price_vs_50d, 0.0);
        assert_eq!(rec.label, Label::Hold);
    }

    #[test]
    fn invalid_metrics_fail_before_scoring() {
        let err = scorer()
            .recommend(["stellar"], &StockMetrics::new(0.0, 0.0, 1.0, 1.0))
            .unwrap_err();
        assert_eq!(err.field, "avg_price_50d");
    }

    #[test]
    fn recommend_is_idempotent() {
        let s = scorer();
        let headlines = ["strong growth", "lawsuit risk"];
        let metrics = StockMetrics::new(97.3, 101.9, 1_234_567.0, 999_999.0);
        let a = s.recommend(headlines, &metrics).unwrap();
        let b = s.recommend(headlines, &metrics).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.details.final_score.to_bits(),
            b.details.final_score.to_bits()
        );
    }

    #[test]
    fn shared_scorer_across_threads() {
        let s = Arc::new(scorer());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = Arc::clone(&s);
                std::thread::spawn(move || {
                    s.recommend(
                        ["stellar results reported"],
                        &StockMetrics::new(150.0, 140.0, 1_000_000.0, 800_000.0),
                    )
                    .unwrap()
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(6.185_714), 6.19);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(-0.001).to_bits(), 0.0f64.to_bits());
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(-1e307), -1e307);
    }
}
