use chrono::{DateTime, Utc};
use sentiscore_core::domain::contract::ScoreRequest;
use sentiscore_core::domain::recommendation::{
    FailedItem, RecommendationItem, RecommendationSnapshot,
};
use sentiscore_core::Scorer;

/// Scores every request independently. A request that fails validation is
/// reported under `failures` and does not stop the rest of the batch.
pub fn run_batch(
    scorer: &Scorer,
    requests: Vec<ScoreRequest>,
    generated_at: DateTime<Utc>,
) -> RecommendationSnapshot {
    let mut items = Vec::with_capacity(requests.len());
    let mut failures = Vec::new();

    for request in requests {
        match scorer.recommend(&request.headlines, &request.metrics) {
            Ok(rec) => {
                tracing::info!(
                    ticker = %request.ticker,
                    label = %rec.label,
                    final_score = rec.details.final_score,
                    "scored"
                );
                items.push(RecommendationItem {
                    ticker: request.ticker,
                    label: rec.label,
                    details: rec.details,
                });
            }
            Err(err) => {
                let err = anyhow::Error::new(err)
                    .context(format!("scoring {} failed", request.ticker));
                sentry_anyhow::capture_anyhow(&err);
                let error = format!("{err:#}");
                tracing::error!(ticker = %request.ticker, %error, "skipping request");
                failures.push(FailedItem {
                    ticker: request.ticker,
                    error,
                });
            }
        }
    }

    RecommendationSnapshot {
        generated_at,
        items,
        failures,
    }
}
