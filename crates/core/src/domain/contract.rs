use crate::domain::recommendation::StockMetrics;
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Batch file layout accepted by the worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInput {
    pub requests: Vec<ScoreRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub ticker: String,
    #[serde(default)]
    pub headlines: Vec<String>,
    pub metrics: StockMetrics,
}

impl BatchInput {
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str::<Self>(text).context("batch input is not valid JSON for batch schema")
    }

    /// Checks batch-level shape only. Metric domains are enforced by the scorer
    /// so a single bad row does not reject the whole batch.
    pub fn validate(self) -> anyhow::Result<Vec<ScoreRequest>> {
        ensure!(
            !self.requests.is_empty(),
            "batch must contain at least one request"
        );

        let mut seen = BTreeSet::<String>::new();
        let mut out = Vec::with_capacity(self.requests.len());
        for request in self.requests {
            let request = request.validate()?;
            ensure!(
                seen.insert(request.ticker.clone()),
                "duplicate ticker: {}",
                request.ticker
            );
            out.push(request);
        }

        Ok(out)
    }
}

impl ScoreRequest {
    fn validate(self) -> anyhow::Result<Self> {
        let ticker = self.ticker.trim().to_string();
        ensure!(!ticker.is_empty(), "ticker must be non-empty");

        Ok(Self {
            ticker,
            headlines: self.headlines,
            metrics: self.metrics,
        })
    }
}
