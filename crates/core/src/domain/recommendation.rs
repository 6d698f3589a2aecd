use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockMetrics {
    pub current_price: f64,
    pub avg_price_50d: f64,
    pub volume: f64,
    pub avg_volume_50d: f64,
}

impl StockMetrics {
    pub fn new(current_price: f64, avg_price_50d: f64, volume: f64, avg_volume_50d: f64) -> Self {
        Self {
            current_price,
            avg_price_50d,
            volume,
            avg_volume_50d,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Buy,
    Hold,
    Sell,
}

impl Label {
    pub const BUY_THRESHOLD: f64 = 7.0;
    pub const SELL_THRESHOLD: f64 = 4.0;

    /// `>= 7.0` buys, `<= 4.0` sells, anything strictly between holds.
    pub fn from_final_score(final_score: f64) -> Self {
        if final_score >= Self::BUY_THRESHOLD {
            Self::Buy
        } else if final_score <= Self::SELL_THRESHOLD {
            Self::Sell
        } else {
            Self::Hold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Hold => "HOLD",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All fields rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDetails {
    pub sentiment_score: f64,
    pub technical_score: f64,
    pub final_score: f64,
    pub price_vs_50d: f64,
    pub volume_vs_50d: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub label: Label,
    pub details: RecommendationDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSnapshot {
    pub generated_at: DateTime<Utc>,
    pub items: Vec<RecommendationItem>,
    pub failures: Vec<FailedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub ticker: String,
    pub label: Label,
    pub details: RecommendationDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedItem {
    pub ticker: String,
    pub error: String,
}
