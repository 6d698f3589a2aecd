use super::Scorer;
use crate::domain::recommendation::StockMetrics;
use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};

const RATIO_SCALE: f64 = 5.0;
const SCORE_FLOOR: f64 = 1.0;
const SCORE_CEILING: f64 = 10.0;
const PRICE_WEIGHT: f64 = 0.6;
const VOLUME_WEIGHT: f64 = 0.4;

/// Unrounded intermediates of the technical score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnicalBreakdown {
    pub price_ratio: f64,
    pub price_score: f64,
    pub volume_ratio: f64,
    pub volume_score: f64,
    pub technical_score: f64,
}

impl StockMetrics {
    /// Averages and price must be positive, volume may be zero. Nothing may be
    /// NaN or infinite, including the ratios and their percentage deviations.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        positive("avg_price_50d", self.avg_price_50d)?;
        positive("avg_volume_50d", self.avg_volume_50d)?;
        positive("current_price", self.current_price)?;
        if !(self.volume.is_finite() && self.volume >= 0.0) {
            return Err(InvalidInputError::new(
                "volume",
                self.volume,
                "finite and >= 0",
            ));
        }
        finite_ratio("price_ratio", self.price_ratio())?;
        finite_ratio("volume_ratio", self.volume_ratio())?;
        Ok(())
    }

    pub fn price_ratio(&self) -> f64 {
        self.current_price / self.avg_price_50d
    }

    pub fn volume_ratio(&self) -> f64 {
        self.volume / self.avg_volume_50d
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidInputError::new(field, value, "finite and > 0"))
    }
}

fn finite_ratio(field: &'static str, ratio: f64) -> Result<(), InvalidInputError> {
    if ratio.is_finite() && pct_vs_average(ratio).is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::new(field, ratio, "finite"))
    }
}

/// Percentage deviation of a ratio from 1.0.
pub(crate) fn pct_vs_average(ratio: f64) -> f64 {
    (ratio - 1.0) * 100.0
}

fn ratio_score(ratio: f64) -> f64 {
    (ratio * RATIO_SCALE).clamp(SCORE_FLOOR, SCORE_CEILING)
}

pub(crate) fn breakdown(metrics: &StockMetrics) -> Result<TechnicalBreakdown, InvalidInputError> {
    metrics.validate()?;

    let price_ratio = metrics.price_ratio();
    let volume_ratio = metrics.volume_ratio();
    let price_score = ratio_score(price_ratio);
    let volume_score = ratio_score(volume_ratio);

    Ok(TechnicalBreakdown {
        price_ratio,
        price_score,
        volume_ratio,
        volume_score,
        technical_score: price_score * PRICE_WEIGHT + volume_score * VOLUME_WEIGHT,
    })
}

impl Scorer {
    /// Price/volume momentum against the 50-day averages, in `[1, 10]`.
    pub fn score_technical(&self, metrics: &StockMetrics) -> Result<f64, InvalidInputError> {
        Ok(breakdown(metrics)?.technical_score)
    }

    pub fn technical_breakdown(
        &self,
        metrics: &StockMetrics,
    ) -> Result<TechnicalBreakdown, InvalidInputError> {
        breakdown(metrics)
    }
}
