//! Weekly score records as delivered by the league API.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::error::DomainError;
use super::ids::RosterId;

/// Decimal places every score is stored with.
pub const POINTS_DP: u32 = 2;

/// Round a score to [`POINTS_DP`] places, halves to even.
///
/// Wire scores should come in through [`points_from_f64`] so the rounding
/// sees the float's binary value: `10.135` is stored as
/// `10.13499999...` and rounds down.
#[must_use]
pub fn round_points(points: Decimal) -> Decimal {
    points.round_dp_with_strategy(POINTS_DP, RoundingStrategy::MidpointNearestEven)
}

/// Exact decimal expansion of a float score. `None` for NaN or infinity.
#[must_use]
pub fn points_from_f64(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
}

/// Nearest float to a score already rounded to [`POINTS_DP`].
///
/// The mantissa and the power of ten are both exact in `f64`, so the single
/// division is correctly rounded.
#[must_use]
pub fn points_to_f64(points: Decimal) -> f64 {
    points.mantissa() as f64 / 10f64.powi(points.scale() as i32)
}

/// One roster's weekly entry before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWeekScore {
    pub roster_id: RosterId,
    /// `None` when the roster has no opponent this week.
    pub matchup_id: Option<u32>,
    pub points: Option<Decimal>,
    /// Commissioner override; wins over `points` when set.
    ///
    /// Both values hold the exact binary value of the float the API sent.
    pub custom_points: Option<Decimal>,
}

impl RawWeekScore {
    /// Validate and round the record for `week`.
    pub fn into_score(self, week: u32) -> Result<WeekScore, DomainError> {
        let points = self
            .custom_points
            .or(self.points)
            .ok_or(DomainError::MissingPoints {
                week,
                roster_id: self.roster_id,
            })?;

        Ok(WeekScore {
            week,
            roster_id: self.roster_id,
            matchup_id: self.matchup_id,
            points: round_points(points),
        })
    }
}

/// A validated weekly score, points already rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekScore {
    pub week: u32,
    pub roster_id: RosterId,
    pub matchup_id: Option<u32>,
    pub points: Decimal,
}
