//! Goal weight progress planning
//!
//! Compares a goal weight against the ideal range for the user's height
//! and checks whether the requested timeframe implies a safe weekly rate.

use crate::errors::{FitTrackError, FitTrackResult};
use serde::{Deserialize, Serialize};

/// Maximum recommended weight loss per week (kg)
pub const SAFE_LOSS_RATE_KG_PER_WEEK: f64 = 0.9;

/// Maximum recommended weight gain per week (kg)
pub const SAFE_GAIN_RATE_KG_PER_WEEK: f64 = 0.5;

/// Weekly changes smaller than this count as "already at goal"
const AT_GOAL_EPSILON: f64 = 0.001;

/// Where a goal weight sits relative to the ideal range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalWeightAssessment {
    BelowRange,
    WithinRange,
    AboveRange,
}

/// Compare a goal weight with an ideal `(min, max)` range (inclusive)
pub fn assess_goal_weight(goal_weight_kg: f64, ideal_range_kg: (f64, f64)) -> GoalWeightAssessment {
    let (min, max) = ideal_range_kg;
    if goal_weight_kg < min {
        GoalWeightAssessment::BelowRange
    } else if goal_weight_kg > max {
        GoalWeightAssessment::AboveRange
    } else {
        GoalWeightAssessment::WithinRange
    }
}

/// Direction of the planned change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightChangeDirection {
    Loss,
    Gain,
    Maintain,
}

/// Weekly weight change plan for a goal and timeframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgressPlan {
    pub direction: WeightChangeDirection,
    /// Absolute change per week (kg)
    pub weekly_change_kg: f64,
    /// Absolute total change (kg)
    pub total_change_kg: f64,
    pub weeks: u32,
    /// False when the weekly rate exceeds the safe limit for the direction
    pub within_safe_rate: bool,
    /// Timeframe that would bring the rate down to the safe limit
    pub suggested_weeks: Option<u32>,
}

/// Plan the weekly change needed to move from `current_kg` to `goal_kg`
/// in `weeks` weeks.
///
/// Fails with [`FitTrackError::ZeroTimeframe`] when `weeks` is zero.
pub fn plan_weight_change(current_kg: f64, goal_kg: f64, weeks: u32) -> FitTrackResult<GoalProgressPlan> {
    if weeks == 0 {
        return Err(FitTrackError::ZeroTimeframe);
    }

    let weight_diff = goal_kg - current_kg;
    let weekly_change = weight_diff / weeks as f64;

    let (direction, safe_rate) = if weekly_change.abs() < AT_GOAL_EPSILON {
        (WeightChangeDirection::Maintain, None)
    } else if weight_diff < 0.0 {
        (WeightChangeDirection::Loss, Some(SAFE_LOSS_RATE_KG_PER_WEEK))
    } else {
        (WeightChangeDirection::Gain, Some(SAFE_GAIN_RATE_KG_PER_WEEK))
    };

    let suggested_weeks = match safe_rate {
        Some(rate) if weekly_change.abs() > rate => Some((weight_diff.abs() / rate).ceil() as u32),
        _ => None,
    };

    Ok(GoalProgressPlan {
        direction,
        weekly_change_kg: weekly_change.abs(),
        total_change_kg: weight_diff.abs(),
        weeks,
        within_safe_rate: suggested_weeks.is_none(),
        suggested_weeks,
    })
}
