//! Built-in insight rules
//!
//! Each rule looks at one aspect of the monthly statistics and fires at most
//! one insight.

use crate::models::{Category, MonthlyStatistics};

use super::engine::InsightRule;
use super::types::{Insight, InsightKind};

/// Warns when one category takes more than a set share of spending
pub struct SpendingConcentrationRule {
    /// Rounded percentage that must be exceeded
    threshold_percent: u32,
}

impl SpendingConcentrationRule {
    pub fn new(threshold_percent: u32) -> Self {
        Self { threshold_percent }
    }
}

impl Default for SpendingConcentrationRule {
    fn default() -> Self {
        Self::new(40)
    }
}

impl InsightRule for SpendingConcentrationRule {
    fn id(&self) -> &'static str {
        "spending_concentration"
    }

    fn name(&self) -> &'static str {
        "Spending Concentration"
    }

    fn evaluate(&self, stats: &MonthlyStatistics) -> Option<Insight> {
        let top = stats.top_category?;
        if stats.total_spent <= 0.0 {
            return None;
        }

        let percentage = (top.amount / stats.total_spent * 100.0).round();
        // NaN never exceeds the threshold
        if percentage.is_nan() || percentage <= f64::from(self.threshold_percent) {
            return None;
        }

        Some(Insight::new(
            InsightKind::Warning,
            "High spending detected",
            format!(
                "{} accounts for {}% of your spending.",
                top.category.display_name(),
                percentage
            ),
            "⚠️",
        ))
    }
}

/// Celebrates a month where income exceeds spending
#[derive(Default)]
pub struct PositiveBalanceRule;

impl PositiveBalanceRule {
    pub fn new() -> Self {
        Self
    }
}

impl InsightRule for PositiveBalanceRule {
    fn id(&self) -> &'static str {
        "positive_balance"
    }

    fn name(&self) -> &'static str {
        "Positive Balance"
    }

    fn evaluate(&self, stats: &MonthlyStatistics) -> Option<Insight> {
        if stats.balance.is_nan() || stats.balance <= 0.0 {
            return None;
        }

        Some(Insight::new(
            InsightKind::Success,
            "Positive balance",
            format!(
                "You've saved ${:.2} this month. Keep it up!",
                stats.balance
            ),
            "🎉",
        ))
    }
}

/// Suggests meal prepping once food spending passes a threshold
pub struct FoodSpendingRule {
    threshold: f64,
}

impl FoodSpendingRule {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for FoodSpendingRule {
    fn default() -> Self {
        Self::new(200.0)
    }
}

impl InsightRule for FoodSpendingRule {
    fn id(&self) -> &'static str {
        "food_spending"
    }

    fn name(&self) -> &'static str {
        "Food Spending"
    }

    fn evaluate(&self, stats: &MonthlyStatistics) -> Option<Insight> {
        let food = stats.spent_in(Category::Food);
        if food.is_nan() || food <= self.threshold {
            return None;
        }

        Some(Insight::new(
            InsightKind::Info,
            "Food spending tip",
            "Consider meal prepping to reduce dining expenses.",
            "💡",
        ))
    }
}
