//! Insight Engine - rule-based spending advice
//!
//! Insights are derived from [`MonthlyStatistics`](crate::models::MonthlyStatistics)
//! by a fixed, ordered list of threshold rules. They are never stored; the
//! engine is re-run whenever the statistics change.
//!
//! ## Built-in Rules
//!
//! - **Spending Concentration** - one category dominates monthly spending
//! - **Positive Balance** - income exceeds spending this month
//! - **Food Spending** - food spending is above the meal-prep threshold
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let insights = engine.derive_insights(&stats);
//! ```

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{InsightEngine, InsightRule};
pub use rules::{FoodSpendingRule, PositiveBalanceRule, SpendingConcentrationRule};
pub use types::{Insight, InsightKind};
