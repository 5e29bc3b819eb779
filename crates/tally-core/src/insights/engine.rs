//! Insight Engine - runs the registered rules in order

use tracing::debug;

use crate::config::InsightConfig;
use crate::models::MonthlyStatistics;

use super::types::Insight;
use super::{FoodSpendingRule, PositiveBalanceRule, SpendingConcentrationRule};

/// Trait for insight rules
///
/// Rules are pure: the same statistics always produce the same result.
pub trait InsightRule: Send + Sync {
    /// Stable identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule, returning an insight if it fires
    fn evaluate(&self, stats: &MonthlyStatistics) -> Option<Insight>;
}

/// The main insight engine
///
/// Output order follows registration order.
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules and default thresholds
    pub fn new() -> Self {
        Self::with_config(&InsightConfig::default())
    }

    /// Create an engine with the built-in rules using configured thresholds
    pub fn with_config(config: &InsightConfig) -> Self {
        let mut engine = Self::empty();

        engine.register(Box::new(SpendingConcentrationRule::new(
            config.concentration_percent,
        )));
        engine.register(Box::new(PositiveBalanceRule::new()));
        engine.register(Box::new(FoodSpendingRule::new(config.food_threshold)));

        engine
    }

    /// Create an engine with no rules
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Register a rule after the existing ones
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Evaluate every rule in order and collect the insights that fire
    pub fn derive_insights(&self, stats: &MonthlyStatistics) -> Vec<Insight> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let insight = rule.evaluate(stats)?;
                debug!(rule = rule.id(), kind = insight.kind.as_str(), "Insight fired");
                Some(insight)
            })
            .collect()
    }

    /// Identifiers of the registered rules, in evaluation order
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}
