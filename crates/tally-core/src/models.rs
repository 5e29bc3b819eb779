//! Domain models for Tally

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Spending category
///
/// Declaration order is the classifier priority order and the iteration
/// order used for statistics, so it must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Income,
    Other,
}

/// Static display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub icon: &'static str,
    /// Chart color token
    pub color: &'static str,
    /// Style class token
    pub class: &'static str,
}

impl Category {
    /// All categories in priority order
    pub const ALL: [Category; 8] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Bills,
        Self::Entertainment,
        Self::Health,
        Self::Income,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Shopping => "shopping",
            Self::Bills => "bills",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::Income => "income",
            Self::Other => "other",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        let (name, icon, color, class) = match self {
            Self::Food => ("Food & Dining", "🍔", "hsl(25, 95%, 55%)", "category-food"),
            Self::Transport => ("Transport", "🚗", "hsl(210, 90%, 55%)", "category-transport"),
            Self::Shopping => ("Shopping", "🛍️", "hsl(330, 85%, 60%)", "category-shopping"),
            Self::Bills => ("Bills & Utilities", "💡", "hsl(270, 70%, 60%)", "category-bills"),
            Self::Entertainment => (
                "Entertainment",
                "🎬",
                "hsl(150, 70%, 45%)",
                "category-entertainment",
            ),
            Self::Health => ("Health", "💊", "hsl(0, 75%, 55%)", "category-health"),
            Self::Income => ("Income", "💰", "hsl(162, 72%, 50%)", "category-income"),
            Self::Other => ("Other", "📦", "hsl(222, 30%, 50%)", "category-other"),
        };
        CategoryInfo {
            name,
            icon,
            color,
            class,
        }
    }

    /// Human-readable name (e.g. "Food & Dining")
    pub fn display_name(&self) -> &'static str {
        self.info().name
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "shopping" => Ok(Self::Shopping),
            "bills" => Ok(Self::Bills),
            "entertainment" => Ok(Self::Entertainment),
            "health" => Ok(Self::Health),
            "income" => Ok(Self::Income),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded expense or income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Always positive; direction comes from `is_income`
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    #[serde(default)]
    pub is_income: bool,
}

impl Transaction {
    /// The first broken data-model rule, if any
    ///
    /// Parsed transactions always pass; hand-edited snapshots may not.
    pub fn invariant_violation(&self) -> Option<&'static str> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            Some("amount is not a positive number")
        } else if self.is_income != (self.category == Category::Income) {
            Some("income flag does not match category")
        } else {
            None
        }
    }
}

/// A parsed transaction before it is assigned an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub merchant: Option<String>,
    pub is_income: bool,
}

impl NewTransaction {
    /// Attach an id, producing the stored form
    pub fn into_transaction(self, id: impl Into<String>) -> Transaction {
        Transaction {
            id: id.into(),
            amount: self.amount,
            description: self.description,
            category: self.category,
            date: self.date,
            merchant: self.merchant,
            is_income: self.is_income,
        }
    }
}

/// Largest spending category of the month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopCategory {
    pub category: Category,
    pub amount: f64,
}

/// Aggregates over the current calendar month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStatistics {
    pub total_spent: f64,
    pub total_income: f64,
    pub balance: f64,
    /// Expense totals per category (income excluded)
    pub by_category: BTreeMap<Category, f64>,
    pub top_category: Option<TopCategory>,
    /// Income and expense transactions in the month
    pub transaction_count: usize,
}

impl MonthlyStatistics {
    /// Spending in one category, zero when absent
    pub fn spent_in(&self, category: Category) -> f64 {
        self.by_category.get(&category).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn tx(amount: f64, category: Category, is_income: bool) -> Transaction {
        Transaction {
            id: "t".to_string(),
            amount,
            description: "test".to_string(),
            category,
            date: Utc::now(),
            merchant: None,
            is_income,
        }
    }

    #[test]
    fn test_invariant_violation() {
        assert_eq!(tx(12.5, Category::Food, false).invariant_violation(), None);
        assert_eq!(tx(2500.0, Category::Income, true).invariant_violation(), None);

        assert!(tx(0.0, Category::Food, false).invariant_violation().is_some());
        assert!(tx(-5.0, Category::Food, false).invariant_violation().is_some());
        assert!(tx(f64::NAN, Category::Food, false).invariant_violation().is_some());
        assert!(tx(10.0, Category::Food, true).invariant_violation().is_some());
        assert!(tx(10.0, Category::Income, false).invariant_violation().is_some());
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
        }
        assert!(Category::from_str("groceries").is_err());
    }

    #[test]
    fn test_category_order_matches_priority() {
        assert!(Category::Food < Category::Transport);
        assert!(Category::Bills < Category::Entertainment);
        assert!(Category::Income < Category::Other);
    }

    #[test]
    fn test_category_info() {
        assert_eq!(Category::Food.display_name(), "Food & Dining");
        assert_eq!(Category::Bills.info().class, "category-bills");
        assert_eq!(Category::Other.info().icon, "📦");
    }

    #[test]
    fn test_transaction_is_income_defaults_to_false() {
        let json = r#"{
            "id": "1",
            "amount": 12.5,
            "description": "Coffee & Pastry",
            "category": "food",
            "date": "2026-10-01T08:00:00Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(!tx.is_income);
        assert_eq!(tx.merchant, None);
        assert_eq!(tx.category, Category::Food);
    }

    #[test]
    fn test_spent_in_missing_category() {
        let stats = MonthlyStatistics::default();
        assert_eq!(stats.spent_in(Category::Food), 0.0);
    }
}
