//! Test utilities for tally-core
//!
//! Builders for transactions with fixed dates so statistics tests do not
//! depend on the wall clock.

use chrono::{DateTime, Utc};

use crate::models::{Category, NewTransaction, Transaction};

/// Parse an RFC 3339 timestamp into UTC
pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap_or_else(|e| panic!("bad test timestamp {}: {}", rfc3339, e))
        .with_timezone(&Utc)
}

/// A candidate dated now; income flag follows the category
pub fn candidate(amount: f64, category: Category) -> NewTransaction {
    NewTransaction {
        amount,
        description: category.display_name().to_string(),
        category,
        date: Utc::now(),
        merchant: None,
        is_income: category == Category::Income,
    }
}

/// A stored transaction with an explicit id and date
pub fn transaction(id: &str, amount: f64, category: Category, date: &str) -> Transaction {
    NewTransaction {
        date: at(date),
        ..candidate(amount, category)
    }
    .into_transaction(id)
}
