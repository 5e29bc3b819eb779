//! Monthly statistics
//!
//! Everything here is recomputed from the transaction slice on each call;
//! nothing is cached between calls.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, TimeZone};
use serde::Serialize;

use crate::models::{Category, MonthlyStatistics, TopCategory, Transaction};

/// Whether `tx` falls in the same calendar month and year as `now`,
/// judged in `now`'s time zone
fn in_month<Tz: TimeZone>(tx: &Transaction, now: &DateTime<Tz>) -> bool {
    let local = tx.date.with_timezone(&now.timezone());
    local.year() == now.year() && local.month() == now.month()
}

/// Compute current-month statistics relative to `now`
pub fn compute<Tz: TimeZone>(transactions: &[Transaction], now: &DateTime<Tz>) -> MonthlyStatistics {
    let this_month: Vec<&Transaction> = transactions.iter().filter(|t| in_month(t, now)).collect();

    let mut total_spent = 0.0;
    let mut total_income = 0.0;
    let mut by_category: BTreeMap<Category, f64> = BTreeMap::new();

    for tx in &this_month {
        if tx.is_income {
            total_income += tx.amount;
        } else {
            total_spent += tx.amount;
            *by_category.entry(tx.category).or_insert(0.0) += tx.amount;
        }
    }

    MonthlyStatistics {
        total_spent,
        total_income,
        balance: total_income - total_spent,
        top_category: top_category(&by_category),
        by_category,
        transaction_count: this_month.len(),
    }
}

/// Largest category; the stable sort keeps category order on ties
fn top_category(by_category: &BTreeMap<Category, f64>) -> Option<TopCategory> {
    let mut entries: Vec<(Category, f64)> = by_category.iter().map(|(c, a)| (*c, *a)).collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    entries
        .first()
        .map(|(category, amount)| TopCategory {
            category: *category,
            amount: *amount,
        })
}

/// One slice of the spending chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: Category,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub amount: f64,
    /// Share of monthly spending, 0-100
    pub percent: f64,
}

/// Spending breakdown for charts, largest first, zero categories skipped
pub fn category_breakdown(stats: &MonthlyStatistics) -> Vec<CategorySlice> {
    let total: f64 = stats.by_category.values().filter(|v| **v > 0.0).sum();

    let mut slices: Vec<CategorySlice> = stats
        .by_category
        .iter()
        .filter(|(_, amount)| **amount > 0.0)
        .map(|(category, amount)| {
            let info = category.info();
            CategorySlice {
                category: *category,
                name: info.name,
                color: info.color,
                icon: info.icon,
                amount: *amount,
                percent: if total > 0.0 { amount / total * 100.0 } else { 0.0 },
            }
        })
        .collect();

    slices.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    slices
}
