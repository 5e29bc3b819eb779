//! Demo transactions for a fresh tracker

use chrono::{DateTime, Duration, Utc};

use crate::models::{Category, Transaction};

/// Eight demo transactions spread over the week before `now`, newest first
pub fn sample_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    let entries: [(&str, f64, &str, Category, i64, Option<&str>); 8] = [
        ("1", 12.50, "Coffee & Pastry", Category::Food, 2, Some("Starbucks")),
        ("2", 45.00, "Uber to Airport", Category::Transport, 24, Some("Uber")),
        ("3", 89.99, "New Headphones", Category::Shopping, 48, Some("Amazon")),
        ("4", 15.99, "Netflix Subscription", Category::Bills, 72, Some("Netflix")),
        ("5", 32.00, "Movie Night", Category::Entertainment, 96, Some("AMC")),
        ("6", 2500.00, "Monthly Salary", Category::Income, 120, None),
        ("7", 67.50, "Grocery Shopping", Category::Food, 144, Some("Whole Foods")),
        ("8", 25.00, "Gym Membership", Category::Health, 168, Some("Planet Fitness")),
    ];

    entries
        .into_iter()
        .map(|(id, amount, description, category, hours_ago, merchant)| Transaction {
            id: id.to_string(),
            amount,
            description: description.to_string(),
            category,
            date: now - Duration::hours(hours_ago),
            merchant: merchant.map(str::to_string),
            is_income: category == Category::Income,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::at;

    #[test]
    fn test_sample_shape() {
        let now = at("2026-10-18T12:00:00Z");
        let txs = sample_transactions(now);

        assert_eq!(txs.len(), 8);
        assert_eq!(txs[0].id, "1");
        assert_eq!(txs[0].date, at("2026-10-18T10:00:00Z"));
        assert!(txs.windows(2).all(|w| w[0].date > w[1].date));
        assert_eq!(txs.iter().filter(|t| t.is_income).count(), 1);
        assert_eq!(txs[5].merchant, None);
    }
}
