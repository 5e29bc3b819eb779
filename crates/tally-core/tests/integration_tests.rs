//! Integration tests for tally-core
//!
//! These tests exercise the full text → transaction → statistics → insights
//! workflow through the public API.

use chrono::{DateTime, Duration, Utc};
use tally_core::{
    classify, compute, sample_transactions, Category, Error, ExpenseParser, ExpenseTracker,
    InsightEngine, InsightKind, JsonFileRepository, TallyConfig, Transaction,
    TransactionRepository, TransactionStore,
};

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

// =============================================================================
// Parser + Classifier
// =============================================================================

#[test]
fn test_lunch_scenario() {
    let parser = ExpenseParser::new().expect("parser");
    let tx = parser.parse("$25 for lunch").expect("parses");

    assert_eq!(tx.category, Category::Food);
    assert_eq!(tx.amount, 25.0);
    assert!(tx.description.contains("for lunch"));
    assert!(!tx.is_income);
}

#[test]
fn test_coffee_scenario() {
    let parser = ExpenseParser::new().expect("parser");
    let tx = parser.parse("coffee $5").expect("parses");

    assert_eq!(tx.category, Category::Food);
    assert_eq!(tx.amount, 5.0);
}

#[test]
fn test_inputs_without_digits_fail() {
    let parser = ExpenseParser::new().expect("parser");
    for text in ["", "lunch", "twelve dollars for pizza", "$ for coffee", "💸"] {
        assert!(
            matches!(parser.parse(text), Err(Error::NoAmountFound)),
            "expected failure for {:?}",
            text
        );
    }
}

#[test]
fn test_classify_is_total() {
    for text in ["", "   ", "🍕🍕", "ÄÖÜ", "netflix", "0", "\n\t"] {
        assert!(Category::ALL.contains(&classify(text)));
    }
}

#[test]
fn test_bills_beats_entertainment() {
    assert_eq!(classify("netflix and rent"), Category::Bills);
    assert_eq!(classify("Netflix"), Category::Bills);
}

// =============================================================================
// Store
// =============================================================================

#[test]
fn test_store_insert_and_remove() {
    let parser = ExpenseParser::new().expect("parser");
    let mut store = TransactionStore::new();

    let first = store.insert(parser.parse("$3 bus").unwrap());
    let second = store.insert(parser.parse("$40 doctor").unwrap());
    assert_eq!(store.list()[0].id, second.id);

    store.remove(&second.id);
    assert!(store.list().iter().all(|t| t.id != second.id));
    assert_eq!(store.list()[0].id, first.id);

    let before = store.list().to_vec();
    store.remove("does-not-exist");
    assert_eq!(store.list(), before.as_slice());
}

// =============================================================================
// Statistics + Insights
// =============================================================================

#[test]
fn test_empty_statistics() {
    let stats = compute(&[], &Utc::now());
    assert_eq!(stats.total_spent, 0.0);
    assert_eq!(stats.total_income, 0.0);
    assert_eq!(stats.balance, 0.0);
    assert!(stats.top_category.is_none());
    assert_eq!(stats.transaction_count, 0);
}

#[test]
fn test_parsed_month_end_to_end() {
    let parser = ExpenseParser::new().expect("parser");
    let mut store = TransactionStore::new();

    for (text, when) in [
        ("salary $2500", "2026-10-01T09:00:00Z"),
        ("$50 groceries", "2026-10-03T18:00:00Z"),
        ("dinner 250 dollars", "2026-10-10T20:00:00Z"),
        // Last month, ignored
        ("$999 flight", "2026-09-29T07:00:00Z"),
    ] {
        let candidate = parser.parse_at(text, at(when)).expect("parses");
        store.insert(candidate);
    }

    let stats = compute(store.list(), &at("2026-10-18T12:00:00Z"));
    assert_eq!(stats.spent_in(Category::Food), 300.0);
    assert_eq!(stats.total_spent, 300.0);
    assert_eq!(stats.total_income, 2500.0);
    assert_eq!(stats.balance, 2200.0);
    assert_eq!(stats.transaction_count, 3);

    let insights = InsightEngine::new().derive_insights(&stats);
    let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
    // A single spending category is 100% of spending, so the warning fires too
    assert_eq!(
        kinds,
        vec![InsightKind::Warning, InsightKind::Success, InsightKind::Info]
    );
    assert_eq!(insights[2].title, "Food spending tip");
}

#[test]
fn test_overspent_month_has_no_balance_insight() {
    let parser = ExpenseParser::new().expect("parser");
    let now = at("2026-10-18T12:00:00Z");
    let mut store = TransactionStore::new();
    store.insert(parser.parse_at("rent $1200", now).unwrap());
    store.insert(parser.parse_at("$80 electronics", now).unwrap());
    store.insert(parser.parse_at("$60 concert", now).unwrap());

    let stats = compute(store.list(), &now);
    assert!(stats.balance < 0.0);

    let insights = InsightEngine::new().derive_insights(&stats);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::Warning);
    assert!(insights[0].description.starts_with("Bills & Utilities"));
}

// =============================================================================
// Tracker + Persistence
// =============================================================================

#[tokio::test]
async fn test_tracker_round_trip_through_json() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let repo = JsonFileRepository::new(dir.path().join("tally.json"));

    let tracker = ExpenseTracker::load_from(TallyConfig::immediate(), &repo).expect("tracker");
    assert!(tracker.transactions().is_empty());

    let lunch = tracker.add_expense("$25 for lunch").await.expect("added");
    let refund = tracker.add_expense("cashback $30").await.expect("added");
    assert!(refund.is_income);
    assert_eq!(refund.category, Category::Income);
    tracker.save_to(&repo).expect("saved");

    let saved: Vec<Transaction> = repo.load().expect("loaded");
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].id, refund.id);
    assert_eq!(saved[1].id, lunch.id);

    let restored = ExpenseTracker::load_from(TallyConfig::immediate(), &repo).expect("tracker");
    restored.delete_expense(&refund.id);
    assert_eq!(restored.transactions().len(), 1);
}

#[tokio::test]
async fn test_tracker_sample_data_recent() {
    let tracker = ExpenseTracker::with_sample_data(TallyConfig::immediate()).expect("tracker");
    let newest = tracker.transactions()[0].date;

    // All eight demo entries fall within a week of the newest one
    let oldest = tracker.transactions()[7].date;
    assert!(newest - oldest <= Duration::hours(168));

    let added = tracker.add_expense("$5 snack").await.expect("added");
    assert_eq!(tracker.recent()[0].id, added.id);
    assert_eq!(tracker.recent().len(), 9);
}

#[test]
fn test_sample_month_insights() {
    let now = at("2026-10-18T12:00:00Z");
    let tracker =
        ExpenseTracker::new(TallyConfig::immediate(), sample_transactions(now)).expect("tracker");

    let stats = tracker.statistics_at(&now);
    assert_eq!(stats.transaction_count, 8);
    assert_eq!(stats.total_income, 2500.0);
    assert_eq!(stats.top_category.unwrap().category, Category::Shopping);

    // Shopping is about 31% of spending and food stays under the tip threshold
    let insights = tracker.insights_at(&now);
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].kind, InsightKind::Success);
    assert_eq!(
        insights[0].description,
        "You've saved $2212.02 this month. Keep it up!"
    );
}
