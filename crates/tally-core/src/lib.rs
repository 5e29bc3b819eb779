//! Tally Core Library
//!
//! Natural-language expense tracking:
//! - Expense parser that turns text like "$25 for lunch" into transactions
//! - Keyword category classifier
//! - Transaction store with newest-first ordering
//! - Monthly statistics and rule-based spending insights
//! - Expense tracker service with a simulated processing delay
//! - Pluggable voice capture and persistence collaborators

pub mod capture;
pub mod classify;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod parser;
pub mod persistence;
pub mod sample;
pub mod stats;
pub mod store;
pub mod tracker;

/// Test utilities (transaction builders)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use capture::{ScriptedVoice, UnsupportedVoice, VoiceCapture};
pub use classify::classify;
pub use config::TallyConfig;
pub use error::{Error, Result};
pub use insights::{Insight, InsightEngine, InsightKind, InsightRule};
pub use models::{Category, CategoryInfo, MonthlyStatistics, NewTransaction, TopCategory, Transaction};
pub use parser::ExpenseParser;
pub use persistence::{JsonFileRepository, MemoryRepository, TransactionRepository};
pub use sample::sample_transactions;
pub use stats::{category_breakdown, compute, CategorySlice};
pub use store::{group_by_day, DayGroup, IdGenerator, TransactionStore};
pub use tracker::ExpenseTracker;
