//! In-memory transaction store
//!
//! Transactions are kept newest-first by insertion, independent of their
//! `date`. Ids are unique within the store.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, TimeZone, Utc};
use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Session-unique id source
///
/// Ids look like `<unix-millis>-<sequence>`; the sequence is shared by the
/// whole process so two ids minted in the same millisecond still differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn next_id(&self) -> String {
        let seq = SEQUENCE.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", Utc::now().timestamp_millis(), seq)
    }
}

/// Transactions for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    /// Store order within the day
    pub transactions: Vec<Transaction>,
    /// Expense total for the day (income excluded)
    pub total_spent: f64,
}

/// Injected transactions are kept as-is, but broken ones are reported
fn warn_if_invalid(tx: &Transaction) {
    if let Some(problem) = tx.invariant_violation() {
        warn!(
            id = %tx.id,
            amount = tx.amount,
            category = tx.category.as_str(),
            problem,
            "Injected transaction breaks data rules"
        );
    }
}

/// Ordered transaction collection
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    ids: IdGenerator,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an injected initial list, keeping its order
    ///
    /// Later entries that repeat an id are dropped.
    pub fn from_transactions(initial: Vec<Transaction>) -> Self {
        let mut seen = HashSet::new();
        let mut transactions = Vec::with_capacity(initial.len());
        for tx in initial {
            if seen.insert(tx.id.clone()) {
                warn_if_invalid(&tx);
                transactions.push(tx);
            } else {
                warn!(id = %tx.id, "Dropping transaction with duplicate id");
            }
        }
        Self {
            transactions,
            ids: IdGenerator,
        }
    }

    /// Assign a fresh id and put the transaction at the front
    pub fn insert(&mut self, candidate: NewTransaction) -> Transaction {
        let mut id = self.ids.next_id();
        while self.contains(&id) {
            id = self.ids.next_id();
        }
        let tx = candidate.into_transaction(id);
        self.transactions.insert(0, tx.clone());
        tx
    }

    /// Put an already-identified transaction at the front
    pub fn insert_transaction(&mut self, tx: Transaction) -> Result<()> {
        if self.contains(&tx.id) {
            return Err(Error::DuplicateId(tx.id));
        }
        warn_if_invalid(&tx);
        self.transactions.insert(0, tx);
        Ok(())
    }

    /// Remove by id; an unknown id is a no-op
    pub fn remove(&mut self, id: &str) -> Option<Transaction> {
        let pos = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The `limit` most recently inserted transactions
    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.transactions[..limit.min(self.transactions.len())]
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Group transactions by calendar day in `tz`, newest day first
pub fn group_by_day<Tz: TimeZone>(transactions: &[Transaction], tz: &Tz) -> Vec<DayGroup> {
    let mut days: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
    for tx in transactions {
        let day = tx.date.with_timezone(tz).date_naive();
        days.entry(day).or_default().push(tx.clone());
    }

    days.into_iter()
        .rev()
        .map(|(date, transactions)| {
            let total_spent = transactions
                .iter()
                .filter(|t| !t.is_income)
                .map(|t| t.amount)
                .sum();
            DayGroup {
                date,
                transactions,
                total_spent,
            }
        })
        .collect()
}
