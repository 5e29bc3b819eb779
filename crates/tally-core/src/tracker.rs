//! Expense tracker service
//!
//! The entry point a presentation layer drives. It owns the transaction
//! store and wires the parser, statistics and insight engine together.
//!
//! Adding an expense waits out a simulated processing delay before parsing.
//! Only one add may be in flight at a time; a second submission while one is
//! pending is rejected with [`Error::Busy`]. The store lock is never held
//! across an await, so all writes are serialized.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::{debug, info, warn};

use crate::capture::VoiceCapture;
use crate::config::TallyConfig;
use crate::error::{Error, Result};
use crate::insights::{Insight, InsightEngine};
use crate::models::{MonthlyStatistics, Transaction};
use crate::parser::ExpenseParser;
use crate::persistence::TransactionRepository;
use crate::sample::sample_transactions;
use crate::stats::{self, CategorySlice};
use crate::store::{group_by_day, DayGroup, TransactionStore};

/// Clears the busy flag on every exit path
struct ProcessingGuard<'a>(&'a AtomicBool);

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Natural-language expense tracker
pub struct ExpenseTracker {
    config: TallyConfig,
    parser: ExpenseParser,
    engine: InsightEngine,
    store: Mutex<TransactionStore>,
    processing: AtomicBool,
}

impl ExpenseTracker {
    /// Create a tracker seeded with `initial` (newest first)
    pub fn new(config: TallyConfig, initial: Vec<Transaction>) -> Result<Self> {
        let engine = InsightEngine::with_config(&config.insights);
        Ok(Self {
            parser: ExpenseParser::new()?,
            engine,
            store: Mutex::new(TransactionStore::from_transactions(initial)),
            processing: AtomicBool::new(false),
            config,
        })
    }

    /// Create a tracker seeded from a repository
    pub fn load_from(config: TallyConfig, repo: &dyn TransactionRepository) -> Result<Self> {
        let initial = repo.load()?;
        debug!(repository = repo.name(), count = initial.len(), "Seeding tracker");
        Self::new(config, initial)
    }

    /// Create a tracker seeded with the demo transactions
    pub fn with_sample_data(config: TallyConfig) -> Result<Self> {
        Self::new(config, sample_transactions(Utc::now()))
    }

    pub fn config(&self) -> &TallyConfig {
        &self.config
    }

    /// Poisoning is recovered: no store operation panics halfway through
    fn store(&self) -> MutexGuard<'_, TransactionStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether an add is currently in flight
    pub fn is_processing(&self) -> bool {
        self.processing.load(Ordering::SeqCst)
    }

    /// Parse free text and record it
    ///
    /// Fails with `EmptyInput` for blank text, `Busy` while another add is
    /// pending, and `NoAmountFound` when the text has no usable amount.
    pub async fn add_expense(&self, input: &str) -> Result<Transaction> {
        if input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        if self
            .processing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("Rejected expense: another submission is in flight");
            return Err(Error::Busy);
        }
        let _guard = ProcessingGuard(&self.processing);

        if !self.config.processing_delay.is_zero() {
            tokio::time::sleep(self.config.processing_delay).await;
        }

        let candidate = self.parser.parse(input).inspect_err(|e| {
            warn!(error = %e, "Could not parse expense");
        })?;

        let tx = self.store().insert(candidate);
        info!(
            id = %tx.id,
            amount = tx.amount,
            category = tx.category.as_str(),
            "Expense added"
        );
        Ok(tx)
    }

    /// Delete by id; an unknown id is a no-op
    pub fn delete_expense(&self, id: &str) -> Option<Transaction> {
        let removed = self.store().remove(id);
        match &removed {
            Some(_) => info!(id, "Expense deleted"),
            None => debug!(id, "Delete ignored: no such expense"),
        }
        removed
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> Vec<Transaction> {
        self.store().list().to_vec()
    }

    /// The configured number of most recent transactions
    pub fn recent(&self) -> Vec<Transaction> {
        self.store().recent(self.config.recent_limit).to_vec()
    }

    /// Recent transactions grouped by local day
    pub fn recent_by_day<Tz: TimeZone>(&self, tz: &Tz) -> Vec<DayGroup> {
        group_by_day(&self.recent(), tz)
    }

    /// Statistics for the current local calendar month
    pub fn statistics(&self) -> MonthlyStatistics {
        self.statistics_at(&Local::now())
    }

    /// Statistics for the calendar month containing `now`
    pub fn statistics_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> MonthlyStatistics {
        stats::compute(self.store().list(), now)
    }

    /// Insights for the current local calendar month
    pub fn insights(&self) -> Vec<Insight> {
        self.engine.derive_insights(&self.statistics())
    }

    /// Insights for the calendar month containing `now`
    pub fn insights_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<Insight> {
        self.engine.derive_insights(&self.statistics_at(now))
    }

    /// Chart breakdown for the calendar month containing `now`
    pub fn breakdown_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<CategorySlice> {
        stats::category_breakdown(&self.statistics_at(now))
    }

    /// Copy of the current list for persistence
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions()
    }

    /// Write the current list to a repository
    pub fn save_to(&self, repo: &dyn TransactionRepository) -> Result<()> {
        let snapshot = self.snapshot();
        repo.save(&snapshot)?;
        debug!(repository = repo.name(), count = snapshot.len(), "Snapshot saved");
        Ok(())
    }

    /// Capture a voice transcript for the caller to review and submit
    pub async fn capture_voice(&self, voice: &dyn VoiceCapture) -> Result<String> {
        if !voice.is_available() {
            warn!(provider = voice.name(), "Voice input not available");
            return Err(Error::VoiceUnavailable(format!(
                "{} voice capture is not available",
                voice.name()
            )));
        }

        let transcript = voice.capture().await.inspect_err(|e| {
            warn!(provider = voice.name(), error = %e, "Voice capture failed");
        })?;
        debug!(provider = voice.name(), transcript = %transcript, "Voice captured");
        Ok(transcript)
    }
}
