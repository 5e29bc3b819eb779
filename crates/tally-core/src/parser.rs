//! Natural-language expense parser
//!
//! Turns text like "$50 for lunch", "lunch $50" or "50 dollars coffee" into a
//! [`NewTransaction`]. Amount patterns are tried in a fixed order and the
//! first match wins:
//!
//! 1. `$`-prefixed number (`$25`, `$25.50`)
//! 2. number followed by a currency word (`25 dollars`, `25usd`)
//! 3. any number
//!
//! The description is what remains after stripping amounts and currency
//! words. Category detection is delegated to [`crate::classify`].

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use crate::classify::classify;
use crate::error::{Error, Result};
use crate::models::{Category, NewTransaction};

/// Which amount pattern produced the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountPattern {
    DollarSign,
    CurrencyWord,
    BareNumber,
}

impl AmountPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DollarSign => "dollar_sign",
            Self::CurrencyWord => "currency_word",
            Self::BareNumber => "bare_number",
        }
    }
}

/// Expense parser with precompiled patterns
#[derive(Debug, Clone)]
pub struct ExpenseParser {
    amount_patterns: Vec<(AmountPattern, Regex)>,
    strip_pattern: Regex,
}

impl ExpenseParser {
    /// Amounts are ASCII digits only; other scripts' digits are plain text
    pub fn new() -> Result<Self> {
        let amount_patterns = vec![
            (AmountPattern::DollarSign, Regex::new(r"\$([0-9]+(?:\.[0-9]{2})?)")?),
            (
                AmountPattern::CurrencyWord,
                Regex::new(r"(?i)([0-9]+(?:\.[0-9]{2})?)\s*(?:dollars?|usd)")?,
            ),
            (AmountPattern::BareNumber, Regex::new(r"([0-9]+(?:\.[0-9]{2})?)")?),
        ];
        let strip_pattern = Regex::new(r"(?i)\$?[0-9]+(?:\.[0-9]{2})?\s*(?:dollars?|usd)?")?;

        Ok(Self {
            amount_patterns,
            strip_pattern,
        })
    }

    /// Find the amount using the first pattern that matches
    ///
    /// Returns `None` when no pattern matches.
    pub fn extract_amount(&self, text: &str) -> Option<(f64, AmountPattern)> {
        self.amount_patterns.iter().find_map(|(kind, re)| {
            let caps = re.captures(text)?;
            let amount = caps.get(1)?.as_str().parse::<f64>().ok()?;
            Some((amount, *kind))
        })
    }

    /// Strip amounts and currency words, falling back to the category name
    pub fn extract_description(&self, text: &str, category: Category) -> String {
        let stripped = self.strip_pattern.replace_all(text, "");
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            category.display_name().to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Parse text into a candidate transaction dated now
    pub fn parse(&self, text: &str) -> Result<NewTransaction> {
        self.parse_at(text, Utc::now())
    }

    /// Parse text into a candidate transaction with an explicit date
    ///
    /// A missing amount, an amount of zero and an amount too large to
    /// represent are all the same failure.
    pub fn parse_at(&self, text: &str, now: DateTime<Utc>) -> Result<NewTransaction> {
        let (amount, pattern) = self
            .extract_amount(text)
            .filter(|(amount, _)| amount.is_finite() && *amount > 0.0)
            .ok_or(Error::NoAmountFound)?;

        let category = classify(text);
        let description = self.extract_description(text, category);

        debug!(
            pattern = pattern.as_str(),
            amount,
            category = category.as_str(),
            "Parsed expense"
        );

        Ok(NewTransaction {
            amount,
            description,
            category,
            date: now,
            merchant: None,
            is_income: category == Category::Income,
        })
    }
}
