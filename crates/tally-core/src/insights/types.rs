//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an insight should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Something worth the user's attention
    Warning,
    /// Positive reinforcement
    Success,
    /// A tip, no problem implied
    Info,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Warning => "warning",
            InsightKind::Success => "success",
            InsightKind::Info => "info",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(InsightKind::Warning),
            "success" => Ok(InsightKind::Success),
            "info" => Ok(InsightKind::Info),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// An advisory message derived from monthly statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Short title (e.g., "High spending detected")
    pub title: String,
    /// One-line explanation
    pub description: String,
    pub icon: String,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}
