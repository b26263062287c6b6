use super::Outcome;
use chrono::{DateTime, Utc};
use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::Serialize;

/// The result of one control run, handed to a reporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlResult {
    control_id: String,
    title: String,
    impact: f64,
    outcome: Outcome,
    detail: String,
    evaluated_at: DateTime<Utc>,
}

impl ControlResult {
    #[must_use]
    pub fn new(control_id: impl Into<String>, title: impl Into<String>, impact: f64, outcome: Outcome, detail: impl Into<String>) -> Self {
        Self {
            control_id: control_id.into(),
            title: title.into(),
            impact,
            outcome,
            detail: detail.into(),
            evaluated_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn impact(&self) -> f64 {
        self.impact
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub const fn evaluated_at(&self) -> DateTime<Utc> {
        self.evaluated_at
    }
}

impl Display for ControlResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}: {} ({})", self.outcome.icon(), self.control_id, self.title, self.outcome)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}
