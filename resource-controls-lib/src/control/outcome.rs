use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The terminal state of a control run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The resource was confirmed present.
    Pass,

    /// The provider confirmed the resource is absent.
    Fail,

    /// The check could not be evaluated.
    Error,
}

impl Outcome {
    /// Returns the icon shown next to this outcome.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✔",
            Self::Fail => "✗",
            Self::Error => "!",
        }
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Pass => write!(f, "passed"),
            Self::Fail => write!(f, "failed"),
            Self::Error => write!(f, "error"),
        }
    }
}
