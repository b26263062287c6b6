use clap::ValueEnum;
use strum::Display;

/// Output format for control results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
}
