//! Color mode configuration for reports.

use clap::ValueEnum;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    Always,
    Never,
    #[default]
    Auto,
}

impl ColorMode {
    /// Decide whether to emit colors. `Auto` colors only a terminal and honors `NO_COLOR`.
    #[must_use]
    pub fn use_colors(self, no_color_set: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => !no_color_set && std::io::stdout().is_terminal(),
        }
    }
}
