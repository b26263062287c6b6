//! Command-line interface and orchestration.

mod check;
mod color_mode;
mod host;
mod init;
mod logging;
mod run;

pub use check::{CheckArgs, check_control};
pub use color_mode::ColorMode;
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::{EXIT_ERROR, EXIT_FAIL, EXIT_SETUP, run};
