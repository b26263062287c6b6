use super::{CheckArgs, Host, InitArgs, check_control, init_config, logging};
use crate::control::Outcome;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;

/// Exit code when the resource was not found.
pub const EXIT_FAIL: i32 = 1;

/// Exit code when the control could not be evaluated.
pub const EXIT_ERROR: i32 = 2;

/// Exit code for usage, configuration, and attribute problems.
pub const EXIT_SETUP: i32 = 3;

#[derive(Debug, Parser)]
#[command(name = "resource-controls", version, about = "Check that cloud resources exist", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the existence control and report the result
    Check(CheckArgs),

    /// Write a default configuration file
    Init(InitArgs),
}

/// Parse `args` and run the selected command against `host`.
///
/// Exits through the host with a non-zero code unless the control passed.
pub async fn run<I, T>(host: &mut impl Host, args: I)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            _ = write!(host.output(), "{e}");
            return;
        }
        Err(e) => {
            _ = write!(host.error(), "{e}");
            host.exit(EXIT_SETUP);
            return;
        }
    };

    logging::init(cli.verbose);

    let code = match &cli.command {
        Command::Check(args) => match check_control(host, args).await {
            Ok(Outcome::Pass) => 0,
            Ok(Outcome::Fail) => EXIT_FAIL,
            Ok(Outcome::Error) => EXIT_ERROR,
            Err(e) => {
                _ = writeln!(host.error(), "error: {e}");
                EXIT_SETUP
            }
        },
        Command::Init(args) => match init_config(host, args) {
            Ok(()) => 0,
            Err(e) => {
                _ = writeln!(host.error(), "error: {e}");
                EXIT_SETUP
            }
        },
    };

    if code != 0 {
        host.exit(code);
    }
}
