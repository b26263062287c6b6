use super::Host;
use crate::Result;
use crate::config::{CONFIG_FILE_NAME, Config};
use camino::Utf8PathBuf;
use clap::Args;
use ohno::{IntoAppError, bail};
use std::io::Write;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(long, short, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    pub output: Utf8PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn init_config(host: &mut impl Host, args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!("'{}' already exists; pass --force to overwrite it", args.output);
    }

    Config::save_default(&args.output)?;
    writeln!(host.output(), "Wrote the default configuration to '{}'", args.output).into_app_err("writing output")?;
    Ok(())
}
