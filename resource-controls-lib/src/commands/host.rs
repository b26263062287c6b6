use crate::Result;
use camino::Utf8PathBuf;
use ohno::IntoAppError;
use std::io::Write;

/// The process environment a command runs in.
///
/// Commands never touch stdout, stderr, the environment, the working directory, or the process exit
/// code directly, so they can be driven in-process by tests.
pub trait Host {
    fn output(&mut self) -> impl Write;

    fn error(&mut self) -> impl Write;

    fn exit(&mut self, code: i32);

    /// Environment variables visible to the command.
    fn env_vars(&self) -> Vec<(String, String)> {
        std::env::vars().collect()
    }

    /// Directory searched for `resource-controls.toml` when no `--config` is given.
    fn current_dir(&self) -> Result<Utf8PathBuf> {
        let dir = std::env::current_dir().into_app_err("determining the current directory")?;
        Utf8PathBuf::try_from(dir).into_app_err("current directory is not valid UTF-8")
    }
}
