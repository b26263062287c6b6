//! A tool to check that cloud resources exist.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use resource_controls_lib::{Host, run};
use std::io::{Write, stderr, stdout};

/// Default host backed by the real process.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg_attr(test, mutants::skip)] // thin wrapper, tested via integration tests on `run()`
async fn main() {
    run(&mut RealHost, std::env::args()).await;
}
