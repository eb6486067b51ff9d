use clap::Parser;

use crate::domain::error::Result;
use crate::interfaces::cli::{self, Cli};

pub fn run() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    cli::execute(Cli::parse())
}
