use anyhow::{Context, Result};
use doclinks::Config;
use std::io;
use std::process::ExitCode;

/// Exit status reported when at least one link is broken.
const BROKEN_LINKS_EXIT: u8 = 1;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let config = Config::parse();
    let root = config.root_dir().context("Invalid configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = doclinks::validate_markdown_links(&root, &mut out)?;

    log::debug!(
        "Scanned {} files, checked {} links, skipped {} files",
        summary.files_scanned(),
        summary.links_checked(),
        summary.skipped().len()
    );

    if summary.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(BROKEN_LINKS_EXIT))
    }
}
