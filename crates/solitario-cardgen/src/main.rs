use std::io;

use anyhow::Context;

use solitario_cardgen::cli::Cli;
use solitario_cardgen::generate::write_suit;
use solitario_cardgen::logging::{DEFAULT_LEVEL, init_logging};
use solitario_core::AppInfo;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_or_exit();
    let suit = cli.suit;

    let _logging_guard = init_logging(DEFAULT_LEVEL);
    tracing::info!(
        app = AppInfo::name(),
        version = AppInfo::version(),
        suit = suit.name(),
        "generating card faces"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_suit(suit, &mut out)
        .with_context(|| format!("writing {suit} card faces to stdout"))?;

    Ok(())
}
