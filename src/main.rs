use anyhow::Result;
use clap::Parser;

use fn_demos::{
    cli::{self, Cli},
    logging::init_logging,
    reporting::ConsoleReporter,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut reporter = ConsoleReporter::stdout();
    if let Err(error) = cli::execute(cli, &mut reporter) {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }

    Ok(())
}
