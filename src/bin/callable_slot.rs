// 関数スロットのデモ（引数なし）
use anyhow::Result;
use fn_demos::{logging, run_callable_demo, ConsoleReporter, DefaultDemoConfig};

fn main() -> Result<()> {
    logging::init_logging(logging::DEFAULT_LOG_LEVEL);

    let mut reporter = ConsoleReporter::stdout();
    run_callable_demo(&DefaultDemoConfig::default(), &mut reporter)?;
    Ok(())
}
