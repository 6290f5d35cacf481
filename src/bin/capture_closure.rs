// 参照キャプチャするクロージャのデモ（引数なし）
use anyhow::Result;
use fn_demos::{logging, run_closure_demo, ConsoleReporter, DefaultDemoConfig};

fn main() -> Result<()> {
    logging::init_logging(logging::DEFAULT_LOG_LEVEL);

    let mut reporter = ConsoleReporter::stdout();
    run_closure_demo(&DefaultDemoConfig::default(), &mut reporter)?;
    Ok(())
}
