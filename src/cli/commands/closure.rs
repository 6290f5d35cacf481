use crate::closure::run_closure_demo;
use crate::core::DefaultDemoConfig;
use crate::reporting::DemoReporter;
use anyhow::{Context, Result};

/// Execute closure command
///
/// `values` が指定された場合は設定ファイルの整数列を置き換える。
pub fn execute_closure<R>(
    config: DefaultDemoConfig,
    values: Option<Vec<i32>>,
    reporter: &mut R,
) -> Result<Vec<i32>>
where
    R: DemoReporter + ?Sized,
{
    let config = match values {
        Some(values) => config.with_sequence(values),
        None => config,
    };
    config.validate()?;

    run_closure_demo(&config, reporter).context("closure demo failed")
}
