use crate::callable::run_callable_demo;
use crate::core::DefaultDemoConfig;
use crate::reporting::DemoReporter;
use anyhow::{Context, Result};

/// callableサブコマンドの引数（指定があれば設定ファイルの値を上書き）
#[derive(Debug, Default, Clone, Copy)]
pub struct CallableOptions {
    pub lhs: Option<i32>,
    pub rhs: Option<i32>,
}

impl CallableOptions {
    pub fn apply(self, config: DefaultDemoConfig) -> DefaultDemoConfig {
        let lhs = self.lhs.unwrap_or(config.lhs);
        let rhs = self.rhs.unwrap_or(config.rhs);
        config.with_operands(lhs, rhs)
    }
}

/// Execute callable command
pub fn execute_callable<R>(
    config: DefaultDemoConfig,
    options: CallableOptions,
    reporter: &mut R,
) -> Result<i32>
where
    R: DemoReporter + ?Sized,
{
    let config = options.apply(config);
    run_callable_demo(&config, reporter).context("callable demo failed")
}
