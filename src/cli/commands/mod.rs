pub mod callable;
pub mod closure;

pub use callable::*;
pub use closure::*;

use super::args::{Cli, Commands};
use crate::core::DefaultDemoConfig;
use crate::reporting::DemoReporter;
use anyhow::Result;
use std::path::Path;

/// 設定ファイルを読み込む（未指定ならデフォルト設定）
pub fn load_config(path: Option<&Path>) -> Result<DefaultDemoConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading demo config");
            Ok(DefaultDemoConfig::from_json_file(path)?)
        }
        None => Ok(DefaultDemoConfig::default()),
    }
}

/// 解析済みのコマンドラインを実行する
pub fn execute<R>(cli: Cli, reporter: &mut R) -> Result<()>
where
    R: DemoReporter + ?Sized,
{
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Callable { lhs, rhs } => {
            execute_callable(config, CallableOptions { lhs, rhs }, reporter)?;
        }
        Commands::Closure { values } => {
            execute_closure(config, values, reporter)?;
        }
        Commands::All => {
            execute_callable(config.clone(), CallableOptions::default(), reporter)?;
            execute_closure(config, None, reporter)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::ConsoleReporter;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut reporter = ConsoleReporter::new(Vec::new());
        execute(cli, &mut reporter)?;
        Ok(String::from_utf8(reporter.into_inner())?)
    }

    #[test]
    fn test_execute_all_prints_both_demos() {
        let output = run(&["fn_demos", "all"]).unwrap();
        assert_eq!(
            output,
            "fn is null.\ncalling fn: 5\n\
             1, 2, 3, 4, 5, \ncalling lambda fn\nupdated vector:\n1, 4, 9, 16, 25, \n"
        );
    }

    #[test]
    fn test_execute_callable_with_flags() {
        let output = run(&["fn_demos", "callable", "--lhs", "-4", "--rhs", "10"]).unwrap();
        assert_eq!(output, "fn is null.\ncalling fn: 6\n");
    }

    #[test]
    fn test_execute_closure_with_values_flag() {
        let output = run(&["fn_demos", "closure", "--values", "3,-1"]).unwrap();
        assert_eq!(output, "3, -1, \ncalling lambda fn\nupdated vector:\n9, 1, \n");
    }

    #[test]
    fn test_execute_with_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lhs": 20, "rhs": 22, "sequence": [5] }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let output = run(&["fn_demos", "--config", path.as_str(), "all"]).unwrap();
        assert!(output.contains("calling fn: 42\n"));
        assert!(output.ends_with("updated vector:\n25, \n"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lhs": 20, "rhs": 22 }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let output = run(&["fn_demos", "callable", "--config", path.as_str(), "--rhs", "0"]).unwrap();
        assert_eq!(output, "fn is null.\ncalling fn: 20\n");
    }

    #[test]
    fn test_missing_config_file_is_error() {
        assert!(run(&["fn_demos", "--config", "./missing.json", "all"]).is_err());
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, DefaultDemoConfig::default());
    }

    #[test]
    fn test_cli_default_log_level() {
        let cli = Cli::parse_from(["fn_demos", "all"]);
        assert_eq!(cli.log_level, "warn");
        assert!(cli.config.is_none());
    }
}
