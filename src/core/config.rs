// デモパラメータの設定管理

use super::error::{DemoError, DemoResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// デモの入力値を抽象化するトレイト
pub trait DemoConfig {
    /// 関数スロット呼び出し時の引数 (lhs, rhs)
    fn operands(&self) -> (i32, i32);

    /// クロージャデモで二乗する整数列
    fn sequence(&self) -> &[i32];
}

/// 標準のデモ設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultDemoConfig {
    pub lhs: i32,
    pub rhs: i32,
    pub sequence: Vec<i32>,
}

impl DefaultDemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operands(mut self, lhs: i32, rhs: i32) -> Self {
        self.lhs = lhs;
        self.rhs = rhs;
        self
    }

    pub fn with_sequence(mut self, sequence: impl Into<Vec<i32>>) -> Self {
        self.sequence = sequence.into();
        self
    }

    /// JSON文字列から設定を読み込む（欠けた項目はデフォルト値）
    pub fn from_json(json: &str) -> DemoResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DemoError::configuration(format!("JSONの解析に失敗しました: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから設定を読み込む
    pub fn from_json_file(path: impl AsRef<Path>) -> DemoResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DemoError::configuration(format!("{} を読み込めません: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// 設定の妥当性をチェック
    pub fn validate(&self) -> DemoResult<()> {
        if self.sequence.is_empty() {
            return Err(DemoError::validation(
                "sequence",
                "空の配列は指定できません",
            ));
        }
        Ok(())
    }
}

impl Default for DefaultDemoConfig {
    fn default() -> Self {
        Self {
            lhs: 2,
            rhs: 3,
            sequence: vec![1, 2, 3, 4, 5],
        }
    }
}

impl DemoConfig for DefaultDemoConfig {
    fn operands(&self) -> (i32, i32) {
        (self.lhs, self.rhs)
    }

    fn sequence(&self) -> &[i32] {
        &self.sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_demo_config() {
        let config = DefaultDemoConfig::default();

        assert_eq!(config.operands(), (2, 3));
        assert_eq!(config.sequence(), &[1, 2, 3, 4, 5]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_demo_config_builder() {
        let config = DefaultDemoConfig::new()
            .with_operands(10, -4)
            .with_sequence([7, 8]);

        assert_eq!(config.operands(), (10, -4));
        assert_eq!(config.sequence(), &[7, 8]);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = DefaultDemoConfig::from_json(r#"{ "lhs": 40 }"#).unwrap();

        assert_eq!(config.operands(), (40, 3));
        assert_eq!(config.sequence(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_from_json_rejects_empty_sequence() {
        let result = DefaultDemoConfig::from_json(r#"{ "sequence": [] }"#);
        assert!(matches!(result, Err(DemoError::ValidationError { .. })));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = DefaultDemoConfig::from_json("{ not json");
        assert!(matches!(result, Err(DemoError::ConfigurationError { .. })));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lhs": 1, "rhs": 1, "sequence": [3, 4] }}"#).unwrap();

        let config = DefaultDemoConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.operands(), (1, 1));
        assert_eq!(config.sequence(), &[3, 4]);
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = DefaultDemoConfig::from_json_file("./does_not_exist.json");
        assert!(matches!(result, Err(DemoError::ConfigurationError { .. })));
    }
}
