// デモ用のカスタムエラー型定義

use thiserror::Error;

/// デモ固有のエラー型
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("未束縛の関数スロットを呼び出しました")]
    UnboundCallable,

    #[error("オーバーフロー: index {index} の値 {value} を二乗できません")]
    Overflow { index: usize, value: i32 },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("出力エラー: {source}")]
    ReportError {
        #[source]
        source: std::io::Error,
    },
}

impl DemoError {
    /// オーバーフローエラーの作成
    pub fn overflow(index: usize, value: i32) -> Self {
        Self::Overflow { index, value }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 出力エラーの作成
    pub fn report(source: std::io::Error) -> Self {
        Self::ReportError { source }
    }
}

impl From<std::io::Error> for DemoError {
    fn from(source: std::io::Error) -> Self {
        Self::report(source)
    }
}

/// デモ用のResult型エイリアス
pub type DemoResult<T> = std::result::Result<T, DemoError>;
