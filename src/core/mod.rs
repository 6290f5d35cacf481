// 共通基盤 - エラー型と設定

pub mod config;
pub mod error;

pub use config::{DefaultDemoConfig, DemoConfig};
pub use error::{DemoError, DemoResult};
