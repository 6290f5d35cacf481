// ログ初期化
//
// 標準出力はデモの出力専用なので、ログは常に標準エラーへ書き出す。

use tracing_subscriber::EnvFilter;

/// 既定のログレベル
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// ログシステムを初期化する
///
/// RUST_LOG が設定されていればそちらを優先する。
/// 2回目以降の呼び出しは何もしない。
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
