// デモ出力の抽象化
//
// デモ本体は DemoReporter にだけ依存し、標準出力への書き出しは
// ConsoleReporter が担当する。

pub mod console;
pub mod traits;

// 公開API
pub use console::{ConsoleReporter, NoOpReporter};
pub use traits::*;
