// デモ出力のトレイト定義

use crate::core::DemoResult;
use mockall::automock;

/// デモの出力先を抽象化するトレイト
#[automock]
pub trait DemoReporter {
    /// 関数スロットが空であることの報告
    fn report_empty_slot(&mut self) -> DemoResult<()>;

    /// 関数スロット呼び出し結果の報告
    fn report_call_result(&mut self, result: i32) -> DemoResult<()>;

    /// 整数列の報告
    fn report_sequence(&mut self, values: &[i32]) -> DemoResult<()>;

    /// 任意のメッセージ行の報告
    fn report_message(&mut self, message: &str) -> DemoResult<()>;
}
