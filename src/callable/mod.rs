//! 関数スロットのデモ
//!
//! 空の状態を持てる呼び出し可能オブジェクトの入れ物を用意し、
//! 束縛前後で空判定が変わること、束縛後に呼び出せることを示す。

use crate::core::{DemoConfig, DemoError, DemoResult};
use crate::reporting::DemoReporter;
use std::fmt;

/// 2引数の整数演算
pub type BinaryOp = Box<dyn Fn(i32, i32) -> i32>;

/// 2つの整数の和（オーバーフロー時は2の補数で折り返す）
pub fn sum(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// 未束縛状態を取りうる関数スロット
#[derive(Default)]
pub struct CallableSlot {
    target: Option<BinaryOp>,
}

impl CallableSlot {
    /// 未束縛のスロットを作成
    pub fn empty() -> Self {
        Self { target: None }
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_none()
    }

    /// 関数またはクロージャを束縛する（既存の束縛は置き換える）
    pub fn bind<F>(&mut self, f: F)
    where
        F: Fn(i32, i32) -> i32 + 'static,
    {
        self.target = Some(Box::new(f));
    }

    /// 束縛を解除して未束縛状態に戻す
    pub fn clear(&mut self) {
        self.target = None;
    }

    /// 束縛された関数を呼び出す
    pub fn call(&self, a: i32, b: i32) -> DemoResult<i32> {
        let target = self.target.as_ref().ok_or(DemoError::UnboundCallable)?;
        Ok(target(a, b))
    }
}

impl fmt::Debug for CallableSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableSlot")
            .field("bound", &!self.is_empty())
            .finish()
    }
}

/// 関数スロットのデモを実行し、呼び出し結果を返す
pub fn run_callable_demo<C, R>(config: &C, reporter: &mut R) -> DemoResult<i32>
where
    C: DemoConfig + ?Sized,
    R: DemoReporter + ?Sized,
{
    let mut slot = CallableSlot::empty();
    if slot.is_empty() {
        tracing::debug!("callable slot is unbound");
        reporter.report_empty_slot()?;
    }

    slot.bind(sum);

    let (lhs, rhs) = config.operands();
    let result = slot.call(lhs, rhs)?;
    tracing::info!(lhs, rhs, result, "invoked callable slot");
    reporter.report_call_result(result)?;

    Ok(result)
}
