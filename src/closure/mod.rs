//! 参照キャプチャするクロージャのデモ
//!
//! 外側のスコープが所有する整数列を可変参照でキャプチャし、
//! クロージャの中で二乗した結果が呼び出し後も外側から見えることを示す。

use crate::core::{DemoConfig, DemoError, DemoResult};
use crate::reporting::DemoReporter;

/// 各要素の後ろに ", " を付けて連結する（末尾の区切りも残す）
pub fn format_sequence(values: &[i32]) -> String {
    values.iter().map(|value| format!("{value}, ")).collect()
}

/// 全要素をその場で二乗する
///
/// どれか1つでもオーバーフローする場合は何も書き換えずにエラーを返す。
pub fn square_in_place(values: &mut [i32]) -> DemoResult<()> {
    if let Some((index, &value)) = values
        .iter()
        .enumerate()
        .find(|(_, value)| value.checked_mul(**value).is_none())
    {
        return Err(DemoError::overflow(index, value));
    }

    for value in values.iter_mut() {
        *value *= *value;
    }
    Ok(())
}

/// クロージャのデモを実行し、更新後の整数列を返す
pub fn run_closure_demo<C, R>(config: &C, reporter: &mut R) -> DemoResult<Vec<i32>>
where
    C: DemoConfig + ?Sized,
    R: DemoReporter + ?Sized,
{
    let mut numbers = config.sequence().to_vec();
    reporter.report_sequence(&numbers)?;

    // numbers を可変参照でキャプチャする（コピーはしない）
    let mut square_all = || square_in_place(&mut numbers);

    reporter.report_message("calling lambda fn")?;
    square_all()?;
    tracing::info!(len = numbers.len(), "squared sequence in place");

    reporter.report_message("updated vector:")?;
    reporter.report_sequence(&numbers)?;

    Ok(numbers)
}
