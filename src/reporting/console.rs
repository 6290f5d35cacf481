// DemoReporterの具体的な実装

use super::traits::DemoReporter;
use crate::closure::format_sequence;
use crate::core::DemoResult;
use std::io::{self, Write};

/// 任意のWriterへ行単位で書き出すレポーター
pub struct ConsoleReporter<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// 内部のWriterを取り出す（テストで出力を検査する用途）
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DemoReporter for ConsoleReporter<W> {
    fn report_empty_slot(&mut self) -> DemoResult<()> {
        writeln!(self.writer, "fn is null.")?;
        Ok(())
    }

    fn report_call_result(&mut self, result: i32) -> DemoResult<()> {
        writeln!(self.writer, "calling fn: {result}")?;
        Ok(())
    }

    fn report_sequence(&mut self, values: &[i32]) -> DemoResult<()> {
        writeln!(self.writer, "{}", format_sequence(values))?;
        Ok(())
    }

    fn report_message(&mut self, message: &str) -> DemoResult<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// 何も出力しないレポーター
#[derive(Debug, Default)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl DemoReporter for NoOpReporter {
    fn report_empty_slot(&mut self) -> DemoResult<()> {
        Ok(())
    }

    fn report_call_result(&mut self, _result: i32) -> DemoResult<()> {
        Ok(())
    }

    fn report_sequence(&mut self, _values: &[i32]) -> DemoResult<()> {
        Ok(())
    }

    fn report_message(&mut self, _message: &str) -> DemoResult<()> {
        Ok(())
    }
}
