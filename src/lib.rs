pub mod callable;
pub mod cli;
pub mod closure;
pub mod core;
pub mod logging;
pub mod reporting;

pub use callable::{run_callable_demo, sum, CallableSlot};
pub use closure::{format_sequence, run_closure_demo, square_in_place};
pub use crate::core::{DefaultDemoConfig, DemoConfig, DemoError, DemoResult};
pub use reporting::{ConsoleReporter, DemoReporter, NoOpReporter};
