use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::DEFAULT_LOG_LEVEL;

#[derive(Parser, Debug)]
#[command(name = "fn_demos")]
#[command(about = "Demos of an optional callable slot and a closure capturing by reference")]
#[command(version)]
pub struct Cli {
    /// JSON file with demo parameters (lhs, rhs, sequence)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bind an addition function to an empty slot and call it
    Callable {
        /// Left operand passed to the bound function
        #[arg(long, allow_hyphen_values = true)]
        lhs: Option<i32>,

        /// Right operand passed to the bound function
        #[arg(long, allow_hyphen_values = true)]
        rhs: Option<i32>,
    },

    /// Square a sequence in place through a capturing closure
    Closure {
        /// Comma separated integers, e.g. 1,2,3
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Option<Vec<i32>>,
    },

    /// Run both demos in order
    All,
}
