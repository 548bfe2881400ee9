pub mod batch;
pub mod error;
pub mod output;

pub use batch::{BatchEntry, BatchOutcome, BatchReport, RawInput};
pub use error::{CliError, Result};
