//! Library crate for querying the Windows process list through `tasklist.exe`

pub mod error;
pub mod formats;
pub mod options;
pub mod records;
pub mod runner;
pub mod schema;

// Line-level parsing
pub mod core {
    pub mod csv_line;
    pub mod field;
}

// CLI modules
pub mod cli {
    pub mod args;
}

pub use error::TasklistError;
pub use options::{Options, OutputMode};
pub use records::{TaskOutput, TaskRecord, TasklistResult};
pub use runner::{tasklist, tasklist_with};
