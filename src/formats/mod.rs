//! Output format module for the tasklist CLI
pub mod csv;
pub mod json;
pub mod jsonl;
pub mod text;
pub mod traits;
