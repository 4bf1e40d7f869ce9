//! Output format traits for the tasklist CLI
use crate::error::TasklistError;
use crate::options::OutputMode;
use crate::records::{TaskOutput, TaskRecord, TasklistResult};
use crate::runner::InvocationStatus;
use crate::schema::SchemaKey;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    fn format_records(
        &self,
        schema: SchemaKey,
        status: InvocationStatus,
        records: &[TaskRecord],
    ) -> Result<String, TasklistError>;
}

/// Enum for output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
    Jsonl,
}

impl OutputFormat {
    /// The result shape to request from the query for this format.
    pub fn mode(self) -> OutputMode {
        match self {
            OutputFormat::Table => OutputMode::Table,
            OutputFormat::Csv | OutputFormat::Json | OutputFormat::Jsonl => OutputMode::Structured,
        }
    }
}

/// Enum for output destination
#[derive(Debug, Clone)]
pub enum OutputDestination {
    Stdout,
    File(std::path::PathBuf),
}

/// Output writer that combines format and destination
pub struct OutputWriter {
    formatter: Box<dyn OutputFormatter>,
    destination: OutputDestination,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, destination: OutputDestination) -> Self {
        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Table => Box::new(crate::formats::text::TextFormatter),
            OutputFormat::Csv => Box::new(crate::formats::csv::CsvFormatter),
            OutputFormat::Json => Box::new(crate::formats::json::JsonFormatter),
            OutputFormat::Jsonl => Box::new(crate::formats::jsonl::JsonlFormatter),
        };

        Self {
            formatter,
            destination,
        }
    }

    /// Render a result; an already rendered table is passed through as is.
    pub fn render(&self, result: &TasklistResult) -> Result<String, TasklistError> {
        match &result.output {
            TaskOutput::Table(text) => Ok(text.clone()),
            TaskOutput::Records(records) => {
                self.formatter
                    .format_records(result.schema, result.status, records)
            }
        }
    }

    /// Write a result to the configured destination
    pub fn write(&self, result: &TasklistResult) -> Result<(), TasklistError> {
        let content = self.render(result)?;

        match &self.destination {
            OutputDestination::Stdout => {
                println!("{}", content);
            }
            OutputDestination::File(path) => {
                std::fs::write(path, content)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(output: TaskOutput) -> TasklistResult {
        TasklistResult {
            schema: SchemaKey::Modules,
            status: InvocationStatus {
                code: 0,
                success: true,
            },
            output,
        }
    }

    fn sample_records() -> Vec<TaskRecord> {
        vec![TaskRecord::new(
            SchemaKey::Modules.columns(),
            vec!["explorer.exe".into(), "5120".into(), "ntdll.dll".into()],
        )]
    }

    #[test]
    fn test_mode_per_format() {
        assert_eq!(OutputFormat::Table.mode(), OutputMode::Table);
        assert_eq!(OutputFormat::Json.mode(), OutputMode::Structured);
        assert_eq!(OutputFormat::Csv.mode(), OutputMode::Structured);
    }

    #[test]
    fn test_table_output_passes_through() {
        let writer = OutputWriter::new(OutputFormat::Json, OutputDestination::Stdout);
        let rendered = writer.render(&result(TaskOutput::Table("pre-rendered".into()))).unwrap();
        assert_eq!(rendered, "pre-rendered");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.jsonl");
        let writer = OutputWriter::new(OutputFormat::Jsonl, OutputDestination::File(path.clone()));

        writer.write(&result(TaskOutput::Records(sample_records()))).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\"imageName\":\"explorer.exe\",\"pid\":\"5120\",\"modules\":\"ntdll.dll\"}\n"
        );
    }
}
