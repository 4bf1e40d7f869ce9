//! JSONL (JSON Lines) output formatter for the tasklist CLI
use crate::error::TasklistError;
use crate::formats::traits::OutputFormatter;
use crate::records::TaskRecord;
use crate::runner::InvocationStatus;
use crate::schema::SchemaKey;

/// JSONL formatter that outputs records as JSON objects, one per line
pub struct JsonlFormatter;

impl OutputFormatter for JsonlFormatter {
    fn format_records(
        &self,
        _schema: SchemaKey,
        _status: InvocationStatus,
        records: &[TaskRecord],
    ) -> Result<String, TasklistError> {
        let mut output = String::new();

        for record in records {
            let line = serde_json::to_string(record)?;
            output.push_str(&line);
            output.push('\n');
        }

        Ok(output)
    }
}
