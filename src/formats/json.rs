//! JSON output formatter for the tasklist CLI
use crate::error::TasklistError;
use crate::formats::traits::OutputFormatter;
use crate::records::TaskRecord;
use crate::runner::InvocationStatus;
use crate::schema::SchemaKey;

#[derive(serde::Serialize)]
struct OutputWrapper<'a> {
    schema: SchemaKey,
    timestamp: String,
    count: usize,
    status: InvocationStatus,
    results: &'a [TaskRecord],
}

/// JSON formatter that outputs records in JSON format with metadata
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_records(
        &self,
        schema: SchemaKey,
        status: InvocationStatus,
        records: &[TaskRecord],
    ) -> Result<String, TasklistError> {
        let wrapper = OutputWrapper {
            schema,
            timestamp: chrono::Utc::now().to_rfc3339(),
            count: records.len(),
            status,
            results: records,
        };

        let json = serde_json::to_string_pretty(&wrapper)?;
        Ok(json)
    }
}
