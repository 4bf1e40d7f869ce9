//! Text (table) output formatter for the tasklist CLI
use crate::error::TasklistError;
use crate::formats::traits::OutputFormatter;
use crate::records::{render_table, TaskRecord};
use crate::runner::InvocationStatus;
use crate::schema::SchemaKey;

/// Text formatter that outputs records as a human-readable table
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_records(
        &self,
        schema: SchemaKey,
        _status: InvocationStatus,
        records: &[TaskRecord],
    ) -> Result<String, TasklistError> {
        let rows: Vec<&[String]> = records.iter().map(TaskRecord::fields).collect();
        Ok(render_table(schema.columns(), &rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_as_table() {
        let records = vec![TaskRecord::new(
            SchemaKey::Apps.columns(),
            vec![
                "Calculator.exe".into(),
                "7400".into(),
                "21,004 K".into(),
                "Microsoft.Windows ...".into(),
            ],
        )];
        let status = InvocationStatus {
            code: 0,
            success: true,
        };
        let text = TextFormatter
            .format_records(SchemaKey::Apps, status, &records)
            .unwrap();
        assert!(text.contains("Tasklist"));
        assert!(text.contains("packageName"));
        assert!(text.contains("Calculator.exe"));
    }
}
