//! Turn captured tasklist output into records or a rendered table
use prettytable::{format, Cell, Row, Table};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::core::csv_line;
use crate::core::field::FieldFormat;
use crate::options::OutputMode;
use crate::runner::InvocationStatus;
use crate::schema::SchemaKey;

const TABLE_TITLE: &str = "Tasklist";

/// One output row, its fields paired with the schema's column names by position.
///
/// Serializes as a map in column order. Columns past the end of `fields`
/// are absent rather than null, and surplus fields are not serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    columns: &'static [&'static str],
    fields: Vec<String>,
}

impl TaskRecord {
    pub fn new(columns: &'static [&'static str], fields: Vec<String>) -> Self {
        Self { columns, fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    /// `(column, value)` pairs for the columns this row actually has.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.columns
            .iter()
            .copied()
            .zip(self.fields.iter().map(String::as_str))
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for TaskRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (column, value) in self.entries() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskOutput {
    Records(Vec<TaskRecord>),
    Table(String),
}

/// Everything one tasklist call hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TasklistResult {
    pub schema: SchemaKey,
    pub status: InvocationStatus,
    pub output: TaskOutput,
}

impl TasklistResult {
    pub fn records(&self) -> Option<&[TaskRecord]> {
        match &self.output {
            TaskOutput::Records(records) => Some(records),
            TaskOutput::Table(_) => None,
        }
    }

    pub fn table(&self) -> Option<&str> {
        match &self.output {
            TaskOutput::Table(text) => Some(text),
            TaskOutput::Records(_) => None,
        }
    }
}

/// Tokenize and truncate every line of the captured output.
pub fn parse_rows(raw: &str, field_format: FieldFormat) -> Vec<Vec<String>> {
    raw.trim()
        .split('\n')
        .map(csv_line::tokenize)
        .map(|fields| fields.into_iter().map(|f| field_format.apply(f)).collect())
        .collect()
}

/// Build the caller-facing result from captured output.
pub fn assemble(
    raw: &str,
    schema: SchemaKey,
    mode: OutputMode,
    field_format: FieldFormat,
    status: InvocationStatus,
) -> TasklistResult {
    let rows = parse_rows(raw, field_format);
    let columns = schema.columns();

    let output = match mode {
        OutputMode::Table => TaskOutput::Table(render_table(columns, &rows)),
        OutputMode::Structured => TaskOutput::Records(
            rows.into_iter()
                .map(|fields| TaskRecord::new(columns, fields))
                .collect(),
        ),
    };

    TasklistResult {
        schema,
        status,
        output,
    }
}

/// Render a titled table; rows are laid out positionally with no length checks.
pub fn render_table<R: AsRef<[String]>>(columns: &[&str], rows: &[R]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

    table.set_titles(Row::new(vec![Cell::new(TABLE_TITLE)
        .style_spec("c")
        .with_hspan(columns.len().max(1))]));

    table.add_row(Row::new(
        columns.iter().map(|c| Cell::new(c).style_spec("c")).collect(),
    ));

    for row in rows {
        table.add_row(Row::new(
            row.as_ref()
                .iter()
                .map(|field| Cell::new(field))
                .collect(),
        ));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_status() -> InvocationStatus {
        InvocationStatus {
            code: 0,
            success: true,
        }
    }

    #[test]
    fn test_structured_records() {
        let raw = "a,1,Console,1,100 K\nb,2,Console,1,200 K";
        let result = assemble(
            raw,
            SchemaKey::Default,
            OutputMode::Structured,
            FieldFormat::default(),
            ok_status(),
        );

        let records = result.records().unwrap();
        assert_eq!(records.len(), 2);
        let first: Vec<_> = records[0].entries().collect();
        assert_eq!(
            first,
            [
                ("imageName", "a"),
                ("pid", "1"),
                ("sessionName", "Console"),
                ("sessionNumber", "1"),
                ("memUsage", "100 K"),
            ]
        );
        assert_eq!(records[1].get("imageName"), Some("b"));
        assert_eq!(records[1].get("memUsage"), Some("200 K"));
        assert_eq!(result.status, ok_status());
    }

    #[test]
    fn test_record_json_keeps_column_order() {
        let record = TaskRecord::new(
            SchemaKey::Services.columns(),
            vec!["svchost.exe".into(), "904".into(), "RpcSs".into()],
        );
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"imageName":"svchost.exe","pid":"904","services":"RpcSs"}"#
        );
    }

    #[test]
    fn test_short_record_omits_missing_columns() {
        let record = TaskRecord::new(SchemaKey::Default.columns(), vec!["a".into(), "1".into()]);
        assert_eq!(record.get("sessionName"), None);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({"imageName": "a", "pid": "1"})
        );
    }

    #[test]
    fn test_surplus_fields_are_not_mapped() {
        let record = TaskRecord::new(
            SchemaKey::Modules.columns(),
            vec!["a".into(), "1".into(), "x.dll".into(), "extra".into()],
        );
        assert_eq!(record.len(), 3);
        assert_eq!(record.fields().len(), 4);
    }

    #[test]
    fn test_fields_are_truncated() {
        let raw = r#""a_really_long_image_name.exe","4""#;
        let rows = parse_rows(raw, FieldFormat::default());
        assert_eq!(rows, [["a_really_long_image_ ...", "4"]]);

        let rows = parse_rows(
            raw,
            FieldFormat {
                max_len: 6,
                ellipsis: false,
            },
        );
        assert_eq!(rows, [["a_real", "4"]]);
    }

    #[test]
    fn test_malformed_line_does_not_abort_batch() {
        let raw = "a,1\n\"broken\nb,2";
        let rows = parse_rows(raw, FieldFormat::default());
        assert_eq!(rows, [vec!["a", "1"], vec![""], vec!["b", "2"]]);
    }

    #[test]
    fn test_crlf_output() {
        let raw = "\"a\",\"1\"\r\n\"b\",\"2\"\r\n";
        let rows = parse_rows(raw, FieldFormat::default());
        assert_eq!(rows, [["a", "1"], ["b", "2"]]);
    }

    #[test]
    fn test_table_mode() {
        let result = assemble(
            "a,1,Console,1,100 K\nshort,2",
            SchemaKey::Default,
            OutputMode::Table,
            FieldFormat::default(),
            ok_status(),
        );
        let text = result.table().unwrap();
        assert!(result.records().is_none());
        assert!(text.contains("Tasklist"));
        assert!(text.contains("imageName"));
        assert!(text.contains("sessionNumber"));
        assert!(text.contains("100 K"));
        assert!(text.contains("short"));
    }

    #[test]
    fn test_status_passes_through() {
        let failed = InvocationStatus {
            code: 1,
            success: false,
        };
        let result = assemble(
            "",
            SchemaKey::Default,
            OutputMode::Structured,
            FieldFormat::default(),
            failed,
        );
        assert_eq!(result.status, failed);
    }
}
