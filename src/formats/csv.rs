//! CSV output formatter for the tasklist CLI
use crate::error::TasklistError;
use crate::formats::traits::OutputFormatter;
use crate::records::TaskRecord;
use crate::runner::InvocationStatus;
use crate::schema::SchemaKey;
use csv::Writer;

/// CSV formatter that outputs records with a schema header row
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn format_records(
        &self,
        schema: SchemaKey,
        _status: InvocationStatus,
        records: &[TaskRecord],
    ) -> Result<String, TasklistError> {
        let columns = schema.columns();
        let mut wtr = Writer::from_writer(vec![]);

        // Write header
        wtr.write_record(columns)?;

        // Short rows are padded so every line has the header's width
        for record in records {
            let fields = record.fields();
            let row = (0..columns.len()).map(|i| fields.get(i).map_or("", String::as_str));
            wtr.write_record(row)?;
        }

        wtr.flush()?;
        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }
}
