use csv::WriterBuilder;

use datasmith_generate::Table;

/// Delimited-text encoding options. Pipe-delimited with a header row and
/// no index column by default.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub header: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b'|',
            header: true,
        }
    }
}

/// Encode the table as delimited text, entirely in memory.
pub fn encode_csv(table: &Table, options: &CsvOptions) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    if options.header {
        let header: Vec<&str> = table.columns.iter().map(|col| col.name.as_str()).collect();
        writer.write_record(&header)?;
    }

    for row in 0..table.rows() {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| {
                column
                    .cells
                    .get(row)
                    .map(|cell| cell.render())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}
