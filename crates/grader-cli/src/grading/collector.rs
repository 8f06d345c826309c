//! Single owner of the CSV report writer.

use std::io::Write;

use grader_core::GradeRow;
use tokio::sync::mpsc;

/// Write the header, then every row received on `rows` until all senders are
/// dropped. Runs on a blocking thread; returns the number of rows written.
pub fn write_rows<W: Write>(mut rows: mpsc::Receiver<GradeRow>, mut writer: W) -> std::io::Result<usize> {
    writeln!(writer, "{}", GradeRow::CSV_HEADER)?;
    let mut written = 0;
    while let Some(row) = rows.blocking_recv() {
        writeln!(writer, "{}", row.to_csv_record())?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}
