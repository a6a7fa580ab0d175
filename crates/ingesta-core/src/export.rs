use std::path::Path;

use csv::WriterBuilder;
use thiserror::Error;

use ingesta_warehouse::TickerRow;

/// Errors raised while writing the spreadsheet export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Column order mirrors the `datos` table.
const HEADER: [&str; 4] = ["id", "clave", "valor", "fecha"];

/// Write every stored row to `path` as a CSV spreadsheet, overwriting
/// any previous export. Returns the number of data rows written.
///
/// # Errors
/// Propagates filesystem and serialization errors; there is no fallback
/// path.
pub fn export_rows(path: &Path, rows: &[TickerRow]) -> Result<usize, ExportError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn row(id: i64, clave: &str, valor: &str) -> TickerRow {
        TickerRow {
            id,
            clave: clave.to_string(),
            valor: valor.to_string(),
            fecha: String::from("2025-03-01 10:00:00"),
        }
    }

    #[test]
    fn writes_header_and_one_line_per_row() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("muestra_datos.csv");

        let written =
            export_rows(&path, &[row(1, "last", "100000"), row(2, "high", "101000")]).expect("export");
        assert_eq!(written, 2);

        let contents = fs::read_to_string(&path).expect("read");
        let lines = contents.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,clave,valor,fecha");
        assert_eq!(lines[1], "1,last,100000,2025-03-01 10:00:00");
    }

    #[test]
    fn empty_table_still_writes_the_header() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("muestra_datos.csv");

        assert_eq!(export_rows(&path, &[]).expect("export"), 0);
        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(contents.trim_end(), "id,clave,valor,fecha");
    }

    #[test]
    fn repeated_exports_overwrite_the_previous_file() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("muestra_datos.csv");

        export_rows(
            &path,
            &[row(1, "a", "1"), row(2, "b", "2"), row(3, "c", "3")],
        )
        .expect("first export");
        export_rows(&path, &[row(1, "a", "1")]).expect("second export");

        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn unwritable_path_fails_loudly() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("missing-dir").join("muestra_datos.csv");

        assert!(export_rows(&path, &[row(1, "last", "100000")]).is_err());
    }
}
