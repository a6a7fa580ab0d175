use std::fs;
use std::io;
use std::path::Path;

/// Point-in-time comparison of snapshot fields against stored rows,
/// recomputed in full on every run. Derived only; never persisted to the
/// database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Fields in the snapshot's `ticker` mapping for this run.
    pub registros_api: usize,
    /// Rows in the `datos` table, cumulative across historical runs.
    pub registros_db: i64,
    /// Timestamp for the report header.
    pub generated_at: String,
}

impl AuditReport {
    #[must_use]
    pub fn new(registros_api: usize, registros_db: i64, generated_at: impl Into<String>) -> Self {
        Self {
            registros_api,
            registros_db,
            generated_at: generated_at.into(),
        }
    }

    /// True when both counts agree. On repeated runs against a non-empty
    /// table the counts diverge by construction, not by error.
    #[must_use]
    pub fn is_match(&self) -> bool {
        i64::try_from(self.registros_api)
            .map(|api| api == self.registros_db)
            .unwrap_or(false)
    }

    /// Render the human-readable report body.
    #[must_use]
    pub fn render(&self) -> String {
        let verdict = if self.is_match() {
            "No hay diferencias entre el API y la base de datos."
        } else {
            "Advertencia: diferencias en el número de registros entre API y BD."
        };

        format!(
            "Auditoría de Ingesta - {}\n{}\n\
             Registros obtenidos del API: {}\n\
             Registros almacenados en BD: {}\n\n{}\n",
            self.generated_at,
            "=".repeat(50),
            self.registros_api,
            self.registros_db,
            verdict,
        )
    }
}

/// Write the rendered report to `path` as UTF-8, overwriting any prior
/// report.
///
/// # Errors
/// Propagates filesystem errors; there is no fallback path.
pub fn write_report(path: &Path, report: &AuditReport) -> io::Result<()> {
    fs::write(path, report.render())
}
