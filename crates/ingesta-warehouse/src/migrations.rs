use ::duckdb::Connection;

struct Migration {
    version: &'static str,
    sql: &'static str,
}

// DuckDB has no AUTOINCREMENT; a sequence keeps `id` unique and
// monotonically increasing across runs.
const MIGRATIONS: &[Migration] = &[Migration {
    version: "0001_datos",
    sql: r#"
CREATE SEQUENCE IF NOT EXISTS datos_id_seq START 1;

CREATE TABLE IF NOT EXISTS datos (
    id BIGINT PRIMARY KEY DEFAULT nextval('datos_id_seq'),
    clave TEXT NOT NULL,
    valor TEXT NOT NULL,
    fecha TEXT NOT NULL
);
"#,
}];

pub fn apply_migrations(connection: &Connection) -> Result<(), ::duckdb::Error> {
    connection.execute_batch(
        r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version TEXT PRIMARY KEY,
    applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#,
    )?;

    for migration in MIGRATIONS {
        let query = format!(
            "SELECT COUNT(*) FROM schema_migrations WHERE version = '{}'",
            escape_sql_string(migration.version)
        );
        let applied_count: i64 = connection.query_row(query.as_str(), [], |row| row.get(0))?;

        if applied_count == 0 {
            connection.execute_batch(migration.sql)?;
            let insert = format!(
                "INSERT INTO schema_migrations (version) VALUES ('{}')",
                escape_sql_string(migration.version)
            );
            connection.execute_batch(insert.as_str())?;
        }
    }

    Ok(())
}

fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}
