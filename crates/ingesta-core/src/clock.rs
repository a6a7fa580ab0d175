use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const FECHA_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Capture timestamp with second precision from the local clock,
/// falling back to UTC when the local offset cannot be determined.
#[must_use]
pub fn local_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&FECHA_FORMAT)
        .expect("fecha format is static and valid")
}

#[cfg(test)]
mod tests {
    use time::PrimitiveDateTime;

    use super::*;

    #[test]
    fn timestamp_has_second_precision_and_round_trips() {
        let fecha = local_timestamp();
        assert_eq!(fecha.len(), 19, "expected YYYY-MM-DD HH:MM:SS, got {fecha}");
        PrimitiveDateTime::parse(&fecha, &FECHA_FORMAT).expect("must parse back");
    }
}
