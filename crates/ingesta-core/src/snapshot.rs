use serde_json::{Map, Value};

/// One full API response captured at a single point in time.
///
/// The exchange wraps the quote fields under a single `ticker` key; the
/// rest of the body is kept as-is for the quick-check command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerSnapshot {
    payload: Map<String, Value>,
}

impl TickerSnapshot {
    /// Snapshot carrying no data, the degraded result of a failed call.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a parsed response body. Non-object bodies carry no usable
    /// fields and collapse to an empty snapshot.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(payload) => Self { payload },
            _ => Self::empty(),
        }
    }

    /// True when the payload object has no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// The nested `ticker` mapping flattened to `(clave, valor)` pairs.
    /// An absent or non-object `ticker` key reads as empty.
    #[must_use]
    pub fn ticker_fields(&self) -> Vec<(String, String)> {
        let Some(Value::Object(ticker)) = self.payload.get("ticker") else {
            return Vec::new();
        };
        ticker
            .iter()
            .map(|(clave, valor)| (clave.clone(), render_value(valor)))
            .collect()
    }

    /// Number of fields in the `ticker` mapping.
    #[must_use]
    pub fn field_count(&self) -> usize {
        match self.payload.get("ticker") {
            Some(Value::Object(ticker)) => ticker.len(),
            _ => 0,
        }
    }

    /// The full payload as a JSON value, for printing.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.payload.clone())
    }
}

/// Stringify a field value: JSON strings verbatim, other scalars via
/// their JSON rendering.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
