use gallery_core::Record;
use serde_json::Value;

/// Placeholder for missing place of origin and artist.
pub const UNKNOWN: &str = "Unknown";

/// Maps one raw artwork object to a [`Record`]. Never fails; missing or
/// falsy fields fall back to defaults.
pub fn normalize_record(raw: &Value) -> Record {
    Record {
        id: raw.get("id").and_then(as_id).unwrap_or(0),
        title: raw.get("title").map(text_or_empty).unwrap_or_default(),
        place_of_origin: truthy_text(raw.get("place_of_origin"))
            .unwrap_or_else(|| UNKNOWN.to_string()),
        artist_display: truthy_text(raw.get("artist_display"))
            .unwrap_or_else(|| UNKNOWN.to_string()),
        inscriptions: truthy_text(raw.get("inscriptions")),
        date_start: year_or_zero(raw.get("date_start")),
        date_end: year_or_zero(raw.get("date_end")),
    }
}

/// Normalizes every entry of a page, preserving order.
pub fn normalize_page(raw: &[Value]) -> Vec<Record> {
    raw.iter().map(normalize_record).collect()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0 || n.is_nan()),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn truthy_text(value: Option<&Value>) -> Option<String> {
    value.filter(|v| !is_falsy(v)).map(text_or_empty)
}

fn text_or_empty(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn as_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn year_or_zero(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|n| n.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
