//! Plain-text extraction from the stored rich-text payload.
//!
//! Day One changed its rich-text encoding several times; entries written
//! under older schemes stay on disk unmigrated and carry no version tag.
//! Extraction therefore dispatches on structural shape, trying the
//! recognized shapes in a fixed order and degrading to the raw payload as
//! plain text. This function never fails: for search, preview and display,
//! partial content beats a hard error.

use serde_json::Value;

/// Extract plain text from a raw rich-text payload.
///
/// Recognized shapes, in priority order:
/// 1. `{"text": "..."}`
/// 2. `{"attributedString": {"string": "..."}}` or
///    `{"attributedString": {"runs": [{"text": "..."}, ...]}}`
/// 3. `{"ops": [{"insert": ...}, ...]}` (delta form)
/// 4. `{"delta": {"ops": [...]}}`
/// 5. `{"NSString": "..."}`
/// 6. a bare JSON string
///
/// Anything else (unrecognized structure or invalid JSON) is returned
/// as-is; an absent or blank payload yields the empty string.
pub fn extract_text(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return String::new(),
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(doc) => extract_from_value(&doc).unwrap_or_else(|| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// Row-level text: rich-text payload first, the markdown column as
/// fallback when extraction yields nothing.
pub fn entry_text(rich_text: Option<&str>, markdown: Option<&str>) -> String {
    let text = extract_text(rich_text);
    if !text.is_empty() {
        return text;
    }

    match markdown {
        Some(md) => md.trim().to_string(),
        None => String::new(),
    }
}

fn extract_from_value(doc: &Value) -> Option<String> {
    match doc {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Object(map) => {
            if let Some(Value::String(s)) = map.get("text") {
                return Some(s.trim().to_string());
            }

            if let Some(attr) = map.get("attributedString")
                && let Some(text) = from_attributed(attr)
            {
                return Some(text);
            }

            if let Some(Value::Array(ops)) = map.get("ops") {
                return Some(from_ops(ops));
            }

            if let Some(delta) = map.get("delta")
                && let Some(Value::Array(ops)) = delta.get("ops")
            {
                return Some(from_ops(ops));
            }

            if let Some(Value::String(s)) = map.get("NSString") {
                return Some(s.trim().to_string());
            }

            None
        }
        _ => None,
    }
}

fn from_attributed(attr: &Value) -> Option<String> {
    if let Some(Value::String(s)) = attr.get("string") {
        return Some(s.trim().to_string());
    }

    if let Some(Value::Array(runs)) = attr.get("runs") {
        let mut out = String::new();
        for run in runs {
            if let Some(Value::String(t)) = run.get("text") {
                out.push_str(t);
            }
        }
        return Some(out.trim().to_string());
    }

    None
}

// Ordered insert operations; a structured insert (image, embedded object)
// contributes its "text" field when it has one, otherwise nothing.
fn from_ops(ops: &[Value]) -> String {
    let mut out = String::new();

    for op in ops {
        match op.get("insert") {
            Some(Value::String(s)) => out.push_str(s),
            Some(Value::Object(obj)) => {
                if let Some(Value::String(t)) = obj.get("text") {
                    out.push_str(t);
                }
            }
            _ => {}
        }
    }

    out.trim().to_string()
}
