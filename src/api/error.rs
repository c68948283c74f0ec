//! Backend error-body contract.
//!
//! Non-2xx responses carry a JSON body that is either a bare string, an
//! object with a `detail` string, or an object with a `detail` array of
//! `{msg}`/`{detail}` items. The extracted message is the user-facing error
//! text, verbatim; anything unparseable falls back to `"Erro: <status>"`.

use reqwest::StatusCode;
use serde_json::Value;

pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let fallback = format!("Erro: {}", status.as_u16());
    if body.is_empty() {
        return fallback;
    }

    let Ok(data) = serde_json::from_str::<Value>(body) else {
        return fallback;
    };

    match data {
        Value::String(s) => s,
        Value::Object(map) => match map.get("detail") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Array(items)) => {
                let joined: Vec<&str> = items
                    .iter()
                    .filter_map(|item| {
                        item.get("msg")
                            .or_else(|| item.get("detail"))
                            .and_then(Value::as_str)
                    })
                    .filter(|s| !s.is_empty())
                    .collect();
                if joined.is_empty() {
                    fallback
                } else {
                    joined.join(", ")
                }
            }
            _ => fallback,
        },
        _ => fallback,
    }
}
