//! Structured JSON log lines, one object per event.

use std::cmp::Ordering;

use serde_json::{Map, Number, Value};

use crate::contact::ContactForm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// How much of a contact submission ends up in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactLogMode {
    Full,
    Redacted,
}

impl ContactLogMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Some(Self::Full),
            "redacted" => Some(Self::Redacted),
            _ => None,
        }
    }

    pub fn fields(self, form: &ContactForm) -> Value {
        match self {
            Self::Full => serde_json::json!({ "form": form }),
            Self::Redacted => serde_json::json!({
                "nameChars": form.name.chars().count(),
                "emailChars": form.email.chars().count(),
                "messageChars": form.message.chars().count(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn debug(&self, event: &str, fields: Value) {
        self.event(LogLevel::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: Value) {
        self.event(LogLevel::Info, event, fields);
    }

    pub fn event(&self, level: LogLevel, event: &str, fields: Value) {
        if let Some(line) = self.format_line(now_unix_millis(), level, event, fields) {
            emit(&line);
        }
    }

    fn format_line(&self, ts: u64, level: LogLevel, event: &str, fields: Value) -> Option<String> {
        if level < self.min_level {
            return None;
        }

        let mut payload = Map::new();
        payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
        payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
        payload.insert("event".to_string(), Value::String(event.to_string()));

        if let Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(Value::Object(payload).to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_below_min_level_are_dropped() {
        let logger = Logger::new(LogLevel::Info);
        let line = logger.format_line(1, LogLevel::Debug, "tab_selected", serde_json::json!({}));
        assert!(line.is_none());
    }

    #[test]
    fn line_merges_fields_after_header() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .format_line(
                42,
                LogLevel::Info,
                "theme_changed",
                serde_json::json!({ "theme": "dark" }),
            )
            .expect("line emitted");

        let parsed: Value = serde_json::from_str(&line).expect("valid JSON");
        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "theme_changed");
        assert_eq!(parsed["theme"], "dark");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .format_line(0, LogLevel::Debug, "x", Value::String("stray".to_string()))
            .expect("line emitted");
        let parsed: Value = serde_json::from_str(&line).expect("valid JSON");
        assert_eq!(parsed.as_object().map(|object| object.len()), Some(3));
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warn"), None);
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn redacted_contact_logs_lengths_only() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "hi".to_string(),
        };

        let fields = ContactLogMode::Redacted.fields(&form);
        assert_eq!(fields["nameChars"], 3);
        assert_eq!(fields["messageChars"], 2);
        assert!(fields.get("form").is_none());

        let full = ContactLogMode::Full.fields(&form);
        assert_eq!(full["form"]["email"], "ada@example.com");
    }
}
