//! Response extraction: pulls an embedded JSON value out of loosely formatted
//! provider text and, when strict parsing fails, retries after a fixed set of
//! structural repair passes.
//!
//! Every repair pass walks the text with a small string-literal tracker, so
//! content inside quoted strings is never rewritten.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// The JSON value kind the caller expects to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Object,
    Array,
}

impl JsonShape {
    fn delimiters(self) -> (char, char) {
        match self {
            JsonShape::Object => ('{', '}'),
            JsonShape::Array => ('[', ']'),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no opening '{0}' found in response")]
    NoOpeningDelimiter(char),

    #[error("no JSON span between the first '{open}' and the last '{close}'")]
    EmptySpan { open: char, close: char },

    #[error("embedded JSON could not be parsed after repairs: {0}")]
    Unparseable(serde_json::Error),

    #[error("embedded JSON does not match the expected shape: {0}")]
    Shape(serde_json::Error),
}

/// A single pure text-to-text repair.
type RepairPass = fn(&str) -> String;

/// Repairs applied in order; each one runs on the output of the previous.
const REPAIR_PASSES: &[(&str, RepairPass)] = &[
    ("trailing_commas", strip_trailing_commas),
    ("bare_keys", quote_bare_keys),
];

/// Locates and parses the JSON value of `shape` embedded in `raw`.
///
/// Algorithm:
/// 1. Slice from the first opening delimiter to the last closing delimiter.
/// 2. Strict parse.
/// 3. On failure, apply each repair pass cumulatively and re-parse after each.
pub fn extract_json(raw: &str, shape: JsonShape) -> Result<Value, ExtractionError> {
    let span = locate_span(raw, shape)?;

    let first_error = match serde_json::from_str::<Value>(span) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let mut repaired = span.to_string();
    for (name, pass) in REPAIR_PASSES {
        repaired = pass(&repaired);
        if let Ok(value) = serde_json::from_str::<Value>(&repaired) {
            tracing::debug!("Recovered provider JSON after '{name}' repair");
            return Ok(value);
        }
    }

    Err(ExtractionError::Unparseable(first_error))
}

/// `extract_json` followed by typed deserialization.
pub fn extract_as<T: DeserializeOwned>(raw: &str, shape: JsonShape) -> Result<T, ExtractionError> {
    let value = extract_json(raw, shape)?;
    serde_json::from_value(value).map_err(ExtractionError::Shape)
}

fn locate_span(raw: &str, shape: JsonShape) -> Result<&str, ExtractionError> {
    let (open, close) = shape.delimiters();
    let start = raw
        .find(open)
        .ok_or(ExtractionError::NoOpeningDelimiter(open))?;
    match raw.rfind(close) {
        Some(end) if end > start => Ok(&raw[start..=end]),
        _ => Err(ExtractionError::EmptySpan { open, close }),
    }
}

/// Tracks whether a scanner is inside a double-quoted JSON string.
#[derive(Default)]
struct StringTracker {
    in_string: bool,
    escaped: bool,
}

impl StringTracker {
    /// Feeds one character; returns true if it belongs to a string literal
    /// (including the quotes themselves).
    fn feed(&mut self, c: char) -> bool {
        if self.in_string {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == '"' {
                self.in_string = false;
            }
            true
        } else if c == '"' {
            self.in_string = true;
            true
        } else {
            false
        }
    }
}

/// Drops any comma whose next non-whitespace character closes an object or array.
pub fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut tracker = StringTracker::default();

    for (i, &c) in chars.iter().enumerate() {
        if !tracker.feed(c) && c == ',' {
            let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Quotes identifier keys (`{name: 1}` → `{"name": 1}`).
///
/// An identifier is only treated as a key when the previous significant
/// character is `{` or `,` and the next one is `:`, so bare literals like
/// `true` inside arrays are left alone.
pub fn quote_bare_keys(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 16);
    let mut tracker = StringTracker::default();
    let mut last_significant: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if tracker.feed(c) {
            out.push(c);
            last_significant = Some(c);
            i += 1;
            continue;
        }

        if is_ident_start(c) && matches!(last_significant, Some('{') | Some(',')) {
            let start = i;
            let mut end = i;
            while end < chars.len() && is_ident_continue(chars[end]) {
                end += 1;
            }
            let after = chars[end..].iter().find(|ch| !ch.is_whitespace());
            let ident: String = chars[start..end].iter().collect();
            if after == Some(&':') {
                out.push('"');
                out.push_str(&ident);
                out.push('"');
            } else {
                out.push_str(&ident);
            }
            last_significant = chars[end - 1].into();
            i = end;
            continue;
        }

        if !c.is_whitespace() {
            last_significant = Some(c);
        }
        out.push(c);
        i += 1;
    }
    out
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_wrapped_in_prose() {
        let raw = r#"Sure! Here is the analysis: {"a": 1, "b": {"c": [1, 2]}} Hope it helps."#;
        let value = extract_json(raw, JsonShape::Object).unwrap();
        assert_eq!(value, json!({"a": 1, "b": {"c": [1, 2]}}));
    }

    #[test]
    fn test_array_inside_markdown_fence() {
        let raw = "```json\n[{\"question\": \"Q\", \"answer\": \"A\"}]\n```";
        let value = extract_json(raw, JsonShape::Array).unwrap();
        assert_eq!(value, json!([{"question": "Q", "answer": "A"}]));
    }

    #[test]
    fn test_trailing_comma_repaired() {
        let raw = r#"Here is your data: {"a": 1, "b": [1,2,3],}  Thanks!"#;
        let value = extract_json(raw, JsonShape::Object).unwrap();
        assert_eq!(value, json!({"a": 1, "b": [1, 2, 3]}));
    }

    #[test]
    fn test_single_trailing_comma_equals_clean_json() {
        let clean = r#"{"title": "Dev", "skills": ["Rust", "Go"]}"#;
        let dirty = r#"{"title": "Dev", "skills": ["Rust", "Go"],}"#;
        assert_eq!(
            extract_json(dirty, JsonShape::Object).unwrap(),
            extract_json(clean, JsonShape::Object).unwrap()
        );
    }

    #[test]
    fn test_bare_keys_repaired() {
        let raw = r#"{title: "Data Analyst", level_2: 3, nested: {ok: true}}"#;
        let value = extract_json(raw, JsonShape::Object).unwrap();
        assert_eq!(
            value,
            json!({"title": "Data Analyst", "level_2": 3, "nested": {"ok": true}})
        );
    }

    #[test]
    fn test_trailing_comma_and_bare_key_together() {
        let raw = r#"{skill: "SQL", expertise_level: "beginner",}"#;
        let value = extract_json(raw, JsonShape::Object).unwrap();
        assert_eq!(value, json!({"skill": "SQL", "expertise_level": "beginner"}));
    }

    #[test]
    fn test_repairs_do_not_touch_string_contents() {
        let text = r#"{"note": "keep ,} and {key: here}", "list": [1,],}"#;
        let repaired = quote_bare_keys(&strip_trailing_commas(text));
        assert_eq!(repaired, r#"{"note": "keep ,} and {key: here}", "list": [1]}"#);
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let text = r#"{"q": "say \"hi,\" ]", "n": 1,}"#;
        assert_eq!(strip_trailing_commas(text), r#"{"q": "say \"hi,\" ]", "n": 1}"#);
    }

    #[test]
    fn test_bare_literals_in_arrays_untouched() {
        assert_eq!(quote_bare_keys("[true, false, null]"), "[true, false, null]");
    }

    #[test]
    fn test_no_opening_delimiter() {
        let err = extract_json("no json here", JsonShape::Object).unwrap_err();
        assert!(matches!(err, ExtractionError::NoOpeningDelimiter('{')));
    }

    #[test]
    fn test_close_before_open_is_empty_span() {
        let err = extract_json("] then [", JsonShape::Array).unwrap_err();
        assert!(matches!(err, ExtractionError::EmptySpan { .. }));
    }

    #[test]
    fn test_unrepairable_json_fails() {
        let err = extract_json("{\"a\": 1 \"b\": 2}", JsonShape::Object).unwrap_err();
        assert!(matches!(err, ExtractionError::Unparseable(_)));
    }

    #[test]
    fn test_extract_as_typed() {
        #[derive(serde::Deserialize)]
        struct Pair {
            question: String,
        }
        let pairs: Vec<Pair> =
            extract_as("[{\"question\": \"Why?\", \"answer\": \"Because\"},]", JsonShape::Array)
                .unwrap();
        assert_eq!(pairs[0].question, "Why?");
    }

    #[test]
    fn test_extract_as_shape_mismatch() {
        #[derive(Debug, serde::Deserialize)]
        struct Needs {
            #[allow(dead_code)]
            required: String,
        }
        let err = extract_as::<Needs>("{\"other\": 1}", JsonShape::Object).unwrap_err();
        assert!(matches!(err, ExtractionError::Shape(_)));
    }
}
