//! String helpers shared by the synthesizer

use serde::Serialize;

/// Capitalize the first character, leaving the rest untouched
pub fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Wrap text in a block comment that is safe to embed in generated source.
/// Any comment terminator inside the text is stripped first.
pub fn in_comment(s: &str) -> String {
    format!("/* {} */", s.replace("*/", ""))
}

/// Pretty JSON dump of a model value, used for debug annotations
pub fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| String::from("{}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalise() {
        assert_eq!(capitalise("get"), "Get");
        assert_eq!(capitalise("delete"), "Delete");
        assert_eq!(capitalise("Already"), "Already");
        assert_eq!(capitalise(""), "");
    }

    #[test]
    fn test_in_comment_wraps() {
        assert_eq!(in_comment("hello"), "/* hello */");
    }

    #[test]
    fn test_in_comment_strips_terminators() {
        let out = in_comment("evil */ tail");
        assert_eq!(out, "/* evil  tail */");
        // exactly one terminator: the one we append
        assert_eq!(out.matches("*/").count(), 1);
    }

    #[test]
    fn test_pretty_dumps_json() {
        #[derive(Serialize)]
        struct Probe {
            name: String,
        }
        let out = pretty(&Probe {
            name: "id".to_string(),
        });
        assert!(out.contains("\"name\": \"id\""));
    }
}
