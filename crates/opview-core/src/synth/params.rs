//! Parameter classification: per-parameter renderer facts.

use serde_json::Value as JsonValue;

use crate::facts::ParameterFacts;
use crate::model::Parameter;
use crate::target::Dialect;
use crate::utils::{in_comment, pretty};

use super::types::{element_type, typed_data_type};

/// Derive the renderer facts for a single parameter
pub fn classify(param: &Parameter, dialect: &Dialect) -> ParameterFacts {
    ParameterFacts {
        typed_declaration: typed_declaration(param, dialect),
        default_value: default_value_expr(param, dialect),
        element_type: element_type(&param.data_type).to_string(),
        debug: in_comment(&pretty(&param.without_facts())),
    }
}

/// `"<name> : <mapped-type>"` declaration for the target language
pub fn typed_declaration(param: &Parameter, dialect: &Dialect) -> String {
    format!("{} : {}", param.name, typed_data_type(param, dialect))
}

/// A renderer-usable default literal.
///
/// The declared sample value wins; optional parameters without one get the
/// dialect's absent literal; required parameters without one get nothing.
fn default_value_expr(param: &Parameter, dialect: &Dialect) -> Option<String> {
    match &param.default {
        Some(value) => Some(format_literal(value)),
        None if !param.required => Some(dialect.absent_literal.to_string()),
        None => None,
    }
}

fn format_literal(value: &JsonValue) -> String {
    match value {
        // strip quotes from the raw value to avoid code injection
        JsonValue::String(s) => format!("\"{}\"", s.replace('"', "")),
        other => other.to_string(),
    }
}
