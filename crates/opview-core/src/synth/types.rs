//! Type-string transformations shared by the classifier and resolver.

use crate::model::Parameter;
use crate::target::Dialect;

/// Extract the element type from a `Container[Element]` type string.
///
/// Only the outermost wrapper is stripped; this is the minimal extraction
/// the renderer needs, not a type-system parser. Input without a
/// well-formed wrapper is returned unchanged, never an error.
pub fn element_type(data_type: &str) -> &str {
    match (data_type.find('['), data_type.rfind(']')) {
        (Some(open), Some(close)) if open < close => &data_type[open + 1..close],
        _ => data_type,
    }
}

/// Map a parameter's declared type into the target language.
///
/// Sequence containers are rewritten to the dialect's sequence keyword;
/// otherwise non-required parameters are wrapped in the optional type.
/// A required flag never optional-wraps a sequence: the container rewrite
/// short-circuits.
pub fn typed_data_type(param: &Parameter, dialect: &Dialect) -> String {
    let source = format!("{}[", dialect.sequence_source);
    if param.data_type.starts_with(&source) {
        let target = format!("{}[", dialect.sequence_target);
        param.data_type.replace(&source, &target)
    } else if !param.required {
        format!("{}[{}]", dialect.optional_wrapper, param.data_type)
    } else {
        param.data_type.clone()
    }
}
