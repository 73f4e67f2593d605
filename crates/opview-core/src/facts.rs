//! Renderer-facing view-models produced by synthesis.
//!
//! Derived facts are typed structs rather than open-ended string-keyed
//! maps: the handful of keys the renderer actually reads is pinned down
//! here. The serde renames below are the stable, renderer-known key names
//! and must not change meaning between releases.

use serde::{Deserialize, Serialize};

/// Facts derived for one operation, consumed directly by templates.
///
/// Every field is a pure function of the operation's parsed model, so
/// re-synthesis replaces the whole struct with an identical value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationFacts {
    /// HTTP-method dispatch expression, e.g. `Get` or `Other("options")`
    #[serde(rename = "dispatch-constructor")]
    pub dispatch_constructor: String,

    /// Operation accepts `application/json` request bodies
    #[serde(rename = "accepts-json")]
    pub accepts_json: bool,

    /// Operation accepts `application/xml` request bodies
    #[serde(rename = "accepts-xml")]
    pub accepts_xml: bool,

    /// Operation accepts `application/octet-stream` request bodies
    #[serde(rename = "accepts-binary")]
    pub accepts_binary: bool,

    /// Operation declares a body parameter
    #[serde(rename = "has-body-param")]
    pub has_body_param: bool,

    /// Comma-joined parameter names in declared order
    #[serde(rename = "param-list")]
    pub param_list: String,

    /// Comma-joined typed declarations; for server targets the synthetic
    /// request parameter sits between path and query parameters
    #[serde(rename = "param-list-typed")]
    pub param_list_typed: String,

    /// Comma-joined query parameter names with a leading `", "` when
    /// non-empty, for appending to an existing argument list
    #[serde(rename = "query-args")]
    pub query_args: String,

    /// Path with placeholders rewritten for string interpolation,
    /// e.g. `/pets/{id}` becomes `/pets/${id}`
    #[serde(rename = "path-template")]
    pub path_template: String,

    #[serde(rename = "has-path-params")]
    pub has_path_params: bool,

    #[serde(rename = "has-query-params")]
    pub has_query_params: bool,

    /// Either path or query parameters are present
    #[serde(rename = "has-url-params")]
    pub has_url_params: bool,

    /// Both path and query parameters are present, so the rendered URL
    /// needs a separator between the two segments
    #[serde(rename = "needs-separator")]
    pub needs_separator: bool,

    /// Canonical return type the renderer should declare for this operation
    #[serde(rename = "return-type")]
    pub return_type: String,

    /// Union of every candidate response type, deduplicated and
    /// order-independent
    #[serde(rename = "response-union")]
    pub response_union: String,

    /// Another operation follows this one in the enriched sequence
    #[serde(rename = "has-more")]
    pub has_more: bool,

    /// Comment-safe dump of the parsed operation, for generated-source
    /// traceability only
    #[serde(rename = "x-debug")]
    pub debug: String,
}

/// Facts derived for one parameter.
///
/// Keys carry the `x-` prefix so they can never collide with
/// renderer-reserved parameter attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterFacts {
    /// `"<name> : <mapped-type>"` declaration for the target language
    #[serde(rename = "x-typed-declaration")]
    pub typed_declaration: String,

    /// Renderer-usable default literal; absent when the parameter is
    /// required and declares no sample value
    #[serde(
        rename = "x-default-value",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<String>,

    /// Element type of a container-typed parameter, the type itself
    /// otherwise; used when unmarshalling from the wire
    #[serde(rename = "x-element-type")]
    pub element_type: String,

    /// Comment-safe dump of the parsed parameter
    #[serde(rename = "x-debug")]
    pub debug: String,
}
