//! Operation view-model synthesis.
//!
//! This module turns parsed operations into the renderer-facing facts the
//! templates consume: dispatch constructors, content-negotiation flags,
//! interpolation-ready path templates, typed parameter lists, and canonical
//! return types. Synthesis is a pure, single-pass transform — each
//! operation's facts depend only on its own parsed record, so re-running it
//! produces identical output.

pub mod params;
pub mod response;
pub mod types;

// Internal imports (std, crate)
use crate::error::{Error, Result};
use crate::facts::OperationFacts;
use crate::model::{ApiModel, Operation};
use crate::target::{Dialect, TargetKind};
use crate::utils::{capitalise, in_comment, pretty};

// External imports (alphabetized)
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// HTTP methods with a dedicated dispatch constructor; everything else
/// falls back to the generic constructor carrying the raw verb.
const RECOGNIZED_METHODS: [&str; 5] = ["get", "post", "put", "delete", "patch"];

/// Media types the renderer negotiates over
const MEDIA_JSON: &str = "application/json";
const MEDIA_XML: &str = "application/xml";
const MEDIA_BINARY: &str = "application/octet-stream";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^/{}]+)\}").expect("valid placeholder pattern"));

/// Derives renderer facts for parsed operations.
///
/// One instance per run, holding the injected target dialect and the debug
/// toggle from the run's configuration. No other state: operations are
/// enriched independently of each other.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    dialect: Dialect,
    debug: bool,
}

impl Synthesizer {
    /// Create a synthesizer for the given target
    pub fn new(target: TargetKind, debug: bool) -> Self {
        Self {
            dialect: target.dialect(),
            debug,
        }
    }

    /// The dialect this synthesizer was built with
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Enrich every operation in the model, annotating each with its
    /// position among siblings.
    ///
    /// Fails on the first configuration error; the model must be treated
    /// as unusable in that case — there is no partial output contract.
    pub fn enrich_model(&self, model: &mut ApiModel) -> Result<()> {
        let count = model.operations.len();
        for (index, op) in model.operations.iter_mut().enumerate() {
            self.enrich_operation(op)?;
            if let Some(facts) = op.facts.as_mut() {
                facts.has_more = index + 1 < count;
            }
        }
        Ok(())
    }

    /// Enrich a single operation.
    ///
    /// Normalizes the HTTP method to lower case, then computes the full
    /// fact set from the parsed record and replaces any previous facts
    /// wholesale.
    pub fn enrich_operation(&self, op: &mut Operation) -> Result<()> {
        op.method = op.method.to_lowercase();

        let path_template = self.path_template(op)?;
        let facts = OperationFacts {
            dispatch_constructor: dispatch_constructor(&op.method),
            accepts_json: consumes_media_type(op, MEDIA_JSON),
            accepts_xml: consumes_media_type(op, MEDIA_XML),
            accepts_binary: consumes_media_type(op, MEDIA_BINARY),
            has_body_param: !op.body_params.is_empty(),
            param_list: op
                .all_params()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            param_list_typed: self.typed_param_list(op),
            query_args: query_args(op),
            path_template,
            has_path_params: !op.path_params.is_empty(),
            has_query_params: !op.query_params.is_empty(),
            has_url_params: !op.path_params.is_empty() || !op.query_params.is_empty(),
            needs_separator: !op.path_params.is_empty() && !op.query_params.is_empty(),
            return_type: response::canonical_return_type(op, &self.dialect),
            response_union: response::response_union(op, &self.dialect),
            has_more: false,
            debug: in_comment(&pretty(&op.without_facts())),
        };

        for param in op.all_params_mut() {
            param.facts = Some(params::classify(param, &self.dialect));
        }
        op.facts = Some(facts);

        if self.debug {
            debug!(
                "enriched operation '{}': {} {}",
                op.id, op.method, op.path
            );
        }
        Ok(())
    }

    /// The raw path with `{name}` placeholders rewritten into the target's
    /// string-interpolation form.
    ///
    /// A placeholder with no matching declared path parameter is a
    /// configuration error in the source model and aborts the run.
    fn path_template(&self, op: &Operation) -> Result<String> {
        for caps in PLACEHOLDER.captures_iter(&op.path) {
            let name = &caps[1];
            if !op.path_params.iter().any(|p| p.name == name) {
                return Err(Error::UnmatchedPlaceholder {
                    operation: op.id.clone(),
                    placeholder: name.to_string(),
                });
            }
        }
        let open = format!("{}{{", self.dialect.interpolation_prefix);
        Ok(op.path.replace('{', &open))
    }

    /// Comma-joined typed declarations in declared order. Server dialects
    /// declare the inbound request handle between path and query
    /// parameters.
    fn typed_param_list(&self, op: &Operation) -> String {
        let mut decls: Vec<String> = op
            .path_params
            .iter()
            .map(|p| params::typed_declaration(p, &self.dialect))
            .collect();
        if let Some(request_param) = self.dialect.request_param {
            decls.push(request_param.to_string());
        }
        decls.extend(
            op.query_params
                .iter()
                .chain(op.header_params.iter())
                .chain(op.form_params.iter())
                .chain(op.body_params.iter())
                .map(|p| params::typed_declaration(p, &self.dialect)),
        );
        decls.join(", ")
    }
}

fn dispatch_constructor(method: &str) -> String {
    if RECOGNIZED_METHODS.contains(&method) {
        capitalise(method)
    } else {
        format!("Other(\"{}\")", method)
    }
}

/// Whether the operation accepts the media type. No declared consumes-list
/// means the operation accepts anything.
fn consumes_media_type(op: &Operation, media_type: &str) -> bool {
    match &op.consumes {
        None => true,
        Some(declared) => declared.iter().any(|m| m.eq_ignore_ascii_case(media_type)),
    }
}

/// Query parameter names with a leading separator, for appending to an
/// existing argument list at a call site.
fn query_args(op: &Operation) -> String {
    let names: Vec<&str> = op.query_params.iter().map(|p| p.name.as_str()).collect();
    if names.is_empty() {
        String::new()
    } else {
        format!(", {}", names.join(", "))
    }
}
