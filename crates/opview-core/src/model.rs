//! Parsed API description model consumed by the synthesizer.
//!
//! This module defines the operation/parameter/response records the external
//! parser hands to the view-model synthesizer, plus loading helpers for the
//! serialized form of that model. It supports loading from files and URLs in
//! either JSON or YAML.
//!
//! # Examples
//!
//! ```no_run
//! use opview_core::model::ApiModel;
//! use opview_core::error::Result;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Load a parsed API description from a file
//! let model = ApiModel::from_file("petstore.model.yaml").await?;
//! println!("{} operations", model.operations.len());
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::facts::{OperationFacts, ParameterFacts};

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tokio::fs;
use url::Url;

/// A fully-parsed API description: an ordered sequence of operations plus
/// document-level metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiModel {
    /// Name of the described API
    pub name: String,
    /// Version string of the described API
    #[serde(default)]
    pub version: Option<String>,
    /// Base URL the rendered client should talk to
    #[serde(default)]
    pub base_path: Option<Url>,
    /// Operations in declaration order
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl ApiModel {
    /// Load a model from a file or URL (supports both YAML and JSON)
    pub async fn from_file_or_url<P: AsRef<str>>(location: P) -> crate::Result<Self> {
        let location = location.as_ref();

        // Check if the input looks like a URL
        if location.starts_with("http://") || location.starts_with("https://") {
            return Self::from_url(location).await;
        }

        // Otherwise treat as a file path
        Self::from_file(location).await
    }

    /// Load a model from a file (supports both YAML and JSON)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        Self::parse_content(&content).map_err(|e| {
            crate::Error::model(format!(
                "Failed to parse API description at {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load a model from a URL (supports both YAML and JSON)
    pub async fn from_url(url: &str) -> crate::Result<Self> {
        let response = reqwest::get(url).await.map_err(|e| {
            crate::Error::model(format!("Failed to fetch API description from {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            return Err(crate::Error::model(format!(
                "Failed to fetch API description from {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let content = response.text().await.map_err(|e| {
            crate::Error::model(format!("Failed to read response from {}: {}", url, e))
        })?;

        Self::parse_content(&content).map_err(|e| {
            crate::Error::model(format!("Failed to parse API description from {}: {}", url, e))
        })
    }

    /// Parse content as either JSON or YAML
    fn parse_content(content: &str) -> Result<Self, String> {
        // Try to parse as JSON first
        if let Ok(model) = serde_json::from_str(content) {
            return Ok(model);
        }

        // If JSON parsing fails, try YAML
        if let Ok(model) = serde_yaml::from_str(content) {
            return Ok(model);
        }

        // If both parsers fail, return an error
        Err("content is neither valid JSON nor YAML".to_string())
    }
}

/// One API endpoint (method + path) with its inputs and possible outcomes.
///
/// Constructed once by the external parser; the synthesizer populates
/// `facts` and normalizes `method` to lower case, and the record is
/// read-only thereafter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Operation {
    /// Unique identity of the operation within the model
    pub id: String,
    /// HTTP method, free-form and case-insensitive
    pub method: String,
    /// Path template containing `{name}` placeholders
    pub path: String,
    /// A short summary of what the operation does
    #[serde(default)]
    pub summary: Option<String>,
    /// A verbose explanation of the operation behavior
    #[serde(default)]
    pub description: Option<String>,
    /// Tags for logical grouping of operations
    #[serde(default)]
    pub tags: Vec<String>,
    /// Parameters bound from path placeholders
    #[serde(default)]
    pub path_params: Vec<Parameter>,
    /// Parameters bound from the query string
    #[serde(default)]
    pub query_params: Vec<Parameter>,
    /// Parameters bound from request headers
    #[serde(default)]
    pub header_params: Vec<Parameter>,
    /// Parameters bound from form fields
    #[serde(default)]
    pub form_params: Vec<Parameter>,
    /// Parameters bound from the request body
    #[serde(default)]
    pub body_params: Vec<Parameter>,
    /// Declared consumes media types. `None` means the operation accepts
    /// anything.
    #[serde(default)]
    pub consumes: Option<Vec<String>>,
    /// Pre-computed aggregate return type, independent of the per-status
    /// responses
    #[serde(default)]
    pub return_type: Option<String>,
    /// Possible HTTP outcomes in declaration order
    #[serde(default)]
    pub responses: Vec<Response>,
    /// Renderer-facing facts; `None` until synthesis runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facts: Option<OperationFacts>,
}

impl Operation {
    /// Create an operation with empty parameter groups and responses
    pub fn new(
        id: impl Into<String>,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            path: path.into(),
            summary: None,
            description: None,
            tags: Vec::new(),
            path_params: Vec::new(),
            query_params: Vec::new(),
            header_params: Vec::new(),
            form_params: Vec::new(),
            body_params: Vec::new(),
            consumes: None,
            return_type: None,
            responses: Vec::new(),
            facts: None,
        }
    }

    /// All parameters in declared order: path, query, header, form, body
    pub fn all_params(&self) -> impl Iterator<Item = &Parameter> {
        self.path_params
            .iter()
            .chain(self.query_params.iter())
            .chain(self.header_params.iter())
            .chain(self.form_params.iter())
            .chain(self.body_params.iter())
    }

    /// Mutable variant of [`Operation::all_params`]
    pub fn all_params_mut(&mut self) -> impl Iterator<Item = &mut Parameter> {
        self.path_params
            .iter_mut()
            .chain(self.query_params.iter_mut())
            .chain(self.header_params.iter_mut())
            .chain(self.form_params.iter_mut())
            .chain(self.body_params.iter_mut())
    }

    /// Clone of the operation with all synthesis output removed.
    ///
    /// Debug dumps are taken from this projection so that a second
    /// synthesis pass sees byte-identical input.
    pub(crate) fn without_facts(&self) -> Operation {
        let mut probe = self.clone();
        probe.facts = None;
        for param in probe.all_params_mut() {
            param.facts = None;
        }
        probe
    }
}

/// One operation input, owned by exactly one parameter group.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as declared in the API description
    pub name: String,
    /// Declared data-type string, possibly a generic container form such
    /// as `List[Pet]`
    pub data_type: String,
    /// Whether the parameter is mandatory
    #[serde(default)]
    pub required: bool,
    /// Sample or default value from the API description
    #[serde(default)]
    pub default: Option<JsonValue>,
    /// A brief description of the parameter
    #[serde(default)]
    pub description: Option<String>,
    /// Renderer-facing facts; `None` until synthesis runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facts: Option<ParameterFacts>,
}

impl Parameter {
    /// Create a parameter with no sample value or description
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            required,
            default: None,
            description: None,
            facts: None,
        }
    }

    /// Clone of the parameter with synthesis output removed
    pub(crate) fn without_facts(&self) -> Parameter {
        let mut probe = self.clone();
        probe.facts = None;
        probe
    }
}

/// One possible HTTP outcome of an operation. Immutable after parse.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Response {
    /// Status code as a string, e.g. `"200"`
    pub code: String,
    /// Declared payload type
    #[serde(default)]
    pub data_type: Option<String>,
    /// Base type the payload type was derived from
    #[serde(default)]
    pub base_type: Option<String>,
    /// A short description of the response
    #[serde(default)]
    pub description: Option<String>,
}

impl Response {
    /// Create a response with no payload type
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            data_type: None,
            base_type: None,
            description: None,
        }
    }

    /// The declared type of this response: the data type, falling back to
    /// the base type. Empty strings count as absent.
    pub fn declared_type(&self) -> Option<&str> {
        non_empty(&self.data_type).or_else(|| non_empty(&self.base_type))
    }

    /// Whether this is a success-class (`2xx`) response
    pub fn is_success(&self) -> bool {
        self.code.starts_with('2')
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_from_file() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("model.json");
        let json_content = r#"
        {
            "name": "Petstore",
            "version": "1.0.3",
            "base_path": "https://petstore.example.com/v1",
            "operations": [
                {
                    "id": "getPetById",
                    "method": "GET",
                    "path": "/pets/{id}",
                    "path_params": [
                        { "name": "id", "data_type": "Long", "required": true }
                    ],
                    "responses": [
                        { "code": "200", "data_type": "Pet" }
                    ]
                }
            ]
        }
        "#;
        tokio::fs::write(&file_path, json_content).await?;

        let model = ApiModel::from_file(&file_path).await?;
        assert_eq!(model.name, "Petstore");
        assert_eq!(model.version.as_deref(), Some("1.0.3"));
        assert_eq!(model.operations.len(), 1);

        let op = &model.operations[0];
        assert_eq!(op.id, "getPetById");
        assert_eq!(op.path_params[0].data_type, "Long");
        assert!(op.facts.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_from_file_yaml() -> crate::Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("model.yaml");
        let yaml_content = r#"
name: Petstore
operations:
  - id: listPets
    method: get
    path: /pets
    query_params:
      - name: limit
        data_type: Int
        required: false
"#;
        tokio::fs::write(&file_path, yaml_content).await?;

        let model = ApiModel::from_file(&file_path).await?;
        assert_eq!(model.operations[0].query_params[0].name, "limit");
        assert!(!model.operations[0].query_params[0].required);

        Ok(())
    }

    #[test]
    fn test_parse_content_rejects_garbage() {
        // serde_yaml happily parses scalars, so use input neither parser
        // can map onto the model
        assert!(ApiModel::parse_content("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_all_params_order() {
        let mut op = Operation::new("op", "post", "/a/{p}");
        op.path_params.push(Parameter::new("p", "String", true));
        op.query_params.push(Parameter::new("q", "Int", false));
        op.header_params.push(Parameter::new("h", "String", false));
        op.form_params.push(Parameter::new("f", "String", false));
        op.body_params.push(Parameter::new("b", "Pet", true));

        let names: Vec<&str> = op.all_params().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["p", "q", "h", "f", "b"]);
    }

    #[test]
    fn test_declared_type_fallback() {
        let mut resp = Response::new("200");
        assert_eq!(resp.declared_type(), None);

        resp.base_type = Some("Pet".to_string());
        assert_eq!(resp.declared_type(), Some("Pet"));

        resp.data_type = Some("Seq[Pet]".to_string());
        assert_eq!(resp.declared_type(), Some("Seq[Pet]"));

        // empty strings count as absent
        let mut blank = Response::new("204");
        blank.data_type = Some(String::new());
        assert_eq!(blank.declared_type(), None);
    }

    #[test]
    fn test_is_success() {
        assert!(Response::new("200").is_success());
        assert!(Response::new("204").is_success());
        assert!(!Response::new("404").is_success());
        assert!(!Response::new("default").is_success());
    }
}
