//! Target dialect definitions for view-model synthesis.
//!
//! A target names the rendition the downstream templates produce; its
//! [`Dialect`] is the small strategy table the synthesizer consults for
//! every language-specific decision. One synthesizer serves every rendition;
//! only the table differs between targets.
//!
//! # Examples
//!
//! ```
//! use opview_core::target::TargetKind;
//! use std::str::FromStr;
//!
//! // Parse a target from a string
//! let target = TargetKind::from_str("scala_cask").unwrap();
//! assert_eq!(target, TargetKind::ScalaCask);
//! assert_eq!(target.as_str(), "scala_cask");
//!
//! // The default target is the cask server rendition
//! assert_eq!(TargetKind::default(), TargetKind::ScalaCask);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

/// Supported synthesis targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetKind {
    /// Scala service routes on the cask framework
    #[default]
    ScalaCask,
    /// Scala shared/JVM/JS cross client
    ScalaClient,
}

impl FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scala_cask" => Ok(TargetKind::ScalaCask),
            "scala_client" => Ok(TargetKind::ScalaClient),
            _ => Err(format!("Unknown target kind: {}", s)),
        }
    }
}

impl TargetKind {
    /// Returns the target identifier as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScalaCask => "scala_cask",
            Self::ScalaClient => "scala_client",
        }
    }

    /// Returns an iterator over all available targets
    pub fn all() -> impl Iterator<Item = Self> {
        use TargetKind::*;
        [ScalaCask, ScalaClient].iter().copied()
    }

    /// The language strategy table for this target
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::ScalaCask => Dialect {
                response_envelope: Some("ServiceResponse"),
                request_param: Some("request : cask.Request"),
                ..Dialect::scala()
            },
            Self::ScalaClient => Dialect::scala(),
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Language-specific strategy table injected into the synthesizer.
///
/// Both current targets emit Scala and share the base table; the server
/// rendition additionally wraps responses in a service envelope and
/// declares the inbound request handle in its routes.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    /// Container keyword denoting an ordered sequence in the source model
    pub sequence_source: &'static str,
    /// Sequence keyword of the target language
    pub sequence_target: &'static str,
    /// Optional-type wrapper of the target language
    pub optional_wrapper: &'static str,
    /// Separator joining candidate types into a union expression
    pub union_separator: &'static str,
    /// Marker type for responses with no body
    pub no_content_type: &'static str,
    /// Literal denoting an absent optional value
    pub absent_literal: &'static str,
    /// Prefix turning a `{name}` placeholder into the target's
    /// string-interpolation form
    pub interpolation_prefix: &'static str,
    /// Envelope type constructor applied to the canonical return type
    pub response_envelope: Option<&'static str>,
    /// Synthetic transport parameter inserted after path parameters in
    /// route declarations
    pub request_param: Option<&'static str>,
}

impl Dialect {
    /// Base table shared by the Scala renditions
    fn scala() -> Self {
        Self {
            sequence_source: "List",
            sequence_target: "Seq",
            optional_wrapper: "Option",
            union_separator: " | ",
            no_content_type: "Unit",
            absent_literal: "None",
            interpolation_prefix: "$",
            response_envelope: None,
            request_param: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_as_str() {
        assert_eq!(TargetKind::ScalaCask.as_str(), "scala_cask");
        assert_eq!(TargetKind::ScalaClient.as_str(), "scala_client");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TargetKind::ScalaCask), "scala_cask");
        assert_eq!(format!("{}", TargetKind::ScalaClient), "scala_client");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "scala_cask".parse::<TargetKind>().unwrap(),
            TargetKind::ScalaCask
        );
        assert_eq!(
            "scala_client".parse::<TargetKind>().unwrap(),
            TargetKind::ScalaClient
        );

        // Test case insensitivity
        assert_eq!(
            "SCALA_CASK".parse::<TargetKind>().unwrap(),
            TargetKind::ScalaCask
        );
        assert_eq!(
            "Scala_Client".parse::<TargetKind>().unwrap(),
            TargetKind::ScalaClient
        );

        // Test invalid variants
        assert!("invalid".parse::<TargetKind>().is_err());
        assert!("".parse::<TargetKind>().is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(TargetKind::default(), TargetKind::ScalaCask);
    }

    #[test]
    fn test_all() {
        let all_kinds: Vec<_> = TargetKind::all().collect();
        assert_eq!(all_kinds.len(), 2);

        let unique_kinds: HashSet<_> = TargetKind::all().collect();
        assert_eq!(unique_kinds.len(), 2);

        assert!(unique_kinds.contains(&TargetKind::ScalaCask));
        assert!(unique_kinds.contains(&TargetKind::ScalaClient));
    }

    #[test]
    fn test_dialect_differences() {
        let server = TargetKind::ScalaCask.dialect();
        assert_eq!(server.response_envelope, Some("ServiceResponse"));
        assert_eq!(server.request_param, Some("request : cask.Request"));

        let client = TargetKind::ScalaClient.dialect();
        assert_eq!(client.response_envelope, None);
        assert_eq!(client.request_param, None);

        // the shared base table
        for kind in TargetKind::all() {
            let dialect = kind.dialect();
            assert_eq!(dialect.sequence_source, "List");
            assert_eq!(dialect.sequence_target, "Seq");
            assert_eq!(dialect.optional_wrapper, "Option");
            assert_eq!(dialect.union_separator, " | ");
            assert_eq!(dialect.no_content_type, "Unit");
            assert_eq!(dialect.absent_literal, "None");
            assert_eq!(dialect.interpolation_prefix, "$");
        }
    }
}
