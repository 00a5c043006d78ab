use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{MISSING_DESCRIPTION, MISSING_NAME, PackageError};

/// File holding the manifest inside a package directory.
pub const MANIFEST_FILE: &str = "package.json";

/// On-disk package definition.
///
/// Every field is optional at the parsing stage so that validation can report
/// which required field is missing rather than a generic parse error.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    /// Long form of `desc`, used when `desc` is missing or empty
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub install: Option<InstallSpec>,
}

/// How a package installs itself.
///
/// ```json
/// { "install": { "run": { "program": "./install.sh", "args": ["--quiet"] } } }
/// { "install": { "copy": ["bin/tool", "README.md"] } }
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum InstallSpec {
    Run(RunSpec),
    Copy(Vec<PathBuf>),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RunSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Manifest {
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Returns the non-empty `(name, description)` pair.
    ///
    /// The name is checked before the description.
    pub fn require_fields(&self, identifier: &str) -> Result<(String, String), PackageError> {
        let name =
            non_empty(&self.name).ok_or_else(|| PackageError::invalid(identifier, MISSING_NAME))?;
        let desc = non_empty(&self.desc)
            .or_else(|| non_empty(&self.description))
            .ok_or_else(|| PackageError::invalid(identifier, MISSING_DESCRIPTION))?;
        Ok((name.to_string(), desc.to_string()))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(err: PackageError) -> String {
        match err {
            PackageError::InvalidDescriptor { reason, .. } => reason,
            other => panic!("Expected InvalidDescriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_full_manifest() {
        let manifest = Manifest::parse(
            r#"{
                "name": "Foo",
                "desc": "A tool",
                "install": { "run": { "program": "./install.sh", "args": ["-q"] } }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("Foo"));
        assert_eq!(manifest.desc.as_deref(), Some("A tool"));
        assert_eq!(
            manifest.install,
            Some(InstallSpec::Run(RunSpec {
                program: "./install.sh".into(),
                args: vec!["-q".into()],
            }))
        );
    }

    #[test]
    fn test_parse_copy_spec_and_description_alias() {
        let manifest = Manifest::parse(
            r#"{ "name": "Foo", "description": "A tool", "install": { "copy": ["bin/foo"] } }"#,
        )
        .unwrap();

        assert_eq!(manifest.description.as_deref(), Some("A tool"));
        assert_eq!(
            manifest.require_fields("foo").unwrap().1,
            "A tool".to_string()
        );
        assert_eq!(
            manifest.install,
            Some(InstallSpec::Copy(vec![PathBuf::from("bin/foo")]))
        );
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let manifest =
            Manifest::parse(r#"{ "name": "Foo", "desc": "A tool", "version": "1.0" }"#).unwrap();
        assert!(manifest.install.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(Manifest::parse("module.exports = {}").is_err());
        assert!(Manifest::parse(r#"{ "name": 42 }"#).is_err());
    }

    #[test]
    fn test_require_fields() {
        let manifest = Manifest {
            name: Some("Foo".into()),
            desc: Some("A tool".into()),
            ..Default::default()
        };
        assert_eq!(
            manifest.require_fields("foo").unwrap(),
            ("Foo".to_string(), "A tool".to_string())
        );
    }

    #[test]
    fn test_require_fields_checks_name_first() {
        // Both missing: the name is reported
        let manifest = Manifest::default();
        assert_eq!(reason(manifest.require_fields("x").unwrap_err()), MISSING_NAME);

        let manifest = Manifest {
            name: Some(String::new()),
            desc: Some("A tool".into()),
            ..Default::default()
        };
        assert_eq!(reason(manifest.require_fields("x").unwrap_err()), MISSING_NAME);
    }

    #[test]
    fn test_parse_accepts_desc_and_description_together() {
        let manifest = Manifest::parse(
            r#"{ "name": "Foo", "desc": "Short", "description": "A longer description" }"#,
        )
        .unwrap();
        assert_eq!(
            manifest.require_fields("foo").unwrap(),
            ("Foo".to_string(), "Short".to_string())
        );

        // An empty desc falls back to description
        let manifest =
            Manifest::parse(r#"{ "name": "Foo", "desc": "", "description": "A tool" }"#).unwrap();
        assert_eq!(manifest.require_fields("foo").unwrap().1, "A tool");
    }

    #[test]
    fn test_require_fields_missing_description() {
        let manifest = Manifest::parse(r#"{ "name": "Bar", "desc": null }"#).unwrap();
        assert_eq!(
            reason(manifest.require_fields("bar").unwrap_err()),
            MISSING_DESCRIPTION
        );

        let manifest = Manifest::parse(r#"{ "name": "Bar", "desc": "" }"#).unwrap();
        assert_eq!(
            reason(manifest.require_fields("bar").unwrap_err()),
            MISSING_DESCRIPTION
        );
    }
}
