//! `package.json` manifest parsing.
//!
//! The manifest is treated as an unordered string-keyed document. Only the
//! top-level `version` field is ever consulted; everything else is carried
//! along untouched.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use crate::core::errors::ReportError;

/// File name of the manifest, looked up beside the running executable.
pub const MANIFEST_FILE: &str = "package.json";

/// A parsed `package.json`.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path the manifest was loaded from.
    pub path: PathBuf,
    /// Top-level fields. Empty when the document is not a JSON object.
    pub fields: Map<String, Value>,
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content.
    ///
    /// A syntactically valid document whose top level is not an object
    /// (`[]`, `"1.0"`, `null`) has no fields rather than being an error.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ReportError> {
        let document: Value =
            serde_json::from_str(content).map_err(|source| ReportError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let fields = match document {
            Value::Object(fields) => fields,
            other => {
                debug!(kind = json_kind(&other), "manifest is not a JSON object");
                Map::new()
            }
        };

        debug!(path = %path.display(), fields = fields.len(), "parsed manifest");

        Ok(Manifest {
            path: path.to_path_buf(),
            fields,
        })
    }

    /// The `version` field coerced to a string.
    ///
    /// Absent, `null`, empty, `false`, zero, arrays and objects all count as
    /// missing. Other numbers are rendered the way JavaScript prints them
    /// (`1.0` as `1`, `1e2` as `100`) and `true` as `true`.
    pub fn version(&self) -> Option<String> {
        let value = self.fields.get("version")?;
        let version = match value {
            Value::String(s) if s.is_empty() => return None,
            Value::String(s) => return Some(s.clone()),
            Value::Bool(true) => "true".to_string(),
            Value::Number(n) if n.as_f64() == Some(0.0) => return None,
            Value::Number(n) => number_text(n),
            Value::Null | Value::Bool(false) | Value::Array(_) | Value::Object(_) => {
                return None
            }
        };

        warn!(
            version = %version,
            "`version` in {} is not a string; using its text form",
            self.path.display()
        );
        Some(version)
    }

    /// The `version` field, or [`ReportError::VersionNotFound`].
    pub fn require_version(&self) -> Result<String, ReportError> {
        self.version().ok_or_else(|| ReportError::VersionNotFound {
            path: self.path.clone(),
        })
    }
}

/// Render a JSON number the way JavaScript's `Number#toString` does.
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };

    // Plain decimal between 1e-6 and 1e21, exponent form outside it.
    let magnitude = f.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let text = format!("{:e}", f);
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        }
    } else {
        format!("{}", f)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Manifest {
        Manifest::parse(content, Path::new("/opt/app/package.json")).unwrap()
    }

    #[test]
    fn test_parse_basic_manifest() {
        let manifest = parse(
            r#"{
  "name": "sample-app",
  "version": "1.2.3",
  "scripts": { "start": "node index.js" }
}"#,
        );

        assert_eq!(manifest.version().as_deref(), Some("1.2.3"));
        assert_eq!(manifest.fields.len(), 3);
        assert_eq!(manifest.path, Path::new("/opt/app/package.json"));
    }

    #[test]
    fn test_prerelease_version_is_untouched() {
        let manifest = parse(r#"{"version": "2.0.0-rc.1+build.5"}"#);
        assert_eq!(manifest.version().as_deref(), Some("2.0.0-rc.1+build.5"));
    }

    #[test]
    fn test_missing_version() {
        assert_eq!(parse(r#"{"name": "sample-app"}"#).version(), None);
    }

    #[test]
    fn test_empty_and_null_version() {
        assert_eq!(parse(r#"{"version": ""}"#).version(), None);
        assert_eq!(parse(r#"{"version": null}"#).version(), None);
    }

    #[test]
    fn test_scalar_versions_are_coerced() {
        assert_eq!(parse(r#"{"version": 2}"#).version().as_deref(), Some("2"));
        assert_eq!(
            parse(r#"{"version": 1.5}"#).version().as_deref(),
            Some("1.5")
        );
        assert_eq!(
            parse(r#"{"version": true}"#).version().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_numbers_render_like_javascript() {
        let cases = [
            ("1.0", "1"),
            ("1e2", "100"),
            ("100000000000000000000", "100000000000000000000"),
            ("-3", "-3"),
            ("2.50", "2.5"),
            ("1e21", "1e+21"),
            ("1.5e-7", "1.5e-7"),
            ("0.000001", "0.000001"),
        ];
        for (json, expected) in cases {
            let manifest = parse(&format!(r#"{{"version": {json}}}"#));
            assert_eq!(manifest.version().as_deref(), Some(expected), "{json}");
        }
    }

    #[test]
    fn test_falsy_and_structured_versions_are_missing() {
        assert_eq!(parse(r#"{"version": 0}"#).version(), None);
        assert_eq!(parse(r#"{"version": false}"#).version(), None);
        assert_eq!(parse(r#"{"version": [1, 2, 3]}"#).version(), None);
        assert_eq!(parse(r#"{"version": {"major": 1}}"#).version(), None);
    }

    #[test]
    fn test_nested_version_is_ignored() {
        let manifest = parse(r#"{"engines": {"version": "18"}}"#);
        assert_eq!(manifest.version(), None);
    }

    #[test]
    fn test_non_object_document_has_no_fields() {
        for content in ["[]", "\"1.2.3\"", "42", "null"] {
            let manifest = parse(content);
            assert!(manifest.fields.is_empty(), "{content}");
            assert_eq!(manifest.version(), None, "{content}");
        }
    }

    #[test]
    fn test_require_version_reports_not_found() {
        let err = parse("{}").require_version().unwrap_err();
        assert!(matches!(
            err,
            ReportError::VersionNotFound { ref path } if path == Path::new("/opt/app/package.json")
        ));
    }

    #[test]
    fn test_malformed_manifest_is_parse_error() {
        let err = Manifest::parse(r#"{"version": "1.2"#, Path::new("package.json")).unwrap_err();
        match err {
            ReportError::Parse { source, .. } => assert!(source.is_eof()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_manifest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_FILE);
        std::fs::write(&path, r#"{"version": "0.9.0"}"#).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.require_version().unwrap(), "0.9.0");
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(MANIFEST_FILE);
        std::fs::write(&path, [b'{', 0xff, 0xfe, b'}']).unwrap();

        match Manifest::load(&path).unwrap_err() {
            ReportError::Read { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_manifest() {
        let tmp = TempDir::new().unwrap();
        let err = Manifest::load(&tmp.path().join(MANIFEST_FILE)).unwrap_err();
        match err {
            ReportError::Read { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
