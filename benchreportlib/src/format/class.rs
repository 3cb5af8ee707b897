//! Declarative formatter classes.
//!
//! A class file is a JSON object mapping class names to an ordered list of
//! steps. Each step is `[formatter]` or `[formatter, {options}]`:
//!
//! ```json
//! {
//!     "mem":  [["number", {"decimal_places": 0}], ["printf", {"format": "%sb"}]],
//!     "diff": [["number", {"decimal_places": 2}], ["balance"], ["printf", {"format": "%s%%"}]]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::BenchReportError;
use crate::Result;

/// Built-in class definitions shipped with the library.
const BUILTIN_CLASSES: &str = include_str!("../../classes/main.json");

/// One `(formatter, options)` pair within a class.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatStep {
    /// Registered formatter name
    pub formatter: String,
    /// Options object, possibly containing `{{ param }}` tokens
    pub options: Map<String, Value>,
}

impl FormatStep {
    pub fn new(formatter: impl Into<String>) -> Self {
        Self {
            formatter: formatter.into(),
            options: Map::new(),
        }
    }

    /// Builder: set an option
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    fn from_value(class: &str, value: Value) -> Result<Self> {
        let invalid = |message: &str| {
            BenchReportError::InvalidClassDefinition(format!("class '{}': {}", class, message))
        };

        let Value::Array(parts) = value else {
            return Err(invalid("each step must be an array"));
        };
        let mut parts = parts.into_iter();

        let formatter = match parts.next() {
            Some(Value::String(name)) => name,
            _ => return Err(invalid("a step must start with a formatter name")),
        };
        let options = match parts.next() {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(options)) => options,
            Some(_) => return Err(invalid("step options must be an object")),
        };
        if parts.next().is_some() {
            return Err(invalid("a step has at most two elements"));
        }

        Ok(Self { formatter, options })
    }
}

/// Class name → ordered list of formatter steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDefinitions {
    classes: BTreeMap<String, Vec<FormatStep>>,
}

impl ClassDefinitions {
    /// Create an empty set of definitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in classes (`time`, `mem`, `diff`, ...).
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CLASSES)
    }

    /// Parse class definitions from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| BenchReportError::InvalidClassDefinition(e.to_string()))?;
        let Value::Object(entries) = value else {
            return Err(BenchReportError::InvalidClassDefinition(
                "class definitions must be a JSON object".to_string(),
            ));
        };

        let mut definitions = Self::new();
        for (name, steps) in entries {
            let Value::Array(steps) = steps else {
                return Err(BenchReportError::InvalidClassDefinition(format!(
                    "class '{}': expected a list of steps",
                    name
                )));
            };
            let steps = steps
                .into_iter()
                .map(|step| FormatStep::from_value(&name, step))
                .collect::<Result<Vec<_>>>()?;
            definitions.classes.insert(name, steps);
        }
        Ok(definitions)
    }

    /// Load class definitions from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| BenchReportError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Builder: define (or replace) a class
    pub fn class(mut self, name: impl Into<String>, steps: Vec<FormatStep>) -> Self {
        self.classes.insert(name.into(), steps);
        self
    }

    /// Merge `other` into `self`; classes in `other` replace same-named ones.
    pub fn merge(mut self, other: ClassDefinitions) -> Self {
        self.classes.extend(other.classes);
        self
    }

    /// Steps for a class, if defined.
    pub fn get(&self, name: &str) -> Option<&[FormatStep]> {
        self.classes.get(name).map(Vec::as_slice)
    }

    /// Iterate over `(class name, steps)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FormatStep])> {
        self.classes
            .iter()
            .map(|(name, steps)| (name.as_str(), steps.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_classes() {
        let defs = ClassDefinitions::from_json(
            r#"{
                "mem": [["number", {"decimal_places": 0}], ["printf", {"format": "%sb"}]],
                "plus": [["balance"]]
            }"#,
        )
        .unwrap();

        assert_eq!(defs.len(), 2);
        let mem = defs.get("mem").unwrap();
        assert_eq!(mem.len(), 2);
        assert_eq!(mem[0].formatter, "number");
        assert_eq!(mem[0].options["decimal_places"], json!(0));
        assert_eq!(mem[1].options["format"], json!("%sb"));

        let plus = defs.get("plus").unwrap();
        assert!(plus[0].options.is_empty());
        assert!(defs.get("missing").is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_steps() {
        for json in [
            r#"[]"#,
            r#"{"a": "number"}"#,
            r#"{"a": ["number"]}"#,
            r#"{"a": [[1]]}"#,
            r#"{"a": [["number", "opts"]]}"#,
            r#"{"a": [["number", {}, {}]]}"#,
            r#"not json"#,
        ] {
            let err = ClassDefinitions::from_json(json).unwrap_err();
            assert!(
                matches!(err, BenchReportError::InvalidClassDefinition(_)),
                "{json}"
            );
        }
    }

    #[test]
    fn test_builtin_classes_parse() {
        let defs = ClassDefinitions::builtin().unwrap();
        for name in ["time", "mem", "diff", "number", "percentage", "truncate"] {
            assert!(defs.get(name).is_some(), "missing builtin class {name}");
        }
    }

    #[test]
    fn test_merge_replaces_same_name() {
        let base = ClassDefinitions::new()
            .class("a", vec![FormatStep::new("number")])
            .class("b", vec![FormatStep::new("balance")]);
        let extra = ClassDefinitions::new().class(
            "a",
            vec![FormatStep::new("printf").option("format", "<%s>")],
        );

        let merged = base.merge(extra);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("a").unwrap()[0].formatter, "printf");
        assert_eq!(merged.get("b").unwrap()[0].formatter, "balance");
    }
}
