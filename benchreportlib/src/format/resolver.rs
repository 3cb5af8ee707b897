//! Applies formatter classes to cell values.

use std::collections::BTreeMap;

use log::debug;
use serde_json::{Map, Value};

use super::{ClassDefinitions, FormatOptions, FormatStep, FormatterRegistry};
use crate::error::BenchReportError;
use crate::Result;

/// Row-scoped formatter params: name → value.
pub type FormatterParams = BTreeMap<String, String>;

/// Resolves class names into formatted values.
///
/// Built once from a registry and a set of class definitions; read-only
/// afterwards, so one resolver can serve any number of renders.
#[derive(Debug)]
pub struct FormatterResolver {
    registry: FormatterRegistry,
    classes: ClassDefinitions,
}

impl FormatterResolver {
    /// Create a resolver, checking that every class step names a registered
    /// formatter.
    pub fn new(registry: FormatterRegistry, classes: ClassDefinitions) -> Result<Self> {
        for (class, steps) in classes.iter() {
            if let Some(step) = steps.iter().find(|s| !registry.contains(&s.formatter)) {
                return Err(BenchReportError::UnknownFormatter {
                    class: class.to_string(),
                    formatter: step.formatter.clone(),
                });
            }
        }
        debug!(
            "registered {} formatter classes over formatters [{}]",
            classes.len(),
            registry.names().collect::<Vec<_>>().join(", ")
        );

        Ok(Self { registry, classes })
    }

    /// Resolver with the built-in formatters and classes.
    pub fn with_defaults() -> Result<Self> {
        Self::new(FormatterRegistry::with_builtins(), ClassDefinitions::builtin()?)
    }

    /// Class definitions known to this resolver.
    pub fn classes(&self) -> &ClassDefinitions {
        &self.classes
    }

    /// Apply each class in `class_names` to `value`, left to right.
    ///
    /// The output of each step is the input of the next. `params` fill
    /// `{{ name }}` tokens in step options.
    pub fn apply_classes<S: AsRef<str>>(
        &self,
        class_names: &[S],
        value: &str,
        params: &FormatterParams,
    ) -> Result<String> {
        let mut value = value.to_string();

        for class_name in class_names {
            let class_name = class_name.as_ref();
            let steps = self
                .classes
                .get(class_name)
                .ok_or_else(|| BenchReportError::UnknownFormatterClass(class_name.to_string()))?;

            for step in steps {
                value = self.apply_step(class_name, step, &value, params)?;
            }
        }

        Ok(value)
    }

    fn apply_step(
        &self,
        class_name: &str,
        step: &FormatStep,
        value: &str,
        params: &FormatterParams,
    ) -> Result<String> {
        let formatter = self.registry.get(&step.formatter).ok_or_else(|| {
            BenchReportError::UnknownFormatter {
                class: class_name.to_string(),
                formatter: step.formatter.clone(),
            }
        })?;
        let options = substitute_params(&step.formatter, &step.options, params)?;
        formatter.format(value, &FormatOptions::new(step.formatter.clone(), options))
    }
}

/// Replace `{{ name }}` tokens in string options with row params.
///
/// An option that is exactly one token with no matching param is dropped,
/// leaving the formatter default in place. A token inside a longer string
/// must resolve.
fn substitute_params(
    formatter: &str,
    options: &Map<String, Value>,
    params: &FormatterParams,
) -> Result<Map<String, Value>> {
    let mut resolved = Map::new();

    for (key, value) in options {
        let Value::String(text) = value else {
            resolved.insert(key.clone(), value.clone());
            continue;
        };

        if let Some(name) = whole_token(text) {
            if let Some(param) = params.get(name) {
                resolved.insert(key.clone(), Value::String(param.clone()));
            }
            continue;
        }

        resolved.insert(key.clone(), Value::String(replace_tokens(formatter, text, params)?));
    }

    Ok(resolved)
}

/// The param name if `text` is a single `{{ name }}` token.
fn whole_token(text: &str) -> Option<&str> {
    let inner = text.trim().strip_prefix("{{")?.strip_suffix("}}")?;
    if inner.contains("{{") || inner.contains("}}") {
        return None;
    }
    Some(inner.trim())
}

fn replace_tokens(formatter: &str, text: &str, params: &FormatterParams) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let name = rest[start + 2..start + 2 + len].trim();
        let param = params
            .get(name)
            .ok_or_else(|| BenchReportError::UnknownFormatterParam {
                formatter: formatter.to_string(),
                param: name.to_string(),
            })?;

        out.push_str(&rest[..start]);
        out.push_str(param);
        rest = &rest[start + 2 + len + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatOptions;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> FormatterParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn map(value: Value) -> Map<String, Value> {
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        map
    }

    #[test]
    fn test_apply_number_with_precision_param() {
        let resolver = FormatterResolver::with_defaults().unwrap();
        let out = resolver
            .apply_classes(&["number"], "1234567", &params(&[("precision", "2")]))
            .unwrap();
        assert_eq!(out, "1,234,567.00");
    }

    #[test]
    fn test_apply_number_without_param_uses_default() {
        let resolver = FormatterResolver::with_defaults().unwrap();
        let out = resolver
            .apply_classes(&["number"], "1234567.8", &FormatterParams::new())
            .unwrap();
        assert_eq!(out, "1,234,568");
    }

    #[test]
    fn test_apply_composes_left_to_right() {
        let resolver = FormatterResolver::with_defaults().unwrap();
        let out = resolver
            .apply_classes(&["diff"], "4.5", &FormatterParams::new())
            .unwrap();
        assert_eq!(out, "+4.50%");

        let classes = ClassDefinitions::new()
            .class("wrap", vec![FormatStep::new("printf").option("format", "<%s>")])
            .class("twice", vec![FormatStep::new("printf").option("format", "%s%s")]);
        let resolver = FormatterResolver::new(FormatterRegistry::with_builtins(), classes).unwrap();

        let wrapped_first = resolver
            .apply_classes(&["wrap", "twice"], "a", &FormatterParams::new())
            .unwrap();
        let twice_first = resolver
            .apply_classes(&["twice", "wrap"], "a", &FormatterParams::new())
            .unwrap();
        assert_eq!(wrapped_first, "<a><a>");
        assert_eq!(twice_first, "<aa>");
    }

    #[test]
    fn test_unknown_class_is_error() {
        let resolver = FormatterResolver::with_defaults().unwrap();
        let err = resolver
            .apply_classes(&["number", "bogus"], "1", &FormatterParams::new())
            .unwrap_err();
        match err {
            BenchReportError::UnknownFormatterClass(name) => assert_eq!(name, "bogus"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_formatter_rejected_at_construction() {
        let classes = ClassDefinitions::new().class("x", vec![FormatStep::new("sparkline")]);
        let err = FormatterResolver::new(FormatterRegistry::with_builtins(), classes).unwrap_err();
        assert!(matches!(
            err,
            BenchReportError::UnknownFormatter { ref class, ref formatter }
                if class == "x" && formatter == "sparkline"
        ));
    }

    #[test]
    fn test_unknown_formatter_at_apply_names_class() {
        // Bypasses `new` so the registry check is skipped.
        let resolver = FormatterResolver {
            registry: FormatterRegistry::new(),
            classes: ClassDefinitions::new().class("x", vec![FormatStep::new("number")]),
        };
        let err = resolver
            .apply_classes(&["x"], "1", &FormatterParams::new())
            .unwrap_err();
        assert!(matches!(
            err,
            BenchReportError::UnknownFormatter { ref class, ref formatter }
                if class == "x" && formatter == "number"
        ));
    }

    #[test]
    fn test_params_passed_through_unchanged() {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        let registry = FormatterRegistry::new().register(
            "spy",
            move |value: &str, options: &FormatOptions| -> crate::Result<String> {
                sink.lock().unwrap().push(options.get("precision").cloned());
                Ok(value.to_string())
            },
        );
        let classes = ClassDefinitions::new().class(
            "spy",
            vec![FormatStep::new("spy").option("precision", "{{ precision }}")],
        );
        let resolver = FormatterResolver::new(registry, classes).unwrap();

        resolver
            .apply_classes(&["spy"], "1", &params(&[("precision", "2")]))
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![Some(json!("2"))]);
    }

    #[test]
    fn test_substitute_whole_token() {
        let options = map(json!({"a": "{{ x }}", "b": "{{missing}}", "c": 3}));
        let out = substitute_params("t", &options, &params(&[("x", "7")])).unwrap();
        assert_eq!(out["a"], json!("7"));
        assert!(out.get("b").is_none());
        assert_eq!(out["c"], json!(3));
    }

    #[test]
    fn test_substitute_embedded_tokens() {
        let options = map(json!({"format": "%s {{ unit }}/{{ n }}", "open": "{{ never closed"}));
        let out = substitute_params("printf", &options, &params(&[("unit", "ms"), ("n", "1")]))
            .unwrap();
        assert_eq!(out["format"], json!("%s ms/1"));
        assert_eq!(out["open"], json!("{{ never closed"));

        let err = substitute_params("printf", &options, &params(&[("unit", "ms")])).unwrap_err();
        assert!(matches!(
            err,
            BenchReportError::UnknownFormatterParam { ref param, .. } if param == "n"
        ));
    }

    #[test]
    fn test_whole_token() {
        assert_eq!(whole_token("{{ a }}"), Some("a"));
        assert_eq!(whole_token(" {{b}} "), Some("b"));
        assert_eq!(whole_token("x{{ a }}"), None);
        assert_eq!(whole_token("{{ a }}{{ b }}"), None);
    }
}
