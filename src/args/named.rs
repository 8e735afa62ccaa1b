//! Named-argument assembly and wire payloads.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use super::coerce::coerce_arguments;
use crate::catalog::{CallSpec, ParamSpec, Signature};

/// Literal the remote side reads as "parameter not supplied".
pub const OMITTED_SENTINEL: &str = "~~NULL~~";

/// Replacement for redacted argument values in diagnostics.
const REDACTED: &str = "***";

/// A named parameter either carries a value or was omitted by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Omitted,
    Present(Value),
}

impl ArgValue {
    pub fn is_omitted(&self) -> bool {
        matches!(self, ArgValue::Omitted)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ArgValue::Omitted => None,
            ArgValue::Present(v) => Some(v),
        }
    }
}

impl Serialize for ArgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArgValue::Omitted => serializer.serialize_str(OMITTED_SENTINEL),
            ArgValue::Present(v) => v.serialize(serializer),
        }
    }
}

/// Ordered mapping from declared parameter name to value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamedArguments {
    entries: Vec<(&'static str, ArgValue)>,
}

impl NamedArguments {
    /// Every declared name starts as `Omitted`; coerced values overwrite in
    /// index order, except `null`, which leaves the slot omitted.
    pub fn build(params: &[ParamSpec], coerced: &[Value]) -> Self {
        let mut entries: Vec<_> = params.iter().map(|p| (p.name, ArgValue::Omitted)).collect();
        for (slot, value) in entries.iter_mut().zip(coerced) {
            if !value.is_null() {
                slot.1 = ArgValue::Present(value.clone());
            }
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ArgValue)> {
        self.entries.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for NamedArguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Body of one outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Named(NamedArguments),
    Positional(Vec<Value>),
}

impl Payload {
    /// Coerce `args` against `spec` and shape them for the wire.
    pub fn for_call(spec: &CallSpec, args: &[Value]) -> Self {
        let coerced = coerce_arguments(args, spec.params());
        match spec.signature {
            Signature::Positional => Payload::Positional(coerced),
            Signature::Named(params) => Payload::Named(NamedArguments::build(params, &coerced)),
        }
    }

    /// An empty payload is sent without any body.
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Named(named) => named.is_empty(),
            Payload::Positional(values) => values.is_empty(),
        }
    }

    /// JSON rendering with values of sensitive parameters masked.
    ///
    /// A parameter is sensitive when its name contains any of `fields`,
    /// compared ASCII case-insensitively.
    pub fn redacted(&self, fields: &[String]) -> Value {
        match self {
            Payload::Positional(values) => Value::Array(values.clone()),
            Payload::Named(named) => {
                let mut map = serde_json::Map::with_capacity(named.len());
                for (name, value) in named.iter() {
                    let lowered = name.to_ascii_lowercase();
                    let sensitive = fields
                        .iter()
                        .any(|f| !f.is_empty() && lowered.contains(&f.to_ascii_lowercase()));
                    let rendered = match value {
                        ArgValue::Present(_) if sensitive => Value::String(REDACTED.to_string()),
                        ArgValue::Present(v) => v.clone(),
                        ArgValue::Omitted => Value::String(OMITTED_SENTINEL.to_string()),
                    };
                    map.insert(name.to_string(), rendered);
                }
                Value::Object(map)
            }
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Named(named) => named.serialize(serializer),
            Payload::Positional(values) => values.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ParamKind};
    use serde_json::json;

    const LOGIN: &[ParamSpec] = &[
        ParamSpec::new("email", ParamKind::Str),
        ParamSpec::new("password", ParamKind::Str),
        ParamSpec::new("idStore", ParamKind::Integer),
    ];

    #[test]
    fn test_trailing_parameters_stay_omitted() {
        let named = NamedArguments::build(LOGIN, &[json!("a@b.it")]);
        assert_eq!(named.len(), 3);
        assert_eq!(named.get("email"), Some(&ArgValue::Present(json!("a@b.it"))));
        assert!(named.get("password").unwrap().is_omitted());
        assert!(named.get("idStore").unwrap().is_omitted());
    }

    #[test]
    fn test_serialized_in_declared_order_with_sentinel() {
        let named = NamedArguments::build(LOGIN, &[json!("a@b.it"), Value::Null]);
        let text = serde_json::to_string(&named).unwrap();
        assert_eq!(text, r#"{"email":"a@b.it","password":"~~NULL~~","idStore":"~~NULL~~"}"#);
    }

    #[test]
    fn test_null_passthrough_becomes_sentinel() {
        let spec = Catalog::builtin().lookup("ID_DOExecute").unwrap();
        let payload = Payload::for_call(spec, &[json!("<x/>"), json!("M"), json!("C"), Value::Null, json!("1")]);
        let Payload::Named(named) = &payload else {
            panic!("expected named payload");
        };
        assert!(named.get("Params").unwrap().is_omitted());
        assert_eq!(named.get("RetDoc").unwrap().as_value(), Some(&json!(1)));
    }

    #[test]
    fn test_zero_parameter_call_is_empty() {
        let spec = Catalog::builtin().lookup("init").unwrap();
        let payload = Payload::for_call(spec, &[]);
        assert!(payload.is_empty());

        let payload = Payload::for_call(spec, &[json!(5), json!(6)]);
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!([5]));
    }

    #[test]
    fn test_redaction() {
        let spec = Catalog::builtin().lookup("TryLogin").unwrap();
        let payload = Payload::for_call(spec, &[json!("a@b.it"), json!("hunter2")]);
        let shown = payload.redacted(&["PASS".to_string()]);
        assert_eq!(shown, json!({"email": "a@b.it", "password": "***", "idStore": "~~NULL~~"}));
    }

    #[test]
    fn test_redacted_keeps_declared_order() {
        let spec = Catalog::builtin().lookup("GetProdotti").unwrap();
        let payload = Payload::for_call(spec, &[json!(3), json!("it"), json!(9)]);
        let text = serde_json::to_string(&payload.redacted(&[])).unwrap();
        assert_eq!(text, r#"{"idStore":3,"lingua":"it","idUtente":9,"idSoggetto":"~~NULL~~"}"#);
    }
}
