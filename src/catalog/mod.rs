//! Call catalog.
//!
//! # Responsibilities
//! - Describe every remote operation as data: name + ordered parameter specs
//! - Resolve a caller-supplied call name to its canonical spec
//!
//! # Design Decisions
//! - The table is static; adding a call means adding one row in `calls.rs`
//! - Lookup tries the exact name first, then an ASCII case-insensitive match,
//!   since legacy callers were never consistent about casing
//! - The canonical name (not the caller's spelling) goes on the wire

mod calls;

use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Declared type of one call parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamKind {
    Integer,
    #[serde(rename = "string")]
    Str,
    Double,
    DateTime,
    Binary,
    /// Untyped value forwarded as-is (`anyTypeArray` and anonymous slots).
    Passthrough,
}

impl ParamKind {
    /// Map a WSDL-style type name onto a kind. Unknown names pass through.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "integer" | "int" | "long" => Self::Integer,
            "string" => Self::Str,
            "double" | "float" => Self::Double,
            "dateTime" => Self::DateTime,
            "base64Binary" => Self::Binary,
            _ => Self::Passthrough,
        }
    }
}

/// One named, typed parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn new(name: &'static str, kind: ParamKind) -> Self {
        Self { name, kind }
    }
}

/// How the coerced arguments of a call are put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// A single anonymous passthrough slot; arguments travel as a JSON array.
    Positional,
    /// Named parameters; arguments travel as a JSON object keyed by name.
    Named(&'static [ParamSpec]),
}

/// Static description of one logical call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSpec {
    pub name: &'static str,
    pub signature: Signature,
}

/// Parameter list used for coercion of positional calls.
const POSITIONAL_SLOT: &[ParamSpec] = &[ParamSpec::new("", ParamKind::Passthrough)];

impl CallSpec {
    pub const fn named(name: &'static str, params: &'static [ParamSpec]) -> Self {
        Self {
            name,
            signature: Signature::Named(params),
        }
    }

    pub const fn positional(name: &'static str) -> Self {
        Self {
            name,
            signature: Signature::Positional,
        }
    }

    /// Ordered parameter specs used for coercion.
    pub fn params(&self) -> &'static [ParamSpec] {
        match self.signature {
            Signature::Positional => POSITIONAL_SLOT,
            Signature::Named(params) => params,
        }
    }
}

/// Index over the call table.
#[derive(Debug)]
pub struct Catalog {
    calls: &'static [CallSpec],
    exact: HashMap<&'static str, usize>,
    folded: HashMap<String, usize>,
}

impl Catalog {
    /// Build an index over an arbitrary table.
    pub fn new(calls: &'static [CallSpec]) -> Self {
        let mut exact = HashMap::with_capacity(calls.len());
        let mut folded = HashMap::with_capacity(calls.len());
        for (i, call) in calls.iter().enumerate() {
            exact.insert(call.name, i);
            folded.entry(call.name.to_ascii_lowercase()).or_insert(i);
        }
        Self {
            calls,
            exact,
            folded,
        }
    }

    /// The built-in table of Reacto operations.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(calls::CALLS))
    }

    /// Resolve a call name to its spec.
    pub fn lookup(&self, name: &str) -> Option<&'static CallSpec> {
        let calls = self.calls;
        self.exact
            .get(name)
            .or_else(|| self.folded.get(&name.to_ascii_lowercase()))
            .map(|&i| &calls[i])
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CallSpec> {
        self.calls.iter()
    }
}
