//! The canonical value representations used by the engine.
//!
//! `Value` is the shape of anything that ends up in a response: the leaves
//! produced by scalar/enum serialization and the `data`/`errors` envelope
//! itself. `AstValue` is the superset used while an argument or variable
//! default is still a literal from the query document, before variables
//! have been substituted.

use indexmap::IndexMap;

/// A JSON-shaped value produced by resolving a field.
///
/// Object keys preserve insertion order: the response shape must match the
/// order fields appear in the query after fragment flattening, so this is
/// not merely cosmetic.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Enum(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl Value {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn int(i: i64) -> Self {
        Value::Int(i)
    }

    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn enum_value(v: impl Into<String>) -> Self {
        Value::Enum(v.into())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    pub fn map(entries: IndexMap<String, Value>) -> Self {
        Value::Map(entries)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

/// A value that may still reference a query variable.
///
/// This is the value language the AST contract (`ast::AstValue`) is built
/// from: it extends `Value` with a `Variable` case, and its lists/maps are
/// themselves made of `AstValue`, not `Value`.
#[derive(Clone, Debug, PartialEq)]
pub enum AstValue {
    Null,
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Enum(String),
    Variable(String),
    List(Vec<AstValue>),
    Map(Vec<(String, AstValue)>),
}

impl AstValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AstValue::Null)
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            AstValue::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Resolve a single layer of variable reference against the supplied
    /// variable map, returning the constant `AstValue` bound to it (or
    /// `AstValue::Null` if unbound). Nested variables inside lists/maps are
    /// left untouched here; the argument evaluator recurses into those as it
    /// walks the target type.
    pub fn substitute_top_level<'a>(&'a self, variables: &'a VariableMap) -> SubstValue<'a> {
        match self {
            AstValue::Variable(name) => match variables.get(name) {
                Some(v) => SubstValue::Bound(v),
                None => SubstValue::Missing(name),
            },
            other => SubstValue::Literal(other),
        }
    }
}

/// Outcome of substituting a (possibly variable) `AstValue`.
pub enum SubstValue<'a> {
    /// A literal value straight from the query document.
    Literal(&'a AstValue),
    /// A variable that resolved to a concrete constant `Value`.
    Bound(&'a Value),
    /// A variable with no entry in the variable map.
    Missing(&'a str),
}

/// The variables supplied alongside a request, as constant `Value`s.
pub type VariableMap = IndexMap<String, Value>;

/// Convert a constant `Value` into the `AstValue` language, for embedding
/// default values or variable bindings back into literal position.
impl From<Value> for AstValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => AstValue::Null,
            Value::Int(i) => AstValue::Int(i),
            Value::Float(f) => AstValue::Float(f),
            Value::String(s) => AstValue::String(s),
            Value::Boolean(b) => AstValue::Boolean(b),
            Value::Enum(e) => AstValue::Enum(e),
            Value::List(items) => AstValue::List(items.into_iter().map(Into::into).collect()),
            Value::Map(entries) => {
                AstValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_map_preserves_insertion_order() {
        let mut m = IndexMap::new();
        m.insert("b".to_string(), Value::int(1));
        m.insert("a".to_string(), Value::int(2));
        let v = Value::map(m);
        let keys: Vec<_> = v.as_map().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn ast_value_from_value_roundtrips_scalars() {
        assert_eq!(AstValue::from(Value::int(4)), AstValue::Int(4));
        assert_eq!(AstValue::from(Value::string("hi")), AstValue::String("hi".into()));
        assert_eq!(AstValue::from(Value::Null), AstValue::Null);
    }
}
