//! The AST contract consumed from the parser (`spec.md` §6).
//!
//! The lexer/parser itself is an external collaborator and out of scope
//! here; this module only describes the shape it is expected to hand us.
//! A real integration constructs these types from whatever concrete parser
//! it uses (e.g. translating from `graphql-parser`'s or `apollo-parser`'s
//! own AST).

pub use crate::value::AstValue;

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub selection_set: Vec<Selection>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub default_value: Option<AstValue>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub selection_set: Vec<Selection>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<(String, AstValue)>,
    pub selection_set: Vec<Selection>,
}

impl Field {
    /// The key this field's result is stored under in the response map.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub selection_set: Vec<Selection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_key_prefers_alias() {
        let f = Field {
            alias: Some("luke".into()),
            name: "human".into(),
            arguments: vec![],
            selection_set: vec![],
        };
        assert_eq!(f.response_key(), "luke");
    }

    #[test]
    fn response_key_falls_back_to_name() {
        let f = Field {
            alias: None,
            name: "hero".into(),
            arguments: vec![],
            selection_set: vec![],
        };
        assert_eq!(f.response_key(), "hero");
    }
}
