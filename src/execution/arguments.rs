//! The argument evaluator (C6): resolve provided literals and variable
//! references against an `ArgList`'s descriptors, applying defaults and
//! required-ness, and hand back a coerced [`Arguments`] map (§4.4).

use indexmap::IndexMap;

use crate::ast::AstValue as DocAstValue;
use crate::error::GraphQLError;
use crate::schema::meta::{ArgList, Arguments};
use crate::value::{AstValue, Value, VariableMap};

/// Recursively replace every `Variable` node with its bound value. An
/// unbound variable is a fatal argument error (§4.4 step 2), not a silent
/// `Null` — a missing variable and an explicit `null` literal are not the
/// same thing.
fn substitute_deep(value: &AstValue, variables: &VariableMap) -> Result<AstValue, GraphQLError> {
    match value {
        AstValue::Variable(name) => variables
            .get(name)
            .cloned()
            .map(AstValue::from)
            .ok_or_else(|| GraphQLError::ArgumentError(format!("Missing variable `{}`", name))),
        AstValue::List(items) => {
            Ok(AstValue::List(items.iter().map(|v| substitute_deep(v, variables)).collect::<Result<_, _>>()?))
        }
        AstValue::Map(entries) => {
            let mut out = Vec::with_capacity(entries.len());
            for (k, v) in entries {
                out.push((k.clone(), substitute_deep(v, variables)?));
            }
            Ok(AstValue::Map(out))
        }
        other => Ok(other.clone()),
    }
}

/// Evaluate a field's provided argument literals against its declared
/// `ArgList`, producing the coerced [`Arguments`] a resolver reads from.
/// `field_name` is the field (or input object) the arguments belong to, for
/// the `expected on field \`<field>\`` error text (§4.4).
pub fn evaluate(
    descriptors: &ArgList,
    provided: &[(String, DocAstValue)],
    variables: &VariableMap,
    field_name: &str,
) -> Result<Arguments, GraphQLError> {
    let mut values = IndexMap::new();
    for descriptor in descriptors {
        let raw = provided
            .iter()
            .find(|(name, _)| name == &descriptor.name)
            .map(|(_, v)| v.clone())
            .unwrap_or(AstValue::Null);
        let substituted = substitute_deep(&raw, variables)?;

        let effective = if substituted.is_null() {
            match &descriptor.default_value {
                Some(default) => AstValue::from(default.clone()),
                None => AstValue::Null,
            }
        } else {
            substituted
        };

        if effective.is_null() && descriptor.required {
            return Err(GraphQLError::ArgumentError(format!(
                "Argument `{}` of type `{}` expected on field `{}`, but it was not provided.",
                descriptor.name,
                descriptor.input_meta.type_ref(),
                field_name,
            )));
        }

        let coerced = descriptor.coerce(&effective, variables).map_err(|msg| {
            GraphQLError::ArgumentError(format!(
                "Argument `{}` of type `{}` expected on field `{}`, but found invalid value: {}",
                descriptor.name,
                descriptor.input_meta.type_ref(),
                field_name,
                msg
            ))
        })?;
        values.insert(descriptor.name.clone(), coerced);
    }
    Ok(Arguments::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::meta::{arg, default_arg, int_arg, string_arg};

    #[test]
    fn missing_required_argument_is_an_argument_error() {
        let descriptors: ArgList = vec![arg("name", string_arg())];
        let err = evaluate(&descriptors, &[], &VariableMap::new(), "human").unwrap_err();
        assert_eq!(
            err,
            GraphQLError::ArgumentError(
                "Argument `name` of type `String!` expected on field `human`, but it was not provided.".to_string()
            )
        );
    }

    #[test]
    fn default_is_used_when_argument_omitted() {
        let descriptors: ArgList = vec![default_arg("limit", crate::schema::meta::arg_nullable(int_arg()), 10i64)];
        let args = evaluate(&descriptors, &[], &VariableMap::new(), "posts").unwrap();
        assert_eq!(args.get::<i64>("limit"), 10);
    }

    #[test]
    fn variable_reference_is_substituted() {
        let descriptors: ArgList = vec![arg("id", string_arg())];
        let mut vars = VariableMap::new();
        vars.insert("theId".to_string(), Value::string("1000"));
        let provided = vec![("id".to_string(), AstValue::Variable("theId".to_string()))];
        let args = evaluate(&descriptors, &provided, &vars, "human").unwrap();
        assert_eq!(args.get::<String>("id"), "1000");
    }

    #[test]
    fn unbound_variable_is_a_missing_variable_argument_error() {
        let descriptors: ArgList = vec![arg("id", string_arg())];
        let provided = vec![("id".to_string(), AstValue::Variable("id".to_string()))];
        let err = evaluate(&descriptors, &provided, &VariableMap::new(), "human").unwrap_err();
        assert_eq!(err, GraphQLError::ArgumentError("Missing variable `id`".to_string()));
        assert_eq!(err.path(), Vec::<String>::new());
    }
}
