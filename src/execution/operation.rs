//! The operation driver (C9): pick the operation to run, resolve its
//! variables, and drive resolution to a final response envelope (§6/§7).

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::Instrument;

use crate::ast::{AstValue, Definition, Document, OperationDefinition, OperationType, Selection};
use crate::error::{ErrorPath, GraphQLError};
use crate::execution::context::ResolveContext;
use crate::execution::resolve::{self, Outcome};
use crate::introspection;
use crate::schema::meta::Boxed;
use crate::schema::model::Schema;
use crate::value::{Value, VariableMap};

/// One entry of a response's `errors` array.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseError {
    pub message: String,
    pub path: ErrorPath,
}

impl From<GraphQLError> for ResponseError {
    fn from(e: GraphQLError) -> Self {
        ResponseError { message: e.message(), path: e.path() }
    }
}

/// The `{ data, errors }` envelope returned by [`execute`].
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionResponse {
    pub data: Option<Value>,
    pub errors: Vec<ResponseError>,
}

/// Run `document` against `schema`. Query and mutation root object types
/// must declare `()` as their field source type — all request-scoped state
/// is expected to live in `ctx`, not in a root value, matching the
/// convention every resolver in this engine is written against.
pub async fn execute<Ctx>(
    schema: &Schema<Ctx>,
    document: &Document,
    operation_name: Option<&str>,
    variables: &VariableMap,
    ctx: &Ctx,
) -> ExecutionResponse
where
    Ctx: Sync + 'static,
{
    let span = tracing::info_span!("graphql_execute", operation_name = operation_name.unwrap_or(""));
    match execute_inner(schema, document, operation_name, variables, ctx).instrument(span).await {
        Ok((data, errors)) => {
            ExecutionResponse { data, errors: errors.into_iter().map(Into::into).collect() }
        }
        Err(e) => ExecutionResponse { data: None, errors: vec![e.into()] },
    }
}

async fn execute_inner<Ctx>(
    schema: &Schema<Ctx>,
    document: &Document,
    operation_name: Option<&str>,
    variables: &VariableMap,
    ctx: &Ctx,
) -> Result<(Option<Value>, Vec<GraphQLError>), GraphQLError>
where
    Ctx: Sync + 'static,
{
    let operation = select_operation(document, operation_name)?;
    let vars = effective_variables(operation, variables)?;
    let introspection = Arc::new(introspection::reflect(schema));
    let query_root_name = schema.query.as_object().expect("schema query root is an object").name.clone();

    let (root_type, concurrent) = match operation.operation_type {
        OperationType::Query => (&schema.query, true),
        OperationType::Mutation => (
            schema.mutation.as_ref().ok_or(GraphQLError::MutationsNotConfigured)?,
            false,
        ),
        OperationType::Subscription => return Err(GraphQLError::SubscriptionsNotConfigured),
    };
    let root_object = root_type.as_object().expect("schema roots are always objects");

    let rc = ResolveContext {
        ctx,
        document,
        variables: &vars,
        introspection: &introspection,
        query_root_name: &query_root_name,
        concurrent,
    };

    let root_value = Boxed::new(());
    let selections: Vec<&Selection> = operation.selection_set.iter().collect();
    let (outcome, errors) = resolve::resolve_object(&rc, root_object, &root_value, &selections, &[], true).await?;

    let data = match outcome {
        Outcome::Value(v) => Some(v),
        Outcome::Null => None,
    };
    Ok((data, errors))
}

fn select_operation<'a>(
    document: &'a Document,
    operation_name: Option<&str>,
) -> Result<&'a OperationDefinition, GraphQLError> {
    let operations: Vec<&OperationDefinition> = document
        .definitions
        .iter()
        .filter_map(|d| match d {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
        .collect();

    if operations.is_empty() {
        return Err(GraphQLError::NoOperationFound);
    }

    // A lone operation is unambiguous and always runs, whether or not a name
    // was supplied and whether or not it matches — there's nothing else it
    // could be.
    if operations.len() == 1 {
        return Ok(operations[0]);
    }

    match operation_name {
        Some(name) => operations
            .into_iter()
            .find(|op| op.name.as_deref() == Some(name))
            .ok_or_else(|| GraphQLError::OperationNotFound(name.to_string())),
        None => Err(GraphQLError::OperationNameRequired),
    }
}

fn effective_variables(operation: &OperationDefinition, provided: &VariableMap) -> Result<VariableMap, GraphQLError> {
    let mut vars = provided.clone();
    for vd in &operation.variable_definitions {
        if !vars.contains_key(&vd.name) {
            if let Some(default) = &vd.default_value {
                vars.insert(vd.name.clone(), ast_const_to_value(default)?);
            }
        }
    }
    Ok(vars)
}

fn ast_const_to_value(v: &AstValue) -> Result<Value, GraphQLError> {
    Ok(match v {
        AstValue::Null => Value::Null,
        AstValue::Int(i) => Value::Int(*i),
        AstValue::Float(f) => Value::Float(*f),
        AstValue::String(s) => Value::String(s.clone()),
        AstValue::Boolean(b) => Value::Boolean(*b),
        AstValue::Enum(e) => Value::Enum(e.clone()),
        AstValue::Variable(name) => {
            return Err(GraphQLError::ArgumentError(format!(
                "Variable \"${}\" cannot appear in a default value",
                name
            )))
        }
        AstValue::List(items) => {
            Value::List(items.iter().map(ast_const_to_value).collect::<Result<_, _>>()?)
        }
        AstValue::Map(entries) => {
            let mut map = IndexMap::new();
            for (k, v) in entries {
                map.insert(k.clone(), ast_const_to_value(v)?);
            }
            Value::Map(map)
        }
    })
}
