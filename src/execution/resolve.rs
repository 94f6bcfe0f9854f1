//! The resolver (C8): walk a selection set against a concrete source
//! value, applying the type system's shape (scalars serialize, lists map,
//! nullable wrappers unwrap, objects/abstracts recurse) and the
//! null-bubbling rule from §7 — a resolve error is absorbed into `Null` at
//! the nearest `Nullable` ancestor, otherwise the `Null` keeps propagating
//! outward past it. Argument/validation errors instead abort the whole
//! operation immediately via `Result::Err`.
//!
//! Sibling fields on a query resolve concurrently (`futures::future::join_all`);
//! sibling fields on a mutation resolve sequentially, per §5.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use indexmap::IndexMap;

use crate::ast::Selection;
use crate::error::GraphQLError;
use crate::execution::arguments;
use crate::execution::context::ResolveContext;
use crate::execution::selection::{self, CollectedField};
use crate::introspection;
use crate::schema::meta::{AbstractValue, BoxFuture, Boxed, Field, ObjectType, OutKind, OutType};
use crate::value::Value;

/// The outcome of resolving one value against its declared type.
///
/// `Null` means a resolve error occurred somewhere inside; it keeps
/// bubbling outward until it reaches a `Nullable` wrapper, which converts
/// it back into an ordinary `Value::Null` and stops the bubble.
pub enum Outcome {
    Value(Value),
    Null,
}

/// `Ok` carries this subtree's resolved outcome plus every resolve error
/// collected along the way; `Err` is a fatal argument/validation error that
/// aborts the whole operation.
type Resolution = Result<(Outcome, Vec<GraphQLError>), GraphQLError>;

fn applicable_type_names<Ctx>(object: &ObjectType<Ctx>) -> HashSet<String> {
    let mut set = HashSet::new();
    set.insert(object.name.clone());
    for a in object.abstracts() {
        set.insert(a.name.clone());
    }
    set
}

/// Resolve one collected field, including the `__typename`/`__schema`/
/// `__type` meta-fields.
async fn resolve_field<'a, Ctx>(
    rc: &'a ResolveContext<'a, Ctx>,
    object: &'a Arc<ObjectType<Ctx>>,
    src: &'a Boxed,
    cf: &CollectedField<'a>,
    path: &[String],
    is_root: bool,
) -> Resolution
where
    Ctx: Sync + 'static,
{
    if cf.field_name == "__typename" {
        return Ok((Outcome::Value(introspection::typename_value(&object.name)), Vec::new()));
    }
    if is_root && object.name == rc.query_root_name && cf.field_name == "__schema" {
        let field = introspection::schema_field::<Ctx>(rc.introspection.clone());
        return resolve_declared_field(rc, &field, src, cf, path).await;
    }
    if is_root && object.name == rc.query_root_name && cf.field_name == "__type" {
        let field = introspection::type_field::<Ctx>(rc.introspection.clone());
        return resolve_declared_field(rc, &field, src, cf, path).await;
    }

    let field = object.field_by_name(&cf.field_name).ok_or_else(|| {
        GraphQLError::ValidationError(format!("Cannot query field \"{}\" on type \"{}\".", cf.field_name, object.name))
    })?;
    resolve_declared_field(rc, field, src, cf, path).await
}

async fn resolve_declared_field<'a, Ctx>(
    rc: &'a ResolveContext<'a, Ctx>,
    field: &Field<Ctx>,
    src: &'a Boxed,
    cf: &CollectedField<'a>,
    path: &[String],
) -> Resolution
where
    Ctx: Sync + 'static,
{
    let args = arguments::evaluate(&field.args, cf.arguments, rc.variables, &field.name)?;

    let mut field_path = path.to_vec();
    field_path.push(cf.response_key.clone());

    tracing::trace!(response_key = %cf.response_key, path = ?field_path, "resolving field");

    let result = field
        .run(rc.ctx, src, &args)
        .await
        .map_err(|message| GraphQLError::ResolveError { message, path: field_path.clone() });

    let resolution = resolve_value(rc, &field.typ, result, &cf.selection_set, field_path.clone()).await;
    tracing::trace!(response_key = %cf.response_key, path = ?field_path, "resolved field");
    resolution
}

/// Resolve `value_result` against `typ`. Boxed so the mutual recursion
/// through `resolve_object` has a fixed-size future.
pub(crate) fn resolve_value<'a, Ctx>(
    rc: &'a ResolveContext<'a, Ctx>,
    typ: &'a OutType<Ctx>,
    value_result: Result<Boxed, GraphQLError>,
    selection_set: &'a [&'a Selection],
    path: Vec<String>,
) -> BoxFuture<'a, Resolution>
where
    Ctx: Sync + 'static,
{
    Box::pin(async move {
        let boxed = match value_result {
            Ok(b) => b,
            Err(e) => {
                let outcome = if typ.is_nullable() { Outcome::Value(Value::Null) } else { Outcome::Null };
                return Ok((outcome, vec![e]));
            }
        };

        match typ.kind() {
            OutKind::Nullable { of, unwrap } => match unwrap(boxed) {
                None => Ok((Outcome::Value(Value::Null), Vec::new())),
                Some(inner) => {
                    let (outcome, errs) = resolve_value(rc, of, Ok(inner), selection_set, path.clone()).await?;
                    let outcome = match outcome {
                        Outcome::Null => {
                            tracing::debug!(?path, "resolve error absorbed by nullable wrapper");
                            Outcome::Value(Value::Null)
                        }
                        value => value,
                    };
                    Ok((outcome, errs))
                }
            },
            OutKind::List { of, iter } => {
                let items = iter(boxed);
                let mut out = Vec::with_capacity(items.len());
                let mut all_errors = Vec::new();
                for (index, item) in items.into_iter().enumerate() {
                    let mut item_path = path.clone();
                    item_path.push(index.to_string());
                    let (outcome, errs) = resolve_value(rc, of, Ok(item), selection_set, item_path).await?;
                    all_errors.extend(errs);
                    match outcome {
                        Outcome::Value(v) => out.push(v),
                        Outcome::Null => return Ok((Outcome::Null, all_errors)),
                    }
                }
                Ok((Outcome::Value(Value::List(out)), all_errors))
            }
            OutKind::Scalar { serialize, .. } => match serialize(&boxed) {
                Ok(v) => Ok((Outcome::Value(v), Vec::new())),
                Err(message) => Ok((Outcome::Null, vec![GraphQLError::ResolveError { message, path }])),
            },
            OutKind::Enum { match_value, .. } => match match_value(&boxed) {
                Some(name) => Ok((Outcome::Value(Value::Enum(name)), Vec::new())),
                None => Ok((
                    Outcome::Null,
                    vec![GraphQLError::ResolveError {
                        message: "resolver returned a value with no matching enum variant".to_string(),
                        path,
                    }],
                )),
            },
            OutKind::Object(object) => resolve_object(rc, object, &boxed, selection_set, &path, false).await,
            OutKind::Abstract(_) => match boxed.downcast::<AbstractValue<Ctx>>() {
                Ok(abstract_value) => {
                    let concrete =
                        abstract_value.concrete_type.as_object().expect("add_type only binds object types").clone();
                    resolve_object(rc, &concrete, &abstract_value.value, selection_set, &path, false).await
                }
                Err(e) => Ok((Outcome::Null, vec![GraphQLError::ResolveError { message: e.message(), path }])),
            },
        }
    })
}

/// Resolve an object's selection set against its concrete source value.
pub(crate) async fn resolve_object<'a, Ctx>(
    rc: &'a ResolveContext<'a, Ctx>,
    object: &'a Arc<ObjectType<Ctx>>,
    src: &'a Boxed,
    selection_set: &'a [&'a Selection],
    path: &[String],
    is_root: bool,
) -> Resolution
where
    Ctx: Sync + 'static,
{
    let applicable = applicable_type_names(object);
    let collected = selection::collect_fields(selection_set.iter().copied(), &applicable, rc.document)?;

    let mut entries: Vec<(String, Value)> = Vec::with_capacity(collected.len());
    let mut all_errors = Vec::new();

    if rc.concurrent {
        let futures = collected.iter().map(|cf| {
            let path = path.to_vec();
            async move { (cf.response_key.clone(), resolve_field(rc, object, src, cf, &path, is_root).await) }
        });
        for (key, result) in join_all(futures).await {
            let (outcome, errs) = result?;
            all_errors.extend(errs);
            match outcome {
                Outcome::Null => return Ok((Outcome::Null, all_errors)),
                Outcome::Value(v) => entries.push((key, v)),
            }
        }
    } else {
        for cf in &collected {
            let (outcome, errs) = resolve_field(rc, object, src, cf, path, is_root).await?;
            all_errors.extend(errs);
            match outcome {
                Outcome::Null => return Ok((Outcome::Null, all_errors)),
                Outcome::Value(v) => entries.push((cf.response_key.clone(), v)),
            }
        }
    }

    let mut map = IndexMap::new();
    for (k, v) in entries {
        map.insert(k, v);
    }
    Ok((Outcome::Value(Value::Map(map)), all_errors))
}
