//! The per-execution context threaded through resolution (C8/C9).

use std::sync::Arc;

use crate::ast::Document;
use crate::introspection::SchemaIntrospection;
use crate::value::VariableMap;

/// Everything field resolution needs besides the current source value and
/// selection set. Built once per [`crate::execution::operation::execute`]
/// call and borrowed for its whole duration.
pub struct ResolveContext<'a, Ctx> {
    pub ctx: &'a Ctx,
    pub document: &'a Document,
    pub variables: &'a VariableMap,
    pub introspection: &'a Arc<SchemaIntrospection>,
    pub query_root_name: &'a str,
    /// `true` for a query operation (sibling fields resolve concurrently),
    /// `false` for a mutation (sibling fields resolve in document order),
    /// per §4.6/§5.
    pub concurrent: bool,
}
