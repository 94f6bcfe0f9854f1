//! Schema assembly (C4): a query root, an optional mutation root, and
//! nothing else — subscriptions are out of scope (`spec.md` Non-goals).

use super::meta::OutType;

/// A complete, immutable schema value. `Ctx` is the request-scoped context
/// type threaded through every resolver.
pub struct Schema<Ctx> {
    pub query: OutType<Ctx>,
    pub mutation: Option<OutType<Ctx>>,
}

impl<Ctx> Clone for Schema<Ctx> {
    fn clone(&self) -> Self {
        Schema { query: self.query.clone(), mutation: self.mutation.clone() }
    }
}

/// Assemble a schema from a query root object and an optional mutation
/// root object. Both must have been built with [`super::meta::obj`].
pub fn create<Ctx>(query: OutType<Ctx>, mutation: Option<OutType<Ctx>>) -> Schema<Ctx> {
    if query.as_object().is_none() {
        panic!("schema query root must be an object type");
    }
    if let Some(m) = &mutation {
        if m.as_object().is_none() {
            panic!("schema mutation root must be an object type");
        }
    }
    Schema { query, mutation }
}
