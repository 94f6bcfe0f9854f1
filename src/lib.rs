/*!

# graphql-engine

A type-safe GraphQL schema model and query execution engine.

This crate lets you expose Rust types as a GraphQL schema without a
procedural macro or a code-generation step: schemas are assembled at
runtime from plain builder functions ([`schema::obj`], [`schema::field`],
[`schema::scalar`], ...), and every field source/argument/return type is
checked at the point it's registered, then carried behind a small type-erased
value ([`schema::meta::Boxed`]) so the rest of the engine can work with a
single, non-generic-over-every-field `Schema<Ctx>`.

## Building a schema

```rust,no_run
use graphql_engine::schema::{field, int, obj, string, nullable};

struct Ctx;
struct Human { id: String, name: String }

fn query_root() -> graphql_engine::schema::OutType<Ctx> {
    let human_ty = obj::<Ctx, _>("Human", |_self_ty| {
        vec![
            field::<Ctx, Human, String, _>("id", string(), |_ctx, src, _args| Ok(src.id.clone())),
            field::<Ctx, Human, String, _>("name", string(), |_ctx, src, _args| Ok(src.name.clone())),
        ]
    });

    obj::<Ctx, _>("Query", move |_self_ty| {
        vec![field::<Ctx, (), Option<Human>, _>(
            "human",
            nullable::<Ctx, Human>(human_ty.clone()),
            |_ctx, _src, _args| Ok(Some(Human { id: "1000".into(), name: "Luke".into() })),
        )]
    })
}
```

## Executing a query

[`execute`] takes a parsed [`ast::Document`] (the engine does not parse
query text itself — that's the job of an external GraphQL parser, see
`ast`'s module docs), an optional operation name, a variable map, and the
request context, and drives resolution all the way down to a `{ data,
errors }` envelope, following the null-bubbling rules from the GraphQL
spec.

*/

#![warn(missing_docs)]

pub mod ast;
pub mod error;
pub mod execution;
pub mod introspection;
pub mod schema;
pub mod value;

pub use error::GraphQLError;
pub use execution::{execute, ExecutionResponse, ResolveContext};
pub use value::Value;
