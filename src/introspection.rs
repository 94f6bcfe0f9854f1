//! The introspection overlay (C5): `__schema`, `__type(name)`, `__typename`.
//!
//! `spec.md` §4.5 calls for injecting these into "a derived schema per
//! execution", not mutating the real one. Rather than literally splicing
//! extra `Field<Ctx>` entries into the query root's lazily-forced field
//! list (which is cached behind a `OnceCell` and shared across every
//! request), the meta-types below are built as an ordinary `OutType<Ctx>`
//! graph using the exact same builder API user schemas use, and the
//! executor's field dispatcher (`execution::resolve`) recognizes the three
//! meta-field names and resolves them against this graph instead of the
//! real query root's own fields. The original schema is never touched.
//!
//! The meta-types are themselves expressed as plain, non-generic data
//! (`TypeIntrospection` and friends) produced by walking the real schema
//! once per execution (`reflect`). Nested named-type references
//! (`ofType`, `interfaces`, a field's `type`, ...) are resolved back into
//! full descriptions by carrying the reflected registry alongside every
//! node (`TypeNode`/`FieldNode`/`InputValueNode`), so ordinary selection
//! and resolution machinery can walk the response shape exactly like it
//! would for a user-defined recursive object type.

use std::collections::HashSet;
use std::sync::Arc;

use crate::schema::meta::{
    arg, boolean, enum_type, field, list, nullable, obj, string, string_arg, Arguments, Boxed, Field, OutKind,
    OutType,
};
use crate::schema::model::Schema;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

/// A reference to a type from inside a field/argument description: either a
/// named type or a `List`/`NonNull` wrapper around another `TypeRef`.
#[derive(Clone, Debug)]
pub struct TypeRef {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub of_type: Option<Box<TypeRef>>,
}

#[derive(Clone, Debug)]
pub struct EnumValueIntrospection {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

#[derive(Clone, Debug)]
pub struct InputValueIntrospection {
    pub name: String,
    pub description: Option<String>,
    pub typ: TypeRef,
    pub default_value: Option<String>,
}

#[derive(Clone, Debug)]
pub struct FieldIntrospection {
    pub name: String,
    pub description: Option<String>,
    pub args: Vec<InputValueIntrospection>,
    pub typ: TypeRef,
    pub deprecation_reason: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TypeIntrospection {
    pub kind: TypeKind,
    pub name: Option<String>,
    pub description: Option<String>,
    pub fields: Option<Vec<FieldIntrospection>>,
    pub interfaces: Option<Vec<TypeRef>>,
    pub possible_types: Option<Vec<TypeRef>>,
    pub enum_values: Option<Vec<EnumValueIntrospection>>,
    pub input_fields: Option<Vec<InputValueIntrospection>>,
}

#[derive(Clone, Debug)]
pub struct SchemaIntrospection {
    pub query_type: String,
    pub mutation_type: Option<String>,
    pub types: Vec<TypeIntrospection>,
}

impl SchemaIntrospection {
    pub fn type_by_name(&self, name: &str) -> Option<&TypeIntrospection> {
        self.types.iter().find(|t| t.name.as_deref() == Some(name))
    }
}

/// Walk a schema's reachable type graph and produce a plain-data
/// description of it, independent of `Ctx`.
pub fn reflect<Ctx>(schema: &Schema<Ctx>) -> SchemaIntrospection {
    let mut seen = HashSet::new();
    let mut types = Vec::new();
    walk_named(&schema.query, &mut seen, &mut types);
    if let Some(mutation) = &schema.mutation {
        walk_named(mutation, &mut seen, &mut types);
    }
    let query_type = type_name(&schema.query).expect("query root must be an object");
    let mutation_type = schema.mutation.as_ref().and_then(type_name);
    SchemaIntrospection { query_type, mutation_type, types }
}

fn type_name<Ctx>(t: &OutType<Ctx>) -> Option<String> {
    match t.kind() {
        OutKind::Scalar { name, .. } => Some(name.clone()),
        OutKind::Enum { name, .. } => Some(name.clone()),
        OutKind::Object(o) => Some(o.name.clone()),
        OutKind::Abstract(a) => Some(a.name.clone()),
        OutKind::List { .. } | OutKind::Nullable { .. } => None,
    }
}

/// Fold a field/argument's `OutType` into GraphQL's wrapped type-ref
/// syntax: every named type is `NonNull` unless directly under `Nullable`.
fn type_ref<Ctx>(t: &OutType<Ctx>) -> TypeRef {
    match t.kind() {
        OutKind::Nullable { of, .. } => inner_type_ref(of),
        _ => TypeRef { kind: TypeKind::NonNull, name: None, of_type: Some(Box::new(inner_type_ref(t))) },
    }
}

fn inner_type_ref<Ctx>(t: &OutType<Ctx>) -> TypeRef {
    match t.kind() {
        OutKind::Scalar { name, .. } => TypeRef { kind: TypeKind::Scalar, name: Some(name.clone()), of_type: None },
        OutKind::Enum { name, .. } => TypeRef { kind: TypeKind::Enum, name: Some(name.clone()), of_type: None },
        OutKind::Object(o) => TypeRef { kind: TypeKind::Object, name: Some(o.name.clone()), of_type: None },
        OutKind::Abstract(a) => {
            let kind = if a.is_union() { TypeKind::Union } else { TypeKind::Interface };
            TypeRef { kind, name: Some(a.name.clone()), of_type: None }
        }
        OutKind::List { of, .. } => TypeRef { kind: TypeKind::List, name: None, of_type: Some(Box::new(type_ref(of))) },
        OutKind::Nullable { of, .. } => inner_type_ref(of),
    }
}

fn walk_named<Ctx>(t: &OutType<Ctx>, seen: &mut HashSet<String>, out: &mut Vec<TypeIntrospection>) {
    match t.kind() {
        OutKind::Nullable { of, .. } | OutKind::List { of, .. } => walk_named(of, seen, out),
        OutKind::Scalar { name, description, .. } => {
            if seen.insert(name.clone()) {
                out.push(TypeIntrospection {
                    kind: TypeKind::Scalar,
                    name: Some(name.clone()),
                    description: description.clone(),
                    fields: None,
                    interfaces: None,
                    possible_types: None,
                    enum_values: None,
                    input_fields: None,
                });
            }
        }
        OutKind::Enum { name, description, values, .. } => {
            if seen.insert(name.clone()) {
                out.push(TypeIntrospection {
                    kind: TypeKind::Enum,
                    name: Some(name.clone()),
                    description: description.clone(),
                    fields: None,
                    interfaces: None,
                    possible_types: None,
                    enum_values: Some(
                        values
                            .iter()
                            .map(|v| EnumValueIntrospection {
                                name: v.name.clone(),
                                description: v.description.clone(),
                                deprecation_reason: v.deprecation_reason.clone(),
                            })
                            .collect(),
                    ),
                    input_fields: None,
                });
            }
        }
        OutKind::Object(o) => {
            if seen.insert(o.name.clone()) {
                let fields = o.fields().clone();
                let field_intros: Vec<_> = fields.iter().map(field_introspection).collect();
                let interfaces = o
                    .abstracts()
                    .into_iter()
                    .filter(|a| !a.is_union())
                    .map(|a| TypeRef { kind: TypeKind::Interface, name: Some(a.name.clone()), of_type: None })
                    .collect();
                out.push(TypeIntrospection {
                    kind: TypeKind::Object,
                    name: Some(o.name.clone()),
                    description: o.description.clone(),
                    fields: Some(field_intros),
                    interfaces: Some(interfaces),
                    possible_types: None,
                    enum_values: None,
                    input_fields: None,
                });
                for f in fields.iter() {
                    walk_named(&f.typ, seen, out);
                    for a in f.args.iter() {
                        walk_input_meta(&a.input_meta, seen, out);
                    }
                }
            }
        }
        OutKind::Abstract(a) => {
            if seen.insert(a.name.clone()) {
                let possible_types = a
                    .possible_types()
                    .iter()
                    .filter_map(|pt| type_name(pt).map(|n| TypeRef { kind: TypeKind::Object, name: Some(n), of_type: None }))
                    .collect();
                let fields = a.fields();
                let field_intros: Vec<_> = fields.iter().map(field_introspection).collect();
                out.push(TypeIntrospection {
                    kind: if a.is_union() { TypeKind::Union } else { TypeKind::Interface },
                    name: Some(a.name.clone()),
                    description: a.description.clone(),
                    fields: if a.is_union() { None } else { Some(field_intros) },
                    interfaces: None,
                    possible_types: Some(possible_types),
                    enum_values: None,
                    input_fields: None,
                });
                for f in fields.iter() {
                    walk_named(&f.typ, seen, out);
                    for arg_desc in f.args.iter() {
                        walk_input_meta(&arg_desc.input_meta, seen, out);
                    }
                }
                for pt in a.possible_types().iter() {
                    walk_named(pt, seen, out);
                }
            }
        }
    }
}

/// Walk an argument/input-object-field's declared input type, registering
/// `Scalar`/`Enum`/`InputObject` named types the same way `walk_named` does
/// for output types (§4.3: the walk also descends into arg types).
fn walk_input_meta(meta: &crate::schema::meta::InputMeta, seen: &mut HashSet<String>, out: &mut Vec<TypeIntrospection>) {
    use crate::schema::meta::InputMeta;
    match meta {
        InputMeta::Nullable(inner) | InputMeta::List(inner) => walk_input_meta(inner, seen, out),
        InputMeta::Scalar { name } => {
            if seen.insert(name.clone()) {
                out.push(TypeIntrospection {
                    kind: TypeKind::Scalar,
                    name: Some(name.clone()),
                    description: None,
                    fields: None,
                    interfaces: None,
                    possible_types: None,
                    enum_values: None,
                    input_fields: None,
                });
            }
        }
        InputMeta::Enum { name, values } => {
            if seen.insert(name.clone()) {
                out.push(TypeIntrospection {
                    kind: TypeKind::Enum,
                    name: Some(name.clone()),
                    description: None,
                    fields: None,
                    interfaces: None,
                    possible_types: None,
                    enum_values: Some(
                        values
                            .iter()
                            .map(|v| EnumValueIntrospection {
                                name: v.clone(),
                                description: None,
                                deprecation_reason: None,
                            })
                            .collect(),
                    ),
                    input_fields: None,
                });
            }
        }
        InputMeta::InputObject { name, fields } => {
            if seen.insert(name.clone()) {
                let input_fields = fields
                    .iter()
                    .map(|f| InputValueIntrospection {
                        name: f.name.clone(),
                        description: f.description.clone(),
                        typ: input_meta_type_ref(&f.input_meta),
                        default_value: f.default_value.as_ref().map(|v| format!("{:?}", v)),
                    })
                    .collect();
                out.push(TypeIntrospection {
                    kind: TypeKind::InputObject,
                    name: Some(name.clone()),
                    description: None,
                    fields: None,
                    interfaces: None,
                    possible_types: None,
                    enum_values: None,
                    input_fields: Some(input_fields),
                });
                for f in fields {
                    walk_input_meta(&f.input_meta, seen, out);
                }
            }
        }
    }
}

fn field_introspection<Ctx>(f: &Field<Ctx>) -> FieldIntrospection {
    FieldIntrospection {
        name: f.name.clone(),
        description: f.description.clone(),
        args: f
            .args
            .iter()
            .map(|a| InputValueIntrospection {
                name: a.name.clone(),
                description: a.description.clone(),
                typ: input_meta_type_ref(&a.input_meta),
                default_value: a.default_value.as_ref().map(|v| format!("{:?}", v)),
            })
            .collect(),
        typ: type_ref(&f.typ),
        deprecation_reason: f.deprecated.clone(),
    }
}

fn input_meta_type_ref(meta: &crate::schema::meta::InputMeta) -> TypeRef {
    use crate::schema::meta::InputMeta;
    match meta {
        InputMeta::Nullable(inner) => input_meta_inner_ref(inner),
        other => TypeRef { kind: TypeKind::NonNull, name: None, of_type: Some(Box::new(input_meta_inner_ref(other))) },
    }
}

fn input_meta_inner_ref(meta: &crate::schema::meta::InputMeta) -> TypeRef {
    use crate::schema::meta::InputMeta;
    match meta {
        InputMeta::Scalar { name } => TypeRef { kind: TypeKind::Scalar, name: Some(name.clone()), of_type: None },
        InputMeta::Enum { name, .. } => TypeRef { kind: TypeKind::Enum, name: Some(name.clone()), of_type: None },
        InputMeta::InputObject { name, .. } => {
            TypeRef { kind: TypeKind::InputObject, name: Some(name.clone()), of_type: None }
        }
        InputMeta::List(inner) => {
            TypeRef { kind: TypeKind::List, name: None, of_type: Some(Box::new(input_meta_type_ref(inner))) }
        }
        InputMeta::Nullable(inner) => input_meta_inner_ref(inner),
    }
}

// ---------------------------------------------------------------------
// Registry-carrying nodes: the actual source values resolved against by
// the `__Type`/`__Field`/`__InputValue` meta-object fields below.
// ---------------------------------------------------------------------

#[derive(Clone)]
enum TypeNodeData {
    Named(TypeIntrospection),
    Wrapped { kind: TypeKind, of_type: TypeRef },
}

#[derive(Clone)]
struct TypeNode {
    registry: Arc<SchemaIntrospection>,
    data: TypeNodeData,
}

impl TypeNode {
    fn named(registry: Arc<SchemaIntrospection>, t: TypeIntrospection) -> Self {
        TypeNode { registry, data: TypeNodeData::Named(t) }
    }

    fn from_ref(registry: Arc<SchemaIntrospection>, r: &TypeRef) -> Self {
        match r.kind {
            TypeKind::List | TypeKind::NonNull => TypeNode {
                registry,
                data: TypeNodeData::Wrapped {
                    kind: r.kind.clone(),
                    of_type: (**r.of_type.as_ref().expect("wrapped TypeRef missing of_type")).clone(),
                },
            },
            _ => {
                let name = r.name.clone().expect("named TypeRef missing a name");
                let resolved = registry
                    .type_by_name(&name)
                    .cloned()
                    .unwrap_or_else(|| panic!("introspection registry missing type `{}`", name));
                TypeNode { registry, data: TypeNodeData::Named(resolved) }
            }
        }
    }
}

#[derive(Clone)]
struct FieldNode {
    registry: Arc<SchemaIntrospection>,
    data: FieldIntrospection,
}

#[derive(Clone)]
struct InputValueNode {
    registry: Arc<SchemaIntrospection>,
    data: InputValueIntrospection,
}

fn type_kind_output_type<Ctx: 'static>() -> OutType<Ctx> {
    enum_type::<Ctx, TypeKind>(
        "__TypeKind",
        vec![
            ("SCALAR", TypeKind::Scalar),
            ("OBJECT", TypeKind::Object),
            ("INTERFACE", TypeKind::Interface),
            ("UNION", TypeKind::Union),
            ("ENUM", TypeKind::Enum),
            ("INPUT_OBJECT", TypeKind::InputObject),
            ("LIST", TypeKind::List),
            ("NON_NULL", TypeKind::NonNull),
        ],
    )
}

fn enum_value_output_type<Ctx: 'static>() -> OutType<Ctx> {
    obj::<Ctx, _>("__EnumValue", |_self_ty| {
        vec![
            field::<Ctx, EnumValueIntrospection, String, _>("name", string(), |_ctx, src, _args| Ok(src.name.clone())),
            field::<Ctx, EnumValueIntrospection, Option<String>, _>(
                "description",
                nullable::<Ctx, String>(string()),
                |_ctx, src, _args| Ok(src.description.clone()),
            ),
            field::<Ctx, EnumValueIntrospection, Option<String>, _>(
                "deprecationReason",
                nullable::<Ctx, String>(string()),
                |_ctx, src, _args| Ok(src.deprecation_reason.clone()),
            ),
            field::<Ctx, EnumValueIntrospection, bool, _>("isDeprecated", boolean(), |_ctx, src, _args| {
                Ok(src.deprecation_reason.is_some())
            }),
        ]
    })
}

fn input_value_output_type<Ctx: 'static>(type_ty: OutType<Ctx>) -> OutType<Ctx> {
    obj::<Ctx, _>("__InputValue", move |_self_ty| {
        vec![
            field::<Ctx, InputValueNode, String, _>("name", string(), |_ctx, src, _args| Ok(src.data.name.clone())),
            field::<Ctx, InputValueNode, Option<String>, _>(
                "description",
                nullable::<Ctx, String>(string()),
                |_ctx, src, _args| Ok(src.data.description.clone()),
            ),
            field::<Ctx, InputValueNode, Option<String>, _>(
                "defaultValue",
                nullable::<Ctx, String>(string()),
                |_ctx, src, _args| Ok(src.data.default_value.clone()),
            ),
            field::<Ctx, InputValueNode, TypeNode, _>("type", type_ty.clone(), |_ctx, src, _args| {
                Ok(TypeNode::from_ref(src.registry.clone(), &src.data.typ))
            }),
        ]
    })
}

fn field_output_type<Ctx: 'static>(type_ty: OutType<Ctx>, input_value_ty: OutType<Ctx>) -> OutType<Ctx> {
    obj::<Ctx, _>("__Field", move |_self_ty| {
        vec![
            field::<Ctx, FieldNode, String, _>("name", string(), |_ctx, src, _args| Ok(src.data.name.clone())),
            field::<Ctx, FieldNode, Option<String>, _>(
                "description",
                nullable::<Ctx, String>(string()),
                |_ctx, src, _args| Ok(src.data.description.clone()),
            ),
            field::<Ctx, FieldNode, Option<String>, _>(
                "deprecationReason",
                nullable::<Ctx, String>(string()),
                |_ctx, src, _args| Ok(src.data.deprecation_reason.clone()),
            ),
            field::<Ctx, FieldNode, bool, _>("isDeprecated", boolean(), |_ctx, src, _args| {
                Ok(src.data.deprecation_reason.is_some())
            }),
            field::<Ctx, FieldNode, Vec<InputValueNode>, _>(
                "args",
                list::<Ctx, InputValueNode>(input_value_ty.clone()),
                |_ctx, src, _args| {
                    Ok(src
                        .data
                        .args
                        .iter()
                        .map(|a| InputValueNode { registry: src.registry.clone(), data: a.clone() })
                        .collect())
                },
            ),
            field::<Ctx, FieldNode, TypeNode, _>("type", type_ty.clone(), |_ctx, src, _args| {
                Ok(TypeNode::from_ref(src.registry.clone(), &src.data.typ))
            }),
        ]
    })
}

fn type_output_type<Ctx: 'static>() -> OutType<Ctx> {
    obj::<Ctx, _>("__Type", |self_ty| {
        let input_value_ty = input_value_output_type::<Ctx>(self_ty.clone());
        let field_ty = field_output_type::<Ctx>(self_ty.clone(), input_value_ty.clone());
        vec![
            field::<Ctx, TypeNode, TypeKind, _>("kind", type_kind_output_type(), |_ctx, src, _args| {
                Ok(match &src.data {
                    TypeNodeData::Named(t) => t.kind.clone(),
                    TypeNodeData::Wrapped { kind, .. } => kind.clone(),
                })
            }),
            field::<Ctx, TypeNode, Option<String>, _>("name", nullable::<Ctx, String>(string()), |_ctx, src, _args| {
                Ok(match &src.data {
                    TypeNodeData::Named(t) => t.name.clone(),
                    TypeNodeData::Wrapped { .. } => None,
                })
            }),
            field::<Ctx, TypeNode, Option<String>, _>(
                "description",
                nullable::<Ctx, String>(string()),
                |_ctx, src, _args| {
                    Ok(match &src.data {
                        TypeNodeData::Named(t) => t.description.clone(),
                        TypeNodeData::Wrapped { .. } => None,
                    })
                },
            ),
            field::<Ctx, TypeNode, Option<Vec<FieldNode>>, _>(
                "fields",
                nullable::<Ctx, Vec<FieldNode>>(list::<Ctx, FieldNode>(field_ty.clone())),
                |_ctx, src, _args| {
                    Ok(match &src.data {
                        TypeNodeData::Named(t) => t.fields.as_ref().map(|fs| {
                            fs.iter().map(|f| FieldNode { registry: src.registry.clone(), data: f.clone() }).collect()
                        }),
                        TypeNodeData::Wrapped { .. } => None,
                    })
                },
            ),
            field::<Ctx, TypeNode, Option<Vec<TypeNode>>, _>(
                "interfaces",
                nullable::<Ctx, Vec<TypeNode>>(list::<Ctx, TypeNode>(self_ty.clone())),
                |_ctx, src, _args| {
                    Ok(match &src.data {
                        TypeNodeData::Named(t) => t
                            .interfaces
                            .as_ref()
                            .map(|refs| refs.iter().map(|r| TypeNode::from_ref(src.registry.clone(), r)).collect()),
                        TypeNodeData::Wrapped { .. } => None,
                    })
                },
            ),
            field::<Ctx, TypeNode, Option<Vec<TypeNode>>, _>(
                "possibleTypes",
                nullable::<Ctx, Vec<TypeNode>>(list::<Ctx, TypeNode>(self_ty.clone())),
                |_ctx, src, _args| {
                    Ok(match &src.data {
                        TypeNodeData::Named(t) => t.possible_types.as_ref().map(|refs| {
                            refs.iter().map(|r| TypeNode::from_ref(src.registry.clone(), r)).collect()
                        }),
                        TypeNodeData::Wrapped { .. } => None,
                    })
                },
            ),
            field::<Ctx, TypeNode, Option<Vec<EnumValueIntrospection>>, _>(
                "enumValues",
                nullable::<Ctx, Vec<EnumValueIntrospection>>(list::<Ctx, EnumValueIntrospection>(
                    enum_value_output_type(),
                )),
                |_ctx, src, _args| {
                    Ok(match &src.data {
                        TypeNodeData::Named(t) => t.enum_values.clone(),
                        TypeNodeData::Wrapped { .. } => None,
                    })
                },
            ),
            field::<Ctx, TypeNode, Option<Vec<InputValueNode>>, _>(
                "inputFields",
                nullable::<Ctx, Vec<InputValueNode>>(list::<Ctx, InputValueNode>(input_value_ty)),
                |_ctx, src, _args| {
                    Ok(match &src.data {
                        TypeNodeData::Named(t) => t.input_fields.as_ref().map(|ivs| {
                            ivs.iter().map(|iv| InputValueNode { registry: src.registry.clone(), data: iv.clone() }).collect()
                        }),
                        TypeNodeData::Wrapped { .. } => None,
                    })
                },
            ),
            field::<Ctx, TypeNode, Option<TypeNode>, _>(
                "ofType",
                nullable::<Ctx, TypeNode>(self_ty.clone()),
                |_ctx, src, _args| {
                    Ok(match &src.data {
                        TypeNodeData::Named(_) => None,
                        TypeNodeData::Wrapped { of_type, .. } => {
                            Some(TypeNode::from_ref(src.registry.clone(), of_type))
                        }
                    })
                },
            ),
        ]
    })
}

fn schema_output_type<Ctx: 'static>() -> OutType<Ctx> {
    let type_ty = type_output_type::<Ctx>();
    obj::<Ctx, _>("__Schema", move |_self_ty| {
        let types_ty = type_ty.clone();
        let query_ty = type_ty.clone();
        let mutation_ty = type_ty.clone();
        vec![
            field::<Ctx, Arc<SchemaIntrospection>, Vec<TypeNode>, _>(
                "types",
                list::<Ctx, TypeNode>(types_ty),
                |_ctx, src, _args| Ok(src.types.iter().map(|t| TypeNode::named(src.clone(), t.clone())).collect()),
            ),
            field::<Ctx, Arc<SchemaIntrospection>, TypeNode, _>("queryType", query_ty, |_ctx, src, _args| {
                let t = src
                    .type_by_name(&src.query_type)
                    .cloned()
                    .ok_or_else(|| "internal: query root missing from introspection registry".to_string())?;
                Ok(TypeNode::named(src.clone(), t))
            }),
            field::<Ctx, Arc<SchemaIntrospection>, Option<TypeNode>, _>(
                "mutationType",
                nullable::<Ctx, TypeNode>(mutation_ty),
                |_ctx, src, _args| {
                    Ok(src
                        .mutation_type
                        .as_ref()
                        .and_then(|n| src.type_by_name(n))
                        .cloned()
                        .map(|t| TypeNode::named(src.clone(), t)))
                },
            ),
        ]
    })
}

/// Build the synthetic field used by the executor's dispatcher to answer a
/// `__schema` selection without touching the real query root.
pub fn schema_field<Ctx: 'static>(introspection: Arc<SchemaIntrospection>) -> Field<Ctx> {
    Field {
        name: "__schema".to_string(),
        description: Some("Access the current type schema of this server.".to_string()),
        deprecated: None,
        args: Vec::new(),
        typ: schema_output_type::<Ctx>(),
        resolve: Arc::new(move |_ctx: &Ctx, _src: &Boxed, _args: &Arguments| {
            let introspection = introspection.clone();
            Box::pin(async move { Ok(Boxed::new(introspection)) })
        }),
    }
}

/// Build the synthetic field used by the executor's dispatcher to answer a
/// `__type(name: ...)` selection.
pub fn type_field<Ctx: 'static>(introspection: Arc<SchemaIntrospection>) -> Field<Ctx> {
    Field {
        name: "__type".to_string(),
        description: Some("Request the type information of a single type.".to_string()),
        deprecated: None,
        args: vec![arg("name", string_arg())],
        typ: nullable::<Ctx, TypeNode>(type_output_type::<Ctx>()),
        resolve: Arc::new(move |_ctx: &Ctx, _src: &Boxed, args: &Arguments| {
            let introspection = introspection.clone();
            let name: String = args.get("name");
            Box::pin(async move {
                let found = introspection.type_by_name(&name).cloned().map(|t| TypeNode::named(introspection.clone(), t));
                Ok(Boxed::new(found))
            })
        }),
    }
}

/// Resolve `__typename` for any object, bypassing the normal field lookup.
pub fn typename_value(object_name: &str) -> crate::value::Value {
    crate::value::Value::string(object_name)
}
