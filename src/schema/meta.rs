//! The argument type system (C2) and output type system (C3).
//!
//! Rust has no first-class GADTs, so the heterogeneous cons-list `spec.md`
//! describes (`ArgList<Out, Ctor>`) is realized with the alternative the
//! spec's own design notes endorse for exactly this situation (§9,
//! strategy (c)): argument descriptors are stored in an ordinary `Vec`,
//! coercion results are type-erased into `Box<dyn Any>`, and resolvers read
//! them back out through a typed `Arguments::get::<T>`. The same
//! type-erasure carries the output side: an `OutType<Ctx>` is Rust-generic
//! only in its *construction* closures, not in its stored representation,
//! which is what lets a `Schema<Ctx>` remain a single uniform value despite
//! every field having a different concrete source/return type.

use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use indexmap::IndexMap;
use once_cell::sync::OnceCell;

use crate::error::GraphQLError;
use crate::value::{AstValue, Value, VariableMap};

/// A future boxed for dynamic dispatch across heterogeneous resolvers.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A type-erased value flowing through schema construction and execution:
/// an argument after coercion, or a field's source/return value.
pub struct Boxed(pub(crate) Box<dyn Any + Send + Sync>);

impl Boxed {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Boxed(Box::new(value))
    }

    pub fn downcast<T: Any + Send + Sync>(self) -> Result<T, GraphQLError> {
        self.0
            .downcast::<T>()
            .map(|b| *b)
            .map_err(|_| type_mismatch::<T>())
    }

    pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

fn type_mismatch<T>() -> GraphQLError {
    GraphQLError::resolve(format!(
        "internal: schema and resolver disagree on Rust type `{}`",
        std::any::type_name::<T>()
    ))
}

// ---------------------------------------------------------------------
// Argument type system (C2)
// ---------------------------------------------------------------------

/// Introspection-facing description of an input type's shape, independent
/// of the Rust type `ArgType<T>` coerces into.
#[derive(Clone, Debug)]
pub enum InputMeta {
    Scalar { name: String },
    Enum { name: String, values: Vec<String> },
    InputObject { name: String, fields: Vec<ArgumentMeta> },
    List(Box<InputMeta>),
    Nullable(Box<InputMeta>),
}

impl InputMeta {
    /// Render as GraphQL type-ref syntax: `!` suffix for non-null, `[...]`
    /// for lists, matching the argument-error message format in §4.4.
    pub fn type_ref(&self) -> String {
        match self {
            InputMeta::Nullable(inner) => inner.type_ref_nullable(),
            InputMeta::Scalar { name } => format!("{}!", name),
            InputMeta::Enum { name, .. } => format!("{}!", name),
            InputMeta::InputObject { name, .. } => format!("{}!", name),
            InputMeta::List(inner) => format!("[{}]!", inner.type_ref_nullable()),
        }
    }

    fn type_ref_nullable(&self) -> String {
        match self {
            InputMeta::Nullable(inner) => inner.type_ref_nullable(),
            InputMeta::Scalar { name } => name.clone(),
            InputMeta::Enum { name, .. } => name.clone(),
            InputMeta::InputObject { name, .. } => name.clone(),
            InputMeta::List(inner) => format!("[{}]", inner.type_ref_nullable()),
        }
    }
}

/// Introspection metadata for one field of an input object.
#[derive(Clone, Debug)]
pub struct ArgumentMeta {
    pub name: String,
    pub description: Option<String>,
    pub input_meta: InputMeta,
    pub default_value: Option<Value>,
}

/// A phantom-typed descriptor for an input type: one of `spec.md`'s
/// `Scalar | Enum | InputObject | Nullable | List`.
pub struct ArgType<T> {
    pub(crate) input_meta: InputMeta,
    pub(crate) required: bool,
    coerce: Arc<dyn Fn(&AstValue, &VariableMap) -> Result<T, String> + Send + Sync>,
}

impl<T> Clone for ArgType<T> {
    fn clone(&self) -> Self {
        ArgType {
            input_meta: self.input_meta.clone(),
            required: self.required,
            coerce: self.coerce.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> ArgType<T> {
    pub(crate) fn coerce(&self, value: &AstValue, variables: &VariableMap) -> Result<T, String> {
        (self.coerce)(value, variables)
    }
}

/// Build a custom scalar `ArgType`.
pub fn arg_scalar<T: Send + Sync + 'static>(
    name: &str,
    parse: impl Fn(&AstValue) -> Result<T, String> + Send + Sync + 'static,
) -> ArgType<T> {
    ArgType {
        input_meta: InputMeta::Scalar { name: name.to_string() },
        required: true,
        coerce: Arc::new(move |v, _vars| parse(v)),
    }
}

/// Build an enum `ArgType` from a list of (name, value) pairs.
pub fn arg_enum<T: Clone + PartialEq + Send + Sync + 'static>(
    name: &str,
    values: Vec<(&str, T)>,
) -> ArgType<T> {
    let owned: Vec<(String, T)> = values.into_iter().map(|(n, v)| (n.to_string(), v)).collect();
    let meta_values = owned.iter().map(|(n, _)| n.clone()).collect();
    let lookup = owned.clone();
    ArgType {
        input_meta: InputMeta::Enum { name: name.to_string(), values: meta_values },
        required: true,
        coerce: Arc::new(move |v, _vars| {
            let name = match v {
                AstValue::Enum(s) | AstValue::String(s) => s.as_str(),
                _ => return Err(format!("Invalid {}", name)),
            };
            lookup
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, val)| val.clone())
                .ok_or_else(|| format!("Invalid {}", name))
        }),
    }
}

/// Wrap an `ArgType<T>` in `Nullable`, producing `ArgType<Option<T>>`.
pub fn arg_nullable<T: Send + Sync + 'static>(inner: ArgType<T>) -> ArgType<Option<T>> {
    ArgType {
        input_meta: InputMeta::Nullable(Box::new(inner.input_meta.clone())),
        required: false,
        coerce: Arc::new(move |v, vars| {
            if v.is_null() {
                return Ok(None);
            }
            inner.coerce(v, vars).map(Some)
        }),
    }
}

/// Wrap an `ArgType<T>` in `List`, producing `ArgType<Vec<T>>`.
///
/// A single value that isn't itself a list is promoted to a singleton list,
/// per §4.4 step 3.
pub fn arg_list<T: Send + Sync + 'static>(inner: ArgType<T>) -> ArgType<Vec<T>> {
    ArgType {
        input_meta: InputMeta::List(Box::new(inner.input_meta.clone())),
        required: true,
        coerce: Arc::new(move |v, vars| match v {
            AstValue::List(items) => items.iter().map(|i| inner.coerce(i, vars)).collect(),
            single => inner.coerce(single, vars).map(|v| vec![v]),
        }),
    }
}

/// Build an input object `ArgType<T>` from its field list and a constructor
/// that assembles `T` out of the coerced `Arguments`.
pub fn input_object<T, Ctor>(name: &str, fields: ArgList, ctor: Ctor) -> ArgType<T>
where
    T: Send + Sync + 'static,
    Ctor: Fn(&Arguments) -> Result<T, String> + Send + Sync + 'static,
{
    let name = name.to_string();
    let meta_fields = fields
        .iter()
        .map(|f| ArgumentMeta {
            name: f.name.clone(),
            description: f.description.clone(),
            input_meta: f.input_meta.clone(),
            default_value: f.default_value.clone(),
        })
        .collect();
    let fields_for_coerce = fields.clone();
    ArgType {
        input_meta: InputMeta::InputObject { name: name.clone(), fields: meta_fields },
        required: true,
        coerce: Arc::new(move |v, vars| {
            let entries = match v {
                AstValue::Map(entries) => entries.as_slice(),
                _ => return Err(format!("Invalid {}", name)),
            };
            let args = crate::execution::arguments::evaluate(&fields_for_coerce, entries, vars, &name)
                .map_err(|e| e.message())?;
            ctor(&args)
        }),
    }
}

// Built-in scalars (§4.1).

pub fn string_arg() -> ArgType<String> {
    arg_scalar("String", |v| match v {
        AstValue::String(s) => Ok(s.clone()),
        _ => Err("Invalid String".to_string()),
    })
}

pub fn int_arg() -> ArgType<i64> {
    arg_scalar("Int", |v| match v {
        AstValue::Int(i) => Ok(*i),
        _ => Err("Invalid Int".to_string()),
    })
}

pub fn float_arg() -> ArgType<f64> {
    arg_scalar("Float", |v| match v {
        AstValue::Float(f) => Ok(*f),
        AstValue::Int(i) => Ok(*i as f64),
        _ => Err("Invalid Float".to_string()),
    })
}

pub fn boolean_arg() -> ArgType<bool> {
    arg_scalar("Boolean", |v| match v {
        AstValue::Boolean(b) => Ok(*b),
        _ => Err("Invalid Boolean".to_string()),
    })
}

/// `ID` accepts either a string or an integer literal and coerces to
/// `String`, as every practical GraphQL schema's `ID` scalar does.
pub fn id_arg() -> ArgType<String> {
    arg_scalar("ID", |v| match v {
        AstValue::String(s) => Ok(s.clone()),
        AstValue::Int(i) => Ok(i.to_string()),
        _ => Err("Invalid ID".to_string()),
    })
}

/// A single entry in an `ArgList`: either a required `Arg` or a
/// `DefaultArg` (required iff `typ` is not `Nullable`, per §3).
#[derive(Clone)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub input_meta: InputMeta,
    pub default_value: Option<Value>,
    pub(crate) required: bool,
    coerce: Arc<dyn Fn(&AstValue, &VariableMap) -> Result<Box<dyn Any + Send + Sync>, String> + Send + Sync>,
}

impl ArgumentDescriptor {
    pub fn description(mut self, d: &str) -> Self {
        self.description = Some(d.to_string());
        self
    }

    pub(crate) fn coerce(
        &self,
        value: &AstValue,
        variables: &VariableMap,
    ) -> Result<Box<dyn Any + Send + Sync>, String> {
        (self.coerce)(value, variables)
    }
}

/// A required argument descriptor.
pub fn arg<T: Send + Sync + 'static>(name: &str, typ: ArgType<T>) -> ArgumentDescriptor {
    let required = typ.required;
    ArgumentDescriptor {
        name: name.to_string(),
        description: None,
        input_meta: typ.input_meta.clone(),
        default_value: None,
        required,
        coerce: Arc::new(move |v, vars| typ.coerce(v, vars).map(|t| -> Box<dyn Any + Send + Sync> { Box::new(t) })),
    }
}

/// An argument descriptor with a default value, supplied when the argument
/// is absent (or an explicit variable resolves to nothing) after variable
/// substitution. `typ` must have been built with [`arg_nullable`].
pub fn default_arg<T>(name: &str, typ: ArgType<Option<T>>, default: T) -> ArgumentDescriptor
where
    T: Clone + Send + Sync + 'static + Into<Value>,
{
    let default_value = Some(default.clone().into());
    let default_for_coerce = default;
    ArgumentDescriptor {
        name: name.to_string(),
        description: None,
        input_meta: typ.input_meta.clone(),
        default_value,
        required: false,
        coerce: Arc::new(move |v, vars| {
            typ.coerce(v, vars).map(|opt| -> Box<dyn Any + Send + Sync> {
                Box::new(opt.unwrap_or_else(|| default_for_coerce.clone()))
            })
        }),
    }
}

/// An ordered list of argument descriptors; curried-constructor order in
/// `spec.md` becomes declaration order here.
pub type ArgList = Vec<ArgumentDescriptor>;

/// The coerced arguments available to a resolver, produced by
/// [`crate::execution::arguments::evaluate`]. Every descriptor in the
/// originating `ArgList` is guaranteed to have an entry (default or
/// `Null`-derived), mirroring the reference library's `Arguments::new`.
pub struct Arguments {
    values: IndexMap<String, Box<dyn Any + Send + Sync>>,
}

impl Arguments {
    pub(crate) fn new(values: IndexMap<String, Box<dyn Any + Send + Sync>>) -> Self {
        Arguments { values }
    }

    /// Read a coerced argument back out by name. Panics if the name wasn't
    /// declared on the field's `ArgList` or the stored type doesn't match
    /// `T` — both are schema-construction bugs, not request-time errors.
    pub fn get<T: Clone + Send + Sync + 'static>(&self, name: &str) -> T {
        self.values
            .get(name)
            .unwrap_or_else(|| panic!("argument `{}` was not declared on this field", name))
            .downcast_ref::<T>()
            .unwrap_or_else(|| {
                panic!(
                    "argument `{}` stored as a different type than requested (`{}`)",
                    name,
                    std::any::type_name::<T>()
                )
            })
            .clone()
    }
}

// ---------------------------------------------------------------------
// Output type system (C3)
// ---------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct EnumValueMeta {
    pub name: String,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

type ThunkFields<Ctx> = Mutex<Option<Box<dyn FnOnce() -> Vec<Field<Ctx>> + Send>>>;

/// An object type: a name plus a lazily-forced field list, per §4.2 — the
/// only mechanism permitting cyclic schemas without construction-order
/// constraints.
pub struct ObjectType<Ctx> {
    pub name: String,
    pub description: Option<String>,
    fields_cell: OnceCell<Vec<Field<Ctx>>>,
    thunk: ThunkFields<Ctx>,
    pub(crate) abstracts: Mutex<Vec<Arc<Abstract<Ctx>>>>,
}

impl<Ctx> ObjectType<Ctx> {
    /// Force (once) and return this object's field list.
    pub fn fields(&self) -> &Vec<Field<Ctx>> {
        self.fields_cell.get_or_init(|| {
            let thunk = self
                .thunk
                .lock()
                .unwrap()
                .take()
                .expect("object field thunk missing or already forced without caching");
            thunk()
        })
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field<Ctx>> {
        self.fields().iter().find(|f| f.name == name)
    }

    pub fn abstracts(&self) -> Vec<Arc<Abstract<Ctx>>> {
        self.abstracts.lock().unwrap().clone()
    }
}

/// Whether an [`Abstract`] is a union (no fields of its own) or an
/// interface (a lazily-forced field list, like an object).
pub enum AbstractKind<Ctx> {
    Union,
    Interface {
        fields_cell: OnceCell<Vec<Field<Ctx>>>,
        thunk: ThunkFields<Ctx>,
    },
}

/// A union or interface: its member/implementor object types plus (for
/// interfaces) its own field list.
pub struct Abstract<Ctx> {
    pub name: String,
    pub description: Option<String>,
    pub kind: AbstractKind<Ctx>,
    pub(crate) types: Mutex<Vec<OutType<Ctx>>>,
}

impl<Ctx> Abstract<Ctx> {
    pub fn is_union(&self) -> bool {
        matches!(self.kind, AbstractKind::Union)
    }

    pub fn fields(&self) -> Vec<Field<Ctx>> {
        match &self.kind {
            AbstractKind::Union => Vec::new(),
            AbstractKind::Interface { fields_cell, thunk } => fields_cell
                .get_or_init(|| {
                    let thunk = thunk
                        .lock()
                        .unwrap()
                        .take()
                        .expect("interface field thunk missing or already forced without caching");
                    thunk()
                })
                .clone(),
        }
    }

    pub fn possible_types(&self) -> Vec<OutType<Ctx>> {
        self.types.lock().unwrap().clone()
    }
}

/// The runtime-selected concrete type paired with its value, produced by
/// the coercion function [`add_type`] returns.
pub struct AbstractValue<Ctx> {
    pub(crate) concrete_type: OutType<Ctx>,
    pub(crate) value: Boxed,
}

pub(crate) enum OutKind<Ctx> {
    Scalar {
        name: String,
        description: Option<String>,
        serialize: Arc<dyn Fn(&Boxed) -> Result<Value, String> + Send + Sync>,
    },
    Enum {
        name: String,
        description: Option<String>,
        values: Vec<EnumValueMeta>,
        match_value: Arc<dyn Fn(&Boxed) -> Option<String> + Send + Sync>,
    },
    Object(Arc<ObjectType<Ctx>>),
    List { of: OutType<Ctx>, iter: Arc<dyn Fn(Boxed) -> Vec<Boxed> + Send + Sync> },
    Nullable { of: OutType<Ctx>, unwrap: Arc<dyn Fn(Boxed) -> Option<Boxed> + Send + Sync> },
    Abstract(Arc<Abstract<Ctx>>),
}

/// A uniformly-typed handle onto any output type: scalar, enum, object,
/// interface, union, list, or nullable wrapper (§3).
pub struct OutType<Ctx> {
    kind: Arc<OutKind<Ctx>>,
}

impl<Ctx> Clone for OutType<Ctx> {
    fn clone(&self) -> Self {
        OutType { kind: self.kind.clone() }
    }
}

impl<Ctx> OutType<Ctx> {
    pub fn as_object(&self) -> Option<&Arc<ObjectType<Ctx>>> {
        match &*self.kind {
            OutKind::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_abstract(&self) -> Option<&Arc<Abstract<Ctx>>> {
        match &*self.kind {
            OutKind::Abstract(a) => Some(a),
            _ => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(&*self.kind, OutKind::Nullable { .. })
    }

    /// Unwrap a single `Nullable` layer, if present.
    pub fn inner_if_nullable(&self) -> Option<&OutType<Ctx>> {
        match &*self.kind {
            OutKind::Nullable { of, .. } => Some(of),
            _ => None,
        }
    }

    pub(crate) fn kind(&self) -> &OutKind<Ctx> {
        &self.kind
    }
}

/// Build a custom scalar `OutType`.
pub fn scalar<Ctx, T: Send + Sync + 'static>(
    name: &str,
    serialize: impl Fn(&T) -> Value + Send + Sync + 'static,
) -> OutType<Ctx> {
    OutType {
        kind: Arc::new(OutKind::Scalar {
            name: name.to_string(),
            description: None,
            serialize: Arc::new(move |b: &Boxed| {
                b.downcast_ref::<T>()
                    .map(&serialize)
                    .ok_or_else(|| "internal: scalar type mismatch".to_string())
            }),
        }),
    }
}

pub fn string<Ctx>() -> OutType<Ctx> {
    scalar::<Ctx, String>("String", |s| Value::string(s.clone()))
}

pub fn int<Ctx>() -> OutType<Ctx> {
    scalar::<Ctx, i64>("Int", |i| Value::int(*i))
}

pub fn float<Ctx>() -> OutType<Ctx> {
    scalar::<Ctx, f64>("Float", |f| Value::float(*f))
}

pub fn boolean<Ctx>() -> OutType<Ctx> {
    scalar::<Ctx, bool>("Boolean", |b| Value::boolean(*b))
}

pub fn id<Ctx>() -> OutType<Ctx> {
    scalar::<Ctx, String>("ID", |s| Value::string(s.clone()))
}

/// Build an enum `OutType` from a list of (name, value) pairs.
pub fn enum_type<Ctx, T: Clone + PartialEq + Send + Sync + 'static>(
    name: &str,
    values: Vec<(&str, T)>,
) -> OutType<Ctx> {
    let owned: Vec<(String, T)> = values.into_iter().map(|(n, v)| (n.to_string(), v)).collect();
    let meta_values = owned
        .iter()
        .map(|(n, _)| EnumValueMeta { name: n.clone(), description: None, deprecation_reason: None })
        .collect();
    OutType {
        kind: Arc::new(OutKind::Enum {
            name: name.to_string(),
            description: None,
            values: meta_values,
            match_value: Arc::new(move |b: &Boxed| {
                let v = b.downcast_ref::<T>()?;
                owned.iter().find(|(_, val)| val == v).map(|(n, _)| n.clone())
            }),
        }),
    }
}

/// Build an object `OutType`. `build_fields` receives a handle to the
/// object's own `OutType` so field resolvers can return values of the same
/// (or a mutually recursive) type, per §4.2/§9.
pub fn obj<Ctx, F>(name: &str, build_fields: F) -> OutType<Ctx>
where
    Ctx: 'static,
    F: FnOnce(&OutType<Ctx>) -> Vec<Field<Ctx>> + Send + 'static,
{
    let object = Arc::new(ObjectType {
        name: name.to_string(),
        description: None,
        fields_cell: OnceCell::new(),
        thunk: Mutex::new(None),
        abstracts: Mutex::new(Vec::new()),
    });
    let out = OutType { kind: Arc::new(OutKind::Object(object.clone())) };
    let self_ref = out.clone();
    *object.thunk.lock().unwrap() = Some(Box::new(move || build_fields(&self_ref)));
    out
}

/// Build an interface `OutType`, whose fields are likewise lazy (§4.2).
pub fn interface<Ctx, F>(name: &str, build_fields: F) -> OutType<Ctx>
where
    Ctx: 'static,
    F: FnOnce(&OutType<Ctx>) -> Vec<Field<Ctx>> + Send + 'static,
{
    let abs = Arc::new(Abstract {
        name: name.to_string(),
        description: None,
        kind: AbstractKind::Interface { fields_cell: OnceCell::new(), thunk: Mutex::new(None) },
        types: Mutex::new(Vec::new()),
    });
    let out = OutType { kind: Arc::new(OutKind::Abstract(abs.clone())) };
    let self_ref = out.clone();
    if let AbstractKind::Interface { thunk, .. } = &abs.kind {
        *thunk.lock().unwrap() = Some(Box::new(move || build_fields(&self_ref)));
    }
    out
}

/// Build a union `OutType`. Unions contribute no fields of their own.
pub fn union<Ctx>(name: &str) -> OutType<Ctx> {
    OutType {
        kind: Arc::new(OutKind::Abstract(Arc::new(Abstract {
            name: name.to_string(),
            description: None,
            kind: AbstractKind::Union,
            types: Mutex::new(Vec::new()),
        }))),
    }
}

/// Register `object` as a member of `abstract_type` (an interface or
/// union). Returns a coercion `Src -> AbstractValue<Ctx>` the resolver
/// calls to select this concrete variant, per §4.2.
pub fn add_type<Ctx, Src>(
    abstract_type: &OutType<Ctx>,
    object: &OutType<Ctx>,
) -> impl Fn(Src) -> AbstractValue<Ctx> + Clone
where
    Ctx: 'static,
    Src: Send + Sync + 'static,
{
    let abs = abstract_type
        .as_abstract()
        .expect("add_type: first argument must be an interface or union")
        .clone();
    let object_arc = object.as_object().expect("add_type: second argument must be an object").clone();

    abs.types.lock().unwrap().push(object.clone());
    object_arc.abstracts.lock().unwrap().push(abs);

    let concrete = object.clone();
    move |src: Src| AbstractValue { concrete_type: concrete.clone(), value: Boxed::new(src) }
}

/// Wrap an `OutType<Ctx>` in `Nullable`.
pub fn nullable<Ctx, T: Send + Sync + 'static>(inner: OutType<Ctx>) -> OutType<Ctx> {
    OutType {
        kind: Arc::new(OutKind::Nullable {
            of: inner,
            unwrap: Arc::new(|b: Boxed| -> Option<Boxed> {
                b.downcast::<Option<T>>()
                    .unwrap_or_else(|_| panic!("internal: nullable({}) type mismatch", std::any::type_name::<T>()))
                    .map(Boxed::new)
            }),
        }),
    }
}

/// Wrap an `OutType<Ctx>` in `List`.
pub fn list<Ctx, T: Send + Sync + 'static>(inner: OutType<Ctx>) -> OutType<Ctx> {
    OutType {
        kind: Arc::new(OutKind::List {
            of: inner,
            iter: Arc::new(|b: Boxed| -> Vec<Boxed> {
                let items: Vec<T> = b
                    .downcast::<Vec<T>>()
                    .unwrap_or_else(|_| panic!("internal: list({}) type mismatch", std::any::type_name::<T>()));
                items.into_iter().map(Boxed::new).collect()
            }),
        }),
    }
}

/// A single field on an object or interface (§3).
pub struct Field<Ctx> {
    pub name: String,
    pub description: Option<String>,
    pub deprecated: Option<String>,
    pub args: ArgList,
    pub typ: OutType<Ctx>,
    pub(crate) resolve:
        Arc<dyn for<'a> Fn(&'a Ctx, &'a Boxed, &'a Arguments) -> BoxFuture<'a, Result<Boxed, String>> + Send + Sync>,
}

impl<Ctx> Clone for Field<Ctx> {
    fn clone(&self) -> Self {
        Field {
            name: self.name.clone(),
            description: self.description.clone(),
            deprecated: self.deprecated.clone(),
            args: self.args.clone(),
            typ: self.typ.clone(),
            resolve: self.resolve.clone(),
        }
    }
}

impl<Ctx> Field<Ctx> {
    pub fn argument(mut self, argument: ArgumentDescriptor) -> Self {
        self.args.push(argument);
        self
    }

    pub fn description(mut self, d: &str) -> Self {
        self.description = Some(d.to_string());
        self
    }

    pub fn deprecated(mut self, reason: &str) -> Self {
        self.deprecated = Some(reason.to_string());
        self
    }

    pub(crate) async fn run<'a>(
        &'a self,
        ctx: &'a Ctx,
        src: &'a Boxed,
        args: &'a Arguments,
    ) -> Result<Boxed, String> {
        (self.resolve)(ctx, src, args).await
    }
}

/// Build a synchronous field: the resolver returns its value immediately.
pub fn field<Ctx, Src, Out, F>(name: &str, typ: OutType<Ctx>, resolve: F) -> Field<Ctx>
where
    Ctx: 'static,
    Src: Send + Sync + 'static,
    Out: Send + Sync + 'static,
    F: Fn(&Ctx, &Src, &Arguments) -> Result<Out, String> + Send + Sync + 'static,
{
    Field {
        name: name.to_string(),
        description: None,
        deprecated: None,
        args: Vec::new(),
        typ,
        resolve: Arc::new(move |ctx: &Ctx, src: &Boxed, args: &Arguments| -> BoxFuture<Result<Boxed, String>> {
            let src_ref = src
                .downcast_ref::<Src>()
                .unwrap_or_else(|| panic!("internal: field `{}` source type mismatch", name));
            let result = resolve(ctx, src_ref, args).map(Boxed::new);
            Box::pin(async move { result })
        }),
    }
}

/// Build an asynchronous field: the resolver returns a future. `lift`
/// (§3/§9) is the identity here — the future is simply awaited.
pub fn async_field<Ctx, Src, Out, F, Fut>(name: &str, typ: OutType<Ctx>, resolve: F) -> Field<Ctx>
where
    Ctx: Send + Sync + 'static,
    Src: Send + Sync + 'static,
    Out: Send + Sync + 'static,
    F: Fn(&Ctx, &Src, &Arguments) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Out, String>> + Send + 'static,
{
    let name_owned = name.to_string();
    Field {
        name: name.to_string(),
        description: None,
        deprecated: None,
        args: Vec::new(),
        typ,
        resolve: Arc::new(move |ctx: &Ctx, src: &Boxed, args: &Arguments| -> BoxFuture<Result<Boxed, String>> {
            let src_ref = src
                .downcast_ref::<Src>()
                .unwrap_or_else(|| panic!("internal: field `{}` source type mismatch", name_owned));
            let fut = resolve(ctx, src_ref, args);
            Box::pin(async move { fut.await.map(Boxed::new) })
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_meta_type_ref_matches_graphql_syntax() {
        let scalar = InputMeta::Scalar { name: "String".into() };
        assert_eq!(scalar.type_ref(), "String!");
        assert_eq!(InputMeta::Nullable(Box::new(scalar.clone())).type_ref(), "String");
        assert_eq!(InputMeta::List(Box::new(scalar.clone())).type_ref(), "[String]!");
        assert_eq!(
            InputMeta::Nullable(Box::new(InputMeta::List(Box::new(scalar)))).type_ref(),
            "[String]"
        );
    }

    #[test]
    fn arg_nullable_maps_null_to_none() {
        let typ = arg_nullable(string_arg());
        let out = typ.coerce(&AstValue::Null, &VariableMap::new()).unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn arg_list_promotes_singleton() {
        let typ = arg_list(int_arg());
        let out = typ.coerce(&AstValue::Int(4), &VariableMap::new()).unwrap();
        assert_eq!(out, vec![4]);
    }
}
