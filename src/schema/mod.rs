//! The schema type system: argument coercion (C2), output types (C3), and
//! schema assembly (C4).

pub mod meta;
pub mod model;

pub use meta::{
    add_type, arg, arg_enum, arg_list, arg_nullable, arg_scalar, async_field, boolean, boolean_arg, default_arg,
    enum_type, field, float, float_arg, id, id_arg, input_object, int, int_arg, interface, list, nullable, obj,
    scalar, string, string_arg, union, AbstractValue, ArgList, ArgType, ArgumentDescriptor, ArgumentMeta, Arguments,
    EnumValueMeta, Field, InputMeta, OutType,
};
pub use model::{create, Schema};
