//! Query execution: argument evaluation (C6), selection collection (C7),
//! resolution (C8), and the top-level operation driver (C9).

pub mod arguments;
pub mod context;
pub mod operation;
pub mod resolve;
pub mod selection;

pub use context::ResolveContext;
pub use operation::{execute, ExecutionResponse};
