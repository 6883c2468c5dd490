pub mod functions;
pub mod namespaces;
pub mod runtime;
