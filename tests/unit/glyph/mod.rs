pub mod builtin;
pub mod face;
pub mod resolver;
