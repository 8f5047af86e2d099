pub mod node;
pub mod op;
pub mod span;
