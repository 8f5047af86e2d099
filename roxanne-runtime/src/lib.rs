pub mod env;
pub mod error;
pub mod eval;
pub mod stringify;
pub mod value;
