pub mod conditions;

pub use conditions::*;
