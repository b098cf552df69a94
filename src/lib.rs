pub mod error;
pub mod printer;
pub mod types;
pub mod value;

pub use printer::{declarations, run, Variable};
pub use types::TypeName;
pub use value::Value;
