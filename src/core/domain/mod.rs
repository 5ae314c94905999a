//! Domain types.

mod mapping;
mod value;

pub use mapping::Mapping;
pub use value::Value;
