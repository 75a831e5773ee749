//! JSON value tree and its serializer.

pub mod ser;
pub mod value;

pub use ser::{Style, measure, serialize_into, to_string};
pub use value::{Object, Value};
