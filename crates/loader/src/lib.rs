//! Schema-driven loader for flat `identifier = value` files.
//!
//! A caller declares the identifiers it expects and their types in a
//! [`Schema`], hands it to a [`ValuesLoader`] and loads a file. Every line that
//! does not conform is collected as a [`LoadError`]; the returned
//! [`LoadResult`] answers whether the load succeeded and serves typed values.
//!
//! ```
//! use values_loader::{Schema, ValueType, ValuesLoader};
//!
//! let schema = Schema::new()
//!     .with_entry("count", ValueType::Integer)
//!     .with_entry("name", ValueType::String);
//! let result = ValuesLoader::new(schema).load_str("count = 42\nname = \"demo\"\n");
//!
//! assert!(result.is_success());
//! assert_eq!(result.value::<i64>("count").unwrap(), 42);
//! assert_eq!(result.value::<String>("name").unwrap(), "demo");
//! ```

pub mod constants;
pub mod error;
mod loader;
pub mod schema;
pub mod types;

pub use error::{LoadError, ParseError, SchemaError, ValueError};
pub use loader::{
    LoadResult, ValuesLoader, parse_boolean, parse_float, parse_integer, parse_string,
    parse_value,
};
pub use schema::{Schema, SchemaEntry};
pub use types::{FromTypedValue, TypedValue, ValueType};
