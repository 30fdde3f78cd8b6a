//! Rowmapper - struct field to SQL column mapping
//!
//! This crate keeps hand written SQL and Rust structs in step:
//! - Record types declared with [`record!`] describe their fields at compile time
//! - A [`Mapper`] resolves fields to columns once, failing fast on typos
//! - Column lists, placeholder lists, bind values and scan targets all come
//!   out in the same order
//!
//! It never talks to a database itself.
//!
//! ```
//! use rowmapper::{record, Mapper};
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Activity {
//!         pub id: i64,
//!         pub time: String,
//!         pub description: String,
//!     }
//! }
//!
//! let mapper = Mapper::<Activity>::new(&["*"])?;
//! let sql = format!("INSERT INTO activities({}) VALUES({})", mapper.columns_string(), mapper.marks());
//! assert_eq!(sql, "INSERT INTO activities(id,time,description) VALUES(?,?,?)");
//! # Ok::<(), rowmapper::MapperError>(())
//! ```

mod macros;

pub mod config;
pub mod introspect;
pub mod mapper;
pub mod utils;

// Re-export commonly used types
pub use config::{ConfigError, MapperConfig, NameCase};
pub use introspect::{FieldInfo, Introspect, Record, StructInfo, TypeInfo};
pub use mapper::{
    with_comma, with_field_mapper, with_mark, FieldMapper, Mapper, MapperError, MapperOption,
    Resolution, Resolver, DEFAULT_TAG_KEY, WILDCARD,
};
