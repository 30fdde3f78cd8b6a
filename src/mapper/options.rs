//! Mapper configuration knobs and fluent options.
//!
//! ```
//! use rowmapper::{record, with_comma, with_mark, Mapper};
//!
//! record! {
//!     pub struct Activity {
//!         pub id: i64,
//!         pub time: String,
//!     }
//! }
//!
//! let mapper = Mapper::<Activity>::new(&["*"])?
//!     .with_options([with_comma(';'), with_mark('$')]);
//! assert_eq!(mapper.columns_string(), "id;time");
//! assert_eq!(mapper.marks(), "$;$");
//! # Ok::<(), rowmapper::MapperError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use super::Mapper;
use crate::utils::name_case;

/// Transforms a struct field name into a column name when the field has no tag.
#[derive(Clone)]
pub struct FieldMapper {
    name: &'static str,
    func: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl FieldMapper {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: "custom",
            func: Arc::new(func),
        }
    }

    /// Field names are used verbatim.
    pub fn direct() -> Self {
        Self::named("direct", |name| name.to_string())
    }

    pub fn lowercase() -> Self {
        Self::named("lowercase", name_case::to_lower_case)
    }

    pub fn uppercase() -> Self {
        Self::named("uppercase", name_case::to_upper_case)
    }

    pub fn snake_case() -> Self {
        Self::named("snake_case", name_case::to_snake_case)
    }

    fn named(name: &'static str, func: fn(&str) -> String) -> Self {
        Self {
            name,
            func: Arc::new(func),
        }
    }

    pub fn apply(&self, field: &str) -> String {
        (self.func)(field)
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl fmt::Debug for FieldMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldMapper").field(&self.name).finish()
    }
}

/// One configuration change applied by [`Mapper::set_options`].
#[derive(Debug, Clone)]
pub enum MapperOption {
    FieldMapper(FieldMapper),
    Comma(char),
    Mark(char),
}

impl MapperOption {
    pub(crate) fn apply_to<T>(self, mapper: &mut Mapper<T>) {
        match self {
            MapperOption::FieldMapper(fm) => mapper.field_mapper = fm,
            MapperOption::Comma(comma) => mapper.comma = comma,
            MapperOption::Mark(mark) => mapper.mark = mark,
        }
    }
}

/// Replace the field mapper; `None` selects [`FieldMapper::direct`].
pub fn with_field_mapper(fm: Option<FieldMapper>) -> MapperOption {
    MapperOption::FieldMapper(fm.unwrap_or_else(FieldMapper::direct))
}

pub fn with_comma(comma: char) -> MapperOption {
    MapperOption::Comma(comma)
}

pub fn with_mark(mark: char) -> MapperOption {
    MapperOption::Mark(mark)
}
