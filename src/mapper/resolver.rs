//! Field to column resolution.
//!
//! Resolution runs once per mapper. It walks the exported fields of the
//! target record in declaration order and decides, for each one, which
//! column (if any) it feeds:
//!
//! 1. A tag under the resolver's key names the column verbatim. A tag ending
//!    in `,ignore` removes the field from every mapping.
//! 2. Without a tag, the field mapper turns the declared name into a column.
//! 3. Unless the wildcard `*` was requested, only requested columns are kept.
//!
//! Output order always follows field declaration order.

use log::{debug, trace};

use super::errors::{MapperError, Result};
use super::options::FieldMapper;
use super::Mapper;
use crate::introspect::{Introspect, TypeInfo};

/// Tag key used by [`Mapper::new`].
pub const DEFAULT_TAG_KEY: &str = "mapper";

/// Requested column meaning "every exported, non ignored field".
pub const WILDCARD: &str = "*";

const IGNORE_SUFFIX: &str = ",ignore";

/// Ordered field positions and their columns, as produced by [`Resolver::resolve_info`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved column names, in field declaration order
    pub columns: Vec<String>,
    /// Index of the field feeding each column, parallel to `columns`
    pub fields: Vec<usize>,
}

/// Builds mappers from a tag key and a field mapper.
#[derive(Debug, Clone)]
pub struct Resolver {
    tag_key: String,
    field_mapper: FieldMapper,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            tag_key: DEFAULT_TAG_KEY.to_string(),
            field_mapper: FieldMapper::default(),
        }
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_key = key.into();
        self
    }

    /// Field mapper used for untagged fields during resolution. The resulting
    /// mapper carries it afterwards as its `field_mapper` setting.
    pub fn field_mapper(mut self, fm: FieldMapper) -> Self {
        self.field_mapper = fm;
        self
    }

    /// Resolve `columns` against the fields of `T` and build a mapper.
    ///
    /// `T` may be a record or one level of pointer to a record (`&R`, `Box<R>`, ...).
    pub fn resolve<T, S>(&self, columns: &[S]) -> Result<Mapper<T>>
    where
        T: Introspect,
        S: AsRef<str>,
    {
        let info = T::type_info();
        let resolution = self.resolve_info(&info, columns)?;
        let (target, field_count) = info
            .as_struct()
            .map(|s| (s.name, s.fields.len()))
            .unwrap_or((std::any::type_name::<T>(), 0));

        Ok(Mapper::from_parts(
            resolution,
            target,
            field_count,
            self.field_mapper.clone(),
        ))
    }

    /// Resolve `columns` against a structural description.
    pub fn resolve_info<S: AsRef<str>>(&self, info: &TypeInfo, columns: &[S]) -> Result<Resolution> {
        if self.tag_key.is_empty() {
            return Err(MapperError::EmptyTagKey);
        }
        let record = info.as_struct().ok_or_else(|| MapperError::NotAStruct {
            type_name: info.name(),
        })?;
        if columns.is_empty() {
            return Err(MapperError::NoColumns);
        }

        let wildcard = is_wildcard(columns);
        let mut wanted: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
        let mut resolution = Resolution {
            columns: Vec::with_capacity(columns.len()),
            fields: Vec::with_capacity(columns.len()),
        };

        for (index, field) in record.fields.iter().enumerate() {
            if !field.exported {
                continue;
            }

            let column = match field.tag(&self.tag_key) {
                Some(tag) if tag.ends_with(IGNORE_SUFFIX) => {
                    trace!("{}.{} ignored by tag `{}`", record.name, field.name, tag);
                    continue;
                }
                Some(tag) => tag.to_string(),
                None => self.field_mapper.apply(field.name),
            };

            if !wildcard {
                match wanted.iter().position(|w| *w == column) {
                    // Order of the leftovers does not matter, only what remains
                    Some(pos) => {
                        wanted.swap_remove(pos);
                    }
                    None => {
                        trace!("{}.{} not requested (column `{}`)", record.name, field.name, column);
                        continue;
                    }
                }
            }

            if resolution.columns.contains(&column) {
                return Err(MapperError::DuplicateColumn { column });
            }

            resolution.columns.push(column);
            resolution.fields.push(index);
        }

        if !wildcard && !wanted.is_empty() {
            return Err(MapperError::MissingFields {
                columns: wanted.into_iter().map(str::to_string).collect(),
            });
        }

        debug!(
            "Resolved {} columns for {} with tag key `{}`: {:?}",
            resolution.columns.len(),
            record.name,
            self.tag_key,
            resolution.columns
        );

        Ok(resolution)
    }
}

pub(crate) fn is_wildcard<S: AsRef<str>>(columns: &[S]) -> bool {
    columns.iter().any(|c| c.as_ref() == WILDCARD)
}
