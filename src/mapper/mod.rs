//! # Record to column mapper
//!
//! A [`Mapper`] carries the resolved correspondence between the fields of a
//! record type and database columns, and builds the pieces a hand written
//! query needs from it:
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
//!
//! let select = format!("SELECT {} FROM activities", mapper.columns_string());
//! assert_eq!(select, "SELECT id,time,description FROM activities");
//! let insert = format!("INSERT INTO activities VALUES({})", mapper.marks());
//! assert_eq!(insert, "INSERT INTO activities VALUES(?,?,?)");
//!
//! // Bind in column order
//! let activity = Activity { id: 1, ..Default::default() };
//! let params = mapper.values(&activity)?;
//! assert_eq!(params[0].downcast_ref::<i64>(), Some(&1));
//!
//! // Scan in column order
//! let mut scanned = Activity::default();
//! for slot in mapper.addrs(&mut scanned)? {
//!     if let Some(text) = slot.downcast_mut::<String>() {
//!         text.push_str("x");
//!     }
//! }
//! assert_eq!(scanned.description, "x");
//! # Ok::<(), rowmapper::MapperError>(())
//! ```
//!
//! Resolution happens once, in the constructor. Everything else is a cheap
//! read of the resolved columns and field positions.

pub mod errors;
pub mod options;
pub mod resolver;

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use validator::Validate;

use crate::config::MapperConfig;
use crate::introspect::{Introspect, Record};

pub use errors::{MapperError, Result};
pub use options::{with_comma, with_field_mapper, with_mark, FieldMapper, MapperOption};
pub use resolver::{Resolution, Resolver, DEFAULT_TAG_KEY, WILDCARD};

/// Resolved mapping between the exported fields of `T` and a set of columns.
///
/// `T` is the record type, or one level of pointer to it. Columns are kept in
/// field declaration order and never repeat.
pub struct Mapper<T> {
    fields: Vec<usize>,
    cols: Vec<String>,
    target: &'static str,
    /// Number of fields the target describes, mapped or not
    field_count: usize,

    /// Delimiter between columns and between marks. Defaults to `,`.
    pub comma: char,

    /// Placeholder written by [`Mapper::marks`]. Defaults to `?`.
    pub mark: char,

    /// Field mapper this mapper was resolved with. Changing it afterwards
    /// does not re-resolve; it is carried over to subsets.
    pub field_mapper: FieldMapper,

    _target: PhantomData<fn() -> T>,
}

impl<T: Introspect> Mapper<T> {
    /// Map `columns` onto the fields of `T`, using tags under the `mapper` key.
    ///
    /// Pass `&["*"]` to map every exported field. Consider building mappers
    /// at startup so that mistyped columns fail fast.
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Result<Self> {
        Resolver::new().resolve(columns)
    }

    /// Same as [`Mapper::new`] with a different tag key.
    pub fn with_key<S: AsRef<str>>(key: &str, columns: &[S]) -> Result<Self> {
        Resolver::new().tag_key(key).resolve(columns)
    }

    /// Build a mapper with every setting taken from `config`.
    ///
    /// The configuration is validated first, whether it came from YAML or
    /// was built in code.
    pub fn from_config<S: AsRef<str>>(config: &MapperConfig, columns: &[S]) -> Result<Self> {
        config
            .validate()
            .map_err(|e| MapperError::InvalidConfig {
                message: e.to_string(),
            })?;
        let mapper = Resolver::new()
            .tag_key(config.tag_key.as_str())
            .field_mapper(config.name_case.field_mapper())
            .resolve(columns)?;
        Ok(mapper.with_options([with_comma(config.comma), with_mark(config.mark)]))
    }
}

impl<T> Mapper<T> {
    pub(crate) fn from_parts(
        resolution: Resolution,
        target: &'static str,
        field_count: usize,
        field_mapper: FieldMapper,
    ) -> Self {
        Self {
            fields: resolution.fields,
            cols: resolution.columns,
            target,
            field_count,
            comma: ',',
            mark: '?',
            field_mapper,
            _target: PhantomData,
        }
    }

    /// Resolved column names.
    pub fn columns(&self) -> &[String] {
        &self.cols
    }

    /// Field positions feeding each column, parallel to [`Mapper::columns`].
    pub fn field_indices(&self) -> &[usize] {
        &self.fields
    }

    /// `(column, field position)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.cols
            .iter()
            .map(String::as_str)
            .zip(self.fields.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Name of the record type this mapper was resolved against.
    pub fn target_name(&self) -> &'static str {
        self.target
    }

    /// Columns separated by `comma`, suitable for a SELECT list: `a,b,c`.
    ///
    /// Use [`Mapper::columns_string_prefix`] for table qualified columns.
    pub fn columns_string(&self) -> String {
        self.columns_string_prefix("")
    }

    /// Columns with `prefix` prepended to each: `t.a,t.b,t.c`.
    pub fn columns_string_prefix(&self, prefix: &str) -> String {
        if let [single] = self.cols.as_slice() {
            return format!("{}{}", prefix, single);
        }

        let size = self.cols.iter().map(|c| prefix.len() + c.len()).sum::<usize>()
            + self.cols.len().saturating_sub(1) * self.comma.len_utf8();
        let mut out = String::with_capacity(size);
        for (i, col) in self.cols.iter().enumerate() {
            if i > 0 {
                out.push(self.comma);
            }
            out.push_str(prefix);
            out.push_str(col);
        }
        out
    }

    /// One `mark` per column, separated by `comma`: `?,?,?`.
    pub fn marks(&self) -> String {
        let mut out = String::with_capacity(
            self.cols.len() * (self.mark.len_utf8() + self.comma.len_utf8()),
        );
        for i in 0..self.cols.len() {
            if i > 0 {
                out.push(self.comma);
            }
            out.push(self.mark);
        }
        out
    }

    /// Apply `opts` in order; when two target the same setting the later wins.
    pub fn set_options<I>(&mut self, opts: I) -> &mut Self
    where
        I: IntoIterator<Item = MapperOption>,
    {
        for opt in opts {
            opt.apply_to(self);
        }
        self
    }

    /// By-value form of [`Mapper::set_options`].
    pub fn with_options<I>(mut self, opts: I) -> Self
    where
        I: IntoIterator<Item = MapperOption>,
    {
        self.set_options(opts);
        self
    }

    /// A mapper restricted to `columns`, keeping this mapper's column order.
    ///
    /// An empty request gives an empty mapper. A request containing the
    /// wildcard gives back this very mapper, borrowed rather than copied.
    /// Requested names this mapper does not know are skipped.
    pub fn subset<S: AsRef<str>>(&self, columns: &[S]) -> Cow<'_, Mapper<T>> {
        let mut sub = Mapper {
            fields: Vec::with_capacity(columns.len()),
            cols: Vec::with_capacity(columns.len()),
            target: self.target,
            field_count: self.field_count,
            comma: self.comma,
            mark: self.mark,
            field_mapper: self.field_mapper.clone(),
            _target: PhantomData,
        };
        if columns.is_empty() {
            return Cow::Owned(sub);
        }
        if resolver::is_wildcard(columns) {
            return Cow::Borrowed(self);
        }

        for (col, field) in self.iter() {
            if columns.iter().any(|c| c.as_ref() == col) {
                sub.cols.push(col.to_string());
                sub.fields.push(field);
            }
        }
        Cow::Owned(sub)
    }
}

impl<T> Mapper<T>
where
    T: Introspect,
    T::Target: Record,
{
    /// Mapped field values of `record`, in column order.
    ///
    /// Suitable as positional parameters for a statement built with
    /// [`Mapper::marks`]. Fails with [`MapperError::FieldCountMismatch`] when
    /// a hand written [`Record`] exposes a different number of fields than it
    /// describes.
    pub fn values<'r>(&self, record: &'r T::Target) -> Result<Vec<&'r dyn Any>> {
        let refs = record.field_refs();
        self.check_field_count(refs.len())?;
        self.fields
            .iter()
            .map(|&i| {
                refs.get(i)
                    .copied()
                    .ok_or_else(|| self.field_count_mismatch(refs.len()))
            })
            .collect()
    }

    /// Mutable references to the mapped fields of `record`, in column order.
    ///
    /// Writing through the returned references updates `record` in place,
    /// which is what a row scan needs. On success there is exactly one
    /// reference per column; otherwise fails like [`Mapper::values`].
    pub fn addrs<'r>(&self, record: &'r mut T::Target) -> Result<Vec<&'r mut dyn Any>> {
        let mut slots: Vec<Option<&'r mut dyn Any>> =
            record.field_muts().into_iter().map(Some).collect();
        let exposed = slots.len();
        self.check_field_count(exposed)?;
        self.fields
            .iter()
            .map(|&i| {
                slots
                    .get_mut(i)
                    .and_then(Option::take)
                    .ok_or_else(|| self.field_count_mismatch(exposed))
            })
            .collect()
    }

    /// [`Mapper::values`] for a dynamically typed instance: the record itself
    /// or a `Box` of it.
    pub fn values_dyn<'r>(&self, instance: &'r dyn Any) -> Result<Vec<&'r dyn Any>> {
        if let Some(record) = instance.downcast_ref::<T::Target>() {
            return self.values(record);
        }
        if let Some(record) = instance.downcast_ref::<Box<T::Target>>() {
            return self.values(record);
        }
        Err(self.wrong_destination())
    }

    /// [`Mapper::addrs`] for a dynamically typed instance: the record itself
    /// or a `Box` of it.
    pub fn addrs_dyn<'r>(&self, instance: &'r mut dyn Any) -> Result<Vec<&'r mut dyn Any>> {
        if instance.is::<Box<T::Target>>() {
            return instance
                .downcast_mut::<Box<T::Target>>()
                .ok_or_else(|| self.wrong_destination())
                .and_then(|record| self.addrs(&mut **record));
        }
        instance
            .downcast_mut::<T::Target>()
            .ok_or_else(|| self.wrong_destination())
            .and_then(|record| self.addrs(record))
    }

    fn check_field_count(&self, exposed: usize) -> Result<()> {
        if exposed != self.field_count {
            return Err(self.field_count_mismatch(exposed));
        }
        Ok(())
    }

    fn field_count_mismatch(&self, exposed: usize) -> MapperError {
        MapperError::FieldCountMismatch {
            target: self.target,
            described: self.field_count,
            exposed,
        }
    }

    fn wrong_destination(&self) -> MapperError {
        MapperError::WrongDestination {
            expected: type_name::<T::Target>(),
        }
    }
}

impl<T> Clone for Mapper<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            cols: self.cols.clone(),
            target: self.target,
            field_count: self.field_count,
            comma: self.comma,
            mark: self.mark,
            field_mapper: self.field_mapper.clone(),
            _target: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Mapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("target", &self.target)
            .field("field_count", &self.field_count)
            .field("cols", &self.cols)
            .field("fields", &self.fields)
            .field("comma", &self.comma)
            .field("mark", &self.mark)
            .field("field_mapper", &self.field_mapper)
            .finish()
    }
}
