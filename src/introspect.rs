//! # Compile-time record introspection
//!
//! Structural descriptors for record types: the ordered field list, each
//! field's declared name, whether it is exported, and its tags.
//!
//! Descriptors are produced at compile time by the [`record!`](crate::record)
//! macro, so resolving a mapper never needs runtime reflection. Pointer-like
//! wrappers (`&T`, `&mut T`, `Box<T>`, `Rc<T>`, `Arc<T>`) describe themselves
//! as one level of [`TypeInfo::Pointer`] around the wrapped type, and common
//! scalar types describe themselves as [`TypeInfo::Other`] so that a
//! non-record target can be rejected at resolution time.

use std::any::Any;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Description of one field of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Declared field name, as written in the struct definition
    pub name: &'static str,
    /// True when the field was declared with a visibility qualifier (`pub`, `pub(crate)`, ...)
    pub exported: bool,
    /// `(key, value)` tags attached with `#[key = "value"]`
    pub tags: &'static [(&'static str, &'static str)],
}

impl FieldInfo {
    /// Value of the tag stored under `key`.
    ///
    /// An empty value is reported as absent, the same as no tag at all.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .filter(|v| !v.is_empty())
    }
}

/// Description of a record (struct) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructInfo {
    pub name: &'static str,
    pub fields: Vec<FieldInfo>,
}

/// Structural description of any type a mapper may be pointed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeInfo {
    /// A record with named fields
    Struct(StructInfo),
    /// One level of indirection around another type
    Pointer(Box<TypeInfo>),
    /// Anything else, identified by its type name
    Other(&'static str),
}

impl TypeInfo {
    /// Human readable name of the described type.
    pub fn name(&self) -> String {
        match self {
            TypeInfo::Struct(info) => info.name.to_string(),
            TypeInfo::Pointer(inner) => format!("&{}", inner.name()),
            TypeInfo::Other(name) => (*name).to_string(),
        }
    }

    /// Strip at most one level of indirection and return the record description,
    /// if what remains is a record.
    pub fn as_struct(&self) -> Option<&StructInfo> {
        let inner = match self {
            TypeInfo::Pointer(inner) => inner.as_ref(),
            other => other,
        };
        match inner {
            TypeInfo::Struct(info) => Some(info),
            _ => None,
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Types that can describe their own structure.
///
/// `Target` is the type whose instances carry the described fields: the
/// record itself for records and scalars, the pointee for pointer wrappers.
pub trait Introspect {
    type Target;

    fn type_info() -> TypeInfo;
}

/// Per-instance field access for record types.
///
/// Both methods return every field, exported or not, in declaration order,
/// so that positions line up with [`StructInfo::fields`].
pub trait Record: Introspect<Target = Self> + 'static {
    fn field_refs(&self) -> Vec<&dyn Any>;

    fn field_muts(&mut self) -> Vec<&mut dyn Any>;
}

impl<T: Introspect + ?Sized> Introspect for &T {
    type Target = T::Target;

    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(Box::new(T::type_info()))
    }
}

impl<T: Introspect + ?Sized> Introspect for &mut T {
    type Target = T::Target;

    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(Box::new(T::type_info()))
    }
}

impl<T: Introspect + ?Sized> Introspect for Box<T> {
    type Target = T::Target;

    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(Box::new(T::type_info()))
    }
}

impl<T: Introspect + ?Sized> Introspect for Rc<T> {
    type Target = T::Target;

    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(Box::new(T::type_info()))
    }
}

impl<T: Introspect + ?Sized> Introspect for Arc<T> {
    type Target = T::Target;

    fn type_info() -> TypeInfo {
        TypeInfo::Pointer(Box::new(T::type_info()))
    }
}

macro_rules! scalar_introspect {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Introspect for $ty {
                type Target = $ty;

                fn type_info() -> TypeInfo {
                    TypeInfo::Other(stringify!($ty))
                }
            }
        )*
    };
}

scalar_introspect!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    (),
);

impl<T> Introspect for Vec<T> {
    type Target = Vec<T>;

    fn type_info() -> TypeInfo {
        TypeInfo::Other(std::any::type_name::<Vec<T>>())
    }
}

impl<T> Introspect for Option<T> {
    type Target = Option<T>;

    fn type_info() -> TypeInfo {
        TypeInfo::Other(std::any::type_name::<Option<T>>())
    }
}
