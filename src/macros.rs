/// Declare a record type and generate its structural descriptor.
///
/// The macro emits the struct (struct-level attributes such as
/// `#[derive(...)]` pass through) and implements [`Introspect`](crate::Introspect)
/// and [`Record`](crate::Record) for it.
///
/// Field attributes of the form `#[key = "value"]` are tags: they are recorded
/// in the descriptor and are not emitted on the struct. Doc comments and every
/// other field attribute (`#[allow(...)]`, `#[serde(...)]`) are emitted on the
/// field unchanged and never become tags. As a consequence a name-value
/// attribute meant for the compiler, such as `#[deprecated = "..."]`, is read
/// as a tag; use the list form (`#[deprecated(note = "...")]`) instead.
/// Fields must not be conditionally compiled.
///
/// Fields declared with a visibility qualifier are exported; private fields
/// are never mapped.
///
/// ```
/// use rowmapper::{Introspect, Mapper};
///
/// rowmapper::record! {
///     #[derive(Debug, Default)]
///     pub struct Activity {
///         pub id: i64,
///         /// When the activity happened
///         #[mapper = "created_at"]
///         pub time: String,
///         pub description: String,
///         #[mapper = "-,ignore"]
///         pub cached: bool,
///         secret: String,
///     }
/// }
///
/// let info = Activity::type_info();
/// let time = &info.as_struct().unwrap().fields[1];
/// assert_eq!(time.tag("mapper"), Some("created_at"));
/// assert_eq!(time.tag("doc"), None);
///
/// let mapper = Mapper::<Activity>::new(&["*"])?;
/// assert_eq!(mapper.columns_string(), "id,created_at,description");
/// # Ok::<(), rowmapper::MapperError>(())
/// ```
#[macro_export]
macro_rules! record {
    // Every field consumed: emit the struct and its impls
    (@munch $name:ident [$($hdr:tt)*] [$($fields:tt)*] [$($infos:tt)*] [$($names:ident)*] [] []) => {
        $($hdr)* {
            $($fields)*
        }

        impl $crate::Introspect for $name {
            type Target = $name;

            fn type_info() -> $crate::TypeInfo {
                $crate::TypeInfo::Struct($crate::StructInfo {
                    name: stringify!($name),
                    fields: ::std::vec![ $($infos)* ],
                })
            }
        }

        impl $crate::Record for $name {
            fn field_refs(&self) -> ::std::vec::Vec<&dyn ::std::any::Any> {
                ::std::vec![ $( &self.$names as &dyn ::std::any::Any ),* ]
            }

            fn field_muts(&mut self) -> ::std::vec::Vec<&mut dyn ::std::any::Any> {
                ::std::vec![ $( &mut self.$names as &mut dyn ::std::any::Any ),* ]
            }
        }
    };

    (@munch $name:ident [$($hdr:tt)*] [$($fields:tt)*] [$($infos:tt)*] [$($names:ident)*] [$($attrs:tt)*] [$($tags:tt)*]
        #[doc = $doc:literal] $($rest:tt)*) => {
        $crate::record!(@munch $name [$($hdr)*] [$($fields)*] [$($infos)*] [$($names)*]
            [$($attrs)* #[doc = $doc]] [$($tags)*] $($rest)*);
    };

    (@munch $name:ident [$($hdr:tt)*] [$($fields:tt)*] [$($infos:tt)*] [$($names:ident)*] [$($attrs:tt)*] [$($tags:tt)*]
        #[$key:ident = $value:literal] $($rest:tt)*) => {
        $crate::record!(@munch $name [$($hdr)*] [$($fields)*] [$($infos)*] [$($names)*]
            [$($attrs)*] [$($tags)* (stringify!($key), $value),] $($rest)*);
    };

    (@munch $name:ident [$($hdr:tt)*] [$($fields:tt)*] [$($infos:tt)*] [$($names:ident)*] [$($attrs:tt)*] [$($tags:tt)*]
        #[$($other:tt)*] $($rest:tt)*) => {
        $crate::record!(@munch $name [$($hdr)*] [$($fields)*] [$($infos)*] [$($names)*]
            [$($attrs)* #[$($other)*]] [$($tags)*] $($rest)*);
    };

    (@munch $name:ident [$($hdr:tt)*] [$($fields:tt)*] [$($infos:tt)*] [$($names:ident)*] [$($attrs:tt)*] [$($tags:tt)*]
        $fvis:vis $fname:ident : $fty:ty $(, $($rest:tt)*)?) => {
        $crate::record!(@munch $name [$($hdr)*]
            [$($fields)* $($attrs)* $fvis $fname : $fty,]
            [$($infos)* $crate::FieldInfo {
                name: stringify!($fname),
                exported: !stringify!($fvis).is_empty(),
                tags: &[ $($tags)* ],
            },]
            [$($names)* $fname]
            [] [] $($($rest)*)?);
    };

    (
        $(#[$smeta:meta])*
        $svis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::record!(@munch $name [$(#[$smeta])* $svis struct $name] [] [] [] [] [] $($body)*);
    };
}
