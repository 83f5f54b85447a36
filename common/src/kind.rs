//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Every variant is identified on the wire by its `code`. Additional `alias`
/// codes are accepted when parsing, but never produced.
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         #[code = "cube"]
///         Cube,
///
///         #[doc = "A sphere"]
///         #[code = "sphere"]
///         #[alias = "ball"]
///         Sphere,
///     }
/// }
///
/// assert_eq!("ball".parse::<Kind>(), Ok(Kind::Sphere));
/// assert_eq!(Kind::Sphere.to_string(), "sphere");
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                #[code = $code:literal]
                $( #[alias = $alias:literal] )*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::serde::Deserialize,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            $crate::private::serde::Serialize,
        )]
        #[doc = $doc]
        pub enum $name {
            $(
                #[doc = $variant_doc]
                #[serde(rename = $code $(, alias = $alias)*)]
                #[strum(to_string = $code $(, serialize = $alias)*)]
                $variant,
            )*
        }

        impl $name {
            /// All the variants, in declaration order.
            pub const ALL: &'static [Self] = &[$( Self::$variant ),*];

            /// Returns the wire code of this value.
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )*
                }
            }
        }
    };
}
