//! Closed code lists from the POCT1-A data dictionary.
//!
//! Every coded field whose legal values are enumerated by the standard has a
//! matching enum generated by the `code_set!` macro. The enums give typed
//! access to the wire codes, while the message structs themselves keep the
//! open [`CodedValue`](crate::CodedValue) so that vendor extensions survive a
//! decode/encode cycle untouched.
//!
//! # Examples
//!
//! ```
//! use poct_types::{CodeSet, Gender};
//!
//! assert_eq!(Gender::from_code("F"), Some(Gender::Female));
//! assert_eq!(Gender::Male.code(), "M");
//! assert!(Gender::is_valid("U"));
//! assert!(!Gender::is_valid("ZZZ_BOGUS"));
//! assert_eq!(Gender::ALL.len(), 6);
//! ```

/// A code list whose members map one-to-one onto wire codes.
pub trait CodeSet: Sized + Copy + 'static {
    /// Every standard member of the list, in dictionary order.
    ///
    /// Fallback members (such as an `Unknown` used when a field cannot be
    /// decoded) are not part of this slice.
    const ALL: &'static [Self];

    /// Returns the wire code for this member.
    fn code(self) -> &'static str;

    /// Looks up a standard member by its wire code.
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.code() == code)
    }

    /// Returns true if `code` is one of the standard codes of this list.
    fn is_valid(code: &str) -> bool {
        Self::from_code(code).is_some()
    }
}

/// Declares a code-set enum together with its [`CodeSet`] impl.
///
/// An optional trailing `unknown` clause adds a fallback variant that is
/// excluded from [`CodeSet::ALL`] and becomes the enum's `Default`. Lists
/// without a fallback may instead name a standard member with a `default`
/// clause.
macro_rules! code_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
        $( unknown $fallback:ident => $fcode:literal; )?
        $( default $default:ident; )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                #[doc = concat!("Wire code `", $code, "`.")]
                $(#[$vmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $code))]
                $variant,
            )+
            $(
                #[doc = concat!("Fallback used when the code cannot be interpreted (`", $fcode, "`).")]
                #[cfg_attr(feature = "serde", serde(rename = $fcode))]
                $fallback,
            )?
        }

        impl $name {
            /// Looks up a standard member by its wire code.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Returns the wire code for this member.
            pub fn code(self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )+
                    $( Self::$fallback => $fcode, )?
                }
            }

            /// Returns true if `code` is one of the standard codes of this list.
            pub fn is_valid(code: &str) -> bool {
                Self::from_code(code).is_some()
            }
        }

        $(
            impl $name {
                /// Decodes `code`, falling back to the unknown member.
                pub fn from_code_or_unknown(code: &str) -> Self {
                    Self::from_code(code).unwrap_or(Self::$fallback)
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::$fallback
                }
            }
        )?

        $(
            impl Default for $name {
                fn default() -> Self {
                    Self::$default
                }
            }
        )?

        impl $crate::code_set::CodeSet for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn code(self) -> &'static str {
                $name::code(self)
            }

            fn from_code(code: &str) -> Option<Self> {
                $name::from_code(code)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl From<$name> for $crate::CodedValue {
            fn from(member: $name) -> Self {
                $crate::CodedValue::new(member.code())
            }
        }
    };
}

pub(crate) use code_set;

#[cfg(test)]
mod tests {
    use super::*;

    code_set! {
        /// Test-only list.
        enum Colour {
            Red => "R",
            Green => "G",
        }
        unknown Unknown => "?";
    }

    code_set! {
        /// Test-only list with a standard default.
        enum Size {
            Small => "S",
            Large => "L",
        }
        default Large;
    }

    #[test]
    fn test_default_clause() {
        assert_eq!(Size::default(), Size::Large);
        assert_eq!(<Size as CodeSet>::ALL, &[Size::Small, Size::Large]);
    }

    #[test]
    fn test_generated_lookup() {
        assert_eq!(Colour::from_code("R"), Some(Colour::Red));
        assert_eq!(Colour::from_code("?"), None);
        assert_eq!(Colour::Unknown.code(), "?");
        assert_eq!(Colour::from_code_or_unknown("B"), Colour::Unknown);
        assert_eq!(Colour::default(), Colour::Unknown);
    }

    #[test]
    fn test_all_excludes_fallback() {
        assert_eq!(<Colour as CodeSet>::ALL, &[Colour::Red, Colour::Green]);
        assert!(<Colour as CodeSet>::is_valid("G"));
        assert!(!<Colour as CodeSet>::is_valid("?"));
    }

    #[test]
    fn test_into_coded_value() {
        let cv = crate::CodedValue::from(Colour::Green);
        assert_eq!(cv.code, "G");
        assert_eq!(cv.display_name, None);
        assert_eq!(Colour::Green.to_string(), "G");
    }
}
