#![forbid(unsafe_code)]

//! Field introspection.
//!
//! Any host type that should appear in an inspector pane implements
//! [`Describe`], listing its public fields in declaration order. Field
//! values are converted to a structured [`FieldValue`] through [`Inspect`],
//! so nested records can be rendered either with their field names
//! (`{x:1 y:2}`) or compactly (`{1 2}`).
//!
//! The [`describe!`](crate::describe) macro implements both traits for a
//! plain struct:
//!
//! ```
//! use simscope_widgets::describe;
//! use simscope_widgets::reflect::{Describe, FieldValue};
//!
//! struct Position {
//!     x: f64,
//!     y: f64,
//! }
//! describe!(Position { x, y });
//!
//! let p = Position { x: 1.0, y: 2.5 };
//! assert_eq!(p.type_name(), "Position");
//! let fields = p.fields();
//! assert_eq!(fields[1].name, "y");
//! assert_eq!(fields[1].value, FieldValue::Scalar("2.5".into()));
//! ```

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::time::Duration;

/// A record whose public fields can be listed.
pub trait Describe {
    /// Name shown on the record's label line.
    fn type_name(&self) -> &str;

    /// Public fields in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor>;
}

/// Conversion of a field value into its structured rendering.
pub trait Inspect {
    /// Declared type shown in the type column.
    fn type_label() -> Cow<'static, str>;

    /// Current value.
    fn inspect(&self) -> FieldValue;
}

/// A structured field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Anything rendered as a single token.
    Scalar(String),
    /// A nested record with named fields.
    Record(Vec<(Cow<'static, str>, FieldValue)>),
    /// A sequence.
    List(Vec<FieldValue>),
    /// An absent optional value.
    None,
}

impl FieldValue {
    /// Whether the value has inner structure.
    pub fn is_nested(&self) -> bool {
        matches!(self, FieldValue::Record(_) | FieldValue::List(_))
    }

    /// Render without nested field names: `{1 2}` instead of `{x:1 y:2}`.
    pub fn compact(&self) -> Compact<'_> {
        Compact(self)
    }

    fn write(&self, out: &mut impl fmt::Write, named: bool) -> fmt::Result {
        match self {
            FieldValue::Scalar(text) => out.write_str(text),
            FieldValue::None => out.write_str("None"),
            FieldValue::Record(fields) => {
                out.write_char('{')?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.write_char(' ')?;
                    }
                    if named {
                        write!(out, "{name}:")?;
                    }
                    value.write(out, named)?;
                }
                out.write_char('}')
            }
            FieldValue::List(items) => {
                out.write_char('[')?;
                for (i, value) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_char(' ')?;
                    }
                    value.write(out, named)?;
                }
                out.write_char(']')
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, true)
    }
}

/// Display adapter returned by [`FieldValue::compact`].
#[derive(Debug, Clone, Copy)]
pub struct Compact<'a>(&'a FieldValue);

impl fmt::Display for Compact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write(f, false)
    }
}

/// One public field as produced during a formatter pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: Cow<'static, str>,
    pub type_label: Cow<'static, str>,
    pub value: FieldValue,
}

impl FieldDescriptor {
    /// Describe `value` under `name`, taking the type label from [`Inspect`].
    pub fn of<T: Inspect + ?Sized>(name: &'static str, value: &T) -> Self {
        Self {
            name: Cow::Borrowed(name),
            type_label: T::type_label(),
            value: value.inspect(),
        }
    }

    /// A field with explicit parts, for hand-written [`Describe`] impls.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        type_label: impl Into<Cow<'static, str>>,
        value: FieldValue,
    ) -> Self {
        Self {
            name: name.into(),
            type_label: type_label.into(),
            value,
        }
    }

    /// Whether the value has inner structure.
    pub fn is_nested(&self) -> bool {
        self.value.is_nested()
    }
}

macro_rules! inspect_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Inspect for $t {
                fn type_label() -> Cow<'static, str> {
                    Cow::Borrowed(stringify!($t))
                }

                fn inspect(&self) -> FieldValue {
                    FieldValue::Scalar(self.to_string())
                }
            }
        )*
    };
}

inspect_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl Inspect for str {
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed("str")
    }

    fn inspect(&self) -> FieldValue {
        FieldValue::Scalar(self.to_owned())
    }
}

impl Inspect for Duration {
    fn type_label() -> Cow<'static, str> {
        Cow::Borrowed("Duration")
    }

    fn inspect(&self) -> FieldValue {
        FieldValue::Scalar(format!("{self:?}"))
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn type_label() -> Cow<'static, str> {
        Cow::Owned(format!("&{}", T::type_label()))
    }

    fn inspect(&self) -> FieldValue {
        (**self).inspect()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn type_label() -> Cow<'static, str> {
        Cow::Owned(format!("Option<{}>", T::type_label()))
    }

    fn inspect(&self) -> FieldValue {
        match self {
            Some(value) => value.inspect(),
            None => FieldValue::None,
        }
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn type_label() -> Cow<'static, str> {
        Cow::Owned(format!("Vec<{}>", T::type_label()))
    }

    fn inspect(&self) -> FieldValue {
        self.as_slice().inspect()
    }
}

impl<T: Inspect> Inspect for [T] {
    fn type_label() -> Cow<'static, str> {
        Cow::Owned(format!("[{}]", T::type_label()))
    }

    fn inspect(&self) -> FieldValue {
        FieldValue::List(self.iter().map(Inspect::inspect).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn type_label() -> Cow<'static, str> {
        Cow::Owned(format!("[{}; {N}]", T::type_label()))
    }

    fn inspect(&self) -> FieldValue {
        self.as_slice().inspect()
    }
}

/// Implement [`Describe`] and [`Inspect`] for a struct from a list of its fields.
///
/// Every listed field must itself implement [`Inspect`]. Types implemented
/// this way can be nested inside each other.
#[macro_export]
macro_rules! describe {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::reflect::Describe for $ty {
            fn type_name(&self) -> &str {
                stringify!($ty)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::reflect::FieldDescriptor> {
                ::std::vec![
                    $($crate::reflect::FieldDescriptor::of(stringify!($field), &self.$field)),*
                ]
            }
        }

        impl $crate::reflect::Inspect for $ty {
            fn type_label() -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::Borrowed(stringify!($ty))
            }

            fn inspect(&self) -> $crate::reflect::FieldValue {
                $crate::reflect::FieldValue::Record(::std::vec![
                    $((
                        ::std::borrow::Cow::Borrowed(stringify!($field)),
                        $crate::reflect::Inspect::inspect(&self.$field),
                    )),*
                ])
            }
        }
    };
}

/// Render a value the way the full inspector does, for ad-hoc use.
pub fn render(value: &FieldValue, compact: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = value.write(&mut out, !compact);
    out
}
