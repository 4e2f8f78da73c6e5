/// Define a decimal-backed quantity newtype.
///
/// Quantities are totally ordered, serialised as decimal strings, and displayed with their unit.
macro_rules! quantity {
    (@define $(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[::serde_with::serde_as]
        #[derive(
            ::derive_more::Add,
            ::derive_more::AddAssign,
            ::derive_more::From,
            ::derive_more::FromStr,
            ::derive_more::Sub,
            ::derive_more::SubAssign,
            ::derive_more::Sum,
            ::serde::Deserialize,
            ::serde::Serialize,
            ::std::clone::Clone,
            ::std::marker::Copy,
            ::std::cmp::Eq,
            ::std::cmp::Ord,
            ::std::cmp::PartialEq,
            ::std::cmp::PartialOrd,
            ::std::hash::Hash,
        )]
        #[must_use]
        pub struct $name(#[serde_as(as = "::serde_with::DisplayFromStr")] pub ::rust_decimal::Decimal);

        impl $name {
            pub const ZERO: Self = Self(::rust_decimal::Decimal::ZERO);

            pub const fn is_negative(self) -> bool {
                self.0.is_sign_negative() && !self.0.is_zero()
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl ::std::ops::Mul<::rust_decimal::Decimal> for $name {
            type Output = Self;

            fn mul(self, rhs: ::rust_decimal::Decimal) -> Self::Output {
                Self(self.0 * rhs)
            }
        }
    };

    ($(#[$attr:meta])* $name:ident, suffix: $suffix:literal) => {
        quantity!(@define $(#[$attr])* $name);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{} {}", self.0.normalize(), $suffix)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{}{}", self.0.normalize(), $suffix)
            }
        }
    };

    ($(#[$attr:meta])* $name:ident, suffix: $suffix:literal, precision: $precision:literal) => {
        quantity!(@define $(#[$attr])* $name);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:.*} {}", $precision, self.0, $suffix)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:.*}{}", $precision, self.0, $suffix)
            }
        }
    };
}

/// Implement `$lhs * $rhs = $output` and its commutative counterpart.
macro_rules! implement_mul {
    ($lhs:ty, $rhs:ty, $output:ty) => {
        impl ::std::ops::Mul<$rhs> for $lhs {
            type Output = $output;

            fn mul(self, rhs: $rhs) -> Self::Output {
                <$output>::from(self.0 * rhs.0)
            }
        }

        impl ::std::ops::Mul<$lhs> for $rhs {
            type Output = $output;

            fn mul(self, rhs: $lhs) -> Self::Output {
                <$output>::from(self.0 * rhs.0)
            }
        }
    };
}
