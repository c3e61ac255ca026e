//! Ring implementations for the primitive numeric types.
//!
//! Integers form exact rings. `f32` and `f64` are treated as (approximate)
//! fields so that interpolation can divide; zero tests stay exact.

use num_traits::{NumCast, One, Signed, Zero};

use crate::traits::{Field, OrderedRing, Ring};

macro_rules! impl_ring {
    ($($t:ty),*) => {
        $(
            impl Ring for $t {
                fn zero() -> Self {
                    <$t as Zero>::zero()
                }

                fn one() -> Self {
                    <$t as One>::one()
                }

                fn is_zero(&self) -> bool {
                    Zero::is_zero(self)
                }

                fn is_one(&self) -> bool {
                    *self == <$t as One>::one()
                }

                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn from_i64(n: i64) -> Self {
                    n as $t
                }

                fn try_from_i64(n: i64) -> Option<Self> {
                    <$t as NumCast>::from(n)
                }
            }

            impl OrderedRing for $t {
                fn abs(&self) -> Self {
                    Signed::abs(self)
                }

                fn signum(&self) -> i8 {
                    if Signed::is_negative(self) {
                        -1
                    } else if Signed::is_positive(self) {
                        1
                    } else {
                        0
                    }
                }
            }
        )*
    };
}

impl_ring!(i32, i64, i128, f32, f64);

macro_rules! impl_float_field {
    ($($t:ty),*) => {
        $(
            impl Field for $t {
                fn inv(&self) -> Option<Self> {
                    if Zero::is_zero(self) {
                        None
                    } else {
                        Some(self.recip())
                    }
                }

                fn field_div(&self, other: &Self) -> Self {
                    self / other
                }
            }
        )*
    };
}

impl_float_field!(f32, f64);
