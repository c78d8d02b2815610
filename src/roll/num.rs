use crate::common::*;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A value produced while evaluating an expression.
///
/// Integer arithmetic stays integral until it overflows, at which point the
/// operation is redone in floating point.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    Int(Int),
    Float(Float),
}

impl Number {
    pub const ZERO: Self = Self::Int(0);

    /// Integers at or beyond this magnitude are kept as floats when normalizing.
    const INT_LIMIT: Float = 9_223_372_036_854_775_808.0;

    /// Truncates toward zero. NaN and infinities have no integer value.
    pub fn to_int(self) -> Option<Int> {
        match self {
            Self::Int(x) => Some(x),
            Self::Float(x) if x.is_finite() => Some(x.trunc() as Int),
            Self::Float(_) => None,
        }
    }

    pub fn as_float(self) -> Float {
        match self {
            Self::Int(x) => x as Float,
            Self::Float(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        self.as_float() == 0.0
    }

    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(x) => x.is_finite(),
        }
    }

    pub fn pow(self, rhs: Self) -> Self {
        if let (Self::Int(base), Self::Int(exp)) = (self, rhs) {
            if let Some(x) = u32::try_from(exp).ok().and_then(|e| base.checked_pow(e)) {
                return Self::Int(x);
            }
        }
        Self::Float(self.as_float().powf(rhs.as_float()))
    }

    /// Rounds values with a fractional part to three decimal places and turns
    /// integral floats back into integers.
    pub fn normalize(self) -> Self {
        let x = match self {
            Self::Int(_) => return self,
            Self::Float(x) if x.fract() != 0.0 => round3(x),
            Self::Float(x) => x,
        };
        if x.fract() == 0.0 && x.abs() < Self::INT_LIMIT {
            Self::Int(x as Int)
        } else {
            Self::Float(x)
        }
    }
}

/// Rounds the exact binary value, so `1.2345` (stored just below the tie)
/// becomes 1.234.
fn round3(x: Float) -> Float {
    format!("{:.3}", x).parse().unwrap_or(x)
}

impl std::ops::Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Int(x) => x.checked_neg().map_or(Self::Float(-(x as Float)), Self::Int),
            Self::Float(x) => Self::Float(-x),
        }
    }
}

macro_rules! val_impl_bin_op {
    ($Name:ident, $fn_name:ident, $checked:ident) => {
        impl std::ops::$Name for Number {
            type Output = Self;

            fn $fn_name(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Self::Int(x), Self::Int(y)) => x
                        .$checked(y)
                        .map_or_else(|| Self::Float((x as Float).$fn_name(y as Float)), Self::Int),
                    (x, y) => Self::Float(x.as_float().$fn_name(y.as_float())),
                }
            }
        }
    };
}

val_impl_bin_op!(Add, add, checked_add);
val_impl_bin_op!(Sub, sub, checked_sub);
val_impl_bin_op!(Mul, mul, checked_mul);

impl std::ops::Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Float(self.as_float() / rhs.as_float())
    }
}

impl std::iter::Sum for Number {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(x), Self::Int(y)) => x == y,
            (x, y) => x.as_float().eq(&y.as_float()),
        }
    }
}

impl From<Int> for Number {
    fn from(x: Int) -> Self {
        Self::Int(x)
    }
}

impl From<i32> for Number {
    fn from(x: i32) -> Self {
        Self::Int(x.into())
    }
}

impl From<Float> for Number {
    fn from(x: Float) -> Self {
        Self::Float(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(x) => fmt::Display::fmt(x, f),
            Self::Float(x) => fmt::Debug::fmt(x, f),
        }
    }
}
