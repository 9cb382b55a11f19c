// ============================================================================
// Weights
// Closed set of supported numeric kinds and their conversions
// ============================================================================

use super::errors::{DistributionError, DistributionResult};
use super::scale::EPSILON;
use std::any::Any;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric kinds a weight may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightKind {
    Int32,
    Int64,
    Float64,
}

/// A single weight tagged with its numeric kind.
///
/// Every per-kind rule (promotion to `f64`, what counts as negative) is a
/// `match` over this enum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightValue {
    Int32(i32),
    Int64(i64),
    Float64(f64),
}

impl WeightValue {
    /// Kind of the wrapped value.
    #[inline]
    pub const fn kind(self) -> WeightKind {
        match self {
            WeightValue::Int32(_) => WeightKind::Int32,
            WeightValue::Int64(_) => WeightKind::Int64,
            WeightValue::Float64(_) => WeightKind::Float64,
        }
    }

    /// Promote to `f64`.
    ///
    /// Float noise in `(-EPSILON, 0)` is read as zero.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            WeightValue::Int32(v) => f64::from(v),
            WeightValue::Int64(v) => v as f64,
            WeightValue::Float64(v) => v.max(0.0),
        }
    }

    /// Whether the weight is below zero.
    ///
    /// Floats are negative only below `-EPSILON`.
    #[inline]
    pub fn is_negative(self) -> bool {
        match self {
            WeightValue::Int32(v) => v < 0,
            WeightValue::Int64(v) => v < 0,
            WeightValue::Float64(v) => v < -EPSILON,
        }
    }

    /// Integers are always finite; floats must not be NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            WeightValue::Int32(_) | WeightValue::Int64(_) => true,
            WeightValue::Float64(v) => v.is_finite(),
        }
    }

    /// Recover a weight from a type-erased value.
    ///
    /// # Errors
    /// Returns `UnsupportedValueType` unless the value is an `i32`, `i64`,
    /// `f64` or an already tagged `WeightValue`.
    pub fn from_any(value: &dyn Any) -> DistributionResult<Self> {
        if let Some(v) = value.downcast_ref::<i32>() {
            Ok(WeightValue::Int32(*v))
        } else if let Some(v) = value.downcast_ref::<i64>() {
            Ok(WeightValue::Int64(*v))
        } else if let Some(v) = value.downcast_ref::<f64>() {
            Ok(WeightValue::Float64(*v))
        } else if let Some(v) = value.downcast_ref::<WeightValue>() {
            Ok(*v)
        } else {
            Err(DistributionError::UnsupportedValueType)
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for super::WeightValue {}
}

/// Types accepted as weights: `i32`, `i64`, `f64` and [`WeightValue`].
///
/// The trait is sealed; any other numeric type is rejected at compile time.
pub trait Weight: Copy + private::Sealed {
    fn into_value(self) -> WeightValue;
}

impl Weight for i32 {
    #[inline]
    fn into_value(self) -> WeightValue {
        WeightValue::Int32(self)
    }
}

impl Weight for i64 {
    #[inline]
    fn into_value(self) -> WeightValue {
        WeightValue::Int64(self)
    }
}

impl Weight for f64 {
    #[inline]
    fn into_value(self) -> WeightValue {
        WeightValue::Float64(self)
    }
}

impl Weight for WeightValue {
    #[inline]
    fn into_value(self) -> WeightValue {
        self
    }
}

impl From<i32> for WeightValue {
    fn from(value: i32) -> Self {
        WeightValue::Int32(value)
    }
}

impl From<i64> for WeightValue {
    fn from(value: i64) -> Self {
        WeightValue::Int64(value)
    }
}

impl From<f64> for WeightValue {
    fn from(value: f64) -> Self {
        WeightValue::Float64(value)
    }
}
