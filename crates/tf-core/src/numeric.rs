//! Numeric helpers and the state-value adapter.
//!
//! Transport laws are written once against [`StateValue`] and evaluated on
//! whatever representation the caller holds: a single temperature, or a batch
//! of temperatures (one per spatial point) stored in a `Vec`, a fixed array,
//! or a nalgebra vector.

use core::fmt::{Debug, Display};
use nalgebra::{DVector, SVector};
use num_traits::Float;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Scalar type transport coefficients are stored in.
///
/// Fits are tabulated in double precision, so every model scalar must be able
/// to take an `f64` literal without going through a fallible cast.
pub trait ModelReal: Float + Debug + Display + Send + Sync + 'static {
    /// Convert an `f64` fit constant, rounding when `Self` is narrower.
    fn from_real(v: Real) -> Self;
}

impl ModelReal for f64 {
    #[inline]
    fn from_real(v: Real) -> Self {
        v
    }
}

impl ModelReal for f32 {
    #[inline]
    fn from_real(v: Real) -> Self {
        v as f32
    }
}

/// A numeric representation a thermodynamic state can be stored in.
///
/// Scalars are their own element type. Batch types carry their length at
/// runtime, so `zero_like` and `map_elements` always preserve the shape of
/// `self`.
pub trait StateValue: Clone {
    /// Underlying scalar element type.
    type Element: Float;

    /// Same-shape value with every element set to zero.
    fn zero_like(&self) -> Self;

    /// Apply `f` to every element, keeping the shape.
    fn map_elements<F>(&self, f: F) -> Self
    where
        F: FnMut(Self::Element) -> Self::Element;

    /// Combine two same-shape values element by element.
    ///
    /// # Panics
    ///
    /// If the two values differ in length. Fixed-size representations rule
    /// that out at compile time; `Vec` and `DVector` check it at runtime in
    /// every build profile.
    fn zip_elements<F>(&self, other: &Self, f: F) -> Self
    where
        F: FnMut(Self::Element, Self::Element) -> Self::Element;
}

/// Element type of a state representation.
pub type Element<V> = <V as StateValue>::Element;

/// Free-function form of [`StateValue::zero_like`].
#[inline]
pub fn zero_like<V: StateValue>(example: &V) -> V {
    example.zero_like()
}

macro_rules! scalar_state_value {
    ($($t:ty),*) => {
        $(
            impl StateValue for $t {
                type Element = $t;

                #[inline]
                fn zero_like(&self) -> Self {
                    0.0
                }

                #[inline]
                fn map_elements<F>(&self, mut f: F) -> Self
                where
                    F: FnMut(Self::Element) -> Self::Element,
                {
                    f(*self)
                }

                #[inline]
                fn zip_elements<F>(&self, other: &Self, mut f: F) -> Self
                where
                    F: FnMut(Self::Element, Self::Element) -> Self::Element,
                {
                    f(*self, *other)
                }
            }
        )*
    };
}

scalar_state_value!(f32, f64);

impl<T: Float> StateValue for Vec<T> {
    type Element = T;

    fn zero_like(&self) -> Self {
        vec![T::zero(); self.len()]
    }

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.iter().copied().map(f).collect()
    }

    fn zip_elements<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        assert_eq!(
            self.len(),
            other.len(),
            "zip_elements: batch length mismatch"
        );
        self.iter().zip(other).map(|(&a, &b)| f(a, b)).collect()
    }
}

impl<T: Float, const N: usize> StateValue for [T; N] {
    type Element = T;

    fn zero_like(&self) -> Self {
        [T::zero(); N]
    }

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        (*self).map(f)
    }

    fn zip_elements<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        core::array::from_fn(|i| f(self[i], other[i]))
    }
}

impl<T: Float + nalgebra::Scalar> StateValue for DVector<T> {
    type Element = T;

    fn zero_like(&self) -> Self {
        DVector::from_element(self.len(), T::zero())
    }

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.map(f)
    }

    fn zip_elements<F>(&self, other: &Self, f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        assert_eq!(
            self.len(),
            other.len(),
            "zip_elements: batch length mismatch"
        );
        self.zip_map(other, f)
    }
}

impl<T: Float + nalgebra::Scalar, const N: usize> StateValue for SVector<T, N> {
    type Element = T;

    fn zero_like(&self) -> Self {
        SVector::from_element(T::zero())
    }

    fn map_elements<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        self.map(f)
    }

    fn zip_elements<F>(&self, other: &Self, f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        self.zip_map(other, f)
    }
}
