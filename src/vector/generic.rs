use super::ComplexVector;
use num_complex::Complex;

/// Single-lane fallback used when no SIMD path qualifies.
#[derive(Copy, Clone)]
pub struct Generic(Complex<f32>);

impl ComplexVector for Generic {
    type Float = f32;
    const WIDTH: usize = 1;

    #[inline(always)]
    unsafe fn broadcast(value: &Complex<f32>) -> Self {
        Self(*value)
    }

    #[inline(always)]
    unsafe fn add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    #[inline(always)]
    unsafe fn sub(&self, rhs: &Self) -> Self {
        Self(self.0 - rhs.0)
    }

    #[inline(always)]
    unsafe fn mul(&self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0)
    }

    #[inline(always)]
    unsafe fn rotate(&self, positive: bool) -> Self {
        Self(if positive {
            Complex::new(-self.0.im, self.0.re)
        } else {
            Complex::new(self.0.im, -self.0.re)
        })
    }

    #[inline(always)]
    unsafe fn load(from: *const Complex<f32>) -> Self {
        Self(from.read())
    }

    #[inline(always)]
    unsafe fn store(&self, to: *mut Complex<f32>) {
        to.write(self.0)
    }
}
