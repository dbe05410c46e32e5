use num_complex::Complex;

pub mod generic;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod x86;

/// A register holding `WIDTH` interleaved complex lanes.
///
/// Methods are `unsafe` because the x86 implementations require their
/// instruction set to be enabled in the calling context.
pub trait ComplexVector: Copy {
    type Float;
    const WIDTH: usize;

    unsafe fn broadcast(value: &Complex<Self::Float>) -> Self;

    unsafe fn add(&self, rhs: &Self) -> Self;
    unsafe fn sub(&self, rhs: &Self) -> Self;
    unsafe fn mul(&self, rhs: &Self) -> Self;

    /// Multiplies each lane by `j` if `positive`, and by `-j` otherwise.
    unsafe fn rotate(&self, positive: bool) -> Self;

    unsafe fn load(from: *const Complex<Self::Float>) -> Self;
    unsafe fn store(&self, to: *mut Complex<Self::Float>);
}
