//! Power-of-two fast Fourier transforms for realtime audio workloads.
//!
//! A [`Plan`] precomputes twiddle tables for every transform length up to a
//! chosen maximum and picks a vector kernel (scalar through AVX-512) from the
//! CPU at first use. Transforms run out-of-place between two caller-owned
//! buffers with no allocation; real signals of length `N` ride on a complex
//! transform of length `N / 2`.
//!
//! ```
//! use num_complex::Complex;
//!
//! let plan = stockham::Plan::new(1024)?;
//! let mut signal = vec![Complex::new(1.0f32, 0.0); 8];
//! let mut spectrum = vec![Complex::default(); 8];
//! plan.fft(&mut signal, &mut spectrum)?;
//! assert!((spectrum[0].re - 8.0).abs() < 1e-6);
//! # Ok::<(), stockham::Error>(())
//! ```

mod autosort;
mod error;
mod plan;
mod real;
mod simd;
mod twiddle;
mod vector;

pub use crate::error::Error;
pub use crate::plan::Plan;
pub use crate::simd::{detect_simd, SimdTier};
