use crate::error::Error;
use crate::simd::{detect_simd, SimdTier};
use crate::{autosort, real, twiddle};
use num_complex::Complex;
use std::sync::OnceLock;

/// Precomputed twiddle tables and dispatch state for transforms up to a
/// maximum complex length.
///
/// A plan is immutable once built and may be shared across threads; the only
/// late-bound field is the SIMD tier, resolved at most once on first use.
/// Every transform clobbers its first argument (it doubles as the ping-pong
/// scratch buffer) and leaves the result in the second.
pub struct Plan {
    max_size_complex: usize,
    forward_twiddles: Box<[Complex<f32>]>,
    inverse_twiddles: Box<[Complex<f32>]>,
    real_twiddles: Box<[Complex<f32>]>,
    simd_tier: OnceLock<SimdTier>,
}

impl Plan {
    /// Creates a plan for complex transforms up to `max_size_complex` points
    /// and real transforms up to twice that.
    pub fn new(max_size_complex: usize) -> Result<Self, Error> {
        if !max_size_complex.is_power_of_two() || max_size_complex < 4 {
            return Err(Error::InvalidSize {
                signal: max_size_complex,
                spectrum: max_size_complex,
                capacity: max_size_complex,
            });
        }
        Ok(Self {
            max_size_complex,
            forward_twiddles: twiddle::stage_twiddles(max_size_complex, true),
            inverse_twiddles: twiddle::stage_twiddles(max_size_complex, false),
            real_twiddles: twiddle::real_twiddles(max_size_complex),
            simd_tier: OnceLock::new(),
        })
    }

    /// Creates a plan pinned to the given vector tier instead of probing on
    /// first use. Fails if the CPU does not support the tier.
    pub fn with_simd_tier(max_size_complex: usize, tier: SimdTier) -> Result<Self, Error> {
        let detected = detect_simd();
        if tier > detected {
            return Err(Error::Unsupported {
                requested: tier,
                detected,
            });
        }
        let plan = Self::new(max_size_complex)?;
        let _ = plan.simd_tier.set(tier);
        Ok(plan)
    }

    /// The largest complex transform this plan supports.
    pub fn max_size_complex(&self) -> usize {
        self.max_size_complex
    }

    /// The vector tier transforms will run at, probing the CPU if no
    /// transform has resolved it yet.
    pub fn simd_tier(&self) -> SimdTier {
        *self.simd_tier.get_or_init(detect_simd)
    }

    /// Forward transform of a complex signal. `signal` is clobbered.
    pub fn fft(
        &self,
        signal: &mut [Complex<f32>],
        spectrum: &mut [Complex<f32>],
    ) -> Result<(), Error> {
        self.check(signal.len(), spectrum.len(), self.max_size_complex)?;
        autosort::transform(
            signal,
            spectrum,
            &self.forward_twiddles,
            true,
            self.simd_tier(),
        );
        Ok(())
    }

    /// Inverse transform of a complex spectrum, scaled by the reciprocal of
    /// the length. `spectrum` is clobbered.
    pub fn ifft(
        &self,
        spectrum: &mut [Complex<f32>],
        signal: &mut [Complex<f32>],
    ) -> Result<(), Error> {
        self.check(signal.len(), spectrum.len(), self.max_size_complex)?;
        autosort::transform(
            spectrum,
            signal,
            &self.inverse_twiddles,
            false,
            self.simd_tier(),
        );
        Ok(())
    }

    /// Forward transform of a real signal of length `N`, computed through a
    /// complex transform of length `N / 2`.
    ///
    /// The non-redundant bins land in `spectrum[..=N / 2]`; the rest of the
    /// spectrum buffer is scratch. `signal` is clobbered.
    pub fn rfft(&self, signal: &mut [f32], spectrum: &mut [Complex<f32>]) -> Result<(), Error> {
        self.check(signal.len(), spectrum.len(), 2 * self.max_size_complex)?;
        let m = signal.len() / 2;
        let stride = self.max_size_complex / m;
        let packed = real::as_complex(signal);
        autosort::transform(
            packed,
            &mut spectrum[..m],
            &self.forward_twiddles,
            true,
            self.simd_tier(),
        );
        real::forward_finish(packed, spectrum, &self.real_twiddles, stride);
        Ok(())
    }

    /// Inverse transform back to a real signal of length `N` from the bins in
    /// `spectrum[..=N / 2]`, scaled by `2 / N`. `spectrum` is clobbered.
    pub fn irfft(&self, spectrum: &mut [Complex<f32>], signal: &mut [f32]) -> Result<(), Error> {
        self.check(signal.len(), spectrum.len(), 2 * self.max_size_complex)?;
        let m = signal.len() / 2;
        let stride = self.max_size_complex / m;
        real::inverse_prepare(spectrum, m, &self.real_twiddles, stride);
        autosort::transform(
            &mut spectrum[..m],
            real::as_complex(signal),
            &self.inverse_twiddles,
            false,
            self.simd_tier(),
        );
        Ok(())
    }

    fn check(&self, signal: usize, spectrum: usize, capacity: usize) -> Result<(), Error> {
        if signal != spectrum || !signal.is_power_of_two() || signal < 2 || signal > capacity {
            return Err(Error::InvalidSize {
                signal,
                spectrum,
                capacity,
            });
        }
        Ok(())
    }
}
