use crate::simd::SimdTier;

/// Structural errors reported before any buffer is written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The transform length is not a power of two, exceeds the plan capacity,
    /// or the signal and spectrum lengths disagree.
    #[error(
        "invalid transform size: signal {signal}, spectrum {spectrum}, plan capacity {capacity}"
    )]
    InvalidSize {
        signal: usize,
        spectrum: usize,
        capacity: usize,
    },

    /// The signal and spectrum buffers overlap.
    ///
    /// Safe callers cannot hit this: `&mut` slices are exclusive. The variant
    /// exists for FFI wrappers that reconstruct slices from raw pointers and
    /// must check the contract themselves.
    #[error("signal and spectrum buffers overlap")]
    InvalidAliasing,

    /// The requested vector tier is wider than what the CPU supports.
    #[error("simd tier {requested:?} unavailable (detected {detected:?})")]
    Unsupported {
        requested: SimdTier,
        detected: SimdTier,
    },
}
