/// Vector instruction tiers, ordered narrowest to widest.
///
/// `Sse` is recognized but runs the scalar butterfly: complex multiplication
/// without `addsubps`/`movsldup` is not worth a 128-bit path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SimdTier {
    Scalar,
    Sse,
    Sse3,
    Avx,
    Avx512,
}

/// Probes the CPU for the widest tier it supports.
pub fn detect_simd() -> SimdTier {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx512f") {
            return SimdTier::Avx512;
        }
        if is_x86_feature_detected!("avx") {
            return SimdTier::Avx;
        }
        if is_x86_feature_detected!("sse3") {
            return SimdTier::Sse3;
        }
        if is_x86_feature_detected!("sse") {
            return SimdTier::Sse;
        }
    }
    SimdTier::Scalar
}
