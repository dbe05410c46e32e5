use super::ComplexVector;
use num_complex::Complex;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// One complex lane in the low 64 bits of an SSE register.
///
/// The upper two float lanes are kept zeroed; every operation below preserves
/// that, so only the low lane ever reaches memory.
#[derive(Copy, Clone)]
pub struct Sse3Single(__m128);

impl ComplexVector for Sse3Single {
    type Float = f32;
    const WIDTH: usize = 1;

    #[inline(always)]
    unsafe fn broadcast(value: &Complex<f32>) -> Self {
        Self(_mm_set_ps(0.0, 0.0, value.im, value.re))
    }

    #[inline(always)]
    unsafe fn add(&self, rhs: &Self) -> Self {
        Self(_mm_add_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn sub(&self, rhs: &Self) -> Self {
        Self(_mm_sub_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn mul(&self, rhs: &Self) -> Self {
        Self(complex_mul_128(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn rotate(&self, positive: bool) -> Self {
        Self(rotate_128(self.0, positive))
    }

    #[inline(always)]
    unsafe fn load(from: *const Complex<f32>) -> Self {
        Self(_mm_castpd_ps(_mm_load_sd(from as *const f64)))
    }

    #[inline(always)]
    unsafe fn store(&self, to: *mut Complex<f32>) {
        _mm_store_sd(to as *mut f64, _mm_castps_pd(self.0));
    }
}

/// Two complex lanes in a full SSE register.
#[derive(Copy, Clone)]
pub struct Sse3Pair(__m128);

impl ComplexVector for Sse3Pair {
    type Float = f32;
    const WIDTH: usize = 2;

    #[inline(always)]
    unsafe fn broadcast(value: &Complex<f32>) -> Self {
        Self(_mm_set_ps(value.im, value.re, value.im, value.re))
    }

    #[inline(always)]
    unsafe fn add(&self, rhs: &Self) -> Self {
        Self(_mm_add_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn sub(&self, rhs: &Self) -> Self {
        Self(_mm_sub_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn mul(&self, rhs: &Self) -> Self {
        Self(complex_mul_128(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn rotate(&self, positive: bool) -> Self {
        Self(rotate_128(self.0, positive))
    }

    #[inline(always)]
    unsafe fn load(from: *const Complex<f32>) -> Self {
        Self(_mm_loadu_ps(from as *const f32))
    }

    #[inline(always)]
    unsafe fn store(&self, to: *mut Complex<f32>) {
        _mm_storeu_ps(to as *mut f32, self.0);
    }
}

#[inline(always)]
unsafe fn complex_mul_128(a: __m128, b: __m128) -> __m128 {
    let re = _mm_moveldup_ps(a);
    let im = _mm_movehdup_ps(a);
    let sh = _mm_shuffle_ps::<0xb1>(b, b);
    _mm_addsub_ps(_mm_mul_ps(re, b), _mm_mul_ps(im, sh))
}

#[inline(always)]
unsafe fn rotate_128(z: __m128, positive: bool) -> __m128 {
    if positive {
        _mm_addsub_ps(_mm_setzero_ps(), _mm_shuffle_ps::<0xb1>(z, z))
    } else {
        let n = _mm_addsub_ps(_mm_setzero_ps(), z);
        _mm_shuffle_ps::<0xb1>(n, n)
    }
}

/// Four complex lanes in an AVX register.
#[derive(Copy, Clone)]
pub struct Avx32(__m256);

impl ComplexVector for Avx32 {
    type Float = f32;
    const WIDTH: usize = 4;

    #[inline(always)]
    unsafe fn broadcast(value: &Complex<f32>) -> Self {
        Self(_mm256_blend_ps::<0xaa>(
            _mm256_set1_ps(value.re),
            _mm256_set1_ps(value.im),
        ))
    }

    #[inline(always)]
    unsafe fn add(&self, rhs: &Self) -> Self {
        Self(_mm256_add_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn sub(&self, rhs: &Self) -> Self {
        Self(_mm256_sub_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn mul(&self, rhs: &Self) -> Self {
        let re = _mm256_moveldup_ps(self.0);
        let im = _mm256_movehdup_ps(self.0);
        let sh = _mm256_permute_ps::<0xb1>(rhs.0);
        Self(_mm256_addsub_ps(
            _mm256_mul_ps(re, rhs.0),
            _mm256_mul_ps(im, sh),
        ))
    }

    #[inline(always)]
    unsafe fn rotate(&self, positive: bool) -> Self {
        Self(if positive {
            _mm256_addsub_ps(_mm256_setzero_ps(), _mm256_permute_ps::<0xb1>(self.0))
        } else {
            _mm256_permute_ps::<0xb1>(_mm256_addsub_ps(_mm256_setzero_ps(), self.0))
        })
    }

    #[inline(always)]
    unsafe fn load(from: *const Complex<f32>) -> Self {
        Self(_mm256_loadu_ps(from as *const f32))
    }

    #[inline(always)]
    unsafe fn store(&self, to: *mut Complex<f32>) {
        _mm256_storeu_ps(to as *mut f32, self.0);
    }
}

/// Eight complex lanes in an AVX-512 register.
///
/// AVX-512 has no `addsub`, so the complex multiply leans on `fmaddsub` and
/// the rotations on lane-masked subtraction from zero.
#[derive(Copy, Clone)]
pub struct Avx512f32(__m512);

const NEGATE_RE: __mmask16 = 0x5555;
const NEGATE_IM: __mmask16 = 0xaaaa;

impl ComplexVector for Avx512f32 {
    type Float = f32;
    const WIDTH: usize = 8;

    #[inline(always)]
    unsafe fn broadcast(value: &Complex<f32>) -> Self {
        Self(_mm512_broadcast_f32x4(_mm_set_ps(
            value.im, value.re, value.im, value.re,
        )))
    }

    #[inline(always)]
    unsafe fn add(&self, rhs: &Self) -> Self {
        Self(_mm512_add_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn sub(&self, rhs: &Self) -> Self {
        Self(_mm512_sub_ps(self.0, rhs.0))
    }

    #[inline(always)]
    unsafe fn mul(&self, rhs: &Self) -> Self {
        let re = _mm512_moveldup_ps(self.0);
        let im = _mm512_movehdup_ps(self.0);
        let sh = _mm512_permute_ps::<0xb1>(rhs.0);
        Self(_mm512_fmaddsub_ps(re, rhs.0, _mm512_mul_ps(im, sh)))
    }

    #[inline(always)]
    unsafe fn rotate(&self, positive: bool) -> Self {
        let sw = _mm512_permute_ps::<0xb1>(self.0);
        let mask = if positive { NEGATE_RE } else { NEGATE_IM };
        Self(_mm512_mask_sub_ps(sw, mask, _mm512_setzero_ps(), sw))
    }

    #[inline(always)]
    unsafe fn load(from: *const Complex<f32>) -> Self {
        Self(_mm512_loadu_ps(from as *const f32))
    }

    #[inline(always)]
    unsafe fn store(&self, to: *mut Complex<f32>) {
        _mm512_storeu_ps(to as *mut f32, self.0);
    }
}
