use num_complex::Complex;

/// Views an even-length real buffer as interleaved complex values.
///
/// `Complex<f32>` is repr(C) over `(re, im)`, so the layouts coincide and the
/// alignment requirement is that of `f32` itself.
pub fn as_complex(signal: &mut [f32]) -> &mut [Complex<f32>] {
    debug_assert_eq!(signal.len() % 2, 0);
    unsafe { core::slice::from_raw_parts_mut(signal.as_mut_ptr().cast(), signal.len() / 2) }
}

#[inline]
fn mul_j(z: Complex<f32>) -> Complex<f32> {
    Complex::new(-z.im, z.re)
}

#[inline]
fn mul_neg_j(z: Complex<f32>) -> Complex<f32> {
    Complex::new(z.im, -z.re)
}

/// Turns the half-size complex spectrum `Z` in `spectrum[..m]` into the real
/// spectrum `X[0..=m]` of the original length-`2m` signal.
///
/// The first pass splits `Z` into the spectra of the even and odd samples,
/// parking the even half in `scratch` (the clobbered signal buffer) and the
/// odd half in `spectrum` in place. Each iteration reads `Z` from both ends
/// of the conjugate pair, so it must finish both writes before moving on.
/// The second pass recombines them with the half-bin twiddles; the Nyquist
/// bin is derived from bin zero before that bin is overwritten.
pub fn forward_finish(
    scratch: &mut [Complex<f32>],
    spectrum: &mut [Complex<f32>],
    real_twiddles: &[Complex<f32>],
    stride: usize,
) {
    let m = scratch.len();
    debug_assert!(spectrum.len() > m);

    for k in 0..=m / 2 {
        let back = (m - k) % m;
        let z0 = spectrum[k];
        let z1 = spectrum[back].conj();
        let even = (z0 + z1) * 0.5;
        let odd = mul_neg_j(z0 - z1) * 0.5;
        scratch[k] = even;
        spectrum[k] = odd;
        if back != k {
            scratch[back] = even.conj();
            spectrum[back] = odd.conj();
        }
    }

    let nyquist = scratch[0] - spectrum[0];
    for k in 0..m {
        spectrum[k] = scratch[k] + spectrum[k] * real_twiddles[stride * k];
    }
    spectrum[m] = nyquist;
}

/// Rebuilds, in place, the half-size complex spectrum whose inverse transform
/// interleaves back into the original real signal.
///
/// Bin zero pairs with the stored Nyquist bin (the descending partner of
/// `k = 0` carries the negated unit twiddle); every other iteration handles a
/// conjugate pair `(k, m - k)` together, mirroring the forward pass.
pub fn inverse_prepare(
    spectrum: &mut [Complex<f32>],
    m: usize,
    real_twiddles: &[Complex<f32>],
    stride: usize,
) {
    debug_assert!(spectrum.len() > m);

    let x0 = spectrum[0];
    let xm = spectrum[m].conj();
    let even = (x0 + xm) * 0.5;
    let odd = (x0 - xm) * 0.5;
    spectrum[0] = even + mul_j(odd);

    for k in 1..=m / 2 {
        let back = m - k;
        let a = spectrum[k];
        let b = spectrum[back].conj();
        let even = (a + b) * 0.5;
        let odd = ((a - b) * 0.5) * real_twiddles[stride * k].conj();
        spectrum[k] = even + mul_j(odd);
        if back != k {
            spectrum[back] = even.conj() + mul_j(odd.conj());
        }
    }
}
