use num_complex::Complex;
use num_traits::{One, Zero};

pub fn compute_twiddle(index: usize, size: usize, forward: bool) -> Complex<f32> {
    let theta = (index * 2) as f64 * core::f64::consts::PI / size as f64;
    let twiddle = Complex::new(theta.cos() as f32, -theta.sin() as f32);
    if forward {
        twiddle
    } else {
        twiddle.conj()
    }
}

/// Builds the per-stage twiddle table for every stage size up to `max_size`.
///
/// The table is `2 * max_size` long; stage size `N` owns the half-open range
/// `[N, 2N)`, holding eight runs of `B = N / 8` values so the butterfly can
/// load each radix row contiguously. The `r = 0` run is identically one.
pub fn stage_twiddles(max_size: usize, forward: bool) -> Box<[Complex<f32>]> {
    debug_assert!(max_size.is_power_of_two());
    let mut table = vec![Complex::zero(); 2 * max_size];
    let mut size = 8;
    while size <= max_size {
        let count = size / 8;
        for r in 0..8 {
            for b in 0..count {
                table[size + r * count + b] = if r == 0 {
                    Complex::one()
                } else {
                    compute_twiddle(r * b, size, forward)
                };
            }
        }
        size *= 2;
    }
    table.into_boxed_slice()
}

/// Half-bin twiddles `exp(-j*pi*k / max_size)` for the real-signal adapters.
pub fn real_twiddles(max_size: usize) -> Box<[Complex<f32>]> {
    (0..max_size)
        .map(|k| compute_twiddle(k, 2 * max_size, true))
        .collect()
}
