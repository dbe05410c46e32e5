mod butterfly;
mod shuffle;

use crate::simd::SimdTier;
use num_complex::Complex;

/// Splits a power-of-two transform length into `(base, stages)` with
/// `size == base * 8^stages` and `base` in `{1, 2, 4}`.
pub fn decompose(size: usize) -> (usize, usize) {
    debug_assert!(size.is_power_of_two());
    let mut base = size;
    let mut stages = 0;
    while base > 4 {
        base /= 8;
        stages += 1;
    }
    (base, stages)
}

/// Runs a full complex transform, ping-ponging between the two buffers.
///
/// The sequence is `stages` Stockham shuffles walking the stage size down
/// from `size` to `8 * base`, the base-case DFT, then `stages` butterflies
/// walking back up. That is an odd number of passes, so the result always
/// lands in `output`; `input` is left clobbered. The inverse path additionally
/// scales by `1 / size`.
pub fn transform(
    input: &mut [Complex<f32>],
    output: &mut [Complex<f32>],
    twiddles: &[Complex<f32>],
    forward: bool,
    tier: SimdTier,
) {
    assert_eq!(input.len(), output.len());
    let size = input.len();
    let (base, stages) = decompose(size);

    let mut data_in_output = false;
    let mut n = size;
    for _ in 0..stages {
        let (from, to): (&mut _, &mut _) = if data_in_output {
            (output, input)
        } else {
            (input, output)
        };
        shuffle::stockham(from, to, n);
        n /= 8;
        data_in_output = !data_in_output;
    }

    {
        let (from, to): (&mut _, &mut _) = if data_in_output {
            (output, input)
        } else {
            (input, output)
        };
        butterfly::base_dft(from, to, base, forward);
        data_in_output = !data_in_output;
    }

    for _ in 0..stages {
        n *= 8;
        let (from, to): (&mut _, &mut _) = if data_in_output {
            (output, input)
        } else {
            (input, output)
        };
        butterfly::radix8(from, to, &twiddles[n..2 * n], n, forward, tier);
        data_in_output = !data_in_output;
    }

    debug_assert!(data_in_output);

    if !forward {
        let scale = 1.0 / size as f32;
        for x in output.iter_mut() {
            *x *= scale;
        }
    }
}
