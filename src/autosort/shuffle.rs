use num_complex::Complex;

/// One Stockham reordering pass at stage size `size`.
///
/// Within every block, the value at `8k + r` moves to `k + r * (size / 8)`,
/// an interleave-to-stride transpose of a `(size / 8) x 8` matrix. No
/// arithmetic happens here; the pass exists so the butterflies can run on
/// contiguous radix rows and the output still comes out in natural order.
pub fn stockham(input: &[Complex<f32>], output: &mut [Complex<f32>], size: usize) {
    debug_assert_eq!(input.len(), output.len());
    debug_assert_eq!(size % 8, 0);
    let count = size / 8;
    for (block_in, block_out) in input
        .chunks_exact(size)
        .zip(output.chunks_exact_mut(size))
    {
        for k in 0..count {
            for r in 0..8 {
                block_out[k + r * count] = block_in[8 * k + r];
            }
        }
    }
}
