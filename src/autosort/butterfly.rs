use crate::simd::SimdTier;
use crate::twiddle::compute_twiddle;
use crate::vector::generic::Generic;
use crate::vector::ComplexVector;
use num_complex::Complex;

/// One radix-8 decimation-in-time stage over every block of `size` values.
///
/// `twiddles` is the slice the plan precomputed for this stage size: eight
/// runs of `size / 8` roots of unity, the `r = 0` run implicitly one.
#[inline(always)]
unsafe fn radix8_impl<V: ComplexVector<Float = f32>>(
    input: &[Complex<f32>],
    output: &mut [Complex<f32>],
    twiddles: &[Complex<f32>],
    size: usize,
    forward: bool,
) {
    let count = size / 8;
    debug_assert_eq!(twiddles.len(), size);
    debug_assert!(V::WIDTH == 1 || count % V::WIDTH == 0);
    let w = V::broadcast(&compute_twiddle(1, 8, forward));
    for (block_in, block_out) in input
        .chunks_exact(size)
        .zip(output.chunks_exact_mut(size))
    {
        let mut j = 0;
        while j < count {
            // Load one vector per radix row, twiddling all but row zero
            let load = block_in.as_ptr().add(j);
            let tw = twiddles.as_ptr().add(j);
            let t0 = V::load(load);
            let t1 = V::load(load.add(count)).mul(&V::load(tw.add(count)));
            let t2 = V::load(load.add(2 * count)).mul(&V::load(tw.add(2 * count)));
            let t3 = V::load(load.add(3 * count)).mul(&V::load(tw.add(3 * count)));
            let t4 = V::load(load.add(4 * count)).mul(&V::load(tw.add(4 * count)));
            let t5 = V::load(load.add(5 * count)).mul(&V::load(tw.add(5 * count)));
            let t6 = V::load(load.add(6 * count)).mul(&V::load(tw.add(6 * count)));
            let t7 = V::load(load.add(7 * count)).mul(&V::load(tw.add(7 * count)));

            // Sum/difference pairs across the radix-2 planes
            let p04 = t0.add(&t4);
            let m04 = t0.sub(&t4);
            let p15 = t1.add(&t5);
            let m15 = t1.sub(&t5);
            let p26 = t2.add(&t6);
            let m26 = t2.sub(&t6);
            let p37 = t3.add(&t7);
            let m37 = t3.sub(&t7);

            let even0 = p04.add(&p26);
            let even1 = p04.sub(&p26);
            let odd0 = p15.add(&p37);
            let odd1 = p37.sub(&p15).rotate(forward);

            let rot26 = m26.rotate(!forward);
            let diag0 = m04.add(&rot26);
            let diag1 = m04.sub(&rot26);
            let skew0 = m15.add(&m37.rotate(!forward)).mul(&w);
            let skew1 = m37.add(&m15.rotate(!forward)).mul(&w);

            let store = block_out.as_mut_ptr().add(j);
            even0.add(&odd0).store(store);
            diag0.add(&skew0).store(store.add(count));
            even1.add(&odd1).store(store.add(2 * count));
            diag1.add(&skew1).store(store.add(3 * count));
            even0.sub(&odd0).store(store.add(4 * count));
            diag0.sub(&skew0).store(store.add(5 * count));
            even1.sub(&odd1).store(store.add(6 * count));
            diag1.sub(&skew1).store(store.add(7 * count));

            j += V::WIDTH;
        }
    }
}

/// This macro instantiates the stage kernel once per vector width, each
/// behind the target feature its register type requires.
macro_rules! radix8_kernels {
    { $([$name:ident, $vector:ty, $feature:tt]),* $(,)? } => {
        $(
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            #[target_feature(enable = $feature)]
            unsafe fn $name(
                input: &[Complex<f32>],
                output: &mut [Complex<f32>],
                twiddles: &[Complex<f32>],
                size: usize,
                forward: bool,
            ) {
                radix8_impl::<$vector>(input, output, twiddles, size, forward)
            }
        )*
    }
}

radix8_kernels! {
    [radix8_sse3_single, crate::vector::x86::Sse3Single, "sse3"],
    [radix8_sse3_pair, crate::vector::x86::Sse3Pair, "sse3"],
    [radix8_avx, crate::vector::x86::Avx32, "avx"],
    [radix8_avx512, crate::vector::x86::Avx512f32, "avx512f"],
}

/// Runs one butterfly stage at the widest lane count the tier and the block
/// size admit. A stage with `size / 8` smaller than two lanes takes the
/// 64-bit path on SSE3-capable tiers and the scalar path otherwise.
pub fn radix8(
    input: &[Complex<f32>],
    output: &mut [Complex<f32>],
    twiddles: &[Complex<f32>],
    size: usize,
    forward: bool,
    tier: SimdTier,
) {
    debug_assert_eq!(input.len() % size, 0);
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        use crate::simd::SimdTier::*;
        let count = size / 8;
        unsafe {
            match tier {
                Avx512 if count >= 8 => {
                    return radix8_avx512(input, output, twiddles, size, forward)
                }
                Avx512 | Avx if count >= 4 => {
                    return radix8_avx(input, output, twiddles, size, forward)
                }
                Avx512 | Avx | Sse3 if count >= 2 => {
                    return radix8_sse3_pair(input, output, twiddles, size, forward)
                }
                Avx512 | Avx | Sse3 => {
                    return radix8_sse3_single(input, output, twiddles, size, forward)
                }
                Sse | Scalar => {}
            }
        }
    }
    let _ = tier;
    unsafe { radix8_impl::<Generic>(input, output, twiddles, size, forward) }
}

/// Base-case DFTs at size 1, 2, or 4, applied to every contiguous block.
///
/// All twiddles at these sizes are units, so no general multiplication
/// appears; the size-4 rotations are bare component swaps.
pub fn base_dft(input: &[Complex<f32>], output: &mut [Complex<f32>], size: usize, forward: bool) {
    debug_assert_eq!(input.len(), output.len());
    match size {
        1 => output.copy_from_slice(input),
        2 => dft2(input, output),
        4 => dft4(input, output, forward),
        _ => unreachable!("base case must have size 1, 2, or 4"),
    }
}

fn dft2(input: &[Complex<f32>], output: &mut [Complex<f32>]) {
    for (x, y) in input.chunks_exact(2).zip(output.chunks_exact_mut(2)) {
        y[0] = x[0] + x[1];
        y[1] = x[0] - x[1];
    }
}

fn dft4(input: &[Complex<f32>], output: &mut [Complex<f32>], forward: bool) {
    for (x, y) in input.chunks_exact(4).zip(output.chunks_exact_mut(4)) {
        let p02 = x[0] + x[2];
        let m02 = x[0] - x[2];
        let p13 = x[1] + x[3];
        let m13 = x[1] - x[3];
        let rot = if forward {
            Complex::new(m13.im, -m13.re)
        } else {
            Complex::new(-m13.im, m13.re)
        };
        y[0] = p02 + p13;
        y[1] = m02 + rot;
        y[2] = p02 - p13;
        y[3] = m02 - rot;
    }
}
