use num_complex::Complex;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::Normal;
use stockham::{detect_simd, Error, Plan, SimdTier};

const TOLERANCE: f32 = 3e-3;

fn dft(input: &[Complex<f32>], output: &mut [Complex<f32>]) {
    assert_eq!(input.len(), output.len());
    let n = input.len();
    let root = (0..n)
        .map(|j| {
            let theta = 2.0 * std::f64::consts::PI * (j as f64) / (n as f64);
            Complex::new(theta.cos(), -theta.sin())
        })
        .collect::<Vec<_>>();
    for (k, bin) in output.iter_mut().enumerate() {
        let mut acc = Complex::new(0.0f64, 0.0);
        for (x, value) in input.iter().enumerate() {
            acc += Complex::new(value.re as f64, value.im as f64) * root[(k * x) % n];
        }
        *bin = Complex::new(acc.re as f32, acc.im as f32);
    }
}

fn near(actual: &[Complex<f32>], expected: &[Complex<f32>], tolerance: f32) {
    assert_eq!(actual.len(), expected.len());
    for (k, (actual, expected)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            float_cmp::approx_eq!(
                f32,
                actual.re,
                expected.re,
                float_cmp::F32Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ) && float_cmp::approx_eq!(
                f32,
                actual.im,
                expected.im,
                float_cmp::F32Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ),
            "bin {}: {} != {}",
            k,
            actual,
            expected
        );
    }
}

fn random_signal(size: usize, seed: u64) -> Vec<Complex<f32>> {
    let distribution = Normal::new(0.0f32, 1.0).unwrap();
    let mut rng: StdRng = SeedableRng::seed_from_u64(seed);
    (0..size)
        .map(|_| Complex::new(rng.sample(distribution), rng.sample(distribution)))
        .collect()
}

#[test]
fn forward_matches_naive_dft() {
    let plan = Plan::new(8192).unwrap();
    let mut size = 2;
    while size <= 8192 {
        let input = random_signal(size, 0xdeadbeef);
        let mut signal = input.clone();
        let mut spectrum = vec![Complex::default(); size];
        let mut expected = vec![Complex::default(); size];
        plan.fft(&mut signal, &mut spectrum).unwrap();
        dft(&input, &mut expected);
        near(&spectrum, &expected, TOLERANCE);
        size *= 2;
    }
}

#[test]
fn round_trip_recovers_signal() {
    let plan = Plan::new(8192).unwrap();
    let mut size = 2;
    while size <= 8192 {
        let input = random_signal(size, 0xfeedface);
        let mut signal = input.clone();
        let mut spectrum = vec![Complex::default(); size];
        plan.fft(&mut signal, &mut spectrum).unwrap();
        plan.ifft(&mut spectrum, &mut signal).unwrap();
        near(&signal, &input, TOLERANCE);
        size *= 2;
    }
}

#[test]
fn impulse_has_flat_spectrum() {
    let plan = Plan::new(8).unwrap();
    let mut signal = vec![Complex::default(); 8];
    signal[0] = Complex::new(1.0, 0.0);
    let mut spectrum = vec![Complex::default(); 8];
    plan.fft(&mut signal, &mut spectrum).unwrap();
    near(&spectrum, &[Complex::new(1.0, 0.0); 8], 1e-6);
}

#[test]
fn dc_concentrates_in_bin_zero() {
    let plan = Plan::new(8).unwrap();
    let mut signal = vec![Complex::new(1.0, 0.0); 8];
    let mut spectrum = vec![Complex::default(); 8];
    plan.fft(&mut signal, &mut spectrum).unwrap();
    let mut expected = vec![Complex::default(); 8];
    expected[0] = Complex::new(8.0, 0.0);
    near(&spectrum, &expected, 1e-6);
}

#[test]
fn complex_exponential_hits_its_bin() {
    let plan = Plan::new(8).unwrap();
    let mut signal = (0..8)
        .map(|n| {
            let theta = 2.0 * std::f64::consts::PI * (n as f64) / 8.0;
            Complex::new(theta.cos() as f32, theta.sin() as f32)
        })
        .collect::<Vec<_>>();
    let mut spectrum = vec![Complex::default(); 8];
    plan.fft(&mut signal, &mut spectrum).unwrap();
    let mut expected = vec![Complex::default(); 8];
    expected[1] = Complex::new(8.0, 0.0);
    near(&spectrum, &expected, 1e-5);

    // The conjugate probe peaks in the mirrored bin.
    let mut signal = (0..8)
        .map(|n| {
            let theta = 2.0 * std::f64::consts::PI * (n as f64) / 8.0;
            Complex::new(theta.cos() as f32, -theta.sin() as f32)
        })
        .collect::<Vec<_>>();
    plan.fft(&mut signal, &mut spectrum).unwrap();
    let mut expected = vec![Complex::default(); 8];
    expected[7] = Complex::new(8.0, 0.0);
    near(&spectrum, &expected, 1e-5);
}

#[test]
fn transform_is_linear() {
    const SIZE: usize = 256;
    let plan = Plan::new(SIZE).unwrap();
    let alpha = Complex::new(0.7, -1.3);
    let beta = Complex::new(-0.4, 0.9);
    let x = random_signal(SIZE, 1);
    let y = random_signal(SIZE, 2);

    let mut combined = x
        .iter()
        .zip(y.iter())
        .map(|(x, y)| alpha * x + beta * y)
        .collect::<Vec<_>>();
    let mut combined_spectrum = vec![Complex::default(); SIZE];
    plan.fft(&mut combined, &mut combined_spectrum).unwrap();

    let mut x_spectrum = vec![Complex::default(); SIZE];
    let mut y_spectrum = vec![Complex::default(); SIZE];
    plan.fft(&mut x.clone(), &mut x_spectrum).unwrap();
    plan.fft(&mut y.clone(), &mut y_spectrum).unwrap();
    let expected = x_spectrum
        .iter()
        .zip(y_spectrum.iter())
        .map(|(x, y)| alpha * x + beta * y)
        .collect::<Vec<_>>();

    near(&combined_spectrum, &expected, TOLERANCE);
}

#[test]
fn parseval_energy_matches() {
    const SIZE: usize = 512;
    let plan = Plan::new(SIZE).unwrap();
    let input = random_signal(SIZE, 3);
    let mut signal = input.clone();
    let mut spectrum = vec![Complex::default(); SIZE];
    plan.fft(&mut signal, &mut spectrum).unwrap();
    let time_energy: f32 = input.iter().map(|x| x.norm_sqr()).sum();
    let freq_energy: f32 =
        spectrum.iter().map(|x| x.norm_sqr()).sum::<f32>() / SIZE as f32;
    assert!(
        (time_energy - freq_energy).abs() <= TOLERANCE * time_energy,
        "{} != {}",
        time_energy,
        freq_energy
    );
}

#[test]
fn simd_tiers_agree() {
    const SIZE: usize = 1024;
    let detected = detect_simd();
    let input = random_signal(SIZE, 4);

    let mut reference = vec![Complex::default(); SIZE];
    Plan::with_simd_tier(SIZE, SimdTier::Scalar)
        .unwrap()
        .fft(&mut input.clone(), &mut reference)
        .unwrap();

    for tier in [
        SimdTier::Sse,
        SimdTier::Sse3,
        SimdTier::Avx,
        SimdTier::Avx512,
    ] {
        if tier > detected {
            continue;
        }
        let plan = Plan::with_simd_tier(SIZE, tier).unwrap();
        assert_eq!(plan.simd_tier(), tier);
        let mut spectrum = vec![Complex::default(); SIZE];
        plan.fft(&mut input.clone(), &mut spectrum).unwrap();
        near(&spectrum, &reference, TOLERANCE);
    }
}

#[test]
fn equal_plans_transform_identically() {
    const SIZE: usize = 512;
    let first = Plan::new(SIZE).unwrap();
    let second = Plan::new(SIZE).unwrap();
    let input = random_signal(SIZE, 5);

    let mut a = vec![Complex::default(); SIZE];
    let mut b = vec![Complex::default(); SIZE];
    first.fft(&mut input.clone(), &mut a).unwrap();
    second.fft(&mut input.clone(), &mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn tier_resolves_lazily() {
    let plan = Plan::new(64).unwrap();
    assert_eq!(plan.simd_tier(), detect_simd());
}

#[test]
fn rejects_invalid_sizes() {
    let plan = Plan::new(64).unwrap();
    let mut signal = vec![Complex::default(); 12];
    let mut spectrum = vec![Complex::default(); 12];
    assert!(matches!(
        plan.fft(&mut signal, &mut spectrum),
        Err(Error::InvalidSize { .. })
    ));

    let mut signal = vec![Complex::default(); 128];
    let mut spectrum = vec![Complex::default(); 128];
    assert!(matches!(
        plan.fft(&mut signal, &mut spectrum),
        Err(Error::InvalidSize { .. })
    ));

    let mut signal = vec![Complex::default(); 32];
    let mut spectrum = vec![Complex::default(); 64];
    assert!(matches!(
        plan.fft(&mut signal, &mut spectrum),
        Err(Error::InvalidSize { .. })
    ));

    let mut signal = vec![Complex::default(); 1];
    let mut spectrum = vec![Complex::default(); 1];
    assert!(matches!(
        plan.ifft(&mut signal, &mut spectrum),
        Err(Error::InvalidSize { .. })
    ));

    assert!(matches!(Plan::new(12), Err(Error::InvalidSize { .. })));
    assert!(matches!(Plan::new(2), Err(Error::InvalidSize { .. })));
    assert!(matches!(Plan::new(0), Err(Error::InvalidSize { .. })));
}

#[test]
fn failed_calls_leave_spectrum_untouched() {
    let plan = Plan::new(64).unwrap();
    let mut signal = vec![Complex::new(1.0, 1.0); 12];
    let mut spectrum = vec![Complex::new(42.0, -42.0); 12];
    let _ = plan.fft(&mut signal, &mut spectrum);
    assert!(spectrum.iter().all(|x| *x == Complex::new(42.0, -42.0)));
    assert!(signal.iter().all(|x| *x == Complex::new(1.0, 1.0)));
}
