//! Property tests for the 32-point transform.
//!
//! Reproduce a failure: `PROPTEST_SEED=<seed> cargo test --test property_tests`

use fixed_fft32::fixed::core::reverse_bits_5;
use fixed_fft32::{
    BackpressurePolicy, ComplexQ14, FFT_SIZE, Fft32, FftConfig, FftProcess, OverflowPolicy,
    StreamingFft,
};
use num_complex::Complex64;
use proptest::prelude::*;
use std::f64::consts::PI;

/// Inputs whose complex magnitude stays below 2.0, so the twiddle multiply
/// can never leave the Q1.14 range.
fn bounded_block() -> impl Strategy<Value = [ComplexQ14; FFT_SIZE]> {
    prop::array::uniform32((-16384i16..=16384, -16384i16..=16384))
        .prop_map(|raw| raw.map(|(re, im)| ComplexQ14::from_bits(re, im)))
}

fn any_block() -> impl Strategy<Value = [ComplexQ14; FFT_SIZE]> {
    prop::array::uniform32(any::<(i16, i16)>())
        .prop_map(|raw| raw.map(|(re, im)| ComplexQ14::from_bits(re, im)))
}

fn real_block() -> impl Strategy<Value = [ComplexQ14; FFT_SIZE]> {
    prop::array::uniform32(-16384i16..=16384)
        .prop_map(|raw| raw.map(|re| ComplexQ14::from_bits(re, 0)))
}

fn policy() -> impl Strategy<Value = OverflowPolicy> {
    prop_oneof![Just(OverflowPolicy::HalvePerStage), Just(OverflowPolicy::Wrapping)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_stream_matches_one_shot_bit_exact(input in any_block(), overflow in policy()) {
        let config = FftConfig::default().with_overflow(overflow);
        let mut stream = StreamingFft::new(config);
        let streamed = stream.process_block(&input).unwrap();
        prop_assert_eq!(streamed, Fft32::new(config).transform(&input));
    }

    #[test]
    fn test_loader_places_sample_at_reversed_slot(input in any_block()) {
        let mut stream = StreamingFft::default();
        for sample in &input {
            stream.tick(Some(*sample), true).unwrap();
        }
        for (i, sample) in input.iter().enumerate() {
            prop_assert_eq!(stream.session().buffer()[reverse_bits_5(i)], *sample);
        }
    }

    #[test]
    fn test_halving_transform_tracks_float_dft(input in bounded_block()) {
        let spectrum = Fft32::default().transform(&input);
        for k in 0..FFT_SIZE {
            let mut expected = Complex64::new(0.0, 0.0);
            for (n, x) in input.iter().enumerate() {
                let angle = -2.0 * PI * (k * n) as f64 / FFT_SIZE as f64;
                expected += Complex64::new(x.re.to_bits() as f64, x.im.to_bits() as f64)
                    * Complex64::new(angle.cos(), angle.sin());
            }
            expected /= FFT_SIZE as f64;

            let bin = spectrum[k];
            prop_assert!((bin.re.to_bits() as f64 - expected.re).abs() <= 8.0, "bin {}: {:?} vs {}", k, bin, expected);
            prop_assert!((bin.im.to_bits() as f64 - expected.im).abs() <= 8.0, "bin {}: {:?} vs {}", k, bin, expected);
        }
    }

    #[test]
    fn test_real_input_is_conjugate_symmetric(input in real_block()) {
        let spectrum = Fft32::default().transform(&input);
        for i in 1..FFT_SIZE / 2 {
            let a = spectrum[i];
            let b = spectrum[FFT_SIZE - i];
            prop_assert!((a.re.to_bits() as i32 - b.re.to_bits() as i32).abs() <= 100);
            prop_assert!((a.im.to_bits() as i32 + b.im.to_bits() as i32).abs() <= 100);
        }
    }

    #[test]
    fn test_process_rejects_wrong_lengths(len in 0usize..80) {
        prop_assume!(len != FFT_SIZE);
        let mut buffer = vec![ComplexQ14::ZERO; len];
        prop_assert!(Fft32::default().process(&mut buffer).is_err());
    }

    #[test]
    fn test_reject_policy_never_loses_a_session(
        input in bounded_block(),
        pushes in prop::collection::vec(any::<bool>(), 112),
    ) {
        // A producer that pokes the engine at random while it is busy
        let config = FftConfig::default().with_backpressure(BackpressurePolicy::Reject);
        let mut stream = StreamingFft::new(config);
        for sample in &input {
            stream.tick(Some(*sample), true).unwrap();
        }

        let mut bins = Vec::new();
        let mut pushes = pushes.into_iter().cycle();
        while bins.len() < FFT_SIZE {
            if pushes.next().unwrap_or(false) {
                prop_assert!(stream.tick(Some(ComplexQ14::ZERO), true).is_err());
            }
            if let Some(bin) = stream.tick(None, true).unwrap().out {
                bins.push(bin.value);
            }
        }
        let golden = Fft32::default().transform(&input);
        prop_assert_eq!(bins.as_slice(), golden.bins().as_slice());
    }
}
