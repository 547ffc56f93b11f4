// Decoder properties over arbitrary exaggeration values and pixels

use approx::relative_eq;
use gsi_terrain::{reference_elevation, ElevationDecoder, EncodedPixel};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = 1e-12, max_relative = 1e-9)
}

fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |k| k.is_finite())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn scalers_are_linear_in_k(k in 0.0f64..10.0) {
        let d = ElevationDecoder::with_exaggeration(k);
        prop_assert!(close(d.r_scaler, 6.5536 * k));
        prop_assert!(close(d.g_scaler, 0.0256 * k));
        prop_assert!(close(d.b_scaler, 0.0001 * k));
        prop_assert_eq!(d.offset, 0.0);
    }

    #[test]
    fn decode_is_finite(k in finite(), r: u8, g: u8, b: u8) {
        let d = ElevationDecoder::with_exaggeration(k);
        prop_assert!(d.r_scaler.is_finite() && d.g_scaler.is_finite() && d.b_scaler.is_finite());
        prop_assert!(d.decode(EncodedPixel::new(r, g, b)).is_finite());
    }

    #[test]
    fn zero_k_is_flat(r: u8, g: u8, b: u8) {
        let d = ElevationDecoder::with_exaggeration(0.0);
        prop_assert_eq!(d.decode(EncodedPixel::new(r, g, b)), 0.0);
    }

    #[test]
    fn decode_scales_with_k(k in 0.0f64..5.0, r in 0u8..128, g: u8, b: u8) {
        let p = EncodedPixel::new(r, g, b);
        let base = ElevationDecoder::GSI.decode(p);
        prop_assert!(close(ElevationDecoder::with_exaggeration(k).decode(p), base * k));
    }

    #[test]
    fn reference_sign_follows_high_bit(r: u8, g: u8, b: u8) {
        let p = EncodedPixel::new(r, g, b);
        match reference_elevation(p) {
            None => prop_assert_eq!((r, g, b), (128, 0, 0)),
            Some(h) if r < 128 => prop_assert!(h >= 0.0),
            Some(h) => prop_assert!(h < 0.0),
        }
    }
}

#[test]
fn unit_exaggeration_reproduces_defaults() {
    let d = ElevationDecoder::with_exaggeration(1.0);
    assert_eq!(d, ElevationDecoder { r_scaler: 6.5536, g_scaler: 0.0256, b_scaler: 0.0001, offset: 0.0 });
}
