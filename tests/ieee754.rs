use bit_inspect::ieee754::*;
use bit_inspect::BinaryString;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ONE_POINT_ONE: &str = "0011111111110001100110011001100110011001100110011001100110011010";

#[test]
fn binary_string_of_one_point_one() {
    let s = to_binary_string(1.1);
    assert_eq!(s.width(), 64);
    assert_eq!(s, ONE_POINT_ONE);
    assert_eq!(sign_bit(1.1), 0);
    assert_eq!(exponent_field(1.1), "01111111111");
    assert_eq!(exponent_value(1.1), 0);
    assert_eq!(
        mantissa_field(1.1),
        "0001100110011001100110011001100110011001100110011010"
    );
    assert_eq!(mantissa_value(1.1), 4953959590107546);
}

#[test]
fn negative_thousandth() {
    let fp = -0.001;
    assert_eq!(sign_bit(fp), 1);
    assert_eq!(exponent_field(fp), "01111110101");
    assert_eq!(exponent_value(fp), -10);
    assert_eq!(mantissa_value(fp), 4611686018427388);
}

#[test]
fn special_values() {
    let fp = 0.0;
    assert_eq!(to_binary_string(fp), "0".repeat(64).as_str());
    assert_eq!(exponent_value(fp), -1023);
    assert!(Float64Bits::new(fp).is_zero());

    let fp = f64::INFINITY;
    assert_eq!(exponent_field(fp), "11111111111");
    assert_eq!(exponent_value(fp), 1024);
    assert!(Float64Bits::new(fp).is_infinity());
    assert!(!Float64Bits::new(fp).is_nan());

    let fp = f64::NEG_INFINITY;
    assert_eq!(sign_bit(fp), 1);
    assert!(Float64Bits::new(fp).is_infinity());

    // smallest subnormal
    let fp = f64::from_bits(1);
    let bits = Float64Bits::new(fp);
    assert!(bits.is_subnormal());
    assert!(!bits.is_normal());
    assert_eq!(exponent_value(fp), -1023);
    assert_eq!(
        mantissa_field(fp),
        "0000000000000000000000000000000000000000000000000001"
    );
    // the implicit one is added regardless
    assert_eq!(mantissa_value(fp), (1 << 52) | 1);

    // quiet NaN built from an explicit pattern
    let fp = f64::from_bits((0x7FF << 52) | (1 << 51));
    let bits = Float64Bits::new(fp);
    assert!(bits.is_nan());
    assert_eq!(bits.exponent_field(), "11111111111");
    assert_eq!(bits.to_bits(), (0x7FF << 52) | (1 << 51));
}

#[test]
fn negative_zero_sign() {
    // the stored sign bit is reported, not the result of `f < 0`
    assert_eq!(sign_bit(-0.0), 1);
    assert!(!is_sign_negative_cmp(-0.0));
    assert_eq!(sign_bit(0.0), 0);
    assert_eq!(
        to_binary_string(-0.0),
        format!("1{}", "0".repeat(63)).as_str()
    );

    let nan = f64::from_bits((1 << 63) | (0x7FF << 52) | 1);
    assert_eq!(sign_bit(nan), 1);
    assert!(!is_sign_negative_cmp(nan));
}

#[test]
fn renders() {
    assert_eq!(
        split_render(1.1),
        "0, 01111111111, 0001100110011001100110011001100110011001100110011010"
    );
    assert_eq!(
        Float64Bits::new(1.1).to_string(),
        "(0, 01111111111, 0001100110011001100110011001100110011001100110011010)"
    );
    assert_eq!(
        scientific_render(1.1),
        "1.000110011001100110011001100110011001100110011001101"
    );
    assert_eq!(
        scientific_render(-0.001),
        "-1.00000110001001001101110100101111000110101001111111 x 2^-10"
    );
    assert_eq!(scientific_render(1.0), "1.");
    assert_eq!(scientific_render(-4.0), "-1. x 2^2");
}

#[test]
fn from_binary() {
    let s = BinaryString::new(ONE_POINT_ONE).unwrap();
    let bits = Float64Bits::from_binary(&s).unwrap();
    assert_eq!(f64::from(bits), 1.1);

    let short = BinaryString::new("0101").unwrap();
    assert_eq!(
        Float64Bits::from_binary(&short),
        Err(bit_inspect::FormatError::WrongLength { expected: 64, found: 4 })
    );
}

#[test]
fn random_fields() {
    let mut rng = StdRng::seed_from_u64(0x1EEE_754);
    for _ in 0..1000 {
        let fp = f64::from_bits(rng.gen::<u64>());
        if !fp.is_finite() {
            continue;
        }

        let bits = Float64Bits::new(fp);
        let whole = bits.to_binary_string();
        assert_eq!(whole.width(), 64);

        // re-threading the fields reproduces the pattern
        let rejoined = format!(
            "{}{}{}",
            bits.sign_bit(),
            bits.exponent_field(),
            bits.mantissa_field()
        );
        assert_eq!(whole, rejoined.as_str(), "field split failed: {:.20e}", fp);

        let field = bits.exponent_field().to_u64().unwrap() as i64;
        assert_eq!(bits.exponent_value(), field - 1023);

        if bits.is_normal() {
            let m = bits.mantissa_value();
            assert!((1 << 52..1 << 53).contains(&m), "mantissa out of range: {:.20e}", fp);
        }

        let back = Float64Bits::from_binary(&whole).unwrap();
        assert_eq!(f64::from(back).to_bits(), fp.to_bits());
    }
}
