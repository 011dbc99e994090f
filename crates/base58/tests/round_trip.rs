//! Round-trip and ordering properties of the integer codec.

use cds_base58::{Alphabet, BigUint, decode, decode_u64, encode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest value that fits in three digits.
const THREE_DIGIT_MAX: u64 = 58 * 58 * 58 - 1;

#[test]
fn every_three_digit_value_round_trips() {
    for n in 0..=THREE_DIGIT_MAX {
        let s = encode(n).unwrap();
        assert!(s.len() <= 3, "{n} encoded to {s:?}");
        assert_eq!(decode_u64(&s).unwrap(), n, "round trip failed for {n}");
    }
}

#[test]
fn four_digits_start_at_radix_cubed() {
    assert_eq!(encode(THREE_DIGIT_MAX).unwrap(), "zzz");
    assert_eq!(encode(THREE_DIGIT_MAX + 1).unwrap(), "2111");
}

#[test]
fn sampled_u64_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let n: u64 = rng.random();
        let s = encode(n).unwrap();
        assert_eq!(decode_u64(&s).unwrap(), n, "round trip failed for {n}");
    }
}

#[test]
fn large_integer_round_trip() {
    let n: BigUint = "12345678901234567890123456789".parse().unwrap();
    let s = encode(n.clone()).unwrap();
    assert_eq!(s, "kfM5QHa2FxXAhXM6");
    assert_eq!(decode(&s).unwrap(), n);
}

#[test]
fn equal_length_encodings_sort_like_values() {
    // Bitcoin digits are in ASCII order, so same-width strings compare like numbers.
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let a = rng.random_range(58 * 58..=THREE_DIGIT_MAX);
        let b = rng.random_range(58 * 58..=THREE_DIGIT_MAX);
        let (sa, sb) = (encode(a).unwrap(), encode(b).unwrap());
        assert_eq!(a.cmp(&b), sa.cmp(&sb), "{a} -> {sa}, {b} -> {sb}");
    }
}

#[test]
fn custom_alphabet_round_trip() {
    let a = Alphabet::new("ABCDEFGHJKLMNPQRSTUVWXYZ123456789abcdefghijkmnopqrstuvwxyz").unwrap();
    for n in [0u64, 1, 57, 58, 1_000_000] {
        let s = a.encode(n).unwrap();
        assert_eq!(a.decode_u64(&s).unwrap(), n);
    }
    assert_eq!(a.encode(0u8).unwrap(), "A");
}
