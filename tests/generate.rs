//! Key generation and round trips through PEM.

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rsa_keys::{Error, KeyGenerator, PrivateKey, PublicKey, DEFAULT_BITS};
use rstest::rstest;

#[test]
fn generate_default_is_4096_bits() {
    let key = rsa_keys::generate_default();

    assert_eq!(DEFAULT_BITS, 4096);
    assert_eq!(key.size(), 4096);
    assert_eq!(key.public_key().size(), 512);
}

#[rstest]
#[case(1024)]
#[case(1032)]
#[case(2048)]
#[case(3072)]
#[case(4104)]
fn generate_reports_requested_size(#[case] bits: usize) {
    let key = rsa_keys::generate(bits).unwrap();

    assert_eq!(key.size(), bits);
}

#[rstest]
#[case::zero_bits(0)]
#[case::non_multiple_of_8(2049)]
#[case::unaligned_and_small(1001)]
fn generate_rejects_invalid_sizes(#[case] bits: usize) {
    assert!(matches!(rsa_keys::generate(bits), Err(Error::InvalidBitSize)));
}

#[rstest]
#[case::too_few_bits(256)]
#[case::just_below_minimum(1016)]
fn generate_rejects_small_sizes(#[case] bits: usize) {
    assert!(matches!(rsa_keys::generate(bits), Err(Error::BitSizeTooSmall)));
}

#[test]
fn private_key_pem_round_trip() {
    // WARNING: do *NOT* copy and paste this code. It's insecure and optimized for test speed.
    let mut generator = KeyGenerator::with_rng(ChaCha8Rng::from_seed([42; 32]));
    let key = generator.generate(2048).unwrap();

    let decoded = PrivateKey::from_pem(&key.to_pem()).unwrap();

    assert_eq!(decoded.size(), key.size());
    assert_eq!(decoded, key);
}

#[test]
fn public_key_pem_round_trip_is_byte_identical() {
    let mut generator = KeyGenerator::with_rng(ChaCha8Rng::from_seed([9; 32]));
    let public_key = generator.generate(2048).unwrap().public_key();

    let pem = public_key.to_pem();
    let decoded = PublicKey::from_pem(&pem).unwrap();

    assert_eq!(decoded.to_pem(), pem);
}

#[test]
fn keys_above_4096_bits_round_trip() {
    let mut generator = KeyGenerator::with_rng(ChaCha8Rng::from_seed([1; 32]));
    let private_key = generator.generate(4104).unwrap();
    assert_eq!(private_key.size(), 4104);

    let decoded = PrivateKey::from_pem(&private_key.to_pem()).unwrap();
    assert_eq!(decoded, private_key);

    let pem = private_key.public_key().to_pem();
    let public_key = PublicKey::from_pem(&pem).unwrap();
    assert_eq!(public_key.size(), 513);
    assert_eq!(public_key.to_pem(), pem);
}

#[test]
fn derived_public_key_size_is_private_size_in_bytes() {
    let mut generator = KeyGenerator::with_rng(ChaCha8Rng::from_seed([5; 32]));
    let private_key = generator.generate(1024).unwrap();

    let public_key = PublicKey::from_pem(&private_key.public_key().to_pem()).unwrap();

    assert_eq!(public_key.size(), private_key.size() / 8);
}

#[test]
fn keys_can_be_shared_across_threads() {
    let mut generator = KeyGenerator::with_rng(ChaCha8Rng::from_seed([11; 32]));
    let key = std::sync::Arc::new(generator.generate(1024).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let key = key.clone();
            std::thread::spawn(move || key.public_key().to_pem())
        })
        .collect();

    let expected = key.public_key().to_pem();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
