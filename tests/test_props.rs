use bufcodec::{bzip2, deflate, DeflateStrategy};
use proptest::prelude::*;

fn any_strategy() -> impl Strategy<Value = DeflateStrategy> {
    prop::sample::select(DeflateStrategy::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn deflate_roundtrip(
        input in prop::collection::vec(any::<u8>(), 0..8192),
        strategy in any_strategy(),
    ) {
        let compressed = deflate::compress_with(&input, strategy).unwrap();
        prop_assert!(!compressed.is_empty());
        let restored = deflate::decompress(&compressed).unwrap();
        prop_assert_eq!(restored, input);
    }

    #[test]
    fn bzip2_roundtrip(
        input in prop::collection::vec(any::<u8>(), 0..8192),
        level in 1..=9u32,
    ) {
        let compressed = bzip2::compress_with(&input, level).unwrap();
        prop_assert!(!compressed.is_empty());
        let restored = bzip2::decompress(&compressed).unwrap();
        prop_assert_eq!(restored, input);
    }

    #[test]
    fn deflate_rejects_random_bytes(input in prop::collection::vec(any::<u8>(), 0..256)) {
        // A random prefix is overwhelmingly unlikely to be a valid zlib
        // stream; skip the rare cases where it happens to decode.
        if let Err(e) = deflate::decompress(&input) {
            prop_assert!(
                matches!(e, bufcodec::CompressionError::CodecProcessFailed { .. }),
                "got {:?}",
                e
            );
        }
    }
}
