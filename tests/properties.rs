// havoc-mutation/tests/properties.rs
//! Property tests for the buffer invariants

use havoc_mutation::mutators::ops;
use havoc_mutation::{havoc, SizeClass, HAVOC_MUTATIONS};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn havoc_stays_within_capacity(
        contents in proptest::collection::vec(any::<u8>(), 1..64),
        spare in 0usize..16,
        seed in any::<u64>(),
    ) {
        let size = contents.len();
        let capacity = size + spare;
        let mut storage = contents;
        storage.resize(capacity, 0);
        storage.extend_from_slice(&[0xA5; 8]);

        let mut rng = StdRng::seed_from_u64(seed);
        let new_size = havoc(&mut storage[..capacity], size, &mut rng).unwrap();

        prop_assert!(new_size <= capacity);
        prop_assert!(storage[capacity..].iter().all(|&byte| byte == 0xA5));
    }

    #[test]
    fn remove_shrinks_and_zero_fills(
        mut value in proptest::collection::vec(any::<u8>(), 2..64),
        seed in any::<u64>(),
    ) {
        let old_size = value.len();
        let mut rng = StdRng::seed_from_u64(seed);
        let new_size = ops::remove_random_block(&mut value, &mut rng).unwrap();

        prop_assert!(new_size >= 1);
        prop_assert!(new_size < old_size);
        prop_assert!(value[new_size..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn insert_grows_and_leaves_the_spare_tail_alone(
        contents in proptest::collection::vec(any::<u8>(), 0..32),
        spare in 1usize..16,
        seed in any::<u64>(),
    ) {
        let size = contents.len();
        let capacity = size + spare;
        let mut buffer = contents;
        buffer.resize(capacity, 0);

        let mut rng = StdRng::seed_from_u64(seed);
        let new_size = ops::random_block_insert(&mut buffer, size, &mut rng).unwrap();

        prop_assert!(new_size > size);
        prop_assert!(new_size <= capacity);
        prop_assert!(buffer[new_size..].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn insert_fails_without_spare_room(
        mut buffer in proptest::collection::vec(any::<u8>(), 0..32),
        seed in any::<u64>(),
    ) {
        let size = buffer.len();
        let before = buffer.clone();
        let mut rng = StdRng::seed_from_u64(seed);

        prop_assert_eq!(ops::random_block_insert(&mut buffer, size, &mut rng), None);
        prop_assert_eq!(buffer, before);
    }

    #[test]
    fn constant_operators_keep_the_size_and_the_spare_tail(
        contents in proptest::collection::vec(any::<u8>(), 1..32),
        seed in any::<u64>(),
    ) {
        let size = contents.len();
        let mut buffer = contents;
        buffer.resize(size + 8, 0x5C);

        let mut rng = StdRng::seed_from_u64(seed);
        for op in HAVOC_MUTATIONS {
            if op.size_class() != SizeClass::Constant {
                continue;
            }
            if let Some(new_size) = op.apply(&mut buffer, size, &mut rng) {
                prop_assert_eq!(new_size, size);
            }
            prop_assert!(buffer[size..].iter().all(|&byte| byte == 0x5C));
        }
    }

    #[test]
    fn rejected_calls_leave_the_buffer_alone(
        mut buffer in proptest::collection::vec(any::<u8>(), 0..16),
        extra in 1usize..8,
        seed in any::<u64>(),
    ) {
        let before = buffer.clone();
        let declared = buffer.len() + extra;
        let mut rng = StdRng::seed_from_u64(seed);

        prop_assert!(havoc(&mut buffer, declared, &mut rng).is_err());
        prop_assert_eq!(buffer, before);
    }
}
