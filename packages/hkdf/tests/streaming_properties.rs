//! Property tests for the streaming expander

use cryypt_hkdf::{derive, expand, extract, max_output_size, HkdfError, HkdfSha256};
use proptest::prelude::*;
use sha2::{Sha256, Sha384, Sha512};

const LIMIT: usize = 255 * 32;

proptest! {
    #[test]
    fn prk_length_is_digest_length(
        secret in proptest::collection::vec(any::<u8>(), 0..128),
        salt in proptest::option::of(proptest::collection::vec(any::<u8>(), 0..160)),
    ) {
        let salt = salt.as_deref();
        prop_assert_eq!(extract::<Sha256>(&secret, salt).len(), 32);
        prop_assert_eq!(extract::<Sha384>(&secret, salt).len(), 48);
        prop_assert_eq!(extract::<Sha512>(&secret, salt).len(), 64);
    }

    #[test]
    fn absent_salt_equals_zero_salt(secret in proptest::collection::vec(any::<u8>(), 0..128)) {
        prop_assert_eq!(
            extract::<Sha256>(&secret, None),
            extract::<Sha256>(&secret, Some(&[0u8; 32]))
        );
        prop_assert_eq!(
            extract::<Sha512>(&secret, None),
            extract::<Sha512>(&secret, Some(&[0u8; 64]))
        );
    }

    #[test]
    fn split_reads_match_single_read(
        secret in proptest::collection::vec(any::<u8>(), 0..64),
        info in proptest::collection::vec(any::<u8>(), 0..64),
        total in 0usize..=LIMIT,
        split in any::<prop::sample::Index>(),
    ) {
        let first = split.index(total + 1);
        let mut streamed = derive::<Sha256>(&secret, None, Some(&info));
        let mut joined = streamed.read(first).map_err(|e| TestCaseError::fail(e.to_string()))?.to_vec();
        joined.extend_from_slice(
            &streamed.read(total - first).map_err(|e| TestCaseError::fail(e.to_string()))?,
        );

        let whole = derive::<Sha256>(&secret, None, Some(&info))
            .read(total)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(joined, whole.to_vec());
    }

    #[test]
    fn derivation_is_deterministic(
        secret in proptest::collection::vec(any::<u8>(), 0..64),
        salt in proptest::collection::vec(any::<u8>(), 0..64),
        len in 0usize..512,
    ) {
        let a = derive::<Sha384>(&secret, Some(&salt), None).read(len);
        let b = derive::<Sha384>(&secret, Some(&salt), None).read(len);
        prop_assert_eq!(a.map(|k| k.to_vec()), b.map(|k| k.to_vec()));
    }

    #[test]
    fn remaining_tracks_reads(reads in proptest::collection::vec(0usize..300, 0..20)) {
        let mut okm = expand::<Sha256>(&[7u8; 32], None);
        let mut consumed = 0usize;
        for len in reads {
            match okm.read(len) {
                Ok(bytes) => {
                    prop_assert_eq!(bytes.len(), len);
                    consumed += len;
                }
                Err(err) => {
                    prop_assert!(consumed + len > LIMIT);
                    prop_assert!(err.is_entropy_limit());
                }
            }
            prop_assert_eq!(okm.remaining(), LIMIT - consumed);
        }
    }
}

#[test]
fn test_limit_boundary_per_hash() {
    assert!(derive::<Sha256>(b"ikm", None, None).read(255 * 32).is_ok());
    assert!(derive::<Sha384>(b"ikm", None, None).read(255 * 48).is_ok());
    assert!(derive::<Sha512>(b"ikm", None, None).read(255 * 64).is_ok());

    assert_eq!(max_output_size::<Sha512>(), 255 * 64);
    let err = derive::<Sha512>(b"ikm", None, None)
        .read(255 * 64 + 1)
        .expect_err("one byte past the limit must fail");
    assert_eq!(
        err,
        HkdfError::EntropyLimitExceeded {
            requested: 255 * 64 + 1,
            remaining: 255 * 64,
        }
    );
}

#[test]
fn test_limit_applies_to_cumulative_reads() {
    let mut okm: HkdfSha256 = derive::<Sha256>(b"ikm", Some(b"salt"), Some(b"info"));
    assert!(okm.read(LIMIT - 1).is_ok());
    assert!(okm.read(2).is_err());
    assert_eq!(okm.remaining(), 1);
    assert_eq!(okm.read(1).map(|k| k.len()), Ok(1));
    assert!(okm.read(1).is_err());
}

#[test]
fn test_expander_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<HkdfSha256>();
}

#[test]
fn test_shared_expander_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let shared = Arc::new(Mutex::new(derive::<Sha256>(b"ikm", None, None)));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let okm = Arc::clone(&shared);
            thread::spawn(move || {
                let mut okm = okm.lock().expect("expander mutex poisoned");
                okm.read(100).map(|k| k.len())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("reader thread panicked"), Ok(100));
    }
    let okm = shared.lock().expect("expander mutex poisoned");
    assert_eq!(okm.remaining(), LIMIT - 400);
}
