//! Property-based tests for value and page encoding.

use proptest::prelude::*;

use crate::page::UintMulti;
use crate::types::{ENGINE_UINT_WIDTH, UINT_MAX};
use crate::value::{get_uint, uint, Data};

/// Largest value both the engine and the host can hold
fn max_value() -> usize {
    UINT_MAX.min(usize::MAX as u64) as usize
}

/// Strategy for values that fit the engine uint
fn arb_value() -> impl Strategy<Value = usize> {
    prop_oneof![
        Just(0usize),
        Just(max_value()),
        0..=max_value(),
    ]
}

proptest! {
    #[test]
    fn uint_roundtrip(x in arb_value()) {
        let v = uint(x);
        prop_assert_eq!(v.as_bytes().len(), ENGINE_UINT_WIDTH);
        prop_assert_eq!(get_uint(v.as_bytes()), Some(x));
        prop_assert_eq!(v.uint(), x);
    }

    #[test]
    fn decoded_bytes_reencode_identically(
        bytes in prop::collection::vec(any::<u8>(), ENGINE_UINT_WIDTH)
    ) {
        if let Some(x) = get_uint(&bytes) {
            let v = uint(x);
            prop_assert_eq!(v.as_bytes(), &bytes[..]);
        }
    }

    #[test]
    fn get_uint_rejects_wrong_length(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        prop_assume!(bytes.len() != ENGINE_UINT_WIDTH);
        prop_assert_eq!(get_uint(&bytes), None);
    }

    #[test]
    fn wrap_checks_alignment(len in 0usize..64) {
        let buf = vec![0u8; len];
        let result = UintMulti::try_wrap(&buf);
        if len % ENGINE_UINT_WIDTH == 0 {
            let page = result.unwrap();
            prop_assert_eq!(page.len() * page.stride(), page.size());
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn page_indexing(values in prop::collection::vec(arb_value(), 0..50)) {
        let page: UintMulti = values.iter().copied().collect();
        prop_assert_eq!(page.len(), values.len());
        for (i, &x) in values.iter().enumerate() {
            prop_assert_eq!(page.get(i), x);
        }
        prop_assert!(page.try_get(values.len()).is_err());

        let wrapped = UintMulti::wrap(page.page());
        prop_assert_eq!(wrapped.iter().collect::<Vec<_>>(), values);
    }

    #[test]
    fn append_leaves_original(values in prop::collection::vec(arb_value(), 0..20), x in arb_value()) {
        let page: UintMulti = values.iter().copied().collect();
        let before = page.page().to_vec();
        let grown = page.append(x);

        prop_assert_eq!(page.len(), values.len());
        prop_assert_eq!(page.page(), &before[..]);
        prop_assert_eq!(grown.len(), page.len() + 1);
        prop_assert_eq!(grown.get(page.len()), x);
    }
}
