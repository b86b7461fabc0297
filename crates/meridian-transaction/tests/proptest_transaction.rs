use proptest::prelude::*;

use meridian_primitives::keys::PrivateKey;
use meridian_transaction::{Operation, OperationKind, TransactionDraft};

/// Derive a well-formed address deterministically from a seed byte.
fn address_from(tag: u8) -> String {
    PrivateKey::from_seed(&[tag; 32]).public_key().to_address()
}

/// Strategy for printable metadata/payload strings.
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,32}"
}

/// Strategy to generate one operation of any variant.
fn arb_operation() -> impl Strategy<Value = Operation> {
    let arb_kind = prop_oneof![
        (any::<u8>(), 0..i64::MAX).prop_map(|(tag, balance)| OperationKind::CreateAccount {
            dest_address: address_from(tag),
            init_balance: balance,
        }),
        ("[A-Z]{1,8}", 1..i64::MAX).prop_map(|(code, amount)| OperationKind::IssueAsset {
            code,
            amount,
        }),
        (any::<u8>(), "[A-Z]{1,8}", any::<u8>(), 1..i64::MAX).prop_map(
            |(dest, code, issuer, amount)| OperationKind::PayAsset {
                dest_address: address_from(dest),
                code,
                issuer: address_from(issuer),
                amount,
            }
        ),
        (any::<u8>(), 1..i64::MAX).prop_map(|(tag, amount)| OperationKind::PayCoin {
            dest_address: address_from(tag),
            amount,
        }),
        ("[a-z]{1,16}", arb_text(), 0..i64::MAX).prop_map(|(key, value, version)| {
            OperationKind::SetMetadata { key, value, version }
        }),
        (0..1000i64, 0..1000i64).prop_map(|(master_weight, tx_threshold)| {
            OperationKind::SetPrivilege { master_weight, tx_threshold }
        }),
        (any::<u8>(), 0..1000i64).prop_map(|(tag, weight)| OperationKind::SetSignerWeight {
            signer_address: address_from(tag),
            weight,
        }),
        (0..1000i64).prop_map(|tx_threshold| OperationKind::SetThreshold { tx_threshold }),
        ("[a-z]{1,16}", prop::collection::vec(arb_text(), 0..4))
            .prop_map(|(topic, datas)| OperationKind::Log { topic, datas }),
    ];

    (
        prop::option::of(any::<u8>().prop_map(address_from)),
        arb_text(),
        arb_kind,
    )
        .prop_map(|(source_address, metadata, kind)| Operation {
            source_address,
            metadata,
            kind,
        })
}

/// Strategy to generate a valid random transaction draft.
fn arb_draft() -> impl Strategy<Value = TransactionDraft> {
    (
        any::<u8>(),
        1..i64::MAX,
        0..i64::MAX,
        0..i64::MAX,
        0..i64::MAX,
        arb_text(),
        prop::collection::vec(arb_operation(), 1..5),
    )
        .prop_map(
            |(tag, nonce, ceil_ledger_seq, fee_limit, gas_price, metadata, operations)| {
                TransactionDraft {
                    source_address: address_from(tag),
                    nonce,
                    ceil_ledger_seq,
                    fee_limit,
                    gas_price,
                    metadata,
                    operations,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn draft_serialize_deserialize_roundtrip(draft in arb_draft()) {
        let bytes = draft.to_bytes();
        let parsed = TransactionDraft::from_bytes(&bytes).unwrap();
        prop_assert_eq!(parsed, draft);
    }

    #[test]
    fn draft_encoding_is_deterministic(draft in arb_draft()) {
        prop_assert_eq!(draft.to_bytes(), draft.to_bytes());
    }

    #[test]
    fn draft_hex_roundtrip(draft in arb_draft()) {
        let blob = draft.to_hex();
        let parsed = TransactionDraft::from_hex(&blob).unwrap();
        prop_assert_eq!(parsed.to_hex(), blob);
    }

    #[test]
    fn tx_hash_is_stable(draft in arb_draft()) {
        prop_assert_eq!(draft.tx_hash_hex(), draft.tx_hash_hex());
        prop_assert_eq!(draft.tx_hash_hex().len(), 64);
    }
}
