use proptest::prelude::*;
use proptest::sample::select;

use wlid::{decode, encode, normalize_kind, KIND_NAMES};

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9.]{0,15}"
}

fn resource_name() -> impl Strategy<Value = String> {
    "[a-z0-9]([a-z0-9-]{0,30}[a-z0-9])?"
}

proptest! {
    #[test]
    fn known_kinds_roundtrip(
        cluster in segment(),
        namespace in segment(),
        kind in select(KIND_NAMES),
        name in resource_name(),
    ) {
        let decoded = decode(&encode(&cluster, &namespace, kind, &name)).unwrap();
        prop_assert_eq!(decoded.cluster, cluster);
        prop_assert_eq!(decoded.namespace, namespace);
        prop_assert_eq!(decoded.kind, kind);
        prop_assert_eq!(decoded.name, name);
    }

    #[test]
    fn kind_casing_is_canonicalized(
        kind in select(KIND_NAMES),
        upper in any::<bool>(),
    ) {
        let input = if upper { kind.to_uppercase() } else { kind.to_lowercase() };
        let decoded = decode(&encode("c", "n", &input, "x")).unwrap();
        prop_assert_eq!(decoded.kind, kind);
        prop_assert_eq!(normalize_kind(&input), kind);
    }

    #[test]
    fn unknown_kinds_pass_through_lowercased(
        kind in "[A-Z][a-zA-Z]{2,12}",
        name in resource_name(),
    ) {
        prop_assume!(normalize_kind(&kind) == kind);
        let decoded = decode(&encode("c", "n", &kind, &name)).unwrap();
        prop_assert_eq!(decoded.kind, kind.to_lowercase());
        prop_assert_eq!(decoded.name, name);
    }

    #[test]
    fn whitespace_always_rejected(
        prefix in "[a-z/-]{0,10}",
        ws in select(vec![" ", "\t", "\n", "\r"]),
        suffix in "[a-z/-]{0,10}",
    ) {
        let err = decode(&format!("{prefix}{ws}{suffix}")).unwrap_err();
        prop_assert_eq!(err.reason(), "whitespace found");
    }

    #[test]
    fn legacy_segments_returned_verbatim(
        parts in prop::collection::vec("[A-Za-z0-9-]{1,10}", 4),
    ) {
        let decoded = decode(&parts.join("/")).unwrap();
        prop_assert_eq!(
            vec![decoded.cluster, decoded.namespace, decoded.kind, decoded.name],
            parts
        );
    }
}
