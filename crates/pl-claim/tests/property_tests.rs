//! Property-based tests for pl-claim
//!
//! Claims survive the round trip in normalized form, and damaged tokens are
//! refused rather than misread.

#[cfg(test)]
mod hex_properties {
    use pl_claim::{add_0x, strip_0x};
    use proptest::prelude::*;

    proptest! {
        /// Holds whenever at most one prefix is present.
        #[test]
        fn strip_idempotent(s in "(0x)?[0-9a-f]{0,16}") {
            prop_assert_eq!(strip_0x(strip_0x(&s)), strip_0x(&s));
        }

        #[test]
        fn add_idempotent(s in "(0x){0,3}[0-9a-fx]{0,16}") {
            prop_assert_eq!(add_0x(&add_0x(&s)), add_0x(&s));
        }

        #[test]
        fn strip_undoes_add(s in "(0x){0,3}[0-9a-fx]{0,16}") {
            let added = add_0x(&s);
            prop_assert_eq!(strip_0x(&added), strip_0x(&s));
        }

        #[test]
        fn add_undoes_strip(s in "0x(0x){0,2}[0-9a-fx]{0,16}") {
            prop_assert_eq!(add_0x(strip_0x(&s)), s);
        }
    }
}

#[cfg(test)]
mod claim_properties {
    use pl_claim::date::iso_from_seconds;
    use pl_claim::{decode_claim, encode_claim, Claim, IssueDate};
    use proptest::prelude::*;

    fn arb_claim() -> impl Strategy<Value = (String, String, Option<String>, Option<i64>)> {
        (
            "\\PC{0,120}",
            "[0-9a-f]{0,130}",
            prop::option::of("[0-9a-fA-F]{40}"),
            prop::option::of(0i64..4_102_444_800),
        )
    }

    fn build(text: &str, sig: &str, signer: &Option<String>, secs: Option<i64>) -> Claim {
        let mut claim = Claim::new(text, format!("0x{sig}"));
        if let Some(signer) = signer {
            claim = claim.with_signer(format!("0x{signer}"));
        }
        if let Some(secs) = secs {
            claim = claim.with_doi(secs);
        }
        claim
    }

    proptest! {
        #[test]
        fn claim_roundtrip((text, sig, signer, secs) in arb_claim()) {
            let claim = build(&text, &sig, &signer, secs);
            let back = decode_claim(&encode_claim(&claim).unwrap()).unwrap();

            prop_assert_eq!(&back.text, &text);
            prop_assert_eq!(back.signature, format!("0x{sig}"));
            prop_assert_eq!(back.signer, signer.map(|s| format!("0x{s}")));
            prop_assert_eq!(
                back.doi,
                secs.and_then(iso_from_seconds).map(IssueDate::Timestamp)
            );
        }

        /// A second trip changes nothing.
        #[test]
        fn decoded_claim_is_stable((text, sig, signer, secs) in arb_claim()) {
            let once = decode_claim(&encode_claim(&build(&text, &sig, &signer, secs)).unwrap()).unwrap();
            let twice = decode_claim(&encode_claim(&once).unwrap()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn flipped_token_rejected(
            (text, sig, signer, secs) in arb_claim(),
            at in any::<prop::sample::Index>(),
        ) {
            let token = encode_claim(&build(&text, &sig, &signer, secs)).unwrap();
            let at = at.index(token.len());
            let flipped: String = token
                .char_indices()
                .map(|(i, c)| if i == at { if c == 'A' { 'B' } else { 'A' } } else { c })
                .collect();
            prop_assert!(decode_claim(&flipped).is_none());
        }

        #[test]
        fn truncated_token_rejected(
            (text, sig, signer, secs) in arb_claim(),
            cut in any::<prop::sample::Index>(),
        ) {
            let token = encode_claim(&build(&text, &sig, &signer, secs)).unwrap();
            let len = cut.index(token.len());
            prop_assert!(decode_claim(&token[..len]).is_none());
        }
    }
}
