//! Codec Invariant Tests
//!
//! These tests verify the share-link guarantees: lossless round-trips,
//! deterministic tokens, URL-safe output, and loud failures for bad tokens.

use playground_core::{
    decode_share_link, encode_share_link, payload, transport, DecodeError, WorkspaceState,
    CODEC_VERSION,
};

fn sample_state() -> WorkspaceState {
    WorkspaceState::new("Sample Template", "Sample Model", r#"{"sample": "data"}"#)
}

fn is_url_safe(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[test]
fn invariant_payload_roundtrip() {
    let state = sample_state();
    let bytes = payload::serialize(&state);
    assert_eq!(payload::deserialize(&bytes).unwrap(), state);
}

#[test]
fn invariant_share_link_roundtrip() {
    let state = sample_state();
    let token = encode_share_link(&state);
    assert_eq!(decode_share_link(&token).unwrap(), state);
}

#[test]
fn invariant_invalid_data_fails() {
    // The literal string a user might paste where a token belongs.
    let err = decode_share_link("invalid data").unwrap_err();
    assert!(matches!(err, DecodeError::InvalidToken { .. }));
    assert!(err.to_string().contains("Invalid token"));
}

#[test]
fn invariant_all_empty_state_has_nonempty_token() {
    let state = WorkspaceState::default();
    let token = encode_share_link(&state);
    assert!(!token.is_empty());
    assert_eq!(decode_share_link(&token).unwrap(), state);
}

#[test]
fn invariant_equal_states_equal_tokens() {
    let a = sample_state();
    let b = WorkspaceState::new("Sample Template", "Sample Model", r#"{"sample": "data"}"#);
    assert_eq!(encode_share_link(&a), encode_share_link(&b));
}

#[test]
fn invariant_large_template_roundtrip() {
    // ~50 KB of template text with newlines, braces, and logic expressions.
    let mut template = String::new();
    while template.len() < 50 * 1024 {
        template.push_str("## Clause {{index}}\nThe party {% if signed %}agrees{% endif %} to:\n");
    }
    let state = WorkspaceState::new(template, "namespace org.accordproject@1.0.0", "{}");
    let token = encode_share_link(&state);
    assert_eq!(decode_share_link(&token).unwrap(), state);
}

#[test]
fn invariant_unicode_roundtrip() {
    let state = WorkspaceState::new(
        "Vertragsvorlage \u{00a7}3 — 契約テンプレート 🦀",
        "concept Partei { o String name }",
        r#"{"name":"Müller"}"#,
    );
    let token = encode_share_link(&state);
    assert!(is_url_safe(&token));
    assert_eq!(decode_share_link(&token).unwrap(), state);
}

#[test]
fn invariant_token_alphabet_is_url_safe() {
    assert!(is_url_safe(&encode_share_link(&sample_state())));
    assert!(is_url_safe(&encode_share_link(&WorkspaceState::default())));
}

#[test]
fn invariant_unsupported_version_rejected() {
    // A token from a future codec: valid transport, unknown format tag.
    let mut bytes = payload::serialize(&sample_state());
    bytes[0] = CODEC_VERSION + 1;
    let token = transport::encode(&bytes);

    let err = decode_share_link(&token).unwrap_err();
    match err {
        DecodeError::UnsupportedVersion { found, supported } => {
            assert_eq!(found, CODEC_VERSION + 1);
            assert_eq!(supported, CODEC_VERSION);
        }
        other => panic!("expected UnsupportedVersion, got: {}", other),
    }
}

#[test]
fn invariant_corruption_never_yields_different_state() {
    let state = sample_state();
    let token = encode_share_link(&state);

    // Flip every position to a different alphabet character. Each corrupted
    // token must either fail to decode or decode to the original state
    // (when the change is a no-op under the encoding); never to a third,
    // plausible-looking workspace.
    for i in 0..token.len() {
        let mut corrupted: Vec<char> = token.chars().collect();
        corrupted[i] = if corrupted[i] == 'A' { 'B' } else { 'A' };
        let corrupted: String = corrupted.into_iter().collect();
        if corrupted == token {
            continue;
        }

        match decode_share_link(&corrupted) {
            Err(_) => {}
            Ok(decoded) => assert_eq!(decoded, state),
        }
    }
}

#[test]
fn invariant_decode_failure_reports_one_descriptive_error() {
    // Valid alphabet, garbage bytes: fails at the payload stage.
    let token = transport::encode(&[CODEC_VERSION, 0x00, 0x11, 0x22, 0x33]);
    let err = decode_share_link(&token).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedPayload { .. }));
    assert!(err.to_string().starts_with("Malformed payload"));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        #[test]
        fn prop_any_workspace_roundtrips(
            template in ".*",
            model in ".*",
            data in ".*",
        ) {
            let state = WorkspaceState::new(template, model, data);
            let token = encode_share_link(&state);
            prop_assert!(is_url_safe(&token));
            prop_assert_eq!(decode_share_link(&token).unwrap(), state);
        }

        #[test]
        fn prop_tokens_are_deterministic(template in ".*", model in ".*") {
            let state = WorkspaceState::new(template, model, "");
            prop_assert_eq!(encode_share_link(&state), encode_share_link(&state));
        }

        #[test]
        fn prop_random_tokens_never_panic(token in "[A-Za-z0-9_-]{0,64}") {
            // Arbitrary alphabet-valid tokens must produce a value or a
            // DecodeError, never a panic.
            let _ = decode_share_link(&token);
        }
    }
}
