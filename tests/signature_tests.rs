use ed25519_dalek::{Signer, SigningKey};

use imagine::api::signature::verify_discord_signature;

fn test_key() -> SigningKey {
    SigningKey::from_bytes(&[7u8; 32])
}

fn sign(key: &SigningKey, timestamp: &str, body: &str) -> String {
    let signature = key.sign(format!("{timestamp}{body}").as_bytes());
    hex::encode(signature.to_bytes())
}

#[test]
fn test_valid_signature_verifies() {
    let key = test_key();
    let public_key = hex::encode(key.verifying_key().to_bytes());
    let body = r#"{"type":1}"#;
    let signature = sign(&key, "1700000000", body);

    assert!(verify_discord_signature(body, "1700000000", &signature, &public_key));
}

#[test]
fn test_tampered_body_is_rejected() {
    let key = test_key();
    let public_key = hex::encode(key.verifying_key().to_bytes());
    let signature = sign(&key, "1700000000", r#"{"type":1}"#);

    assert!(!verify_discord_signature(r#"{"type":2}"#, "1700000000", &signature, &public_key));
}

#[test]
fn test_wrong_timestamp_is_rejected() {
    let key = test_key();
    let public_key = hex::encode(key.verifying_key().to_bytes());
    let body = r#"{"type":1}"#;
    let signature = sign(&key, "1700000000", body);

    assert!(!verify_discord_signature(body, "1700000001", &signature, &public_key));
}

#[test]
fn test_signature_from_other_key_is_rejected() {
    let key = test_key();
    let other = SigningKey::from_bytes(&[9u8; 32]);
    let public_key = hex::encode(key.verifying_key().to_bytes());
    let body = r#"{"type":1}"#;
    let signature = sign(&other, "1700000000", body);

    assert!(!verify_discord_signature(body, "1700000000", &signature, &public_key));
}

#[test]
fn test_malformed_inputs_fail_closed() {
    let key = test_key();
    let public_key = hex::encode(key.verifying_key().to_bytes());
    let body = r#"{"type":1}"#;

    // Not hex at all
    assert!(!verify_discord_signature(body, "0", "zz-not-hex", &public_key));
    // Hex but the wrong length
    assert!(!verify_discord_signature(body, "0", "deadbeef", &public_key));
    // Bad public key
    let signature = sign(&key, "0", body);
    assert!(!verify_discord_signature(body, "0", &signature, "deadbeef"));
    assert!(!verify_discord_signature(body, "0", &signature, "not hex"));
}
