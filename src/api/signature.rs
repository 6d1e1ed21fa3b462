use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, Signature, Verifier, VerifyingKey};
use tracing::error;

/// Verify the Ed25519 signature Discord attaches to every interaction.
///
/// The signed message is the timestamp header concatenated with the raw
/// request body. Any malformed key or signature fails closed.
pub fn verify_discord_signature(
    request_body: &str,
    timestamp: &str,
    signature: &str,
    public_key: &str,
) -> bool {
    let key_bytes: [u8; PUBLIC_KEY_LENGTH] = match hex::decode(public_key) {
        Ok(bytes) => match bytes.try_into() {
            Ok(arr) => arr,
            Err(_) => {
                error!("Public key has wrong length");
                return false;
            }
        },
        Err(e) => {
            error!("Public key is not valid hex: {}", e);
            return false;
        }
    };

    let verifying_key = match VerifyingKey::from_bytes(&key_bytes) {
        Ok(key) => key,
        Err(e) => {
            error!("Invalid Ed25519 public key: {}", e);
            return false;
        }
    };

    let sig_bytes: [u8; SIGNATURE_LENGTH] = match hex::decode(signature) {
        Ok(bytes) => match bytes.try_into() {
            Ok(arr) => arr,
            Err(_) => {
                error!("Signature has wrong length");
                return false;
            }
        },
        Err(e) => {
            error!("Signature is not valid hex: {}", e);
            return false;
        }
    };
    let signature = Signature::from_bytes(&sig_bytes);

    let message = format!("{timestamp}{request_body}");
    if verifying_key.verify(message.as_bytes(), &signature).is_ok() {
        true
    } else {
        error!("Signature verification failed");
        false
    }
}
