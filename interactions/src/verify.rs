use crate::InvalidPublicKey;
use ed25519_dalek::{Signature, Verifier as _, VerifyingKey};
use tracing::warn;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Checks that a request was signed by the platform: the signature covers
/// the timestamp header followed by the raw body.
#[derive(Debug, Clone)]
pub struct Verifier {
    public_key: VerifyingKey,
}

impl Verifier {
    pub fn new(public_key: VerifyingKey) -> Verifier {
        Verifier { public_key }
    }

    /// Parses the hex public key shown on the application's settings page.
    pub fn from_hex(public_key: &str) -> Result<Verifier, InvalidPublicKey> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(public_key.trim(), &mut bytes)
            .map_err(|e| InvalidPublicKey(e.to_string()))?;

        let public_key =
            VerifyingKey::from_bytes(&bytes).map_err(|e| InvalidPublicKey(e.to_string()))?;

        Ok(Verifier::new(public_key))
    }

    /// Never errors: missing headers, bad hex and bad signatures are all just
    /// "unverified".
    pub fn verify(&self, signature: Option<&str>, timestamp: Option<&str>, body: &[u8]) -> bool {
        let (signature, timestamp) = match (signature, timestamp) {
            (Some(signature), Some(timestamp)) => (signature, timestamp),
            _ => {
                warn!("Request is missing signature headers");
                return false;
            }
        };

        let mut bytes = [0u8; 64];
        if let Err(e) = hex::decode_to_slice(signature, &mut bytes) {
            warn!(error = %e, "Request signature is not valid hex");
            return false;
        }

        let signature = Signature::from_bytes(&bytes);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        match self.public_key.verify(&message, &signature) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Request signature verification failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn keys() -> (SigningKey, Verifier) {
        let signing = SigningKey::from_bytes(&[7u8; 32]);
        let verifier = Verifier::from_hex(&hex::encode(signing.verifying_key().as_bytes())).unwrap();
        (signing, verifier)
    }

    fn sign(key: &SigningKey, timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex::encode(key.sign(&message).to_bytes())
    }

    #[test]
    fn test_valid_signature() {
        let (key, verifier) = keys();
        let body = br#"{"type":1}"#;
        let signature = sign(&key, "1700000000", body);

        assert!(verifier.verify(Some(&signature), Some("1700000000"), body));
    }

    #[test]
    fn test_signature_covers_timestamp() {
        let (key, verifier) = keys();
        let body = br#"{"type":1}"#;
        let signature = sign(&key, "1700000000", body);

        assert!(!verifier.verify(Some(&signature), Some("1700000001"), body));
        assert!(!verifier.verify(Some(&signature), Some("1700000000"), br#"{"type":2}"#));
    }

    #[test]
    fn test_missing_or_malformed_headers() {
        let (key, verifier) = keys();
        let body = b"{}";
        let signature = sign(&key, "1", body);

        assert!(!verifier.verify(None, Some("1"), body));
        assert!(!verifier.verify(Some(&signature), None, body));
        assert!(!verifier.verify(Some("zz"), Some("1"), body));
        assert!(!verifier.verify(Some(&signature[..10]), Some("1"), body));
    }

    #[test]
    fn test_bad_public_key() {
        assert!(matches!(Verifier::from_hex("abc"), Err(InvalidPublicKey(_))));
        assert!(matches!(
            Verifier::from_hex(&"zz".repeat(32)),
            Err(InvalidPublicKey(_))
        ));
    }
}
