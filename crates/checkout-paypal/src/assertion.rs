//! # Merchant Auth Assertion
//!
//! Builds the `PayPal-Auth-Assertion` header value for partner/multiparty
//! flows: a base64 `header.payload.` pair with an `alg=none` header and an
//! empty signature. This is an unsigned assertion format mandated by the
//! provider, not a security mechanism.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::json;

/// Build the auth-assertion value asserting that `client_id` acts on
/// behalf of the merchant identified by `merchant_payer_id`.
pub fn auth_assertion(client_id: &str, merchant_payer_id: &str) -> String {
    let header = json!({ "alg": "none" });
    let payload = json!({
        "iss": client_id,
        "payer_id": merchant_payer_id,
    });

    // Unsigned: two encoded parts followed by an empty signature segment
    format!(
        "{}.{}.",
        STANDARD.encode(header.to_string()),
        STANDARD.encode(payload.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_json(part: &str) -> serde_json::Value {
        let bytes = STANDARD.decode(part).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_assertion_shape() {
        let assertion = auth_assertion("client-123", "MERCHANT456");
        let parts: Vec<&str> = assertion.split('.').collect();

        // header.payload. — the signature segment is empty
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2], "");
        assert!(assertion.ends_with('.'));
    }

    #[test]
    fn test_assertion_contents() {
        let assertion = auth_assertion("client-123", "MERCHANT456");
        let parts: Vec<&str> = assertion.split('.').collect();

        let header = decode_json(parts[0]);
        assert_eq!(header["alg"], "none");

        let payload = decode_json(parts[1]);
        assert_eq!(payload["iss"], "client-123");
        assert_eq!(payload["payer_id"], "MERCHANT456");
    }
}
