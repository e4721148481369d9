use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::env;

use crate::error::{invalid_input_error, unexpected_error, upstream_error, Error};

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
}

#[tracing::instrument]
pub async fn create_order(amount_paise: i64, receipt: String) -> Result<PaymentOrder, Error> {
    let api_base = env::var("RAZORPAY_API_BASE")?;
    let url = format!("https://{}/v1/orders", api_base);
    let key_id = env::var("RAZORPAY_KEY_ID")?;
    let key_secret = env::var("RAZORPAY_KEY_SECRET")?;

    let res = reqwest::Client::new()
        .post(url)
        .basic_auth(key_id, Some(key_secret))
        .json(&serde_json::json!({
            "amount": amount_paise,
            "currency": "INR",
            "receipt": receipt,
        }))
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(res.json().await?)
}

// The gateway signs "{order_id}|{payment_id}" with the key secret and sends
// the hex digest back through the client. Recompute and compare in constant
// time.
pub fn verify_signature(order_id: &str, payment_id: &str, signature: &str) -> Result<(), Error> {
    let key_secret = env::var("RAZORPAY_KEY_SECRET")?;

    verify_with_secret(order_id, payment_id, signature, key_secret.as_bytes())
}

fn verify_with_secret(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &[u8],
) -> Result<(), Error> {
    let expected = hex::decode(signature).map_err(|_| invalid_input_error())?;

    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| unexpected_error())?;
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

    mac.verify_slice(&expected).map_err(|_| invalid_input_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    fn signature_for(order_id: &str, payment_id: &str, secret: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret).unwrap();
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn valid_signatures_verify() {
        let signature = signature_for("order_abc", "pay_def", b"s3cret");

        verify_with_secret("order_abc", "pay_def", &signature, b"s3cret").unwrap();
    }

    #[test]
    fn signatures_bind_both_ids() {
        let signature = signature_for("order_abc", "pay_def", b"s3cret");

        let err = verify_with_secret("order_abc", "pay_xyz", &signature, b"s3cret").unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);

        let err = verify_with_secret("order_zzz", "pay_def", &signature, b"s3cret").unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);
    }

    #[test]
    fn signatures_from_another_secret_fail() {
        let signature = signature_for("order_abc", "pay_def", b"other");

        let err = verify_with_secret("order_abc", "pay_def", &signature, b"s3cret").unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);
    }

    #[test]
    fn malformed_hex_is_invalid_input() {
        let err = verify_with_secret("order_abc", "pay_def", "not-hex!", b"s3cret").unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);
    }

    #[test]
    fn truncated_signatures_fail() {
        let signature = signature_for("order_abc", "pay_def", b"s3cret");

        let err =
            verify_with_secret("order_abc", "pay_def", &signature[..32], b"s3cret").unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);
    }
}
