//! Signed bearer tokens.
//!
//! A token is `base64url(claims JSON) "." base64url(HMAC-SHA256(secret, claims JSON))`.
//! The server checks the signature and expiry on every privileged call; a
//! role read from an unverified token carries no weight.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use super::error::AuthError;
use super::staff::Role;

type HmacSha256 = Hmac<Sha256>;

/// What a token asserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub staff_id: String,
    pub role: Role,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Issues and verifies tokens with one shared secret.
pub struct TokenSigner {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length")
    }

    /// Issue a token for `staff_id` valid from `now` for the configured TTL.
    pub fn issue(&self, staff_id: &str, role: Role, now: DateTime<Utc>) -> (String, Claims) {
        let claims = Claims {
            staff_id: staff_id.to_string(),
            role,
            exp: now
                .checked_add_signed(self.ttl)
                .map_or(i64::MAX, |t| t.timestamp()),
        };
        // Serializing a struct of strings and integers cannot fail
        let payload = serde_json::to_vec(&claims).unwrap_or_default();

        let mut mac = self.mac();
        mac.update(&payload);
        let signature = mac.finalize().into_bytes();

        let token = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature)
        );
        (token, claims)
    }

    /// Verify signature then expiry, returning the claims.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let (payload, signature) = token.split_once('.').ok_or(AuthError::Malformed)?;
        let payload = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| AuthError::Malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| AuthError::Malformed)?;

        let mut mac = self.mac();
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::BadSignature)?;

        let claims: Claims = serde_json::from_slice(&payload).map_err(|_| AuthError::Malformed)?;
        if claims.exp <= now.timestamp() {
            return Err(AuthError::Expired);
        }
        Ok(claims)
    }

    /// Verify a token and require the admin role.
    pub fn require_admin(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let claims = self.verify(token, now)?;
        match claims.role {
            Role::Admin => Ok(claims),
            Role::Guest => Err(AuthError::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    fn signer() -> TokenSigner {
        TokenSigner::new("test-secret", Duration::hours(1))
    }

    #[test]
    fn issued_token_verifies() {
        let signer = signer();
        let (token, issued) = signer.issue("admin", Role::Admin, now());

        let claims = signer.verify(&token, now()).unwrap();
        assert_eq!(claims, issued);
        assert_eq!(claims.staff_id, "admin");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.expires_at(), Some(now() + Duration::hours(1)));
    }

    #[test]
    fn expired_token_rejected() {
        let signer = signer();
        let (token, _) = signer.issue("admin", Role::Admin, now());

        let later = now() + Duration::hours(1);
        assert_eq!(signer.verify(&token, later), Err(AuthError::Expired));
        assert!(signer.verify(&token, later - Duration::seconds(1)).is_ok());
    }

    #[test]
    fn other_secret_rejected() {
        let (token, _) = signer().issue("admin", Role::Admin, now());
        let other = TokenSigner::new("another-secret", Duration::hours(1));
        assert_eq!(other.verify(&token, now()), Err(AuthError::BadSignature));
    }

    #[test]
    fn forged_role_rejected() {
        let signer = signer();
        let (token, _) = signer.issue("s042", Role::Guest, now());
        let (_, signature) = token.split_once('.').unwrap();

        let forged_claims = Claims {
            staff_id: "s042".to_string(),
            role: Role::Admin,
            exp: (now() + Duration::hours(1)).timestamp(),
        };
        let forged = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged_claims).unwrap()),
            signature
        );
        assert_eq!(signer.verify(&forged, now()), Err(AuthError::BadSignature));
    }

    #[test]
    fn malformed_tokens() {
        let signer = signer();
        assert_eq!(signer.verify("", now()), Err(AuthError::Malformed));
        assert_eq!(signer.verify("no-dot", now()), Err(AuthError::Malformed));
        assert_eq!(signer.verify("!!!.???", now()), Err(AuthError::Malformed));
    }

    #[test]
    fn oversized_ttl_does_not_overflow() {
        let signer = TokenSigner::new("test-secret", Duration::hours(10_000_000_000));
        let (token, claims) = signer.issue("admin", Role::Admin, now());

        assert_eq!(claims.exp, i64::MAX);
        assert!(signer.verify(&token, now()).is_ok());
    }

    #[test]
    fn admin_required() {
        let signer = signer();
        let (admin, _) = signer.issue("admin", Role::Admin, now());
        let (guest, _) = signer.issue("s042", Role::Guest, now());

        assert!(signer.require_admin(&admin, now()).is_ok());
        assert_eq!(signer.require_admin(&guest, now()), Err(AuthError::Forbidden));
    }
}
