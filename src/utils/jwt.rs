use crate::error::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // vendor_id
    pub exp: i64,
    pub iat: i64,
}

/// Stateless session issuer/verifier. Token trust rests entirely on the
/// confidentiality of the signing secret; there is no revocation list.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expires_in: i64,
}

impl JwtService {
    pub fn new(secret: &str, token_expires_in: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expires_in,
        }
    }

    /// Issue a session token bound to `vendor_id`, valid from now until
    /// the configured lifetime elapses.
    pub fn issue(&self, vendor_id: &str) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_expires_in);

        let claims = Claims {
            sub: vendor_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AppError::JwtError)
    }

    /// Verify a presented token and recover the embedded vendor id.
    ///
    /// Does not consult the vendor directory; callers that need the vendor
    /// to still exist must look it up themselves.
    pub fn verify(&self, token: &str) -> AppResult<String> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims.sub)
            .map_err(|_| AppError::InvalidOrExpired)
    }

    pub fn token_expires_in(&self) -> i64 {
        self.token_expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THIRTY_DAYS: i64 = 2_592_000;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = JwtService::new("test-secret", THIRTY_DAYS);
        let token = service.issue("v-42").unwrap();
        assert_eq!(service.verify(&token).unwrap(), "v-42");
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative lifetime puts exp well past the default decode leeway.
        let service = JwtService::new("test-secret", -300);
        let token = service.issue("v-42").unwrap();
        assert!(matches!(
            service.verify(&token),
            Err(AppError::InvalidOrExpired)
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = JwtService::new("test-secret", THIRTY_DAYS);
        let token = service.issue("v-42").unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        assert!(matches!(
            service.verify(&tampered),
            Err(AppError::InvalidOrExpired)
        ));
    }

    #[test]
    fn test_foreign_secret_token_rejected() {
        let issuer = JwtService::new("other-secret", THIRTY_DAYS);
        let verifier = JwtService::new("test-secret", THIRTY_DAYS);
        let token = issuer.issue("v-42").unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(AppError::InvalidOrExpired)
        ));
    }
}
