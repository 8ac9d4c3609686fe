use crate::config::OtpConfig;
use crate::error::{AppError, AppResult};
use crate::external::SmsService;
use crate::models::AuthResponse;
use crate::services::VendorService;
use crate::utils::{JwtService, generate_otp_code, normalize_phone, validate_phone};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A pending OTP challenge. At most one outstanding challenge per phone;
/// consumed on the first successful verification.
#[derive(Debug, Clone)]
struct OtpChallenge {
    code: String,
    issued_at: DateTime<Utc>,
}

/// OTP login flow: issues single-use challenges keyed by phone, verifies
/// them, and converts a verified challenge into a session token via the
/// vendor directory and the JWT issuer.
#[derive(Clone)]
pub struct AuthService {
    jwt_service: JwtService,
    sms_service: SmsService,
    vendor_service: VendorService,
    otp: OtpConfig,
    challenges: Arc<RwLock<HashMap<String, OtpChallenge>>>,
}

impl AuthService {
    pub fn new(
        jwt_service: JwtService,
        sms_service: SmsService,
        vendor_service: VendorService,
        otp: OtpConfig,
    ) -> Self {
        Self {
            jwt_service,
            sms_service,
            vendor_service,
            otp,
            challenges: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Issue an OTP challenge for `phone`, replacing any outstanding one,
    /// and hand the code to the SMS client for out-of-band delivery.
    ///
    /// Returns `Some(code)` only when the demo echo is enabled, so handlers
    /// never leak the code by accident. No expiry timer or attempt counter
    /// yet (TODO: add a 5-minute challenge expiry before any real rollout).
    pub async fn send_otp(&self, phone: &str) -> AppResult<Option<String>> {
        validate_phone(phone)?;
        let phone = normalize_phone(phone);

        let code = match &self.otp.demo_code {
            Some(demo) => demo.clone(),
            None => generate_otp_code(self.otp.code_length),
        };

        self.sms_service.send_otp_code(&phone, &code).await?;

        {
            let mut challenges = self.challenges.write().await;
            challenges.insert(
                phone.clone(),
                OtpChallenge {
                    code: code.clone(),
                    issued_at: Utc::now(),
                },
            );
        }
        log::info!("Issued OTP challenge for {phone}");

        Ok(self.otp.echo_code.then_some(code))
    }

    /// Verify a submitted code against the outstanding challenge for `phone`.
    ///
    /// On success the challenge is removed before anything else happens, so
    /// a replayed code always fails, and the phone's vendor is looked up or
    /// created and bound into a fresh session token.
    pub async fn verify_otp(&self, phone: &str, code: &str) -> AppResult<AuthResponse> {
        validate_phone(phone)?;
        if code.trim().is_empty() {
            return Err(AppError::ValidationError("code required".to_string()));
        }
        let phone = normalize_phone(phone);

        {
            let mut challenges = self.challenges.write().await;
            match challenges.get(&phone) {
                Some(challenge) if challenge.code == code => {
                    // Single-use: consume before issuing anything.
                    let age = Utc::now().signed_duration_since(challenge.issued_at);
                    log::info!("OTP verified for {phone} after {}s", age.num_seconds());
                    challenges.remove(&phone);
                }
                _ => {
                    return Err(AppError::InvalidCredential("invalid otp".to_string()));
                }
            }
        }

        let vendor = self.vendor_service.get_or_create(&phone).await;
        let token = self.jwt_service.issue(&vendor.id)?;

        Ok(AuthResponse { token, vendor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmsConfig;
    use crate::models::{CreateOrderRequest, OrderQuery};
    use crate::services::OrderService;

    const THIRTY_DAYS: i64 = 2_592_000;

    fn demo_otp_config() -> OtpConfig {
        OtpConfig {
            code_length: 6,
            demo_code: Some("123456".to_string()),
            echo_code: true,
        }
    }

    fn auth_service(otp: OtpConfig) -> (AuthService, VendorService, JwtService) {
        let jwt = JwtService::new("test-secret", THIRTY_DAYS);
        let vendors = VendorService::new();
        let auth = AuthService::new(
            jwt.clone(),
            SmsService::new(SmsConfig::default()),
            vendors.clone(),
            otp,
        );
        (auth, vendors, jwt)
    }

    #[tokio::test]
    async fn test_send_otp_rejects_empty_phone() {
        let (auth, _, _) = auth_service(demo_otp_config());
        assert!(matches!(
            auth.send_otp("").await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_verify_rejects_missing_fields() {
        let (auth, _, _) = auth_service(demo_otp_config());
        assert!(matches!(
            auth.verify_otp("", "123456").await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            auth.verify_otp("999", "").await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_wrong_code_fails_and_challenge_survives() {
        let (auth, _, _) = auth_service(demo_otp_config());
        auth.send_otp("999").await.unwrap();

        assert!(matches!(
            auth.verify_otp("999", "000000").await,
            Err(AppError::InvalidCredential(_))
        ));

        // Challenge remains until a correct attempt consumes it.
        assert!(auth.verify_otp("999", "123456").await.is_ok());
    }

    #[tokio::test]
    async fn test_challenge_is_single_use() {
        let (auth, _, _) = auth_service(demo_otp_config());
        auth.send_otp("999").await.unwrap();

        assert!(auth.verify_otp("999", "123456").await.is_ok());
        assert!(matches!(
            auth.verify_otp("999", "123456").await,
            Err(AppError::InvalidCredential(_))
        ));
    }

    #[tokio::test]
    async fn test_verify_without_challenge_fails() {
        let (auth, _, _) = auth_service(demo_otp_config());
        assert!(matches!(
            auth.verify_otp("999", "123456").await,
            Err(AppError::InvalidCredential(_))
        ));
    }

    #[tokio::test]
    async fn test_new_challenge_overwrites_previous() {
        let otp = OtpConfig {
            code_length: 6,
            demo_code: None,
            echo_code: true,
        };
        let (auth, _, _) = auth_service(otp);

        let first = auth.send_otp("999").await.unwrap().unwrap();
        let second = auth.send_otp("999").await.unwrap().unwrap();

        if first != second {
            assert!(matches!(
                auth.verify_otp("999", &first).await,
                Err(AppError::InvalidCredential(_))
            ));
        }
        assert!(auth.verify_otp("999", &second).await.is_ok());
    }

    #[tokio::test]
    async fn test_random_code_shape_when_no_demo_code() {
        let otp = OtpConfig {
            code_length: 6,
            demo_code: None,
            echo_code: true,
        };
        let (auth, _, _) = auth_service(otp);

        let code = auth.send_otp("999").await.unwrap().unwrap();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_code_not_echoed_when_disabled() {
        let otp = OtpConfig {
            code_length: 6,
            demo_code: Some("123456".to_string()),
            echo_code: false,
        };
        let (auth, _, _) = auth_service(otp);
        assert_eq!(auth.send_otp("999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_repeat_logins_keep_vendor_identity() {
        let (auth, _, _) = auth_service(demo_otp_config());

        auth.send_otp("999").await.unwrap();
        let first = auth.verify_otp("999", "123456").await.unwrap();

        auth.send_otp("999").await.unwrap();
        let second = auth.verify_otp("999", "123456").await.unwrap();

        assert_eq!(first.vendor.id, second.vendor.id);
    }

    #[tokio::test]
    async fn test_issued_token_verifies_to_vendor() {
        let (auth, _, jwt) = auth_service(demo_otp_config());

        auth.send_otp("999").await.unwrap();
        let response = auth.verify_otp("999", "123456").await.unwrap();

        assert_eq!(jwt.verify(&response.token).unwrap(), response.vendor.id);
    }

    #[tokio::test]
    async fn test_end_to_end_login_and_order_flow() {
        let (auth, _, jwt) = auth_service(demo_otp_config());
        let orders = OrderService::new();

        let code = auth.send_otp("999").await.unwrap().unwrap();
        assert_eq!(code, "123456");

        let response = auth.verify_otp("999", "123456").await.unwrap();
        let vendor_id = jwt.verify(&response.token).unwrap();

        // Fresh vendor, no orders yet.
        assert!(orders.query(&vendor_id, &OrderQuery::default()).await.is_empty());

        orders
            .insert(CreateOrderRequest {
                vendor_id: vendor_id.clone(),
                platform: "Zomato".to_string(),
                external_order_id: "Z-1001".to_string(),
                customer: "Aman".to_string(),
                phone: "9999000001".to_string(),
                amount: 250.0,
                status: "NEW".to_string(),
            })
            .await;

        let listed = orders.query(&vendor_id, &OrderQuery::default()).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].platform, "Zomato");
    }
}
