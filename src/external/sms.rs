use crate::config::SmsConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;

/// Out-of-band OTP delivery. Without provider credentials the service runs
/// in demo mode and logs the code instead of sending an SMS.
#[derive(Clone)]
pub struct SmsService {
    client: Client,
    config: SmsConfig,
}

impl SmsService {
    pub fn new(config: SmsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn send_otp_code(&self, phone: &str, code: &str) -> AppResult<()> {
        if self.config.account_sid.is_empty() {
            log::info!("SMS demo mode, OTP for {phone}: {code}");
            return Ok(());
        }

        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.config.account_sid
        );

        let body = format!("Your one-time passcode is: {code}");

        let params = [
            ("To", phone),
            ("From", &self.config.from_phone),
            ("Body", &body),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        if response.status().is_success() {
            log::info!("OTP SMS sent successfully: {phone}");
            Ok(())
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("OTP SMS failed to send: {phone}, Error: {error_text}");
            Err(AppError::ExternalApiError(format!(
                "SMS sending failed: {error_text}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_mode_without_credentials() {
        let service = SmsService::new(SmsConfig::default());
        // No credentials configured: must succeed without network access.
        assert!(service.send_otp_code("9876543210", "123456").await.is_ok());
    }
}
