use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub otp: OtpConfig,
    #[serde(default)]
    pub sms: SmsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expires_in: i64, // seconds
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    #[serde(default = "default_otp_length")]
    pub code_length: usize,
    /// Fixed code for demo deployments; unset means a random code per request.
    #[serde(default)]
    pub demo_code: Option<String>,
    /// Echo the generated code in the send-otp response. Demo-only leak,
    /// must stay off in production.
    #[serde(default)]
    pub echo_code: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SmsConfig {
    #[serde(default)]
    pub account_sid: String,
    #[serde(default)]
    pub auth_token: String,
    #[serde(default)]
    pub from_phone: String,
}

fn default_otp_length() -> usize {
    6
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: default_otp_length(),
            demo_code: None,
            echo_code: false,
        }
    }
}

const THIRTY_DAYS_SECS: i64 = 2_592_000;

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => {
                toml::from_str(&config_str).map_err(|e| format!("Failed to parse {config_path}: {e}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // No config file: build from env vars and defaults.
                Config {
                    server: ServerConfig {
                        host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                        port: env::var("SERVER_PORT")
                            .ok()
                            .and_then(|v| v.parse().ok())
                            .unwrap_or(4000u16),
                    },
                    jwt: JwtConfig {
                        secret: env::var("JWT_SECRET")
                            .unwrap_or_else(|_| "change-me-in-production".to_string()),
                        token_expires_in: env::var("JWT_EXPIRES_IN")
                            .ok()
                            .and_then(|v| v.parse().ok())
                            .unwrap_or(THIRTY_DAYS_SECS),
                    },
                    otp: OtpConfig::default(),
                    sms: SmsConfig::default(),
                }
            }
            Err(e) => {
                return Err(format!("Failed to read config file {config_path}: {e}").into());
            }
        };

        // Env overrides apply even when the file exists.
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            config.jwt.secret = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            config.jwt.token_expires_in = n;
        }
        if let Ok(v) = env::var("OTP_DEMO_CODE") {
            config.otp.demo_code = Some(v);
        }
        if let Ok(v) = env::var("OTP_ECHO_CODE")
            && let Ok(b) = v.parse()
        {
            config.otp.echo_code = b;
        }
        if let Ok(v) = env::var("SMS_ACCOUNT_SID") {
            config.sms.account_sid = v;
        }
        if let Ok(v) = env::var("SMS_AUTH_TOKEN") {
            config.sms.auth_token = v;
        }
        if let Ok(v) = env::var("SMS_FROM_PHONE") {
            config.sms.from_phone = v;
        }

        Ok(config)
    }
}
