use std::env;

/// Seven days, matching the client's session length.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 7 * 24 * 60 * 60;
const MIN_TOKEN_EXPIRY: i64 = 60;
const MAX_TOKEN_EXPIRY: i64 = 30 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    fn parse_expiry(key: &str, default: i64) -> i64 {
        match env::var(key) {
            Ok(raw) => raw
                .parse::<i64>()
                .unwrap_or_else(|_| panic!("Invalid {} value", key)),
            Err(_) => default,
        }
    }

    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let token_expiry = Self::parse_expiry("JWT_EXPIRY", DEFAULT_TOKEN_EXPIRY);
        if !(MIN_TOKEN_EXPIRY..=MAX_TOKEN_EXPIRY).contains(&token_expiry) {
            panic!("JWT_EXPIRY must be between 60 seconds and 30 days");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "classsync".to_string());

        Self {
            secret_key,
            issuer,
            token_expiry,
        }
    }
}
