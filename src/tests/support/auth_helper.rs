use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        issuer: "classsync-test".to_string(),
        token_expiry: 3600,
    })
}

/// Shape expected by the auth extractors.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// `Authorization` header value for a freshly minted token.
pub fn bearer_for(user_id: Uuid, role: Role) -> String {
    let token = test_jwt_service()
        .issue_token(user_id, "tester@example.com", role)
        .expect("test token");
    format!("Bearer {}", token)
}
