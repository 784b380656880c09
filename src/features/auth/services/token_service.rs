use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::Claims;

/// Issues and verifies the HS256 bearer tokens carried on every
/// authenticated request.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        // Issued tokens carry no `exp`; verification must not demand one.
        let mut validation = Validation::default();
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    pub fn sign(&self, user_id: i64, role: &str) -> Result<String> {
        let claims = Claims {
            id: user_id,
            role: role.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            AppError::Internal(format!("Failed to sign token: {}", e))
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Token tidak valid!".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::ROLE_WARGA;

    fn service() -> TokenService {
        TokenService::new(AuthConfig {
            secret: "test-secret".to_string(),
        })
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let tokens = service();
        let token = tokens.sign(42, ROLE_WARGA).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.role, ROLE_WARGA);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let tokens = service();
        assert!(tokens.verify("not-a-token").is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = service().sign(1, ROLE_WARGA).unwrap();
        let other = TokenService::new(AuthConfig {
            secret: "another-secret".to_string(),
        });
        assert!(other.verify(&token).is_err());
    }
}
