//! Session token decoding.
//!
//! Without a configured secret the signature is not checked, so the admin
//! claim only decides what the page shows. The media host keeps enforcing
//! access with its own key pair.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

#[derive(Debug)]
pub enum Error {
    InvalidToken,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Claims {
    #[serde(default)]
    pub admin: Option<bool>,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.admin.unwrap_or(false)
    }
}

#[derive(Clone)]
pub struct TokenDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl TokenDecoder {
    pub fn new(secret: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_aud = false;

        let key = match secret {
            Some(secret) => DecodingKey::from_secret(secret.as_bytes()),
            None => {
                validation.insecure_disable_signature_validation();
                validation.validate_exp = false;
                DecodingKey::from_secret(&[])
            }
        };

        Self { key, validation }
    }

    pub fn decode(&self, token: &str) -> Result<Claims, Error> {
        jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!("Failed to decode session token: {:?}", err);
                Error::InvalidToken
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Member(String),
    Admin(String),
}

impl Session {
    pub fn resolve(token: Option<String>, decoder: &TokenDecoder) -> Self {
        match token {
            None => Self::Anonymous,
            Some(token) => match decoder.decode(&token) {
                Ok(claims) if claims.is_admin() => Self::Admin(token),
                _ => Self::Member(token),
            },
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin(_))
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Member(token) | Self::Admin(token) => Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::{json, Value};

    fn sign(claims: Value, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn reads_admin_claim_without_secret() {
        let decoder = TokenDecoder::new(None);
        let token = sign(json!({ "admin": true, "sub": "jess" }), "whatever");
        assert!(decoder.decode(&token).unwrap().is_admin());
    }

    #[test]
    fn missing_or_false_admin_claim_is_not_admin() {
        let decoder = TokenDecoder::new(None);
        for claims in [json!({ "admin": false }), json!({ "sub": "jess" })] {
            let token = sign(claims, "whatever");
            assert!(!decoder.decode(&token).unwrap().is_admin());
        }
    }

    #[test]
    fn expired_token_still_decodes_without_secret() {
        let decoder = TokenDecoder::new(None);
        let token = sign(json!({ "admin": true, "exp": 1 }), "whatever");
        assert!(decoder.decode(&token).unwrap().is_admin());
    }

    #[test]
    fn secret_enforces_signature() {
        let decoder = TokenDecoder::new(Some("right"));
        let good = sign(json!({ "admin": true }), "right");
        let forged = sign(json!({ "admin": true }), "wrong");

        assert!(decoder.decode(&good).unwrap().is_admin());
        assert!(decoder.decode(&forged).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let decoder = TokenDecoder::new(None);
        assert!(decoder.decode("not-a-token").is_err());
    }

    #[test]
    fn unsigned_token_is_never_admin() {
        // {"alg":"none","typ":"JWT"}.{"admin":true}.
        let token = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJhZG1pbiI6dHJ1ZX0.".to_string();

        for decoder in [TokenDecoder::new(None), TokenDecoder::new(Some("right"))] {
            assert!(decoder.decode(&token).is_err());
            assert_eq!(
                Session::resolve(Some(token.clone()), &decoder),
                Session::Member(token.clone())
            );
        }
    }

    #[test]
    fn session_resolution() {
        let decoder = TokenDecoder::new(None);
        let admin = sign(json!({ "admin": true }), "s");
        let member = sign(json!({ "admin": false }), "s");

        assert_eq!(Session::resolve(None, &decoder), Session::Anonymous);
        assert_eq!(
            Session::resolve(Some(admin.clone()), &decoder),
            Session::Admin(admin.clone())
        );
        assert_eq!(
            Session::resolve(Some(member.clone()), &decoder),
            Session::Member(member)
        );
        assert_eq!(
            Session::resolve(Some("junk".to_string()), &decoder),
            Session::Member("junk".to_string())
        );
        assert_eq!(
            Session::resolve(Some(admin.clone()), &decoder).token(),
            Some(admin.as_str())
        );
    }
}
