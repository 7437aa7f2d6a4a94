use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Name of the auth cookie set by `/jwt` and cleared by `/logout`.
pub const TOKEN_COOKIE: &str = "token";

/// Token lifetime; the front-end re-authenticates weekly.
const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,   // subject (external identity uid)
    pub email: String, // user email
    pub role: String,  // student | tutor | admin
    pub exp: i64,      // expiration time
    pub iat: i64,      // issued at
}

/// Encode a JWT token carrying uid, email and role.
pub fn encode_jwt(uid: &str, email: &str, role: &str, secret: &str) -> Result<String, String> {
    let now = Utc::now();
    let exp = now + Duration::days(TOKEN_TTL_DAYS);

    let claims = Claims {
        sub: uid.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to encode JWT: {}", e))
}

/// Decode and validate a JWT token.
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, String> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| format!("Failed to decode JWT: {}", e))?;

    Ok(token_data.claims)
}

/// Build the auth cookie. Always httpOnly; in production the cookie is
/// sent cross-site (`Secure` + `SameSite=None`), otherwise `Strict`.
pub fn auth_cookie(token: String, production: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .build()
}

/// Cookie handed to the jar's `remove` on logout; attributes must match
/// the ones the auth cookie was set with.
pub fn clear_auth_cookie(production: bool) -> Cookie<'static> {
    auth_cookie(String::new(), production)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

    #[test]
    fn test_jwt_encoding_decoding() {
        let token = encode_jwt("uid-1", "alice@example.com", "tutor", SECRET).unwrap();
        let claims = decode_jwt(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "uid-1");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, "tutor");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_jwt_rejects_wrong_secret() {
        let token = encode_jwt("uid-1", "alice@example.com", "student", SECRET).unwrap();
        assert!(decode_jwt(&token, "another-secret-also-32-characters!!").is_err());
    }

    #[test]
    fn test_cookie_flags_development() {
        let cookie = auth_cookie("abc".to_string(), false);
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_cookie_flags_production() {
        let cookie = auth_cookie("abc".to_string(), true);
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }
}
