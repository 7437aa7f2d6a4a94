use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub stripe_secret_key: String,
    pub openrouter_api_key: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let mongodb_uri = env::var("MONGODB_URI")
            .map_err(|_| "MONGODB_URI must be set in environment")?;

        let database_name = env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| "StudyHubA12".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in environment")?;

        let stripe_secret_key = env::var("STRIPE_SECRET_KEY")
            .map_err(|_| "STRIPE_SECRET_KEY must be set in environment")?;

        let openrouter_api_key = env::var("OPENROUTER_API_KEY")
            .map_err(|_| "OPENROUTER_API_KEY must be set in environment")?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number")?;

        let allowed_origins = parse_origins(
            &env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        );

        let production = env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        Ok(Self {
            mongodb_uri,
            database_name,
            jwt_secret,
            stripe_secret_key,
            openrouter_api_key,
            port,
            allowed_origins,
            production,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if self.allowed_origins.is_empty() {
            return Err("ALLOWED_ORIGINS must list at least one origin".to_string());
        }

        Ok(())
    }
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:5173, https://studyhub.app ,");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://studyhub.app".to_string(),
            ]
        );
    }

    #[test]
    fn validate_rejects_short_secret() {
        let config = Config {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "StudyHubA12".to_string(),
            jwt_secret: "too-short".to_string(),
            stripe_secret_key: "sk_test_x".to_string(),
            openrouter_api_key: "sk-or-x".to_string(),
            port: 5000,
            allowed_origins: vec!["http://localhost:5173".to_string()],
            production: false,
        };
        assert!(config.validate().is_err());
    }
}
