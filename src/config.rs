/// Environment-backed credential configuration.
///
/// All secrets come from the environment (a local `.env` file is read
/// first if present). Credentials are loaded once at startup and passed
/// to the clients that need them, so tests can construct the struct
/// directly instead of mutating the process environment.

use std::env;

/// Name of the Tomorrow.io API key variable.
pub const TOMORROW_API_KEY_VAR: &str = "TOMORROW_API_KEY";
/// Name of the Twilio account SID variable.
pub const TWILIO_ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
/// Name of the Twilio auth token variable.
pub const TWILIO_AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";

/// Credentials for the two external APIs the service talks to.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub tomorrow_api_key: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
}

/// Configuration validation error
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A required environment variable is unset or blank.
    MissingVar(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "{} environment variable not set.\n\n", name)?;
                write!(f, "  Required setup:\n")?;
                write!(f, "  1. Copy .env.example to .env: cp .env.example .env\n")?;
                write!(f, "  2. Fill in all three credentials:\n")?;
                write!(f, "     {}   - Tomorrow.io weather API key\n", TOMORROW_API_KEY_VAR)?;
                write!(f, "     {} - Twilio account SID\n", TWILIO_ACCOUNT_SID_VAR)?;
                write!(f, "     {}  - Twilio auth token", TWILIO_AUTH_TOKEN_VAR)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Loads credentials from the environment, reading `.env` first if present.
///
/// A variable that is set but blank counts as missing; Tomorrow.io and
/// Twilio both reject empty credentials anyway, and failing here gives a
/// clearer message.
pub fn load_credentials() -> Result<Credentials, ConfigError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    Ok(Credentials {
        tomorrow_api_key: required_var(TOMORROW_API_KEY_VAR)?,
        twilio_account_sid: required_var(TWILIO_ACCOUNT_SID_VAR)?,
        twilio_auth_token: required_var(TWILIO_AUTH_TOKEN_VAR)?,
    })
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_error_names_the_variable() {
        let err = ConfigError::MissingVar(TOMORROW_API_KEY_VAR);
        let message = format!("{}", err);
        assert!(
            message.starts_with("TOMORROW_API_KEY environment variable not set"),
            "error must lead with the missing variable, got: {}",
            message
        );
    }

    #[test]
    fn test_missing_var_error_lists_all_required_variables() {
        let message = format!("{}", ConfigError::MissingVar(TWILIO_AUTH_TOKEN_VAR));
        assert!(message.contains(TOMORROW_API_KEY_VAR));
        assert!(message.contains(TWILIO_ACCOUNT_SID_VAR));
        assert!(message.contains(TWILIO_AUTH_TOKEN_VAR));
    }

    #[test]
    fn test_credentials_construct_directly_for_fakes() {
        // Clients take &Credentials, so tests build one without touching
        // the process environment.
        let creds = Credentials {
            tomorrow_api_key: "test-key".to_string(),
            twilio_account_sid: "ACffffffffffffffffffffffffffffffff".to_string(),
            twilio_auth_token: "test-token".to_string(),
        };
        assert_eq!(creds.tomorrow_api_key, "test-key");
    }
}
