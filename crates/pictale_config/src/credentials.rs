//! Service credentials read from the environment.

use pictale_error::{AuthenticationError, PictaleResult};

/// Secrets for the hosted services.
///
/// Constructed once at process start. Empty values count as absent.
/// Stage constructors receive this by reference; nothing in stage logic
/// reads the environment directly.
///
/// # Examples
///
/// ```
/// use pictale_config::Credentials;
///
/// let creds = Credentials::new(Some("hf_token".into()), Some(String::new()));
/// assert!(creds.huggingface_token().is_ok());
/// assert!(creds.openai_api_key().is_err());
/// assert!(creds.validate().is_err());
/// ```
#[derive(Clone, Default)]
pub struct Credentials {
    huggingface_token: Option<String>,
    openai_api_key: Option<String>,
}

impl Credentials {
    /// Environment variable holding the speech and captioning bearer token.
    pub const HUGGINGFACE_TOKEN_VAR: &'static str = "HUGGINGFACE_API_TOKEN";
    /// Environment variable holding the language-model API key.
    pub const OPENAI_KEY_VAR: &'static str = "OPENAI_API_KEY";

    /// Build credentials from explicit values.
    pub fn new(huggingface_token: Option<String>, openai_api_key: Option<String>) -> Self {
        Self {
            huggingface_token: huggingface_token.filter(|v| !v.trim().is_empty()),
            openai_api_key: openai_api_key.filter(|v| !v.trim().is_empty()),
        }
    }

    /// Read credentials from the process environment, loading a `.env` file
    /// first if one is found.
    #[tracing::instrument]
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }

        let creds = Self::new(
            std::env::var(Self::HUGGINGFACE_TOKEN_VAR).ok(),
            std::env::var(Self::OPENAI_KEY_VAR).ok(),
        );

        tracing::debug!(
            huggingface = creds.huggingface_token.is_some(),
            openai = creds.openai_api_key.is_some(),
            "Read credentials from environment"
        );
        creds
    }

    /// Fail fast unless every credential is present.
    ///
    /// # Errors
    ///
    /// Returns an `AuthenticationError` naming all missing variables.
    pub fn validate(&self) -> PictaleResult<()> {
        let missing: Vec<&str> = [
            (Self::HUGGINGFACE_TOKEN_VAR, self.huggingface_token.is_none()),
            (Self::OPENAI_KEY_VAR, self.openai_api_key.is_none()),
        ]
        .into_iter()
        .filter_map(|(var, absent)| absent.then_some(var))
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AuthenticationError::missing(missing.join(", ")).into())
        }
    }

    /// Bearer token for the hosted captioning and speech models.
    ///
    /// # Errors
    ///
    /// Returns an `AuthenticationError` if the token is absent.
    pub fn huggingface_token(&self) -> PictaleResult<&str> {
        self.huggingface_token
            .as_deref()
            .ok_or_else(|| AuthenticationError::missing(Self::HUGGINGFACE_TOKEN_VAR).into())
    }

    /// API key for the language-model service.
    ///
    /// # Errors
    ///
    /// Returns an `AuthenticationError` if the key is absent.
    pub fn openai_api_key(&self) -> PictaleResult<&str> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| AuthenticationError::missing(Self::OPENAI_KEY_VAR).into())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| if v.is_some() { "<redacted>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("huggingface_token", &redact(&self.huggingface_token))
            .field("openai_api_key", &redact(&self.openai_api_key))
            .finish()
    }
}
