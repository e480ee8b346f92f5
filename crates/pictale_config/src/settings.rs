//! Layered TOML settings.

use config::{Config, Environment, File, FileFormat};
use pictale_error::{ConfigError, PictaleResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../pictale.toml");

/// Image-captioning service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionerConfig {
    /// Hosted image-to-text endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CaptionerConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CaptionerConfig {
    fn default() -> Self {
        Self {
            endpoint:
                "https://api-inference.huggingface.co/models/nlpconnect/vit-gpt2-image-captioning"
                    .to_string(),
            timeout_secs: 60,
        }
    }
}

/// Language-model service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorytellerConfig {
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Word limit stated in the prompt
    pub max_words: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StorytellerConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for StorytellerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 1.0,
            max_words: 20,
            timeout_secs: 30,
        }
    }
}

/// Speech-synthesis service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarratorConfig {
    /// Hosted text-to-speech endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// File name of the audio artifact inside a run directory
    pub audio_file_name: String,
}

impl NarratorConfig {
    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            endpoint:
                "https://api-inference.huggingface.co/models/espnet/kan-bayashi_ljspeech_vits"
                    .to_string(),
            timeout_secs: 60,
            audio_file_name: "generated_audio.flac".to_string(),
        }
    }
}

/// Artifact storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for uploads and audio
    pub base_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./pictale-data"),
        }
    }
}

/// HTTP upload surface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Listen address
    pub bind: String,
    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,
}

impl ServerSettings {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `bind` is not a socket address.
    pub fn bind_addr(&self) -> PictaleResult<SocketAddr> {
        self.bind.parse().map_err(|e| {
            ConfigError::new(format!("Invalid server.bind '{}': {}", self.bind, e)).into()
        })
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Top-level Pictale configuration.
///
/// Loads settings with a precedence system:
/// 1. Bundled defaults (include_str! from pictale.toml)
/// 2. User override (~/.config/pictale/pictale.toml)
/// 3. Working directory override (./pictale.toml)
/// 4. `PICTALE__<SECTION>__<KEY>` environment variables
///
/// # Example
///
/// ```no_run
/// use pictale_config::PictaleConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PictaleConfig::load()?;
/// println!("Story model: {}", config.storyteller.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PictaleConfig {
    /// Captioning stage
    pub captioner: CaptionerConfig,
    /// Story stage
    pub storyteller: StorytellerConfig,
    /// Narration stage
    pub narrator: NarratorConfig,
    /// Artifact storage
    pub storage: StorageConfig,
    /// HTTP server
    pub server: ServerSettings,
}

impl PictaleConfig {
    /// Load configuration from all layers.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer cannot be parsed or the merged values fail
    /// validation.
    pub fn load() -> PictaleResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/pictale/pictale.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("pictale").required(false))
            .add_source(
                Environment::with_prefix("PICTALE")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    /// Load configuration from a specific file layered over the bundled
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> PictaleResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> PictaleResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first offending field.
    pub fn validate(&self) -> PictaleResult<()> {
        if !(0.0..=2.0).contains(&self.storyteller.temperature) {
            return Err(ConfigError::new(format!(
                "storyteller.temperature must be within 0.0..=2.0, got {}",
                self.storyteller.temperature
            ))
            .into());
        }

        for (field, secs) in [
            ("captioner.timeout_secs", self.captioner.timeout_secs),
            ("storyteller.timeout_secs", self.storyteller.timeout_secs),
            ("narrator.timeout_secs", self.narrator.timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::new(format!("{} must be positive", field)).into());
            }
        }

        if self.storyteller.max_words == 0 {
            return Err(ConfigError::new("storyteller.max_words must be positive").into());
        }

        let file_name = Path::new(&self.narrator.audio_file_name);
        if file_name.file_name() != Some(file_name.as_os_str()) {
            return Err(ConfigError::new(format!(
                "narrator.audio_file_name must be a bare file name, got '{}'",
                self.narrator.audio_file_name
            ))
            .into());
        }

        self.server.bind_addr()?;
        Ok(())
    }
}
