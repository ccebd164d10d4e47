//! Configuration: centralized constants, API key resolution, and
//! `completeai.toml` loading.

pub mod api_keys;
pub mod constants;
pub mod loader;

pub use api_keys::{ApiKeySources, get_api_key, load_dotenv};
pub use loader::{CompleteAiConfig, CompletionSettings, ProviderSettings};
