pub mod settings;

pub use settings::{AppConfig, AssetSettings, ProfileSettings, UpstreamSettings};
