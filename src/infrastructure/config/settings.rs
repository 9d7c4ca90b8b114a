use serde::Deserialize;

const ENV_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
	Memory,
	Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub server_host:      String,
	pub server_port:      u16,
	pub server_keepalive: u64,
	pub logger_enabled:   bool,
	pub logger_level:     String,
	pub storage:          StorageBackend,
	pub redis_url:        Option<String>,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
	}

	/// Loads from an explicit variable map instead of the process
	/// environment. Keys carry the `APP_` prefix.
	pub fn load_from(
		vars: config::Map<String, String>,
	) -> Result<Self, config::ConfigError> {
		Self::from_environment(
			config::Environment::with_prefix(ENV_PREFIX).source(Some(vars)),
		)
	}

	fn from_environment(
		environment: config::Environment,
	) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 9999)?
			.set_default("server_keepalive", 75)?
			.set_default("logger_enabled", true)?
			.set_default("logger_level", "info")?
			.set_default("storage", "memory")?
			.add_source(environment.try_parsing(true))
			.build()?;

		config_builder.try_deserialize()
	}
}
