use log::LevelFilter;

use crate::infrastructure::config::settings::Config;

pub fn level_filter(config: &Config) -> LevelFilter {
	if !config.logger_enabled {
		return LevelFilter::Off;
	}

	config.logger_level.parse().unwrap_or(LevelFilter::Info)
}

/// Installs the global logger. Later calls are ignored so tests and embedders
/// can call this more than once.
pub fn init(config: &Config) {
	let _ = env_logger::Builder::new()
		.filter_level(level_filter(config))
		.try_init();
}
