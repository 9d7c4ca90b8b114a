pub mod config;
pub mod logging;
pub mod payment_module;
pub mod persistence;
