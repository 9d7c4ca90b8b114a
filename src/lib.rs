use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::info;

use crate::adapters::web::payments_handler::{
	create_payment, find_payment_by_id, json_config,
};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::logging;
use crate::infrastructure::payment_module::PaymentModule;

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

/// Registers the payment routes. Shared by the server and HTTP tests.
pub fn configure_payments(
	cfg: &mut web::ServiceConfig,
	payment_module: &PaymentModule,
) {
	cfg.app_data(json_config())
		.app_data(web::Data::new(payment_module.create_payment.clone()))
		.app_data(web::Data::new(payment_module.find_payment_by_id.clone()))
		.service(create_payment)
		.service(find_payment_by_id);
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	logging::init(&config);

	let payment_module =
		PaymentModule::from_config(&config).map_err(std::io::Error::other)?;

	info!(
		"Starting Actix-Web server on {}:{}...",
		config.server_host, config.server_port
	);

	HttpServer::new(move || {
		let payment_module = payment_module.clone();
		App::new()
			.wrap(Logger::default())
			.configure(move |cfg| configure_payments(cfg, &payment_module))
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.server_host.as_str(), config.server_port))?
	.run()
	.await
}
