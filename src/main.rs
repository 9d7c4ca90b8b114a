use std::sync::Arc;

use payments_api::infrastructure::config::settings::Config;
use payments_api::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(Config::load().map_err(std::io::Error::other)?);
	run(config).await
}
