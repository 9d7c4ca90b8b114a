use std::sync::Arc;

use derive_more::derive::{Display, Error};
use log::info;

use crate::domain::repository::SharedPaymentRepository;
use crate::infrastructure::config::settings::{Config, StorageBackend};
use crate::infrastructure::persistence::in_memory_payment_repository::InMemoryPaymentRepository;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::find_payment_by_id::FindPaymentByIdUseCase;

pub type AppCreatePaymentUseCase = CreatePaymentUseCase<SharedPaymentRepository>;
pub type AppFindPaymentByIdUseCase =
	FindPaymentByIdUseCase<SharedPaymentRepository>;

#[derive(Debug, Display, Error)]
pub enum ModuleError {
	#[display("APP_REDIS_URL is required when APP_STORAGE=redis")]
	MissingRedisUrl,
	#[display("Invalid Redis URL: {_0}")]
	InvalidRedisUrl(redis::RedisError),
}

/// Use cases wired to the configured repository, built once at startup.
#[derive(Clone)]
pub struct PaymentModule {
	pub create_payment:     AppCreatePaymentUseCase,
	pub find_payment_by_id: AppFindPaymentByIdUseCase,
}

impl PaymentModule {
	pub fn new(payment_repo: SharedPaymentRepository) -> Self {
		Self {
			create_payment:     CreatePaymentUseCase::new(payment_repo.clone()),
			find_payment_by_id: FindPaymentByIdUseCase::new(payment_repo),
		}
	}

	pub fn from_config(config: &Config) -> Result<Self, ModuleError> {
		Ok(Self::new(build_payment_repository(config)?))
	}
}

pub fn build_payment_repository(
	config: &Config,
) -> Result<SharedPaymentRepository, ModuleError> {
	match config.storage {
		StorageBackend::Memory => {
			info!("Using in-memory payment repository");
			Ok(Arc::new(InMemoryPaymentRepository::new()))
		}
		StorageBackend::Redis => {
			let redis_url = config
				.redis_url
				.as_deref()
				.ok_or(ModuleError::MissingRedisUrl)?;
			let client = redis::Client::open(redis_url)
				.map_err(ModuleError::InvalidRedisUrl)?;
			info!("Using Redis payment repository");
			Ok(Arc::new(RedisPaymentRepository::new(client)))
		}
	}
}
