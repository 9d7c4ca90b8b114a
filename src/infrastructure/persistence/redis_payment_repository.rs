use std::collections::HashMap;

use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use crate::domain::payment::{Payment, PrimitivePayment};
use crate::domain::repository::{PaymentRepository, RepositoryError};
use crate::infrastructure::config::redis::PAYMENT_KEY_PREFIX;

/// Stores each payment as a hash under `payment:{id}`. Saving an id that
/// already exists overwrites it.
#[derive(Clone)]
pub struct RedisPaymentRepository {
	client: Client,
}

impl RedisPaymentRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	pub fn payment_key(id: &str) -> String {
		format!("{PAYMENT_KEY_PREFIX}:{id}")
	}

	fn parse_record(
		key: &str,
		mut fields: HashMap<String, String>,
	) -> Result<PrimitivePayment, RepositoryError> {
		let mut field = |name: &str| {
			fields.remove(name).ok_or_else(|| {
				RepositoryError::new(format!(
					"Corrupt payment record '{key}': missing field '{name}'"
				))
			})
		};

		let id = field("id")?;
		let customer_id = field("customer_id")?;
		let amount = field("amount")?.parse::<f64>().map_err(|e| {
			RepositoryError::new(format!(
				"Corrupt payment record '{key}': invalid amount ({e})"
			))
		})?;

		Ok(PrimitivePayment {
			id,
			amount,
			customer_id,
		})
	}
}

#[async_trait]
impl PaymentRepository for RedisPaymentRepository {
	async fn save(&self, payment: &Payment) -> Result<(), RepositoryError> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(RepositoryError::new)?;

		let primitives = payment.to_primitives();
		let payment_key = Self::payment_key(&primitives.id);

		let _: () = con
			.hset_multiple(&payment_key, &[
				("id", primitives.id.clone()),
				("amount", primitives.amount.to_string()),
				("customer_id", primitives.customer_id.clone()),
			])
			.await
			.map_err(RepositoryError::new)?;

		log::debug!("Stored payment under key: {payment_key}");
		Ok(())
	}

	async fn find_by_id(
		&self,
		id: &str,
	) -> Result<Option<Payment>, RepositoryError> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(RepositoryError::new)?;

		let payment_key = Self::payment_key(id);
		let fields: HashMap<String, String> =
			con.hgetall(&payment_key).await.map_err(RepositoryError::new)?;

		if fields.is_empty() {
			return Ok(None);
		}

		Self::parse_record(&payment_key, fields)
			.map(Payment::from_primitives)
			.map(Some)
	}
}
