use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::payment::{Payment, PrimitivePayment};
use crate::domain::repository::{PaymentRepository, RepositoryError};

/// Process-local, append-only payment store. Clones share the same records.
///
/// Nothing is deduplicated: saving the same id twice keeps both records and
/// lookups return the first one.
#[derive(Clone, Default)]
pub struct InMemoryPaymentRepository {
	payments: Arc<RwLock<Vec<PrimitivePayment>>>,
}

impl InMemoryPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn len(&self) -> usize {
		self.payments.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.payments.read().await.is_empty()
	}
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
	async fn save(&self, payment: &Payment) -> Result<(), RepositoryError> {
		self.payments.write().await.push(payment.to_primitives());
		Ok(())
	}

	async fn find_by_id(
		&self,
		id: &str,
	) -> Result<Option<Payment>, RepositoryError> {
		let payments = self.payments.read().await;

		Ok(payments
			.iter()
			.find(|payment| payment.id == id)
			.cloned()
			.map(Payment::from_primitives))
	}
}
