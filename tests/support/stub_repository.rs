use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use payments_api::domain::payment::Payment;
use payments_api::domain::repository::{PaymentRepository, RepositoryError};
use payments_api::infrastructure::persistence::in_memory_payment_repository::InMemoryPaymentRepository;

/// Backend that is always down.
#[derive(Clone, Default)]
pub struct FailingPaymentRepository;

#[async_trait]
impl PaymentRepository for FailingPaymentRepository {
	async fn save(&self, _payment: &Payment) -> Result<(), RepositoryError> {
		Err(RepositoryError::new(io::Error::new(
			io::ErrorKind::ConnectionRefused,
			"backend unavailable",
		)))
	}

	async fn find_by_id(
		&self,
		_id: &str,
	) -> Result<Option<Payment>, RepositoryError> {
		Err(RepositoryError::new(io::Error::new(
			io::ErrorKind::ConnectionRefused,
			"backend unavailable",
		)))
	}
}

/// In-memory repository that counts `save` calls.
#[derive(Clone, Default)]
pub struct CountingPaymentRepository {
	pub inner: InMemoryPaymentRepository,
	saves:     Arc<AtomicUsize>,
}

impl CountingPaymentRepository {
	pub fn save_calls(&self) -> usize {
		self.saves.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl PaymentRepository for CountingPaymentRepository {
	async fn save(&self, payment: &Payment) -> Result<(), RepositoryError> {
		self.saves.fetch_add(1, Ordering::SeqCst);
		self.inner.save(payment).await
	}

	async fn find_by_id(
		&self,
		id: &str,
	) -> Result<Option<Payment>, RepositoryError> {
		self.inner.find_by_id(id).await
	}
}
