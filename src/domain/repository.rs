use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use derive_more::derive::Display;

use crate::domain::payment::Payment;

/// Failure raised by a storage backend. The backend's own error is kept as
/// the source.
#[derive(Debug, Display)]
#[display("Payment storage failure: {_0}")]
pub struct RepositoryError(Box<dyn Error + Send + Sync>);

impl RepositoryError {
	pub fn new(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
		Self(source.into())
	}
}

impl Error for RepositoryError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		Some(self.0.as_ref())
	}
}

#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	async fn save(&self, payment: &Payment) -> Result<(), RepositoryError>;

	/// Returns `Ok(None)` on a miss; only backend failures are errors.
	async fn find_by_id(
		&self,
		id: &str,
	) -> Result<Option<Payment>, RepositoryError>;
}

#[async_trait]
impl<R: PaymentRepository + ?Sized> PaymentRepository for Arc<R> {
	async fn save(&self, payment: &Payment) -> Result<(), RepositoryError> {
		(**self).save(payment).await
	}

	async fn find_by_id(
		&self,
		id: &str,
	) -> Result<Option<Payment>, RepositoryError> {
		(**self).find_by_id(id).await
	}
}

pub type SharedPaymentRepository = Arc<dyn PaymentRepository>;
