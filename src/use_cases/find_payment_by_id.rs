use log::{debug, warn};

use crate::domain::errors::PaymentNotFoundError;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::{FindPaymentByIdQuery, PaymentResponse};
use crate::use_cases::errors::PaymentError;

#[derive(Clone)]
pub struct FindPaymentByIdUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> FindPaymentByIdUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	/// Looks the payment up; a miss becomes [`PaymentNotFoundError`].
	pub async fn execute(
		&self,
		query: FindPaymentByIdQuery,
	) -> Result<PaymentResponse, PaymentError> {
		match self.payment_repo.find_by_id(&query.id).await? {
			Some(payment) => {
				debug!("Payment {} found", query.id);
				Ok(PaymentResponse {
					payment: payment.to_primitives(),
				})
			}
			None => {
				warn!("Payment {} not found", query.id);
				Err(PaymentNotFoundError::new(query.id).into())
			}
		}
	}
}
