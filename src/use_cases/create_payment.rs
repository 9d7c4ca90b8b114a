use log::{debug, warn};

use crate::domain::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::{CreatePaymentCommand, PaymentResponse};
use crate::use_cases::errors::PaymentError;

#[derive(Clone)]
pub struct CreatePaymentUseCase<R: PaymentRepository> {
	payment_repo: R,
}

impl<R: PaymentRepository> CreatePaymentUseCase<R> {
	pub fn new(payment_repo: R) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		command: CreatePaymentCommand,
	) -> Result<PaymentResponse, PaymentError> {
		let payment = Payment::create(command.into()).inspect_err(|e| {
			warn!("Rejected payment creation: {e}");
		})?;

		self.payment_repo.save(&payment).await?;

		debug!(
			"Payment {} created for customer {}",
			payment.id(),
			payment.customer_id()
		);

		Ok(PaymentResponse {
			payment: payment.to_primitives(),
		})
	}
}
