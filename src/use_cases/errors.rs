use derive_more::derive::{Display, Error, From};

use crate::domain::errors::{InvalidPaymentError, PaymentNotFoundError};
use crate::domain::repository::RepositoryError;

/// Every way a payment use case can fail.
#[derive(Debug, Display, Error, From)]
pub enum PaymentError {
	#[display("{_0}")]
	InvalidPayment(InvalidPaymentError),
	#[display("{_0}")]
	NotFound(PaymentNotFoundError),
	#[display("{_0}")]
	Storage(RepositoryError),
}
