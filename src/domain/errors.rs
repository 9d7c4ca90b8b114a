use derive_more::derive::{Display, Error};

/// Raised when a payment cannot be built from the supplied input.
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum InvalidPaymentError {
	#[display("Payment field '{field}' is required")]
	MissingField { field: &'static str },
	#[display("Payment amount must be a finite number, got {amount}")]
	NonFiniteAmount { amount: f64 },
	#[display("Payment customerId must not be blank")]
	BlankCustomerId,
}

/// Raised by the lookup use case when no stored payment has the requested id.
#[derive(Debug, Display, Error, Clone, PartialEq)]
#[display("Payment with id {id} not found")]
pub struct PaymentNotFoundError {
	pub id: String,
}

impl PaymentNotFoundError {
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}
