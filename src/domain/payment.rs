use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::InvalidPaymentError;

/// Plain record of a payment, the shape stored by repositories and returned
/// to callers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PrimitivePayment {
	pub id:          String,
	pub amount:      f64,
	#[serde(rename = "customerId")]
	pub customer_id: String,
}

/// Input accepted by [`Payment::create`]. Fields are optional so that a
/// missing value is reported as an [`InvalidPaymentError`] instead of being
/// impossible to express.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CreatePaymentParams {
	pub amount:      Option<f64>,
	pub customer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
	id:          String,
	amount:      f64,
	customer_id: String,
}

impl Payment {
	/// Builds a new payment with a freshly generated id.
	pub fn create(
		params: CreatePaymentParams,
	) -> Result<Self, InvalidPaymentError> {
		let amount = params
			.amount
			.ok_or(InvalidPaymentError::MissingField { field: "amount" })?;

		if !amount.is_finite() {
			return Err(InvalidPaymentError::NonFiniteAmount { amount });
		}

		let customer_id = params
			.customer_id
			.ok_or(InvalidPaymentError::MissingField {
				field: "customerId",
			})?;

		if customer_id.trim().is_empty() {
			return Err(InvalidPaymentError::BlankCustomerId);
		}

		Ok(Self {
			id: Uuid::new_v4().to_string(),
			amount,
			customer_id,
		})
	}

	/// Rehydrates a stored record. The id is kept as is.
	pub fn from_primitives(primitives: PrimitivePayment) -> Self {
		Self {
			id:          primitives.id,
			amount:      primitives.amount,
			customer_id: primitives.customer_id,
		}
	}

	pub fn to_primitives(&self) -> PrimitivePayment {
		PrimitivePayment {
			id:          self.id.clone(),
			amount:      self.amount,
			customer_id: self.customer_id.clone(),
		}
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn amount(&self) -> f64 {
		self.amount
	}

	pub fn customer_id(&self) -> &str {
		&self.customer_id
	}
}

impl From<PrimitivePayment> for Payment {
	fn from(primitives: PrimitivePayment) -> Self {
		Self::from_primitives(primitives)
	}
}
