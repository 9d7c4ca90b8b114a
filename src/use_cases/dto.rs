use serde::{Deserialize, Serialize};

use crate::domain::payment::{CreatePaymentParams, PrimitivePayment};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CreatePaymentCommand {
	pub amount:      Option<f64>,
	pub customer_id: Option<String>,
}

impl From<CreatePaymentCommand> for CreatePaymentParams {
	fn from(command: CreatePaymentCommand) -> Self {
		CreatePaymentParams {
			amount:      command.amount,
			customer_id: command.customer_id,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FindPaymentByIdQuery {
	pub id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaymentResponse {
	pub payment: PrimitivePayment,
}
