use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::adapters::web::errors::ApiError;
use crate::use_cases::dto::CreatePaymentCommand;

/// Body of `POST /v1/payments`. Both fields may be absent so the domain can
/// report which one is missing.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CreatePaymentRequest {
	pub amount:      Option<f64>,
	#[serde(rename = "customerId")]
	pub customer_id: Option<String>,
}

impl CreatePaymentRequest {
	/// Request-level checks that do not belong to the payment itself.
	pub fn into_command(self) -> Result<CreatePaymentCommand, ApiError> {
		if let Some(customer_id) = &self.customer_id &&
			Uuid::parse_str(customer_id).is_err()
		{
			return Err(ApiError::BadClientDataError(format!(
				"customerId must be a UUID, got '{customer_id}'"
			)));
		}

		Ok(CreatePaymentCommand {
			amount:      self.amount,
			customer_id: self.customer_id,
		})
	}
}
