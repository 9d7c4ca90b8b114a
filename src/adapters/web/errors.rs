use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::use_cases::errors::PaymentError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
	#[serde(rename = "statusCode")]
	pub status_code: u16,
	pub error:       String,
	pub message:     String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("{_0}")]
	BadClientDataError(#[error(not(source))] String),
	#[display("{_0}")]
	NotFoundError(#[error(not(source))] String),
	#[display("Internal server error.")]
	InternalServerError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::BadClientDataError(_) => "Bad Request".to_string(),
			ApiError::NotFoundError(_) => "Not Found".to_string(),
			ApiError::InternalServerError => "Internal Server Error".to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				status_code: self.status_code().as_u16(),
				error:       self.name(),
				message:     self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadClientDataError(_) => StatusCode::BAD_REQUEST,
			ApiError::NotFoundError(_) => StatusCode::NOT_FOUND,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<PaymentError> for ApiError {
	fn from(err: PaymentError) -> Self {
		match err {
			PaymentError::InvalidPayment(e) => {
				ApiError::BadClientDataError(e.to_string())
			}
			PaymentError::NotFound(e) => ApiError::NotFoundError(e.to_string()),
			PaymentError::Storage(e) => {
				log::error!("Payment storage failed: {e}");
				ApiError::InternalServerError
			}
		}
	}
}
