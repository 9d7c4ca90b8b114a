use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::CreatePaymentRequest;
use crate::infrastructure::payment_module::{
	AppCreatePaymentUseCase, AppFindPaymentByIdUseCase,
};
use crate::use_cases::dto::FindPaymentByIdQuery;

#[post("/v1/payments")]
pub async fn create_payment(
	payload: web::Json<CreatePaymentRequest>,
	create_payment_use_case: web::Data<AppCreatePaymentUseCase>,
) -> Result<impl Responder, ApiError> {
	let command = payload.into_inner().into_command()?;

	let response = create_payment_use_case.execute(command).await?;
	info!("Payment created: {}", response.payment.id);

	Ok(HttpResponse::Created().json(response))
}

#[get("/v1/payments/{id}")]
pub async fn find_payment_by_id(
	id: web::Path<String>,
	find_payment_by_id_use_case: web::Data<AppFindPaymentByIdUseCase>,
) -> Result<impl Responder, ApiError> {
	let query = FindPaymentByIdQuery {
		id: id.into_inner(),
	};

	let response = find_payment_by_id_use_case.execute(query).await?;

	Ok(HttpResponse::Ok().json(response))
}

/// Turns JSON extractor failures into the API's error body.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		ApiError::BadClientDataError(err.to_string()).into()
	})
}
