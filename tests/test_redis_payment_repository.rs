use futures::future::join_all;
use payments_api::domain::payment::{CreatePaymentParams, Payment, PrimitivePayment};
use payments_api::domain::repository::PaymentRepository;
use payments_api::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;

mod support;

use crate::support::redis_container::get_test_redis_client;

fn new_payment(amount: f64) -> Payment {
	Payment::create(CreatePaymentParams {
		amount:      Some(amount),
		customer_id: Some("c1".to_string()),
	})
	.unwrap()
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_redis_save_then_find_by_id() {
	let redis_container = get_test_redis_client().await;
	let payment_repo = RedisPaymentRepository::new(redis_container.client.clone());
	let payment = new_payment(100.25);

	payment_repo.save(&payment).await.unwrap();
	let found = payment_repo.find_by_id(payment.id()).await.unwrap();

	assert_eq!(found.unwrap().to_primitives(), payment.to_primitives());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_redis_find_by_id_miss_returns_none() {
	let redis_container = get_test_redis_client().await;
	let payment_repo = RedisPaymentRepository::new(redis_container.client.clone());

	let found = payment_repo.find_by_id("nonexistent").await.unwrap();

	assert!(found.is_none());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_redis_save_overwrites_same_id() {
	let redis_container = get_test_redis_client().await;
	let payment_repo = RedisPaymentRepository::new(redis_container.client.clone());
	let primitives = PrimitivePayment {
		id:          "same-id".to_string(),
		amount:      1.0,
		customer_id: "c1".to_string(),
	};
	let updated = PrimitivePayment {
		amount: 2.0,
		..primitives.clone()
	};

	payment_repo
		.save(&Payment::from_primitives(primitives))
		.await
		.unwrap();
	payment_repo
		.save(&Payment::from_primitives(updated.clone()))
		.await
		.unwrap();

	let found = payment_repo.find_by_id("same-id").await.unwrap().unwrap();
	assert_eq!(found.to_primitives(), updated);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_redis_concurrent_saves_are_all_retrievable() {
	let redis_container = get_test_redis_client().await;
	let payment_repo = RedisPaymentRepository::new(redis_container.client.clone());
	let payments: Vec<Payment> = (0..20).map(|i| new_payment(i as f64)).collect();

	let results = join_all(payments.iter().map(|p| payment_repo.save(p))).await;
	assert!(results.iter().all(Result::is_ok));

	for payment in &payments {
		let found = payment_repo.find_by_id(payment.id()).await.unwrap();
		assert_eq!(found.unwrap().amount(), payment.amount());
	}
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_redis_unreachable_is_storage_failure() {
	let redis_container = get_test_redis_client().await;
	let payment_repo = RedisPaymentRepository::new(redis_container.client.clone());
	let _ = redis_container.container.stop().await;

	let result = payment_repo.find_by_id("any").await;

	assert!(result.is_err());
}
