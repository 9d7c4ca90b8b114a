pub mod create_payment;
pub mod dto;
pub mod errors;
pub mod find_payment_by_id;
