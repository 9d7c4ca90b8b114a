pub mod errors;
pub mod payment;
pub mod repository;
