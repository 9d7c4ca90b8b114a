pub const PAYMENT_KEY_PREFIX: &str = "payment";
