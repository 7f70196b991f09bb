use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("discount rate {0} is out of range (expected 0.0..=1.0)")]
    InvalidDiscountRate(f64),
}
