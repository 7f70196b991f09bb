//! printworks-pricing
//!
//! Core building blocks for printer sales pricing.
//!
//! # モジュール構成
//! - **strategy**: 割引戦略の抽象化と標準実装（DiscountStrategy, NoDiscount, FixedAmountOff, PercentageOff）
//! - **calculator**: 戦略を差し替え可能なコンテキスト（PriceCalculator）
//! - **catalog**: 商品データ（Printer）
//! - **error**: エラー型（PricingError）

pub mod calculator;
pub mod catalog;
pub mod error;
pub mod strategy;

pub use calculator::PriceCalculator;
pub use catalog::Printer;
pub use error::PricingError;
pub use strategy::{DiscountStrategy, FixedAmountOff, NoDiscount, PercentageOff};
