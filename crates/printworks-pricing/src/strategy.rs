//! Discount strategy model: interchangeable pricing formulas.
//!
//! This module is storefront-agnostic: it does not assume a catalog, a
//! currency, or a sales flow. It only defines the "shape" of a pricing
//! formula and the three standard formulas the shop uses.

use crate::error::PricingError;

/// A pricing formula for one line item.
///
/// 契約: `price(unit_price, quantity)` は合計金額を返す。
/// 数量は符号なし整数なので負の数量はそもそも表現できない。
pub trait DiscountStrategy: Send + Sync {
    /// Stable name used in logs.
    fn label(&self) -> &'static str;

    /// Total price for `quantity` units at `unit_price` each.
    fn price(&self, unit_price: f64, quantity: u32) -> f64;
}

/// 定価販売。割引なし。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn label(&self) -> &'static str {
        "no-discount"
    }

    fn price(&self, unit_price: f64, quantity: u32) -> f64 {
        unit_price * quantity as f64
    }
}

/// 1 台あたり固定額を引く。
///
/// 割引後の単価は 0 未満にならないようクランプする。
#[derive(Debug, Clone, Copy)]
pub struct FixedAmountOff {
    per_unit: f64,
}

impl FixedAmountOff {
    pub fn new(per_unit: f64) -> Self {
        Self { per_unit }
    }

    pub fn per_unit(&self) -> f64 {
        self.per_unit
    }
}

impl DiscountStrategy for FixedAmountOff {
    fn label(&self) -> &'static str {
        "fixed-amount-off"
    }

    fn price(&self, unit_price: f64, quantity: u32) -> f64 {
        (unit_price - self.per_unit).max(0.0) * quantity as f64
    }
}

/// 百分率で割り引く（0.05 なら 5% 引き）。
///
/// 料率は構築時に検証する。`[0.0, 1.0]` の外はマークアップや負の合計を
/// 生むため `PricingError::InvalidDiscountRate` で拒否する。
#[derive(Debug, Clone, Copy)]
pub struct PercentageOff {
    rate: f64,
}

impl PercentageOff {
    pub fn new(rate: f64) -> Result<Self, PricingError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(PricingError::InvalidDiscountRate(rate));
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl DiscountStrategy for PercentageOff {
    fn label(&self) -> &'static str {
        "percentage-off"
    }

    fn price(&self, unit_price: f64, quantity: u32) -> f64 {
        unit_price * (1.0 - self.rate) * quantity as f64
    }
}
