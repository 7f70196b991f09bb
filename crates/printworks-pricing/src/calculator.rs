//! PriceCalculator - 割引戦略を差し替え可能なコンテキスト

use crate::catalog::Printer;
use crate::strategy::DiscountStrategy;

/// PriceCalculator は有効な割引戦略を 1 つだけ保持する
///
/// # 使用例
/// ```ignore
/// let mut calculator = PriceCalculator::new(NoDiscount);
/// let regular = calculator.total(1500.0, 3);
///
/// calculator.set_strategy(FixedAmountOff::new(100.0));
/// let discounted = calculator.total(1500.0, 3);
/// ```
///
/// # 差し替えの意味論
/// - `set_strategy` は以後の `total` 呼び出しにのみ効く
/// - 旧戦略は差し替え時に即座に破棄される（履歴は持たない）
pub struct PriceCalculator {
    strategy: Box<dyn DiscountStrategy>,
}

impl PriceCalculator {
    pub fn new<S: DiscountStrategy + 'static>(strategy: S) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Replace the active formula. Takes effect on the next `total` call.
    pub fn set_strategy<S: DiscountStrategy + 'static>(&mut self, strategy: S) {
        tracing::debug!(
            from = self.strategy.label(),
            to = strategy.label(),
            "discount strategy replaced"
        );
        self.strategy = Box::new(strategy);
    }

    /// Total price for `quantity` units, delegated to the active formula.
    pub fn total(&self, unit_price: f64, quantity: u32) -> f64 {
        self.strategy.price(unit_price, quantity)
    }

    /// カタログ上の商品をそのまま見積もる
    pub fn total_for(&self, printer: &Printer, quantity: u32) -> f64 {
        self.total(printer.unit_price(), quantity)
    }
}
