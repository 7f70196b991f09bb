use serde::{Deserialize, Serialize};

/// 見積もり対象の商品データ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Printer {
    model: String,
    unit_price: f64,
}

impl Printer {
    pub fn new(model: impl Into<String>, unit_price: f64) -> Self {
        Self {
            model: model.into(),
            unit_price,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }
}
