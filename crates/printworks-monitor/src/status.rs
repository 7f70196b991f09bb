use serde::{Deserialize, Serialize};

/// Snapshot of a sensor for status queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorStatus {
    pub threshold: f64,
    /// Device names in notification order.
    pub devices: Vec<String>,
}
