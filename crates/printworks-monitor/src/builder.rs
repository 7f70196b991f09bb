//! SensorBuilder - センサの組み立てとワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use std::sync::Arc;

use crate::observer::DeviceObserver;
use crate::sensor::TemperatureSensor;

/// SensorBuilder は TemperatureSensor を構築
///
/// # 使用例
/// ```ignore
/// let sensor = SensorBuilder::new(40.0)
///     .device(Arc::new(Alarm::new()))
///     .device(Arc::new(EscapeDoor::new()))
///     .expect_devices(&["alarm", "escape-door"])
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - expect_devices() で期待されるデバイス名を登録
/// - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
/// - 不足があれば BuildError を返す
pub struct SensorBuilder {
    sensor: TemperatureSensor,
    expected_devices: Option<Vec<String>>,
}

/// BuildError はセンサ構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing devices: {0:?}. These devices were expected but not registered.")]
    MissingDevices(Vec<String>),
}

impl SensorBuilder {
    pub fn new(threshold: f64) -> Self {
        Self {
            sensor: TemperatureSensor::new(threshold),
            expected_devices: None,
        }
    }

    /// 応答デバイスを登録（登録順＝通知順）
    pub fn device(mut self, observer: Arc<dyn DeviceObserver>) -> Self {
        self.sensor.register(observer);
        self
    }

    /// 期待されるデバイス名のリストを設定
    pub fn expect_devices(mut self, names: &[&str]) -> Self {
        self.expected_devices = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    /// 検証して TemperatureSensor を生成
    pub fn build(self) -> Result<TemperatureSensor, BuildError> {
        if let Some(expected) = &self.expected_devices {
            let registered = self.sensor.registry().device_names();
            let missing: Vec<String> = expected
                .iter()
                .filter(|name| !registered.contains(name))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingDevices(missing));
            }
        }
        Ok(self.sensor)
    }
}
