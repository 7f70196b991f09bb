//! printworks-monitor
//!
//! Core building blocks for the server-room temperature monitor.
//!
//! # モジュール構成
//! - **observer**: 応答デバイスの抽象化（DeviceObserver trait）
//! - **sensor**: 温度センサ本体（DeviceRegistry, TemperatureSensor）
//! - **devices**: 標準の応答デバイス（Alarm, WarningLight, EscapeDoor, IsolationDoor）
//! - **builder**: センサの組み立てと起動時検証（SensorBuilder）
//! - **status**: ステータスビュー（SensorStatus）
//! - **error**: エラー型（MonitorError）

pub mod builder;
pub mod devices;
pub mod error;
pub mod observer;
pub mod sensor;
pub mod status;

pub use builder::{BuildError, SensorBuilder};
pub use devices::{Alarm, EscapeDoor, IsolationDoor, WarningLight};
pub use error::MonitorError;
pub use observer::DeviceObserver;
pub use sensor::{DeviceRegistry, TemperatureSensor};
pub use status::SensorStatus;
