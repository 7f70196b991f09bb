//! DeviceObserver - 応答デバイスの抽象化
//!
//! # 学習ポイント
//! - Object-safe trait（`Arc<dyn DeviceObserver>` として登録できる）
//! - 開かれたバリアント集合：センサ側を変更せずにデバイスを追加できる

use crate::error::MonitorError;

/// DeviceObserver は温度超過時に呼び出される応答デバイス
///
/// # 使用例
/// ```ignore
/// struct SprinklerSystem;
///
/// impl DeviceObserver for SprinklerSystem {
///     fn name(&self) -> &'static str {
///         "sprinkler"
///     }
///
///     fn on_temperature(&self, celsius: f64) -> Result<(), MonitorError> {
///         println!("sprinkler on at {celsius}");
///         Ok(())
///     }
/// }
/// ```
///
/// # 契約
/// - `on_temperature` は同期呼び出し。センサは登録順に 1 回ずつ呼ぶ
/// - エラーを返しても後続のデバイスへの通知は続行される（report and continue）
pub trait DeviceObserver: Send + Sync {
    /// Stable name used in logs, status views and builder validation.
    fn name(&self) -> &'static str;

    /// Called with the current reading when the threshold is reached.
    fn on_temperature(&self, celsius: f64) -> Result<(), MonitorError>;
}
