//! 標準の応答デバイス
//!
//! どのデバイスも `&self` から呼ばれるため、作動状態は `AtomicBool` で持つ。
//! 作動時には構造化ログを 1 件出す。

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::MonitorError;
use crate::observer::DeviceObserver;

/// 警報器。作動すると鳴り続ける。
#[derive(Default)]
pub struct Alarm {
    sounding: AtomicBool,
}

impl Alarm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding.load(Ordering::Relaxed)
    }
}

impl DeviceObserver for Alarm {
    fn name(&self) -> &'static str {
        "alarm"
    }

    fn on_temperature(&self, celsius: f64) -> Result<(), MonitorError> {
        self.sounding.store(true, Ordering::Relaxed);
        tracing::info!(celsius, "alarm sounding");
        Ok(())
    }
}

/// 警告灯。作動すると点滅を始める。
#[derive(Default)]
pub struct WarningLight {
    blinking: AtomicBool,
}

impl WarningLight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blinking(&self) -> bool {
        self.blinking.load(Ordering::Relaxed)
    }
}

impl DeviceObserver for WarningLight {
    fn name(&self) -> &'static str {
        "warning-light"
    }

    fn on_temperature(&self, celsius: f64) -> Result<(), MonitorError> {
        self.blinking.store(true, Ordering::Relaxed);
        tracing::info!(celsius, "warning light blinking");
        Ok(())
    }
}

/// 非常口ドア。作動すると自動で開く。
#[derive(Default)]
pub struct EscapeDoor {
    open: AtomicBool,
}

impl EscapeDoor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }
}

impl DeviceObserver for EscapeDoor {
    fn name(&self) -> &'static str {
        "escape-door"
    }

    fn on_temperature(&self, celsius: f64) -> Result<(), MonitorError> {
        self.open.store(true, Ordering::Relaxed);
        tracing::info!(celsius, "escape door opened");
        Ok(())
    }
}

/// 遮熱扉。作動すると自動で閉まる。
#[derive(Default)]
pub struct IsolationDoor {
    sealed: AtomicBool,
}

impl IsolationDoor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Relaxed)
    }
}

impl DeviceObserver for IsolationDoor {
    fn name(&self) -> &'static str {
        "isolation-door"
    }

    fn on_temperature(&self, celsius: f64) -> Result<(), MonitorError> {
        self.sealed.store(true, Ordering::Relaxed);
        tracing::info!(celsius, "isolation door sealed");
        Ok(())
    }
}
