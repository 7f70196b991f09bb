use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("device fault in {device}: {message}")]
    DeviceFault { device: String, message: String },

    #[error("{0}")]
    Other(String),
}
