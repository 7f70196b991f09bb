use std::sync::Arc;

use crate::observer::DeviceObserver;
use crate::status::SensorStatus;

/// Registry of response devices.
///
/// Design:
/// - Built during initialization (mutable).
/// - Used during detection (immutable).
/// - A `Vec` rather than a map: notification order is registration order,
///   and devices are identified by pointer identity, not by key.
#[derive(Default)]
pub struct DeviceRegistry {
    observers: Vec<Arc<dyn DeviceObserver>>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Append a device to the end of the notification order.
    pub fn register(&mut self, observer: Arc<dyn DeviceObserver>) {
        self.observers.push(observer);
    }

    /// Remove the first device matching by identity (`Arc::ptr_eq`).
    ///
    /// Not an error if the device is absent.
    pub fn unregister(&mut self, observer: &Arc<dyn DeviceObserver>) {
        if let Some(pos) = self.observers.iter().position(|o| Arc::ptr_eq(o, observer)) {
            self.observers.remove(pos);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DeviceObserver>> {
        self.observers.iter()
    }

    pub fn device_names(&self) -> Vec<String> {
        self.observers.iter().map(|o| o.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

/// TemperatureSensor compares readings against a fixed threshold and fans
/// out to every registered device when the threshold is reached.
pub struct TemperatureSensor {
    threshold: f64,
    registry: DeviceRegistry,
}

impl TemperatureSensor {
    /// Any finite threshold is accepted; the value is fixed for the
    /// sensor's lifetime.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            registry: DeviceRegistry::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    pub fn register(&mut self, observer: Arc<dyn DeviceObserver>) {
        self.registry.register(observer);
    }

    pub fn unregister(&mut self, observer: &Arc<dyn DeviceObserver>) {
        self.registry.unregister(observer);
    }

    /// Evaluate one reading.
    ///
    /// Returns `reading >= threshold`. When true, every registered device
    /// is notified exactly once, synchronously, in registration order,
    /// before this method returns. A device that fails is reported and the
    /// remaining devices are still notified.
    pub fn detect(&self, celsius: f64) -> bool {
        if celsius < self.threshold {
            tracing::debug!(celsius, threshold = self.threshold, "reading below threshold");
            return false;
        }

        tracing::info!(
            celsius,
            threshold = self.threshold,
            devices = self.registry.len(),
            "threshold reached, notifying devices"
        );
        for observer in self.registry.iter() {
            if let Err(e) = observer.on_temperature(celsius) {
                tracing::warn!(device = observer.name(), error = %e, "device failed, continuing");
            }
        }
        true
    }

    /// Snapshot for status queries.
    pub fn status(&self) -> SensorStatus {
        SensorStatus {
            threshold: self.threshold,
            devices: self.registry.device_names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MonitorError;
    use rstest::rstest;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct CountingDevice {
        hits: AtomicU32,
    }

    impl CountingDevice {
        fn hits(&self) -> u32 {
            self.hits.load(Ordering::Relaxed)
        }
    }

    impl DeviceObserver for CountingDevice {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_temperature(&self, _celsius: f64) -> Result<(), MonitorError> {
            self.hits.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    struct RecordingDevice {
        tag: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl DeviceObserver for RecordingDevice {
        fn name(&self) -> &'static str {
            self.tag
        }

        fn on_temperature(&self, _celsius: f64) -> Result<(), MonitorError> {
            self.log.lock().unwrap().push(self.tag);
            Ok(())
        }
    }

    struct JammedDevice;

    impl DeviceObserver for JammedDevice {
        fn name(&self) -> &'static str {
            "jammed"
        }

        fn on_temperature(&self, _celsius: f64) -> Result<(), MonitorError> {
            Err(MonitorError::DeviceFault {
                device: "jammed".to_string(),
                message: "actuator stuck".to_string(),
            })
        }
    }

    #[rstest]
    #[case(40.0, 36.5, false)]
    #[case(40.0, 42.3, true)]
    #[case(40.0, 40.0, true)] // boundary: at threshold counts as reached
    #[case(-5.0, -4.5, true)] // negative thresholds are allowed
    fn detect_returns_comparison_and_notifies_accordingly(
        #[case] threshold: f64,
        #[case] reading: f64,
        #[case] expected: bool,
    ) {
        let counter = Arc::new(CountingDevice::default());
        let mut sensor = TemperatureSensor::new(threshold);
        sensor.register(counter.clone());

        assert_eq!(sensor.detect(reading), expected);
        assert_eq!(counter.hits(), if expected { 1 } else { 0 });
    }

    #[test]
    fn devices_are_notified_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut sensor = TemperatureSensor::new(40.0);
        for tag in ["alarm", "light", "escape-door", "isolation-door"] {
            sensor.register(Arc::new(RecordingDevice {
                tag,
                log: log.clone(),
            }));
        }

        assert!(sensor.detect(42.3));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["alarm", "light", "escape-door", "isolation-door"]
        );
    }

    #[test]
    fn each_device_is_notified_exactly_once_per_detection() {
        let counter = Arc::new(CountingDevice::default());
        let mut sensor = TemperatureSensor::new(40.0);
        sensor.register(counter.clone());

        sensor.detect(41.0);
        sensor.detect(45.0);

        assert_eq!(counter.hits(), 2);
    }

    #[test]
    fn unregistered_device_is_never_notified_again() {
        let counter = Arc::new(CountingDevice::default());
        let mut sensor = TemperatureSensor::new(40.0);
        sensor.register(counter.clone());

        assert!(sensor.detect(41.0));
        assert_eq!(counter.hits(), 1);

        let as_observer: Arc<dyn DeviceObserver> = counter.clone();
        sensor.unregister(&as_observer);
        assert!(sensor.registry().is_empty());

        assert!(sensor.detect(41.0));
        assert_eq!(counter.hits(), 1);
    }

    #[test]
    fn unregistering_an_unknown_device_is_a_no_op() {
        let registered = Arc::new(CountingDevice::default());
        let stranger: Arc<dyn DeviceObserver> = Arc::new(CountingDevice::default());

        let mut sensor = TemperatureSensor::new(40.0);
        sensor.register(registered);

        sensor.unregister(&stranger);
        assert_eq!(sensor.registry().len(), 1);
    }

    #[test]
    fn a_failing_device_does_not_stop_the_fan_out() {
        let counter = Arc::new(CountingDevice::default());
        let mut sensor = TemperatureSensor::new(40.0);
        sensor.register(Arc::new(JammedDevice));
        sensor.register(counter.clone());

        assert!(sensor.detect(42.3));
        assert_eq!(counter.hits(), 1);
    }

    #[test]
    fn detect_below_threshold_notifies_nothing() {
        let counter = Arc::new(CountingDevice::default());
        let mut sensor = TemperatureSensor::new(40.0);
        sensor.register(counter.clone());

        assert!(!sensor.detect(36.5));
        assert_eq!(counter.hits(), 0);
    }
}
