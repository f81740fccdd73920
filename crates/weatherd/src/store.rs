//! Telemetry state store.
//!
//! Holds the single current-truth snapshot of the latest readings. All
//! mutation goes through [`TelemetryStore::apply`]; every other component
//! works from the immutable copy returned by [`TelemetryStore::snapshot`].

use serde::Deserialize;
use std::time::Instant;
use tracing::debug;

/// The latest readings pushed by the sensor node.
///
/// `last_update` stays `None` until the first push arrives.
#[derive(Debug, Clone, Copy)]
pub struct TelemetrySnapshot {
    /// Degrees, in the configured display unit.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Barometric pressure, hPa.
    pub pressure: f64,
    /// Sender battery voltage.
    pub battery: f64,
    /// Monotonic timestamp of the last push.
    pub last_update: Option<Instant>,
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            humidity: 0.0,
            pressure: 0.0,
            battery: 0.0,
            last_update: None,
        }
    }
}

/// Raw named fields of one `/update` request.
///
/// Every field is optional and arrives as its transport-level string;
/// unknown request fields never reach this struct.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFields {
    pub temp: Option<String>,
    pub hum: Option<String>,
    pub pres: Option<String>,
    pub batt: Option<String>,
}

impl UpdateFields {
    /// True when none of the four known fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.temp.is_none() && self.hum.is_none() && self.pres.is_none() && self.batt.is_none()
    }

    /// Combine query-string fields with form-body fields; the body wins
    /// where both carry the same field.
    pub fn merge(query: Self, body: Self) -> Self {
        Self {
            temp: body.temp.or(query.temp),
            hum: body.hum.or(query.hum),
            pres: body.pres.or(query.pres),
            batt: body.batt.or(query.batt),
        }
    }
}

/// Best-effort measurement parse. Anything that is not a finite decimal
/// number counts as absent.
fn parse_measurement(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn apply_field(slot: &mut f64, name: &'static str, raw: &Option<String>) {
    if let Some(raw) = raw {
        match parse_measurement(raw) {
            Some(v) => *slot = v,
            None => debug!("ignoring unparseable {} value: {:?}", name, raw),
        }
    }
}

/// Owner of the one mutable telemetry record.
#[derive(Debug, Default)]
pub struct TelemetryStore {
    current: TelemetrySnapshot,
}

impl TelemetryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one push. Fields that parse overwrite the stored value,
    /// fields that fail to parse are dropped, absent fields keep their
    /// previous value. The update timestamp advances whenever at least
    /// one field was present, parseable or not: it records that a push
    /// occurred, not that values changed.
    pub fn apply(&mut self, fields: &UpdateFields) {
        apply_field(&mut self.current.temperature, "temp", &fields.temp);
        apply_field(&mut self.current.humidity, "hum", &fields.hum);
        apply_field(&mut self.current.pressure, "pres", &fields.pres);
        apply_field(&mut self.current.battery, "batt", &fields.batt);

        if !fields.is_empty() {
            self.current.last_update = Some(Instant::now());
        }
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fields(
        temp: Option<&str>,
        hum: Option<&str>,
        pres: Option<&str>,
        batt: Option<&str>,
    ) -> UpdateFields {
        UpdateFields {
            temp: temp.map(String::from),
            hum: hum.map(String::from),
            pres: pres.map(String::from),
            batt: batt.map(String::from),
        }
    }

    #[test]
    fn starts_at_zero_and_never_updated() {
        let store = TelemetryStore::new();
        let snap = store.snapshot();
        assert_eq!(snap.temperature, 0.0);
        assert_eq!(snap.humidity, 0.0);
        assert_eq!(snap.pressure, 0.0);
        assert_eq!(snap.battery, 0.0);
        assert!(snap.last_update.is_none());
    }

    #[test]
    fn partial_update_keeps_absent_fields() {
        let mut store = TelemetryStore::new();
        store.apply(&fields(Some("72.4"), None, None, Some("3.9")));

        let snap = store.snapshot();
        assert_relative_eq!(snap.temperature, 72.4);
        assert_relative_eq!(snap.battery, 3.9);
        assert_eq!(snap.humidity, 0.0);
        assert_eq!(snap.pressure, 0.0);
        assert!(snap.last_update.is_some());

        store.apply(&fields(None, Some("41.5"), None, None));
        let snap = store.snapshot();
        assert_relative_eq!(snap.temperature, 72.4);
        assert_relative_eq!(snap.humidity, 41.5);
    }

    #[test]
    fn unparseable_field_is_dropped_but_still_counts_as_push() {
        let mut store = TelemetryStore::new();
        store.apply(&fields(Some("72.4"), None, None, None));
        let before = store.snapshot();

        std::thread::sleep(std::time::Duration::from_millis(5));
        store.apply(&fields(Some("banana"), None, None, None));
        let after = store.snapshot();
        assert_relative_eq!(after.temperature, 72.4);
        assert!(after.last_update.is_some());
        assert_ne!(before.last_update, after.last_update);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut store = TelemetryStore::new();
        store.apply(&fields(Some("50"), None, None, None));
        store.apply(&fields(Some("NaN"), Some("inf"), None, None));

        let snap = store.snapshot();
        assert_relative_eq!(snap.temperature, 50.0);
        assert_eq!(snap.humidity, 0.0);
    }

    #[test]
    fn empty_update_does_not_advance_timestamp() {
        let mut store = TelemetryStore::new();
        store.apply(&UpdateFields::default());
        assert!(store.snapshot().last_update.is_none());
    }

    #[test]
    fn applying_twice_is_idempotent_on_measurements() {
        let mut store = TelemetryStore::new();
        let update = fields(Some("72.4"), Some("40.1"), Some("1013.2"), Some("3.9"));
        store.apply(&update);
        let first = store.snapshot();
        store.apply(&update);
        let second = store.snapshot();

        assert_eq!(first.temperature, second.temperature);
        assert_eq!(first.humidity, second.humidity);
        assert_eq!(first.pressure, second.pressure);
        assert_eq!(first.battery, second.battery);
    }

    #[test]
    fn merge_prefers_body_fields() {
        let query = fields(Some("10"), Some("20"), None, None);
        let body = fields(Some("30"), None, Some("40"), None);
        let merged = UpdateFields::merge(query, body);
        assert_eq!(merged.temp.as_deref(), Some("30"));
        assert_eq!(merged.hum.as_deref(), Some("20"));
        assert_eq!(merged.pres.as_deref(), Some("40"));
        assert!(merged.batt.is_none());
    }

    #[test]
    fn whitespace_is_tolerated() {
        let mut store = TelemetryStore::new();
        store.apply(&fields(Some(" 21.5 "), None, None, None));
        assert_relative_eq!(store.snapshot().temperature, 21.5);
    }
}
