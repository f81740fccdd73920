//! On-demand HTML report.
//!
//! A pure projection of one snapshot; serving it never touches the sinks
//! or the store.

use std::fmt::Write;
use std::time::Duration;

use crate::config::TempUnit;
use crate::store::TelemetrySnapshot;

/// Client auto-reload interval baked into the document.
pub const REFRESH_SECS: u32 = 5;

/// Render the report for one snapshot and its age. `age` is `None` while
/// no update has ever arrived.
pub fn render_report(
    snapshot: &TelemetrySnapshot,
    age: Option<Duration>,
    unit: TempUnit,
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head>");
    html.push_str("<meta charset='UTF-8'>");
    let _ = write!(html, "<meta http-equiv='refresh' content='{}'>", REFRESH_SECS);
    html.push_str("<title>Weather Telemetry Node</title>");
    html.push_str("<style>");
    html.push_str("body { font-family: Arial; background:#111; color:#eee; padding:20px; }");
    html.push_str("h1 { color:#6cf; }");
    html.push_str(".box { font-size:1.2em; margin:10px 0; }");
    html.push_str(".stamp { color:#aaa; font-size:0.9em; margin-top:15px; }");
    html.push_str("</style></head><body>");

    html.push_str("<h1>Weather Telemetry Node</h1>");
    let _ = write!(
        html,
        "<div class='box'>🌡️ Temperature: {:.1} {}</div>",
        snapshot.temperature,
        unit.degrees()
    );
    let _ = write!(
        html,
        "<div class='box'>💧 Humidity: {:.1} %</div>",
        snapshot.humidity
    );
    let _ = write!(
        html,
        "<div class='box'>📉 Pressure: {:.1} hPa</div>",
        snapshot.pressure
    );
    let _ = write!(
        html,
        "<div class='box'>🔋 Battery: {:.2} V</div>",
        snapshot.battery
    );

    match age {
        Some(age) => {
            let _ = write!(
                html,
                "<div class='stamp'>Last update: {} seconds ago</div>",
                age.as_secs()
            );
        }
        None => html.push_str("<div class='stamp'>No data received yet</div>"),
    }

    html.push_str("</body></html>");
    html
}
