//! Render dispatcher.
//!
//! Translates one snapshot into concrete sink calls. Both sinks are
//! driven from the same snapshot copy taken up front, so no output can
//! mix values from two different updates.

use chrono::Timelike;

use crate::clock::WallClock;
use crate::config::TempUnit;
use crate::mappers;
use crate::sinks::{DisplaySink, IndicatorSink, Result};
use crate::store::TelemetrySnapshot;

/// Drawn on the date/time line until the time source is available.
const TIME_PLACEHOLDER: &str = "Time not set";

pub struct Renderer {
    display: Box<dyn DisplaySink>,
    indicator: Box<dyn IndicatorSink>,
    clock: Box<dyn WallClock>,
    unit: TempUnit,
    led_count: usize,
}

impl Renderer {
    pub fn new(
        display: Box<dyn DisplaySink>,
        indicator: Box<dyn IndicatorSink>,
        clock: Box<dyn WallClock>,
        unit: TempUnit,
        led_count: usize,
    ) -> Self {
        Self {
            display,
            indicator,
            clock,
            unit,
            led_count,
        }
    }

    /// One render pass: display frame plus indicator bar.
    pub fn render(&mut self, snapshot: &TelemetrySnapshot) -> Result<()> {
        self.draw_frame(snapshot)?;
        self.drive_indicator(snapshot)
    }

    fn draw_frame(&mut self, snapshot: &TelemetrySnapshot) -> Result<()> {
        self.display.clear()?;

        // Headline: integer-truncated temperature.
        self.display.set_text_size(2)?;
        self.display.set_cursor(0, 0)?;
        self.display.print(&format!(
            "TEMP {}{}",
            snapshot.temperature as i32,
            self.unit.suffix()
        ))?;
        self.display.draw_line(0, 18, 127, 18)?;

        // Battery readout, gauge right after the text.
        self.display.set_text_size(1)?;
        self.display.set_cursor(0, 34)?;
        let batt_text = format!("{:.2}", snapshot.battery);
        self.display.print(&format!("BATT {}V", batt_text))?;
        let gauge_x = 50 + batt_text.len() as i32 * 6;
        let fill = mappers::battery_fill_px(snapshot.battery);
        self.display
            .draw_rect(gauge_x, 34, mappers::GAUGE_WIDTH_PX, mappers::GAUGE_HEIGHT_PX)?;
        self.display
            .fill_rect(gauge_x, 34, fill, mappers::GAUGE_HEIGHT_PX)?;

        // Date/time line. The separator blinks on seconds parity, sampled
        // at render time rather than driven by a timer.
        self.display.set_cursor(0, 52)?;
        match self.clock.now() {
            Some(now) => {
                let separator = if now.second() % 2 == 1 { ':' } else { ' ' };
                self.display.print(&format!(
                    "{}  {:02}{}{:02}",
                    now.format("%d %b %Y"),
                    now.hour(),
                    separator,
                    now.minute()
                ))?;
            }
            None => self.display.print(TIME_PLACEHOLDER)?,
        }

        self.display.flush()
    }

    fn drive_indicator(&mut self, snapshot: &TelemetrySnapshot) -> Result<()> {
        let level = mappers::temperature_level(snapshot.temperature) as usize;
        let states: Vec<bool> = (0..self.led_count).map(|i| i < level).collect();
        self.indicator.set_states(&states)
    }

    /// Boot banner, drawn once after the listener binds.
    pub fn startup_screen(&mut self, addr: &str) -> Result<()> {
        self.display.clear()?;
        self.display.set_text_size(2)?;
        self.display.set_cursor(0, 0)?;
        self.display.print("WEATHER")?;
        self.display.set_text_size(1)?;
        self.display.set_cursor(0, 18)?;
        self.display.print("Telemetry Node")?;
        self.display.draw_line(0, 28, 127, 28)?;
        self.display.set_cursor(0, 32)?;
        self.display.print("Status: ONLINE")?;
        self.display.set_cursor(0, 44)?;
        self.display.print(&format!("IP {}", addr))?;
        self.display.flush()
    }
}
