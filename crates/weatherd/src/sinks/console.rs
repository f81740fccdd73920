//! Log-backed sink implementations for host targets.
//!
//! The physical SSD1306 and GPIO drivers are out of scope here; on a host
//! the composed frame and the indicator bar go to the log instead.

use super::{DisplaySink, IndicatorSink, Result, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use tracing::debug;

/// Display stand-in that collects printed text for one frame and emits it
/// as a single log line on flush.
pub struct ConsoleDisplay {
    width: u32,
    height: u32,
    parts: Vec<String>,
}

impl ConsoleDisplay {
    pub fn new() -> Result<Self> {
        Ok(Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            parts: Vec::new(),
        })
    }
}

impl DisplaySink for ConsoleDisplay {
    fn clear(&mut self) -> Result<()> {
        self.parts.clear();
        Ok(())
    }

    fn set_cursor(&mut self, _x: i32, _y: i32) -> Result<()> {
        Ok(())
    }

    fn set_text_size(&mut self, _size: u8) -> Result<()> {
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.parts.push(text.to_string());
        Ok(())
    }

    fn draw_line(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32) -> Result<()> {
        Ok(())
    }

    fn draw_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32) -> Result<()> {
        Ok(())
    }

    fn fill_rect(&mut self, _x: i32, _y: i32, w: u32, _h: u32) -> Result<()> {
        self.parts.push(format!("[gauge {}px]", w));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        debug!(
            "display {}x{}: {}",
            self.width,
            self.height,
            self.parts.join(" | ")
        );
        Ok(())
    }
}

/// Indicator stand-in that logs the bar as `[###----]`.
pub struct ConsoleIndicator;

impl ConsoleIndicator {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl IndicatorSink for ConsoleIndicator {
    fn set_states(&mut self, states: &[bool]) -> Result<()> {
        let bar: String = states.iter().map(|&on| if on { '#' } else { '-' }).collect();
        debug!("indicator [{}]", bar);
        Ok(())
    }
}
