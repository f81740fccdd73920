//! Output sink boundary.
//!
//! The render dispatcher drives heterogeneous outputs through these
//! traits; hardware access stays behind them so the pipeline runs the
//! same against real drivers, log-backed stand-ins, or test doubles.

pub mod console;
pub mod mock;

use thiserror::Error;

/// Display geometry of the reference device.
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("display write failed: {0}")]
    Display(String),
    #[error("indicator write failed: {0}")]
    Indicator(String),
}

pub type Result<T> = std::result::Result<T, SinkError>;

/// Pixel display accepting draw primitives. Commands compose a frame;
/// nothing reaches the device until [`DisplaySink::flush`].
pub trait DisplaySink: Send {
    fn clear(&mut self) -> Result<()>;
    fn set_cursor(&mut self, x: i32, y: i32) -> Result<()>;
    /// Text scale multiplier (1 = one 6x8 font cell).
    fn set_text_size(&mut self, size: u8) -> Result<()>;
    fn print(&mut self, text: &str) -> Result<()>;
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()>;
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

/// Bank of binary outputs acting as a bar gauge.
pub trait IndicatorSink: Send {
    /// Set every output at once; index `i` maps to output `i`.
    fn set_states(&mut self, states: &[bool]) -> Result<()>;
}
