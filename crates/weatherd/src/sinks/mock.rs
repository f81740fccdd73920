//! Recording sink doubles for tests.
//!
//! Each double hands out a shared handle to its captured output so a test
//! can keep asserting after the sink itself moved into the renderer.

use super::{DisplaySink, IndicatorSink, Result};
use std::sync::{Arc, Mutex};

/// One captured display command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear,
    Cursor(i32, i32),
    TextSize(u8),
    Print(String),
    Line(i32, i32, i32, i32),
    Rect { x: i32, y: i32, w: u32, h: u32 },
    FillRect { x: i32, y: i32, w: u32, h: u32 },
    Flush,
}

/// Display double recording every command.
#[derive(Default)]
pub struct MockDisplay {
    ops: Arc<Mutex<Vec<DrawOp>>>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded command log.
    pub fn ops(&self) -> Arc<Mutex<Vec<DrawOp>>> {
        Arc::clone(&self.ops)
    }
}

impl DisplaySink for MockDisplay {
    fn clear(&mut self) -> Result<()> {
        self.ops.lock().unwrap().push(DrawOp::Clear);
        Ok(())
    }

    fn set_cursor(&mut self, x: i32, y: i32) -> Result<()> {
        self.ops.lock().unwrap().push(DrawOp::Cursor(x, y));
        Ok(())
    }

    fn set_text_size(&mut self, size: u8) -> Result<()> {
        self.ops.lock().unwrap().push(DrawOp::TextSize(size));
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.ops.lock().unwrap().push(DrawOp::Print(text.to_string()));
        Ok(())
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
        self.ops.lock().unwrap().push(DrawOp::Line(x0, y0, x1, y1));
        Ok(())
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.ops.lock().unwrap().push(DrawOp::Rect { x, y, w, h });
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) -> Result<()> {
        self.ops.lock().unwrap().push(DrawOp::FillRect { x, y, w, h });
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.ops.lock().unwrap().push(DrawOp::Flush);
        Ok(())
    }
}

/// Indicator double capturing the last state vector.
#[derive(Default)]
pub struct MockIndicator {
    states: Arc<Mutex<Vec<bool>>>,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the last written states.
    pub fn states(&self) -> Arc<Mutex<Vec<bool>>> {
        Arc::clone(&self.states)
    }
}

impl IndicatorSink for MockIndicator {
    fn set_states(&mut self, states: &[bool]) -> Result<()> {
        *self.states.lock().unwrap() = states.to_vec();
        Ok(())
    }
}
