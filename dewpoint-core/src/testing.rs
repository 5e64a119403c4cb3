//! Mock collaborators for unit tests

use core::cell::Cell;
use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use crate::traits::{Clock, Color, HumitureSensor, Rotation, SensorError, StatusDisplay, TextStyle};

/// One recorded display call
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayOp {
    Init(Rotation),
    Clear(Color),
    Cursor(u16, u16),
    Style(TextStyle),
    Print(String),
    Println(String),
}

/// Display that records every call
#[derive(Default)]
pub struct RecordingDisplay {
    pub ops: Vec<DisplayOp>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// All printed text, in order
    pub fn printed(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DisplayOp::Print(s) | DisplayOp::Println(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clears(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DisplayOp::Clear(_)))
            .count()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl StatusDisplay for RecordingDisplay {
    fn init(&mut self, rotation: Rotation) {
        self.ops.push(DisplayOp::Init(rotation));
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DisplayOp::Clear(color));
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.ops.push(DisplayOp::Cursor(x, y));
    }

    fn set_text_style(&mut self, style: TextStyle) {
        self.ops.push(DisplayOp::Style(style));
    }

    fn print(&mut self, text: &str) {
        self.ops.push(DisplayOp::Print(text.into()));
    }

    fn println(&mut self, text: &str) {
        self.ops.push(DisplayOp::Println(text.into()));
    }
}

/// Sensor that replays queued raw values, then repeats the last pair
pub struct ScriptedSensor {
    queue: VecDeque<(f32, f32)>,
    last: (f32, f32),
    pub initialized: bool,
    pub reads: usize,
}

impl ScriptedSensor {
    pub fn new(samples: &[(f32, f32)]) -> Self {
        Self {
            queue: samples.iter().copied().collect(),
            last: (f32::NAN, f32::NAN),
            initialized: false,
            reads: 0,
        }
    }
}

impl HumitureSensor for ScriptedSensor {
    fn init(&mut self) {
        self.initialized = true;
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.reads += 1;
        Ok(self.last.0)
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        Ok(self.last.1)
    }
}

/// Clock moved by hand
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn at(ms: u32) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
