use super::Rect;
use serde::{Deserialize, Serialize};

/// An output as reported by the display server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Screen {
    pub output: String,
    /// Position and size of the output in the layout.
    pub bbox: Rect,
    pub enabled: bool,
    pub mode: Option<OutputMode>,
    pub scale: f64,
    pub transform: Transform,
}

impl Screen {
    #[must_use]
    pub fn new(output: impl Into<String>, bbox: Rect) -> Self {
        Self {
            output: output.into(),
            bbox,
            enabled: true,
            mode: Some(OutputMode {
                width: bbox.w,
                height: bbox.h,
                refresh: 60_000,
            }),
            scale: 1.0,
            transform: Transform::Normal,
        }
    }
}

/// A video mode, refresh rate in mHz.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputMode {
    pub width: i32,
    pub height: i32,
    pub refresh: i32,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    #[default]
    Normal,
    Rotate90,
    Rotate180,
    Rotate270,
    Flipped,
    Flipped90,
    Flipped180,
    Flipped270,
}

/// The desired or current state of one output, as exchanged with output configuration clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OutputHead {
    pub output: String,
    pub enabled: bool,
    pub mode: Option<OutputMode>,
    pub x: i32,
    pub y: i32,
    pub transform: Transform,
    pub scale: f64,
}
