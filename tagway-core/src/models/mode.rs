use super::ClientId;
use serde::{Deserialize, Serialize};

/// What a pointer grab does to its client.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabKind {
    Move,
    Resize,
}

/// State of the interactive grab machine.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// `grab_x`/`grab_y` is the cursor position relative to the client origin.
    Moving {
        client: ClientId,
        button: u32,
        grab_x: i32,
        grab_y: i32,
    },
    Resizing {
        client: ClientId,
        button: u32,
    },
}

impl Mode {
    #[must_use]
    pub const fn grabbed_client(&self) -> Option<ClientId> {
        match self {
            Self::Normal => None,
            Self::Moving { client, .. } | Self::Resizing { client, .. } => Some(*client),
        }
    }

    #[must_use]
    pub const fn grab_button(&self) -> Option<u32> {
        match self {
            Self::Normal => None,
            Self::Moving { button, .. } | Self::Resizing { button, .. } => Some(*button),
        }
    }
}

/// Cursor position in layout coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}
