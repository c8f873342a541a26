use crate::models::{GrabKind, TagMask};
use serde::{Deserialize, Serialize};

/// Direction used to pick a neighbouring output.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum Command {
    /// Show exactly these tags, zero swaps back to the previous tag-set.
    View(TagMask),
    ToggleView(TagMask),
    /// Move the selected client to these tags.
    Tag(TagMask),
    ToggleTag(TagMask),
    /// Focus the next (positive) or previous (negative) visible client.
    FocusStack(i32),
    Zoom,
    /// Switch to a configured layout by index, `None` swaps with the previous one.
    SetLayout(Option<usize>),
    /// Below 1.0 the value is added to the master fraction, above it sets `value - 1.0`.
    SetMfact(f64),
    IncNMaster(i32),
    KillClient,
    ToggleFloating,
    ToggleFullscreen,
    FocusMonitor(Direction),
    TagMonitor(Direction),
    /// Start a pointer grab on the client under the cursor.
    MoveResize(GrabKind),
    ChangeVt(u32),
    Spawn(String),
    Quit,
}
