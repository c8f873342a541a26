use super::{MonitorId, Rect, WindowHandle};
use crate::models::Handle;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub usize);

impl nohash_hasher::IsEnabled for LayerId {}

/// The four stacking layers of panel-like surfaces, bottom to top.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerClass {
    Background,
    Bottom,
    Top,
    Overlay,
}

impl LayerClass {
    /// Front to back.
    pub const ARRANGE_ORDER: [Self; 4] = [Self::Overlay, Self::Top, Self::Bottom, Self::Background];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Background => 0,
            Self::Bottom => 1,
            Self::Top => 2,
            Self::Overlay => 3,
        }
    }

    /// Surfaces on these layers keep keyboard focus against client focus changes.
    #[must_use]
    pub const fn is_above_clients(self) -> bool {
        matches!(self, Self::Top | Self::Overlay)
    }
}

bitflags! {
    /// Edges a layer surface is pinned to.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Anchor: u32 {
        const TOP = 1;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Margins {
    #[must_use]
    pub const fn new(size: i32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }
}

/// The double buffered state a layer surface commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerState {
    pub class: LayerClass,
    pub anchor: Anchor,
    pub margins: Margins,
    /// Positive reserves space, zero reserves none, -1 asks for the full output area.
    pub exclusive_zone: i32,
    /// Zero on an axis asks to fill that axis.
    pub desired_width: i32,
    pub desired_height: i32,
    pub keyboard_interactive: bool,
}

impl Default for LayerState {
    fn default() -> Self {
        Self {
            class: LayerClass::Top,
            anchor: Anchor::empty(),
            margins: Margins::default(),
            exclusive_zone: 0,
            desired_width: 0,
            desired_height: 0,
            keyboard_interactive: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerSurface<H: Handle> {
    pub id: LayerId,
    pub handle: WindowHandle<H>,
    pub monitor: MonitorId,
    /// The layer list this surface currently sits in.
    pub class: LayerClass,
    pub state: LayerState,
    pub geometry: Rect,
    pub mapped: bool,
    /// Set once the surface was asked to close, it is skipped until destroyed.
    pub closed: bool,
    configured: Option<(i32, i32)>,
}

impl<H: Handle> LayerSurface<H> {
    #[must_use]
    pub fn new(
        id: LayerId,
        handle: WindowHandle<H>,
        monitor: MonitorId,
        state: LayerState,
    ) -> Self {
        Self {
            id,
            handle,
            monitor,
            class: state.class,
            state,
            geometry: Rect::default(),
            mapped: false,
            closed: false,
            configured: None,
        }
    }

    /// Records the size about to be sent. Returns `false` when it was sent already.
    pub(crate) fn mark_configured(&mut self, width: i32, height: i32) -> bool {
        if self.configured == Some((width, height)) {
            return false;
        }
        self.configured = Some((width, height));
        true
    }
}
