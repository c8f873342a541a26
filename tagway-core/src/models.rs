//! Objects (such as clients and monitors) the window management state is made of.
mod client;
mod color;
mod focus_manager;
mod layer_surface;
mod manager;
mod mode;
mod monitor;
mod rect;
mod registry;
mod screen;
mod tag;

pub use client::{Client, ClientId, ClientKind, Handle, WindowHandle};
#[cfg(test)]
pub(crate) use client::MockHandle;
pub use color::{Color, ParseColorError};
pub use focus_manager::{FocusBehaviour, FocusManager, FocusTarget};
pub use layer_surface::{Anchor, LayerClass, LayerId, LayerState, LayerSurface, Margins};
pub use manager::Manager;
#[cfg(test)]
pub(crate) use manager::TestManager;
pub use mode::{Cursor, GrabKind, Mode};
pub use monitor::{Monitor, MonitorId, DEFAULT_MFACT, DEFAULT_NMASTER};
pub use rect::Rect;
pub use registry::{Registry, RegistryKey};
pub use screen::{OutputHead, OutputMode, Screen, Transform};
pub use tag::{mask_for_count, TagMask, Tags, MAX_TAGS};
