//! Client Information
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;
use std::hash::Hash;

use super::{Monitor, MonitorId, Rect, TagMask};
use serde::{Deserialize, Serialize};

/// A trait which backend specific surface handles need to implement
pub trait Handle: Debug + Clone + Copy + PartialEq + Eq + Hash + Send + 'static {}

/// A Backend-agnostic handle to a surface used to identify it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle<H>(pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// Stable identity of a client inside the registry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(pub usize);

impl nohash_hasher::IsEnabled for ClientId {}

/// Where a client comes from. Legacy clients are served by the compatibility shim, unmanaged
/// ones (menus, tooltips) place themselves and never take part in layout or focus ordering.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Shell,
    LegacyManaged,
    LegacyUnmanaged,
}

impl ClientKind {
    #[must_use]
    pub const fn is_managed(self) -> bool {
        !matches!(self, Self::LegacyUnmanaged)
    }

    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::LegacyManaged | Self::LegacyUnmanaged)
    }
}

/// Store Client information.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct Client<H: Handle> {
    pub id: ClientId,
    pub handle: WindowHandle<H>,
    pub kind: ClientKind,
    pub app_id: Option<String>,
    pub title: Option<String>,
    /// Outer geometry, border included.
    pub geometry: Rect,
    /// Geometry to restore when leaving fullscreen.
    pub prev_geometry: Rect,
    pub monitor: Option<MonitorId>,
    pub tags: TagMask,
    pub border: i32,
    pub urgent: bool,
    pub mapped: bool,
    /// Set by the display server for dialogs, splash screens and fixed size windows.
    pub prefers_floating: bool,
    /// Serial of the last configure not yet acknowledged, zero when none is outstanding.
    pub pending_resize: u32,
    floating: bool,
    fullscreen: bool,
    configured: Option<Rect>,
}

impl<H: Handle> Client<H> {
    #[must_use]
    pub fn new(id: ClientId, handle: WindowHandle<H>, kind: ClientKind, border: i32) -> Self {
        Self {
            id,
            handle,
            kind,
            app_id: None,
            title: None,
            geometry: Rect::default(),
            prev_geometry: Rect::default(),
            monitor: None,
            tags: 0,
            border,
            urgent: false,
            mapped: false,
            prefers_floating: false,
            pending_resize: 0,
            floating: false,
            fullscreen: false,
            configured: None,
        }
    }

    #[must_use]
    pub const fn is_managed(&self) -> bool {
        self.kind.is_managed()
    }

    #[must_use]
    pub const fn is_floating(&self) -> bool {
        self.floating
    }

    pub fn set_floating(&mut self, value: bool) {
        self.floating = value;
    }

    #[must_use]
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn set_fullscreen(&mut self, value: bool) {
        self.fullscreen = value;
    }

    /// Whether the layout engine decides where this client goes.
    #[must_use]
    pub const fn is_tiled(&self) -> bool {
        !self.floating && !self.fullscreen
    }

    /// Shown on `monitor` when owned by it and sharing a tag with its active tag-set.
    #[must_use]
    pub fn is_visible_on(&self, monitor: &Monitor) -> bool {
        self.monitor == Some(monitor.id) && self.tags & monitor.active_tags() != 0
    }

    /// The surface area inside the border.
    #[must_use]
    pub const fn surface_geometry(&self) -> Rect {
        self.geometry.shrink(self.border)
    }

    /// Records the surface box about to be sent. Returns `false` when it was sent already.
    pub(crate) fn mark_configured(&mut self, surface: Rect) -> bool {
        let changed = match self.configured {
            // Shell clients position themselves through the compositor, only size matters.
            Some(last) if self.kind == ClientKind::Shell => {
                last.w != surface.w || last.h != surface.h
            }
            Some(last) => last != surface,
            None => true,
        };
        if changed {
            self.configured = Some(surface);
        }
        changed
    }

    /// The name rules match the application id against.
    #[must_use]
    pub fn rule_app_id(&self) -> &str {
        self.app_id.as_deref().unwrap_or("broken")
    }

    #[must_use]
    pub fn rule_title(&self) -> &str {
        self.title.as_deref().unwrap_or("broken")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Screen;

    fn monitor() -> Monitor {
        Monitor::new(
            MonitorId(1),
            &Screen::new("DP-1", Rect::new(0, 0, 1920, 1080)),
            None,
            &crate::layouts::Layout::defaults(),
        )
    }

    #[test]
    fn a_client_sharing_an_active_tag_is_visible() {
        let monitor = monitor();
        let mut client = Client::new(ClientId(1), WindowHandle(1), ClientKind::Shell, 1);
        client.monitor = Some(monitor.id);
        client.tags = 0b11;
        assert!(client.is_visible_on(&monitor));
    }

    #[test]
    fn a_client_on_other_tags_is_hidden() {
        let monitor = monitor();
        let mut client = Client::new(ClientId(1), WindowHandle(1), ClientKind::Shell, 1);
        client.monitor = Some(monitor.id);
        client.tags = 0b10;
        assert!(!client.is_visible_on(&monitor));
    }

    #[test]
    fn a_client_of_another_monitor_is_hidden() {
        let monitor = monitor();
        let mut client = Client::new(ClientId(1), WindowHandle(1), ClientKind::Shell, 1);
        client.monitor = Some(MonitorId(2));
        client.tags = 1;
        assert!(!client.is_visible_on(&monitor));
        client.monitor = None;
        assert!(!client.is_visible_on(&monitor));
    }

    #[test]
    fn repeated_configures_of_the_same_size_are_skipped() {
        let mut client = Client::new(ClientId(1), WindowHandle(1), ClientKind::Shell, 1);
        assert!(client.mark_configured(Rect::new(0, 0, 10, 10)));
        assert!(!client.mark_configured(Rect::new(5, 5, 10, 10)));
        assert!(client.mark_configured(Rect::new(5, 5, 20, 10)));
    }
}
