//! The window management state and the lookups every handler shares.

use crate::config::{ClientRule, Config, Keybind, MonitorRule, Mousebind};
use crate::layouts::Layout;
use crate::models::{
    Client, ClientId, Color, Cursor, FocusManager, Handle, LayerId, LayerSurface, Mode, Monitor,
    MonitorId, Rect, Registry, Tags, WindowHandle,
};
use crate::utils::modmask_lookup::ModMask;
use crate::DisplayAction;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct State<H: Handle> {
    pub clients: Registry<ClientId, Client<H>>,
    /// Mapped unmanaged clients, oldest first.
    pub independents: Vec<ClientId>,
    pub layers: Registry<LayerId, LayerSurface<H>>,
    /// Most recently added first.
    pub monitors: Vec<Monitor>,
    pub focus_manager: FocusManager,
    pub mode: Mode,
    pub cursor: Cursor,
    pub modifiers: ModMask,
    /// The box around every enabled output.
    pub layout_box: Rect,
    pub actions: VecDeque<DisplayAction<H>>,
    pub tags: Tags,
    pub layouts: Vec<Layout>,
    pub rules: Vec<ClientRule>,
    pub monitor_rules: Vec<MonitorRule>,
    pub keybinds: Vec<Keybind>,
    pub mousebinds: Vec<Mousebind>,
    pub border_width: i32,
    pub border_color: Color,
    pub focused_border_color: Color,
    pub background_color: Color,
    pub natural_scrolling: bool,
    pub tap_to_click: bool,
    pub repeat_rate: i32,
    pub repeat_delay: i32,
    pub keyboards: usize,
    /// Set whenever the status lines may have changed.
    pub status_requested: bool,
    next_serial: u32,
    next_monitor: usize,
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        let mut layouts = config.layouts();
        if layouts.is_empty() {
            layouts = Layout::defaults();
        }
        Self {
            clients: Registry::new(),
            independents: vec![],
            layers: Registry::new(),
            monitors: vec![],
            focus_manager: FocusManager::new(config.focus_behaviour()),
            mode: Mode::Normal,
            cursor: Cursor::default(),
            modifiers: ModMask::empty(),
            layout_box: Rect::default(),
            actions: VecDeque::new(),
            tags: Tags::new(config.create_list_of_tag_labels()),
            layouts,
            rules: config.client_rules(),
            monitor_rules: config.monitor_rules(),
            keybinds: config.keybinds(),
            mousebinds: config.mousebinds(),
            border_width: config.border_width(),
            border_color: config.default_border_color(),
            focused_border_color: config.focused_border_color(),
            background_color: config.background_color(),
            natural_scrolling: config.natural_scrolling(),
            tap_to_click: config.tap_to_click(),
            repeat_rate: config.repeat_rate(),
            repeat_delay: config.repeat_delay(),
            keyboards: 0,
            status_requested: false,
            next_serial: 0,
            next_monitor: 0,
        }
    }

    #[must_use]
    pub fn client_id(&self, handle: &WindowHandle<H>) -> Option<ClientId> {
        self.clients
            .iter()
            .find(|(_, c)| &c.handle == handle)
            .map(|(id, _)| *id)
    }

    #[must_use]
    pub fn layer_id(&self, handle: &WindowHandle<H>) -> Option<LayerId> {
        self.layers
            .iter()
            .find(|(_, l)| &l.handle == handle)
            .map(|(id, _)| *id)
    }

    #[must_use]
    pub fn monitor(&self, id: MonitorId) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.id == id)
    }

    pub fn monitor_mut(&mut self, id: MonitorId) -> Option<&mut Monitor> {
        self.monitors.iter_mut().find(|m| m.id == id)
    }

    #[must_use]
    pub fn monitor_by_output(&self, output: &str) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.output == output)
    }

    #[must_use]
    pub fn selected_monitor(&self) -> Option<&Monitor> {
        self.monitor(self.focus_manager.selected_monitor?)
    }

    /// The enabled monitor containing the point.
    #[must_use]
    pub fn monitor_at(&self, x: f64, y: f64) -> Option<MonitorId> {
        self.monitors
            .iter()
            .find(|m| m.enabled && m.full.contains_point(x, y))
            .map(|m| m.id)
    }

    /// Whether `client` is shown on `monitor`. Missing objects are never visible.
    #[must_use]
    pub fn is_visible_on(&self, client: ClientId, monitor: MonitorId) -> bool {
        match (self.clients.get(client), self.monitor(monitor)) {
            (Some(client), Some(monitor)) => client.is_visible_on(monitor),
            _ => false,
        }
    }

    pub(crate) fn next_monitor_id(&mut self) -> MonitorId {
        self.next_monitor += 1;
        MonitorId(self.next_monitor)
    }

    /// Serial for the next configure, never zero.
    pub(crate) fn next_serial(&mut self) -> u32 {
        self.next_serial = self.next_serial.wrapping_add(1).max(1);
        self.next_serial
    }

    pub(crate) fn request_status(&mut self) {
        self.status_requested = true;
    }

    pub(crate) fn update_layout_box(&mut self) {
        self.layout_box = self
            .monitors
            .iter()
            .filter(|m| m.enabled)
            .fold(Rect::default(), |acc, m| acc.union(&m.full));
    }
}
