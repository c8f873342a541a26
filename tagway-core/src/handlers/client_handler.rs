use crate::display_action::DisplayAction;
use crate::display_event::ClientInfo;
use crate::models::{Client, ClientId, ClientKind, FocusTarget, Handle, Mode, MonitorId, Rect};
use crate::models::{TagMask, WindowHandle};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Process a toplevel surface that was just created. It is tracked, but not shown until it
    /// is mapped.
    pub fn client_created_handler(&mut self, info: ClientInfo<H>) -> Option<ClientId> {
        if let Some(id) = self.client_id(&info.handle) {
            tracing::debug!("Surface {:?} is already known", info.handle);
            return Some(id);
        }
        if info.kind.is_legacy() {
            self.drop_visible_fullscreen();
        }
        let border = if info.kind.is_managed() {
            self.border_width
        } else {
            0
        };
        let id = self.clients.insert_with(|id| {
            let mut client = Client::new(id, info.handle, info.kind, border);
            client.app_id = info.app_id;
            client.title = info.title;
            client.prefers_floating = info.prefers_floating;
            client
        });
        Some(id)
    }

    /// Process a surface becoming visible. `surface` is the box it committed, without border.
    pub fn client_mapped_handler(&mut self, handle: &WindowHandle<H>, surface: Rect) -> bool {
        let Some(id) = self.client_id(handle) else {
            tracing::warn!("Map of unknown surface {handle:?}");
            return false;
        };
        let Some(client) = self.clients.get_mut(id) else {
            return false;
        };
        if client.mapped {
            return false;
        }
        client.mapped = true;
        let border = client.border;
        client.geometry = Rect::new(
            surface.x,
            surface.y,
            surface.w + 2 * border,
            surface.h + 2 * border,
        );

        if !client.is_managed() {
            self.independents.push(id);
            return true;
        }

        self.focus_manager.attach(id);
        self.actions.push_back(DisplayAction::SetTiled(*handle));
        self.apply_rules(id);
        true
    }

    /// Process a surface being hidden. It leaves every ordering and its monitor.
    pub fn client_unmapped_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(id) = self.client_id(handle) else {
            return false;
        };
        self.unmap_client(id)
    }

    fn unmap_client(&mut self, id: ClientId) -> bool {
        let grabbed = self.mode.grabbed_client() == Some(id);
        if grabbed {
            self.mode = Mode::Normal;
        }
        let Some(client) = self.clients.get_mut(id) else {
            return false;
        };
        if !client.mapped {
            return false;
        }
        client.mapped = false;

        if client.is_managed() {
            // the surface is going away, it cannot be deactivated anymore
            self.focus_manager.forget(FocusTarget::Client(id));
            self.focus_manager.tiling.retain(|c| *c != id);
            self.set_monitor(id, None, 0);
            self.focus_manager.detach(id);
            self.request_status();
        } else {
            self.independents.retain(|c| *c != id);
            self.focus_manager.forget(FocusTarget::Client(id));
        }

        if grabbed {
            self.actions
                .push_back(DisplayAction::SetCursorImage("left_ptr".to_string()));
            self.motion_notify(None);
        }
        true
    }

    /// Process a surface being destroyed.
    pub fn client_destroyed_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(id) = self.client_id(handle) else {
            return false;
        };
        let changed = self.unmap_client(id);
        if self.mode.grabbed_client() == Some(id) {
            self.mode = Mode::Normal;
        }
        self.focus_manager.forget(FocusTarget::Client(id));
        self.clients.remove(id);
        changed
    }

    /// Process a commit. Once the client acknowledged the last configure the resize is done.
    pub fn client_commit_handler(&mut self, handle: &WindowHandle<H>, acked_serial: u32) -> bool {
        let Some(client) = self
            .client_id(handle)
            .and_then(|id| self.clients.get_mut(id))
        else {
            return false;
        };
        if client.pending_resize != 0 && client.pending_resize <= acked_serial {
            client.pending_resize = 0;
            return true;
        }
        false
    }

    pub fn client_title_handler(
        &mut self,
        handle: &WindowHandle<H>,
        title: Option<String>,
    ) -> bool {
        let Some(id) = self.client_id(handle) else {
            return false;
        };
        let monitor = self.clients.get_mut(id).and_then(|c| {
            c.title = title;
            c.monitor
        });
        if monitor.is_some_and(|m| self.focus_top(m) == Some(id)) {
            self.request_status();
        }
        false
    }

    pub fn client_fullscreen_request_handler(
        &mut self,
        handle: &WindowHandle<H>,
        fullscreen: bool,
    ) -> bool {
        let Some(client) = self.client_id(handle).and_then(|id| self.clients.get(id)) else {
            return false;
        };
        if client.monitor.is_none() || client.is_fullscreen() == fullscreen {
            return false;
        }
        let id = client.id;
        self.set_fullscreen(id, fullscreen);
        true
    }

    /// A client asked for attention. Shell clients become urgent unless selected, legacy
    /// clients get activated.
    pub fn client_activate_request_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(id) = self.client_id(handle) else {
            return false;
        };
        let selected = self.selected_client();
        let Some(client) = self.clients.get_mut(id) else {
            return false;
        };
        match client.kind {
            ClientKind::Shell if selected != Some(id) => {
                client.urgent = true;
                self.request_status();
                true
            }
            ClientKind::LegacyManaged => {
                self.actions
                    .push_back(DisplayAction::SetActivated(*handle, true));
                false
            }
            _ => false,
        }
    }

    /// Legacy surfaces place themselves, the request is passed through.
    pub fn legacy_configure_request_handler(
        &mut self,
        handle: &WindowHandle<H>,
        geometry: Rect,
    ) -> bool {
        let Some(client) = self
            .client_id(handle)
            .and_then(|id| self.clients.get_mut(id))
        else {
            return false;
        };
        if !client.is_managed() {
            client.geometry = geometry;
        }
        self.actions.push_back(DisplayAction::Configure {
            handle: *handle,
            geometry,
            serial: 0,
        });
        !client.is_managed()
    }

    /// Applies every matching placement rule to a freshly mapped client and hands it to a
    /// monitor.
    pub(crate) fn apply_rules(&mut self, id: ClientId) {
        let Some(client) = self.clients.get(id) else {
            return;
        };
        let (app_id, title) = (client.rule_app_id(), client.rule_title());
        let mut floating = client.prefers_floating;
        let mut tags: TagMask = 0;
        let mut monitor = self.focus_manager.selected_monitor;
        for rule in self.rules.iter().filter(|r| r.matches(app_id, title)) {
            floating = rule.floating;
            tags |= rule.tags;
            if let Some(m) = rule.monitor.and_then(|index| self.monitors.get(index)) {
                monitor = Some(m.id);
            }
        }
        let tags = tags & self.tags.mask();
        if let Some(client) = self.clients.get_mut(id) {
            client.set_floating(floating);
        }
        self.set_monitor(id, monitor, tags);
    }

    /// Moves a client to another monitor (or none), on `tags` or the monitor's visible tags
    /// when zero. Both monitors are re-arranged and focus goes to the top of the active one.
    pub fn set_monitor(&mut self, id: ClientId, monitor: Option<MonitorId>, tags: TagMask) {
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        let old = client.monitor;
        if old == monitor {
            return;
        }
        client.monitor = monitor;
        let handle = client.handle;

        if let Some(old) = old.and_then(|m| self.monitor(m)) {
            let (old_id, output) = (old.id, old.output.clone());
            self.actions
                .push_back(DisplayAction::OutputLeave { handle, output });
            self.arrange(old_id);
        }
        if let Some(new) = monitor.and_then(|m| self.monitor(m)) {
            let (new_id, full, output, visible) =
                (new.id, new.full, new.output.clone(), new.active_tags());
            if let Some(client) = self.clients.get_mut(id) {
                let border = client.border;
                client.geometry.apply_bounds(&full, border);
                client.tags = if tags == 0 { visible } else { tags };
            }
            self.actions
                .push_back(DisplayAction::OutputEnter { handle, output });
            self.arrange(new_id);
        }
        let top = self
            .focus_manager
            .selected_monitor
            .and_then(|m| self.focus_top(m));
        self.focus_client(top, true);
    }

    pub fn set_floating(&mut self, id: ClientId, floating: bool) {
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        client.set_floating(floating);
        if let Some(monitor) = client.monitor {
            self.arrange(monitor);
        }
    }

    /// Enters or leaves fullscreen. Leaving restores the geometry the client had before.
    pub fn set_fullscreen(&mut self, id: ClientId, fullscreen: bool) {
        let border_width = self.border_width;
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        client.set_fullscreen(fullscreen);
        client.border = if fullscreen { 0 } else { border_width };
        let (handle, monitor) = (client.handle, client.monitor);
        self.actions
            .push_back(DisplayAction::SetFullscreen(handle, fullscreen));

        if fullscreen {
            client.prev_geometry = client.geometry;
            if let Some(full) = monitor.and_then(|m| self.monitor(m)).map(|m| m.full) {
                self.resize(id, full, false);
            }
        } else {
            let previous = client.prev_geometry;
            self.resize(id, previous, false);
            if let Some(monitor) = monitor {
                self.arrange(monitor);
            }
        }
    }

    /// Sets a client's geometry, kept reachable inside the layout box during interactive grabs
    /// and inside its monitor's usable area otherwise, and tells the surface about its new size.
    pub fn resize(&mut self, id: ClientId, geometry: Rect, interact: bool) {
        let layout_box = self.layout_box;
        let Some(client) = self.clients.get(id) else {
            return;
        };
        let bounds = if interact {
            layout_box
        } else {
            client
                .monitor
                .and_then(|m| self.monitor(m))
                .map_or(layout_box, |m| m.usable)
        };
        if let Some(client) = self.clients.get_mut(id) {
            client.geometry = geometry;
            let border = client.border;
            client.geometry.apply_bounds(&bounds, border);
        }
        self.configure(id);
    }

    /// Sends the surface box of a client unless it was already sent. Shell clients get a serial
    /// to acknowledge, which marks the resize as pending until they do.
    fn configure(&mut self, id: ClientId) {
        let Some(client) = self.clients.get_mut(id) else {
            return;
        };
        let surface = client.surface_geometry();
        if !client.mark_configured(surface) {
            return;
        }
        let (handle, kind) = (client.handle, client.kind);
        let serial = if kind == ClientKind::Shell {
            self.next_serial()
        } else {
            0
        };
        if let Some(client) = self.clients.get_mut(id) {
            client.pending_resize = serial;
        }
        self.actions.push_back(DisplayAction::Configure {
            handle,
            geometry: surface,
            serial,
        });
    }

    fn drop_visible_fullscreen(&mut self) {
        let fullscreen: Vec<ClientId> = self
            .clients
            .values()
            .filter(|c| c.mapped && c.is_fullscreen())
            .filter(|c| c.monitor.is_some_and(|m| self.is_visible_on(c.id, m)))
            .map(|c| c.id)
            .collect();
        for id in fullscreen {
            self.set_fullscreen(id, false);
        }
    }
}
