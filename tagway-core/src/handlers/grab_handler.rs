use crate::display_action::DisplayAction;
use crate::models::{GrabKind, Handle, Mode, Rect};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Starts moving or resizing the managed client under the cursor. The grab lasts until
    /// `button` is released; a zero button is ended by any release.
    pub fn begin_grab(&mut self, kind: GrabKind, button: u32) -> bool {
        if self.mode != Mode::Normal {
            return false;
        }
        let Some(id) = self.client_at(self.cursor.x, self.cursor.y) else {
            return false;
        };
        if self.clients.get(id).map_or(true, |c| c.is_fullscreen()) {
            return false;
        }
        self.set_floating(id, true);
        let Some(geometry) = self.clients.get(id).map(|c| c.geometry) else {
            return false;
        };

        match kind {
            GrabKind::Move => {
                self.mode = Mode::Moving {
                    client: id,
                    button,
                    grab_x: self.cursor.x as i32 - geometry.x,
                    grab_y: self.cursor.y as i32 - geometry.y,
                };
                self.actions
                    .push_back(DisplayAction::SetCursorImage("fleur".to_string()));
            }
            GrabKind::Resize => {
                self.mode = Mode::Resizing { client: id, button };
                self.cursor.x = f64::from(geometry.right());
                self.cursor.y = f64::from(geometry.bottom());
                self.actions.push_back(DisplayAction::WarpCursor {
                    x: self.cursor.x,
                    y: self.cursor.y,
                });
                self.actions.push_back(DisplayAction::SetCursorImage(
                    "bottom_right_corner".to_string(),
                ));
            }
        }
        true
    }

    /// Follows the cursor with the grabbed client. Returns `false` when no grab is active.
    pub(crate) fn grab_motion(&mut self) -> bool {
        let (x, y) = (self.cursor.x as i32, self.cursor.y as i32);
        match self.mode {
            Mode::Normal => false,
            Mode::Moving {
                client,
                grab_x,
                grab_y,
                ..
            } => {
                if let Some(g) = self.clients.get(client).map(|c| c.geometry) {
                    self.resize(client, Rect::new(x - grab_x, y - grab_y, g.w, g.h), true);
                }
                true
            }
            Mode::Resizing { client, .. } => {
                if let Some(g) = self.clients.get(client).map(|c| c.geometry) {
                    self.resize(client, Rect::new(g.x, g.y, x - g.x, y - g.y), true);
                }
                true
            }
        }
    }

    /// Ends the grab: the client belongs to the monitor under the cursor from now on. Pointer
    /// focus is dropped and picked again for whatever is under the cursor.
    pub fn end_grab(&mut self) -> bool {
        let Some(id) = self.mode.grabbed_client() else {
            return false;
        };
        self.mode = Mode::Normal;
        self.actions
            .push_back(DisplayAction::SetCursorImage("left_ptr".to_string()));
        if let Some(monitor) = self.monitor_at(self.cursor.x, self.cursor.y) {
            self.focus_manager.selected_monitor = Some(monitor);
        }
        let monitor = self.focus_manager.selected_monitor;
        self.set_monitor(id, monitor, 0);
        self.focus_manager.pointer_focus = None;
        self.actions.push_back(DisplayAction::PointerClearFocus);
        self.motion_notify(None);
        true
    }
}
