use crate::display_action::DisplayAction;
use crate::display_event::{AxisEvent, InputDevice};
use crate::models::{FocusTarget, Handle, LayerClass, WindowHandle};
use crate::state::State;
use crate::utils::keysym_lookup::Keysym;
use crate::utils::modmask_lookup::{clean, ModMask};
use crate::Command;

impl<H: Handle> State<H> {
    /// Re-evaluates what is under the cursor. `time` is `None` when nothing moved and the scene
    /// changed underneath instead, which never changes the focus.
    pub fn motion_notify(&mut self, time: Option<u32>) {
        let (x, y) = (self.cursor.x, self.cursor.y);
        if time.is_some() {
            self.actions.push_back(DisplayAction::NotifyActivity);
            if self.focus_manager.behaviour.is_sloppy() {
                if let Some(monitor) = self.monitor_at(x, y) {
                    self.focus_manager.selected_monitor = Some(monitor);
                }
            }
        }
        if self.grab_motion() {
            return;
        }

        let Some((target, handle, origin_x, origin_y)) = self.surface_at(x, y) else {
            if self.focus_manager.pointer_focus.take().is_some() {
                self.actions.push_back(DisplayAction::PointerClearFocus);
                self.actions
                    .push_back(DisplayAction::SetCursorImage("left_ptr".to_string()));
            }
            return;
        };
        let (sx, sy) = (x - f64::from(origin_x), y - f64::from(origin_y));
        if self.focus_manager.pointer_focus == Some(target) {
            self.actions
                .push_back(DisplayAction::PointerMotion { time, sx, sy });
            return;
        }

        self.focus_manager.pointer_focus = Some(target);
        self.actions
            .push_back(DisplayAction::PointerEnter { handle, sx, sy });
        if let (FocusTarget::Client(id), Some(_)) = (target, time) {
            let managed = self.clients.get(id).is_some_and(|c| c.is_managed());
            if managed && self.focus_manager.behaviour.is_sloppy() {
                self.focus_client(Some(id), false);
            }
        }
    }

    /// The surface under the point with its origin: overlay and top layers, unmanaged surfaces,
    /// clients from the top of the stack, then bottom and background layers.
    fn surface_at(&self, x: f64, y: f64) -> Option<(FocusTarget, WindowHandle<H>, i32, i32)> {
        let layer = |class: LayerClass| {
            let id = self.layer_at(class, x, y)?;
            let layer = self.layers.get(id)?;
            Some((
                FocusTarget::Layer(id),
                layer.handle,
                layer.geometry.x,
                layer.geometry.y,
            ))
        };
        let client = |id: Option<_>| {
            let client = self.clients.get(id?)?;
            let surface = client.surface_geometry();
            Some((
                FocusTarget::Client(client.id),
                client.handle,
                surface.x,
                surface.y,
            ))
        };

        layer(LayerClass::Overlay)
            .or_else(|| layer(LayerClass::Top))
            .or_else(|| client(self.independent_at(x, y)))
            .or_else(|| client(self.client_at(x, y)))
            .or_else(|| layer(LayerClass::Bottom))
            .or_else(|| layer(LayerClass::Background))
    }

    /// Relative pointer motion, kept inside the layout. Returns whether a grab moved a client or
    /// the focus changed.
    pub fn pointer_motion_handler(&mut self, time: u32, dx: f64, dy: f64) -> bool {
        let before = self.focus_stamp();
        self.cursor.x += dx;
        self.cursor.y += dy;
        let layout = self.layout_box;
        if !layout.is_empty() {
            self.cursor.x = self
                .cursor
                .x
                .clamp(f64::from(layout.x), f64::from(layout.right() - 1));
            self.cursor.y = self
                .cursor
                .y
                .clamp(f64::from(layout.y), f64::from(layout.bottom() - 1));
        }
        self.motion_notify(Some(time));
        self.mode != crate::models::Mode::Normal || self.focus_stamp() != before
    }

    /// Absolute pointer motion, `x` and `y` spanning the whole layout.
    pub fn pointer_motion_absolute_handler(&mut self, time: u32, x: f64, y: f64) -> bool {
        let before = self.focus_stamp();
        let layout = self.layout_box;
        self.cursor.x = f64::from(layout.x) + x * f64::from(layout.w);
        self.cursor.y = f64::from(layout.y) + y * f64::from(layout.h);
        self.motion_notify(Some(time));
        self.mode != crate::models::Mode::Normal || self.focus_stamp() != before
    }

    /// A pointer button. A press focuses the client under the cursor and may run a mouse
    /// binding, which is returned unless it started a grab. Anything not consumed is forwarded.
    pub fn button_handler(&mut self, time: u32, button: u32, pressed: bool) -> Option<Command> {
        self.actions.push_back(DisplayAction::NotifyActivity);
        if pressed {
            if let Some(id) = self.client_at(self.cursor.x, self.cursor.y) {
                self.focus_client(Some(id), true);
            }
            let modifiers = clean(self.modifiers);
            let bound = self
                .mousebinds
                .iter()
                .find(|b| b.button == button && clean(b.modmask) == modifiers)
                .map(|b| b.command.clone());
            match bound {
                Some(Command::MoveResize(kind)) => {
                    self.begin_grab(kind, button);
                    return None;
                }
                Some(command) => return Some(command),
                None => {}
            }
        } else if self
            .mode
            .grab_button()
            .is_some_and(|grab| grab == 0 || grab == button)
        {
            self.end_grab();
            return None;
        }
        self.actions.push_back(DisplayAction::ForwardButton {
            time,
            button,
            pressed,
        });
        None
    }

    pub fn axis_handler(&mut self, event: AxisEvent) {
        self.actions.push_back(DisplayAction::NotifyActivity);
        self.actions.push_back(DisplayAction::ForwardAxis(event));
    }

    pub fn frame_handler(&mut self) {
        self.actions.push_back(DisplayAction::ForwardFrame);
    }

    /// A key press or release. Every keysym the key produces is matched against the key
    /// bindings; the commands of all matches are returned. Unbound keys go to the focused
    /// surface.
    pub fn key_handler(
        &mut self,
        time: u32,
        keycode: u32,
        keysyms: &[Keysym],
        pressed: bool,
    ) -> Vec<Command> {
        self.actions.push_back(DisplayAction::NotifyActivity);
        let modifiers = clean(self.modifiers);
        let commands: Vec<Command> = if pressed {
            keysyms
                .iter()
                .flat_map(|sym| {
                    self.keybinds
                        .iter()
                        .filter(move |k| k.keysym == *sym && clean(k.modmask) == modifiers)
                })
                .map(|k| k.command.clone())
                .collect()
        } else {
            vec![]
        };
        if commands.is_empty() {
            self.actions.push_back(DisplayAction::ForwardKey {
                time,
                keycode,
                pressed,
            });
        }
        commands
    }

    pub fn modifiers_handler(&mut self, modifiers: ModMask) {
        self.modifiers = modifiers;
        self.actions
            .push_back(DisplayAction::ForwardModifiers(modifiers));
    }

    /// A client asked for its own cursor image. Only the surface under the pointer may, and not
    /// during a grab.
    pub fn cursor_surface_handler(
        &mut self,
        requester: &WindowHandle<H>,
        surface: Option<H>,
        hotspot: (i32, i32),
    ) {
        if self.mode != crate::models::Mode::Normal {
            return;
        }
        let focused = match self.focus_manager.pointer_focus {
            Some(FocusTarget::Client(id)) => self.clients.get(id).map(|c| c.handle),
            Some(FocusTarget::Layer(id)) => self.layers.get(id).map(|l| l.handle),
            None => None,
        };
        if focused.as_ref() == Some(requester) {
            self.actions
                .push_back(DisplayAction::SetCursorSurface { surface, hotspot });
        }
    }

    pub fn input_device_added_handler(&mut self, device: InputDevice) {
        match device {
            InputDevice::Keyboard => {
                self.keyboards += 1;
                self.actions.push_back(DisplayAction::ConfigureKeyboard {
                    repeat_rate: self.repeat_rate,
                    repeat_delay: self.repeat_delay,
                });
            }
            InputDevice::Pointer => {
                self.actions.push_back(DisplayAction::ConfigurePointer {
                    tap_to_click: self.tap_to_click,
                    natural_scrolling: self.natural_scrolling,
                });
            }
            InputDevice::Other => {
                tracing::debug!("Ignoring input device of unknown class");
                return;
            }
        }
        self.publish_capabilities();
    }

    pub fn input_device_removed_handler(&mut self, device: InputDevice) {
        if device == InputDevice::Keyboard {
            self.keyboards = self.keyboards.saturating_sub(1);
            self.publish_capabilities();
        }
    }

    fn publish_capabilities(&mut self) {
        self.actions.push_back(DisplayAction::SetSeatCapabilities {
            pointer: true,
            keyboard: self.keyboards > 0,
        });
    }
}
