use crate::config::Config;
use crate::display_event::DisplayEvent;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Process a collection of events, and apply them changes to a manager.
    /// Returns true if changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        let state = &mut self.state;
        match event {
            DisplayEvent::ClientCreate(info) => state.client_created_handler(info).is_some(),
            DisplayEvent::ClientMap(handle, surface) => {
                state.client_mapped_handler(&handle, surface)
            }
            DisplayEvent::ClientUnmap(handle) => state.client_unmapped_handler(&handle),
            DisplayEvent::ClientDestroy(handle) => state.client_destroyed_handler(&handle),
            DisplayEvent::ClientCommit(handle, serial) => {
                state.client_commit_handler(&handle, serial)
            }
            DisplayEvent::ClientTitleChange(handle, title) => {
                state.client_title_handler(&handle, title)
            }
            DisplayEvent::ClientFullscreenRequest(handle, fullscreen) => {
                state.client_fullscreen_request_handler(&handle, fullscreen)
            }
            DisplayEvent::ClientActivateRequest(handle) => {
                state.client_activate_request_handler(&handle)
            }
            DisplayEvent::LegacyConfigureRequest(handle, geometry) => {
                state.legacy_configure_request_handler(&handle, geometry)
            }

            DisplayEvent::LayerCreate(info) => state.layer_created_handler(info),
            DisplayEvent::LayerCommit(handle, layer_state) => {
                state.layer_commit_handler(&handle, layer_state)
            }
            DisplayEvent::LayerMap(handle) => state.layer_mapped_handler(&handle),
            DisplayEvent::LayerUnmap(handle) => state.layer_unmapped_handler(&handle),
            DisplayEvent::LayerDestroy(handle) => state.layer_destroyed_handler(&handle),

            DisplayEvent::ScreenCreate(screen) => state.screen_create_handler(screen),
            DisplayEvent::ScreenRemove(output) => state.screen_remove_handler(&output),
            DisplayEvent::ScreenLayoutChange(screens) => {
                state.screen_layout_change_handler(screens)
            }
            DisplayEvent::OutputConfigurationRequest { heads, test } => {
                state.output_configuration_handler(heads, test)
            }

            DisplayEvent::InputDeviceAdded(device) => {
                state.input_device_added_handler(device);
                false
            }
            DisplayEvent::InputDeviceRemoved(device) => {
                state.input_device_removed_handler(device);
                false
            }

            DisplayEvent::PointerMotion { time, dx, dy } => {
                state.pointer_motion_handler(time, dx, dy)
            }
            DisplayEvent::PointerMotionAbsolute { time, x, y } => {
                state.pointer_motion_absolute_handler(time, x, y)
            }
            DisplayEvent::PointerButton {
                time,
                button,
                pressed,
            } => {
                let before = state.focus_stamp();
                let grabbing = state.mode.grabbed_client().is_some();
                let command = state.button_handler(time, button, pressed);
                let changed = grabbing
                    || self.state.mode.grabbed_client().is_some()
                    || self.state.focus_stamp() != before;
                match command {
                    Some(command) => self.command_handler(&command) || changed,
                    None => changed,
                }
            }
            DisplayEvent::PointerAxis(axis) => {
                state.axis_handler(axis);
                false
            }
            DisplayEvent::PointerFrame => {
                state.frame_handler();
                false
            }
            DisplayEvent::CursorSurfaceRequest {
                requester,
                surface,
                hotspot,
            } => {
                state.cursor_surface_handler(&requester, surface, hotspot);
                false
            }

            DisplayEvent::Key {
                time,
                keycode,
                keysyms,
                pressed,
            } => {
                let commands = state.key_handler(time, keycode, &keysyms, pressed);
                commands
                    .iter()
                    .fold(false, |changed, cmd| self.command_handler(cmd) || changed)
            }
            DisplayEvent::Modifiers(modifiers) => {
                state.modifiers_handler(modifiers);
                false
            }

            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}
