use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager};
use std::sync::atomic::Ordering;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Runs until a `Quit` command. Every event is handled to completion before the next one;
    /// the display server then gets the new scenes and the queued actions, and the status lines
    /// are written if they may have changed.
    pub async fn start_event_loop(&mut self) {
        let mut event_buffer = vec![];
        loop {
            self.display_server.flush();

            let mut needs_update = false;
            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                else => {
                    for event in event_buffer.drain(..) {
                        needs_update = self.display_event_handler(event) || needs_update;
                    }
                }
            }

            if needs_update {
                let scenes = self.state.scenes();
                self.display_server.update_scene(scenes);
            }

            // preform any actions requested by the handlers
            while let Some(act) = self.state.actions.pop_front() {
                if let Some(event) = self.display_server.execute_action(act) {
                    event_buffer.push(event);
                }
            }

            if std::mem::take(&mut self.state.status_requested) {
                let lines = self.state.status_lines();
                if let Err(err) = self.status.write(lines) {
                    tracing::error!("Could not write status: {err}");
                }
            }

            if self.reap_requested.swap(false, Ordering::SeqCst) {
                self.children.remove_finished_children();
            }

            if self.quit_requested {
                tracing::info!("Quitting");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::display_event::ClientInfo;
    use crate::models::{ClientKind, Manager, Rect, Screen, WindowHandle};
    use crate::utils::modmask_lookup::BTN_LEFT;
    use crate::{Command, DisplayAction, DisplayEvent, SceneElement};

    fn create(handle: i32) -> DisplayEvent<i32> {
        DisplayEvent::ClientCreate(ClientInfo {
            handle: WindowHandle(handle),
            kind: ClientKind::Shell,
            app_id: None,
            title: None,
            prefers_floating: false,
        })
    }

    #[tokio::test]
    async fn events_are_dispatched_until_quit() {
        let mut manager = Manager::new_test(vec![]);
        manager.display_server.events = vec![
            DisplayEvent::ScreenCreate(Screen::new("DP-1", Rect::new(0, 0, 1000, 800))),
            DisplayEvent::ClientCreate(ClientInfo {
                handle: WindowHandle(1),
                kind: ClientKind::Shell,
                app_id: None,
                title: Some("shell".to_string()),
                prefers_floating: false,
            }),
            DisplayEvent::ClientMap(WindowHandle(1), Rect::new(0, 0, 200, 200)),
            DisplayEvent::SendCommand(Command::Quit),
        ]
        .into();

        manager.start_event_loop().await;

        assert!(manager.display_server.events.is_empty());
        assert!(manager.state.actions.is_empty());
        assert!(manager
            .display_server
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::Configure { .. })));
        assert_eq!(manager.display_server.scenes.len(), 1);
        assert_eq!(manager.status.last()[0], "DP-1 title shell");
    }

    #[tokio::test]
    async fn a_click_redraws_with_the_new_focus() {
        let mut manager = Manager::new_test(vec![]);
        manager.display_server.events = vec![
            DisplayEvent::ScreenCreate(Screen::new("DP-1", Rect::new(0, 0, 1000, 800))),
            create(1),
            DisplayEvent::ClientMap(WindowHandle(1), Rect::new(0, 0, 200, 200)),
            create(2),
            DisplayEvent::ClientMap(WindowHandle(2), Rect::new(0, 0, 200, 200)),
            // the first client sits in the stack column on the right
            DisplayEvent::PointerMotionAbsolute {
                time: 1,
                x: 0.75,
                y: 0.5,
            },
            DisplayEvent::PointerButton {
                time: 2,
                button: BTN_LEFT,
                pressed: true,
            },
            DisplayEvent::SendCommand(Command::Quit),
        ]
        .into();

        manager.start_event_loop().await;

        let first = manager.state.client_id(&WindowHandle(1));
        assert_eq!(manager.state.selected_client(), first);
        let focused = manager.state.focused_border_color;
        let elements = &manager.display_server.scenes[0].elements;
        let (last, borders) = elements.split_last().unwrap();
        assert!(matches!(last, SceneElement::Surface { handle, .. } if *handle == WindowHandle(1)));
        assert!(borders[borders.len() - 4..]
            .iter()
            .all(|e| matches!(e, SceneElement::Rect { color, .. } if *color == focused)));
    }
}
