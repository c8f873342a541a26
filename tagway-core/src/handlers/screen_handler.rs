use crate::display_action::DisplayAction;
use crate::errors::{Result, TagwayError};
use crate::models::{ClientId, Handle, Monitor, MonitorId, OutputHead, Rect, Screen};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Process a new output. It is configured from the first matching monitor rule, becomes the
    /// active monitor if there is none, and adopts clients left without a monitor.
    pub fn screen_create_handler(&mut self, screen: Screen) -> bool {
        if self.monitor_by_output(&screen.output).is_some() {
            tracing::debug!("Output {} is already known", screen.output);
            return false;
        }
        let id = self.next_monitor_id();
        let rule = self.monitor_rules.iter().find(|r| r.matches(&screen.output));
        let monitor = Monitor::new(id, &screen, rule, &self.layouts);
        tracing::info!("New output {} at {:?}", monitor.output, monitor.full);
        let full = monitor.full;
        self.actions
            .push_back(DisplayAction::ConfigureOutput(monitor.head()));
        self.monitors.insert(0, monitor);
        self.update_layout_box();

        self.shift_floating_clients_off(id, full);

        let selected_enabled = self.selected_monitor().is_some_and(|m| m.enabled);
        if !selected_enabled && screen.enabled {
            self.focus_manager.selected_monitor = Some(id);
        }
        self.arrange_layers(id);
        self.adopt_orphans();
        self.request_status();
        true
    }

    /// Floating clients of other monitors reaching into a new output are pushed past it.
    fn shift_floating_clients_off(&mut self, monitor: MonitorId, full: Rect) {
        let overlapping: Vec<ClientId> = self
            .clients
            .values()
            .filter(|c| c.mapped && c.is_floating() && c.monitor != Some(monitor))
            .filter(|c| c.geometry.intersects(&full))
            .map(|c| c.id)
            .collect();
        for id in overlapping {
            if let Some(mut geometry) = self.clients.get(id).map(|c| c.geometry) {
                geometry.x += full.w;
                self.resize(id, geometry, true);
            }
        }
    }

    /// Hands every mapped client without a monitor to the active one.
    fn adopt_orphans(&mut self) {
        let Some(selected) = self.focus_manager.selected_monitor else {
            return;
        };
        let orphans: Vec<(ClientId, _)> = self
            .focus_manager
            .tiling
            .iter()
            .filter_map(|id| self.clients.get(*id))
            .filter(|c| c.monitor.is_none())
            .map(|c| (c.id, c.tags))
            .collect();
        for (id, tags) in orphans {
            self.set_monitor(id, Some(selected), tags);
        }
    }

    /// Process an output going away. Its clients move to the active monitor, which is chosen
    /// again if it was the removed one, and its layer surfaces are closed.
    pub fn screen_remove_handler(&mut self, output: &str) -> bool {
        let Some(index) = self.monitors.iter().position(|m| m.output == output) else {
            return false;
        };
        let removed = self.monitors.remove(index);
        tracing::info!("Output {} removed", removed.output);
        self.update_layout_box();
        if self.focus_manager.selected_monitor == Some(removed.id) {
            self.focus_manager.selected_monitor = self.first_enabled_monitor();
        }
        let selected = self.focus_manager.selected_monitor;

        for layer in removed.layers.iter().flatten() {
            if let Some(layer) = self.layers.get_mut(*layer) {
                layer.closed = true;
                self.actions
                    .push_back(DisplayAction::CloseLayerSurface(layer.handle));
            }
        }

        let clients: Vec<ClientId> = self.clients.values().map(|c| c.id).collect();
        for id in clients {
            let Some(client) = self.clients.get(id) else {
                continue;
            };
            let (geometry, tags, owned) = (
                client.geometry,
                client.tags,
                client.monitor == Some(removed.id),
            );
            if client.is_floating() && geometry.x >= removed.full.right() {
                let shifted = Rect {
                    x: geometry.x - removed.full.w,
                    ..geometry
                };
                self.resize(id, shifted, false);
            }
            if owned {
                self.set_monitor(id, selected, tags);
            }
        }

        let top = selected.and_then(|m| self.focus_top(m));
        self.focus_client(top, true);
        self.request_status();
        true
    }

    /// Process a change of the output layout: every monitor takes its new box and state, the
    /// monitors are re-arranged, and the resulting configuration is published.
    pub fn screen_layout_change_handler(&mut self, screens: Vec<Screen>) -> bool {
        for screen in &screens {
            let Some(monitor) = self.monitors.iter_mut().find(|m| m.output == screen.output)
            else {
                tracing::debug!("Layout change for unknown output {}", screen.output);
                continue;
            };
            monitor.enabled = screen.enabled;
            monitor.full = screen.bbox;
            monitor.mode = screen.mode;
            monitor.scale = screen.scale;
            monitor.transform = screen.transform;
        }
        self.update_layout_box();

        if !self.selected_monitor().is_some_and(|m| m.enabled) {
            self.focus_manager.selected_monitor = self.first_enabled_monitor();
        }
        let selected = self.focus_manager.selected_monitor;

        let disabled: Vec<MonitorId> = self
            .monitors
            .iter()
            .filter(|m| !m.enabled)
            .map(|m| m.id)
            .collect();
        if selected.is_some() {
            let stranded: Vec<(ClientId, _)> = self
                .clients
                .values()
                .filter(|c| c.monitor.is_some_and(|m| disabled.contains(&m)))
                .map(|c| (c.id, c.tags))
                .collect();
            for (id, tags) in stranded {
                self.set_monitor(id, selected, tags);
            }
        }

        let enabled: Vec<MonitorId> = self
            .monitors
            .iter()
            .filter(|m| m.enabled)
            .map(|m| m.id)
            .collect();
        for id in enabled {
            self.arrange_layers(id);
            self.arrange(id);
        }
        self.adopt_orphans();
        let top = selected.and_then(|m| self.focus_top(m));
        self.focus_client(top, true);

        let heads = self.monitors.iter().map(Monitor::head).collect();
        self.actions
            .push_back(DisplayAction::PublishOutputConfiguration(heads));
        self.motion_notify(None);
        self.request_status();
        true
    }

    /// Process a request of an output configuration client. A test only answers whether the
    /// configuration would be accepted; an accepted apply is forwarded to the display server.
    pub fn output_configuration_handler(&mut self, heads: Vec<OutputHead>, test: bool) -> bool {
        let accepted = match self.validate_output_configuration(&heads) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Rejecting output configuration: {err}");
                false
            }
        };
        if accepted && !test {
            self.actions
                .push_back(DisplayAction::ApplyOutputConfiguration(heads));
        }
        self.actions
            .push_back(DisplayAction::OutputConfigurationResult { accepted });
        false
    }

    fn validate_output_configuration(&self, heads: &[OutputHead]) -> Result<()> {
        for head in heads {
            if self.monitor_by_output(&head.output).is_none() {
                return Err(TagwayError::UnknownOutput(head.output.clone()));
            }
            if head.scale <= 0.0 {
                return Err(TagwayError::OutputConfig(format!(
                    "{} has a non-positive scale",
                    head.output
                )));
            }
            let has_area = head.mode.is_some_and(|m| m.width > 0 && m.height > 0);
            if head.enabled && !has_area {
                return Err(TagwayError::OutputConfig(format!(
                    "{} is enabled without a mode",
                    head.output
                )));
            }
        }
        Ok(())
    }

    fn first_enabled_monitor(&self) -> Option<MonitorId> {
        self.monitors
            .iter()
            .find(|m| m.enabled)
            .or_else(|| self.monitors.first())
            .map(|m| m.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonitorRule;
    use crate::layouts::Arrangement;
    use crate::models::{Manager, OutputMode, TestManager};

    fn three_screens() -> TestManager {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.add_screen("DP-2", Rect::new(1000, 0, 1000, 800));
        manager.add_screen("DP-3", Rect::new(2000, 0, 1000, 800));
        manager
    }

    fn head(output: &str, enabled: bool, scale: f64) -> OutputHead {
        OutputHead {
            output: output.to_string(),
            enabled,
            mode: Some(OutputMode {
                width: 1000,
                height: 800,
                refresh: 60_000,
            }),
            x: 0,
            y: 0,
            transform: crate::models::Transform::Normal,
            scale,
        }
    }

    #[test]
    fn the_first_monitor_becomes_active_and_is_configured() {
        let mut manager = Manager::new_test(vec![]);
        let first = manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.add_screen("DP-2", Rect::new(1000, 0, 1000, 800));
        assert_eq!(manager.state.focus_manager.selected_monitor, Some(first));
        assert_eq!(manager.state.layout_box, Rect::new(0, 0, 2000, 800));
        let configured = manager
            .state
            .actions
            .iter()
            .filter(|a| matches!(a, DisplayAction::ConfigureOutput(_)))
            .count();
        assert_eq!(configured, 2);
    }

    #[test]
    fn monitor_rules_apply_by_name() {
        let mut manager = Manager::new_test(vec![]);
        manager.state.monitor_rules = vec![MonitorRule {
            name: Some("eDP".to_string()),
            mfact: 0.7,
            nmaster: 2,
            layout: 2,
            ..MonitorRule::default()
        }];
        manager.add_screen("eDP-1", Rect::new(0, 0, 1000, 800));
        manager.add_screen("DP-1", Rect::new(1000, 0, 1000, 800));
        let laptop = manager.state.monitor_by_output("eDP-1").unwrap();
        assert!((laptop.mfact - 0.7).abs() < f64::EPSILON);
        assert_eq!(laptop.nmaster, 2);
        assert_eq!(laptop.layout().arrangement, Arrangement::Monocle);
        let external = manager.state.monitor_by_output("DP-1").unwrap();
        assert_eq!(external.layout().arrangement, Arrangement::Tile);
    }

    #[test]
    fn a_known_output_is_not_added_twice() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        assert!(!manager
            .state
            .screen_create_handler(Screen::new("DP-1", Rect::new(0, 0, 1000, 800))));
        assert_eq!(manager.state.monitors.len(), 1);
    }

    #[test]
    fn removing_a_monitor_reassigns_every_client() {
        let mut manager = three_screens();
        let second = manager.state.monitor_by_output("DP-2").unwrap().id;
        manager.state.focus_manager.selected_monitor = Some(second);
        let ids: Vec<_> = (1..=3).map(|h| manager.map_client(h)).collect();
        manager.state.set_floating(ids[0], true);

        manager.state.screen_remove_handler("DP-2");
        let selected = manager.state.focus_manager.selected_monitor;
        assert!(selected.is_some());
        assert_ne!(selected, Some(second));
        for id in ids {
            assert_eq!(manager.state.clients.get(id).unwrap().monitor, selected);
        }
    }

    #[test]
    fn removing_the_last_monitor_parks_clients_until_the_next_one() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        let id = manager.map_client(1);
        manager.state.screen_remove_handler("DP-1");
        assert_eq!(manager.state.focus_manager.selected_monitor, None);
        assert_eq!(manager.state.clients.get(id).unwrap().monitor, None);

        let monitor = manager.add_screen("HDMI-A-1", Rect::new(0, 0, 800, 600));
        let client = manager.state.clients.get(id).unwrap();
        assert_eq!(client.monitor, Some(monitor));
        assert_eq!(client.geometry, Rect::new(0, 0, 800, 600));
    }

    #[test]
    fn layer_surfaces_of_a_removed_monitor_are_closed() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.state.layer_created_handler(crate::display_event::LayerInfo {
            handle: crate::models::WindowHandle(30),
            output: None,
            state: crate::models::LayerState {
                anchor: crate::models::Anchor::all(),
                ..crate::models::LayerState::default()
            },
        });
        manager.state.actions.clear();
        manager.state.screen_remove_handler("DP-1");
        assert!(manager
            .state
            .actions
            .contains(&DisplayAction::CloseLayerSurface(crate::models::WindowHandle(30))));
    }

    #[test]
    fn moving_an_output_rearranges_it() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        let id = manager.map_client(1);
        manager
            .state
            .screen_layout_change_handler(vec![Screen::new("DP-1", Rect::new(500, 0, 1000, 800))]);
        let monitor = &manager.state.monitors[0];
        assert_eq!(monitor.full, Rect::new(500, 0, 1000, 800));
        assert_eq!(monitor.usable, monitor.full);
        assert_eq!(
            manager.state.clients.get(id).unwrap().geometry,
            Rect::new(500, 0, 1000, 800)
        );
        let published = manager.state.actions.iter().any(|a| {
            matches!(a, DisplayAction::PublishOutputConfiguration(heads) if heads[0].x == 500)
        });
        assert!(published);
    }

    #[test]
    fn fullscreen_clients_follow_their_output() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        let id = manager.map_client(1);
        manager.state.set_fullscreen(id, true);
        let moved = Screen::new("DP-1", Rect::new(500, 0, 1280, 1024));
        manager.state.screen_layout_change_handler(vec![moved]);
        assert_eq!(
            manager.state.clients.get(id).unwrap().geometry,
            Rect::new(500, 0, 1280, 1024)
        );
    }

    #[test]
    fn fullscreen_clients_sent_to_another_output_fill_it() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.add_screen("DP-2", Rect::new(1000, 0, 1920, 1080));
        let id = manager.map_client(1);
        manager.state.set_fullscreen(id, true);
        manager.state.tag_monitor(crate::command::Direction::Right);
        let client = manager.state.clients.get(id).unwrap();
        assert!(client.is_fullscreen());
        assert_eq!(client.geometry, Rect::new(1000, 0, 1920, 1080));
    }

    #[test]
    fn disabling_the_active_output_moves_selection_and_clients() {
        let mut manager = three_screens();
        let first = manager.state.monitor_by_output("DP-1").unwrap().id;
        let id = manager.map_client(1);
        let mut disabled = Screen::new("DP-1", Rect::new(0, 0, 1000, 800));
        disabled.enabled = false;
        manager.state.screen_layout_change_handler(vec![
            disabled,
            Screen::new("DP-2", Rect::new(1000, 0, 1000, 800)),
            Screen::new("DP-3", Rect::new(2000, 0, 1000, 800)),
        ]);
        let selected = manager.state.selected_monitor().unwrap();
        assert_ne!(selected.id, first);
        assert!(selected.enabled);
        assert_eq!(
            manager.state.clients.get(id).unwrap().monitor,
            Some(selected.id)
        );
        assert_eq!(manager.state.layout_box, Rect::new(1000, 0, 2000, 800));
    }

    #[test]
    fn a_new_output_pushes_overlapping_floating_clients_past_it() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        let id = manager.map_client(1);
        manager.state.set_floating(id, true);
        manager.state.resize(id, Rect::new(900, 100, 300, 200), false);
        manager.add_screen("DP-2", Rect::new(1000, 0, 1000, 800));
        assert_eq!(
            manager.state.clients.get(id).unwrap().geometry,
            Rect::new(1900, 100, 300, 200)
        );
    }

    #[test]
    fn a_valid_test_request_is_accepted_without_applying() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.state.actions.clear();
        manager
            .state
            .output_configuration_handler(vec![head("DP-1", true, 2.0)], true);
        let actions: Vec<_> = manager.state.actions.drain(..).collect();
        assert_eq!(
            actions,
            vec![DisplayAction::OutputConfigurationResult { accepted: true }]
        );
    }

    #[test]
    fn an_applied_request_is_forwarded() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.state.actions.clear();
        let heads = vec![head("DP-1", false, 1.0)];
        manager
            .state
            .output_configuration_handler(heads.clone(), false);
        let actions: Vec<_> = manager.state.actions.drain(..).collect();
        assert_eq!(
            actions,
            vec![
                DisplayAction::ApplyOutputConfiguration(heads),
                DisplayAction::OutputConfigurationResult { accepted: true },
            ]
        );
    }

    #[test]
    fn invalid_requests_are_rejected() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        for heads in [
            vec![head("VGA-1", true, 1.0)],
            vec![head("DP-1", true, 0.0)],
            vec![OutputHead {
                mode: None,
                ..head("DP-1", true, 1.0)
            }],
        ] {
            manager.state.actions.clear();
            manager.state.output_configuration_handler(heads, false);
            let actions: Vec<_> = manager.state.actions.drain(..).collect();
            assert_eq!(
                actions,
                vec![DisplayAction::OutputConfigurationResult { accepted: false }]
            );
        }
    }
}
