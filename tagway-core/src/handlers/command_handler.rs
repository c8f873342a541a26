use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{Handle, Manager, MonitorId, TagMask};
use crate::state::State;
use crate::utils::child_process::exec_shell;
use crate::Command;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Processes a command and invokes the associated function.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        match command {
            Command::Spawn(shell_command) => {
                _ = exec_shell(shell_command, &mut self.children);
                false
            }
            Command::Quit => {
                self.quit();
                false
            }
            _ => self.state.command_handler(command),
        }
    }
}

impl<H: Handle> State<H> {
    /// Processes a command acting on the window management state. Returns whether anything
    /// visible may have changed.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        process_internal(self, command).unwrap_or(false)
    }
}

fn process_internal<H: Handle>(state: &mut State<H>, command: &Command) -> Option<bool> {
    let mask = state.tags.mask();
    match command {
        Command::View(tags) => view(state, tags & mask),
        Command::ToggleView(tags) => toggle_view(state, tags & mask),
        Command::Tag(tags) => tag(state, tags & mask),
        Command::ToggleTag(tags) => toggle_tag(state, tags & mask),
        Command::FocusStack(shift) => Some(state.focus_stack(*shift)),
        Command::Zoom => Some(state.zoom()),
        Command::SetLayout(index) => set_layout(state, *index),
        Command::SetMfact(value) => set_mfact(state, *value),
        Command::IncNMaster(delta) => inc_nmaster(state, *delta),
        Command::KillClient => {
            let handle = state.clients.get(state.selected_client()?)?.handle;
            state.actions.push_back(DisplayAction::SendClose(handle));
            None
        }
        Command::ToggleFloating => {
            let client = state.clients.get(state.selected_client()?)?;
            if client.is_fullscreen() {
                return None;
            }
            let (id, floating) = (client.id, client.is_floating());
            state.set_floating(id, !floating);
            Some(true)
        }
        Command::ToggleFullscreen => {
            let client = state.clients.get(state.selected_client()?)?;
            let (id, fullscreen) = (client.id, client.is_fullscreen());
            state.set_fullscreen(id, !fullscreen);
            Some(true)
        }
        Command::FocusMonitor(direction) => Some(state.focus_monitor(*direction)),
        Command::TagMonitor(direction) => Some(state.tag_monitor(*direction)),
        Command::MoveResize(kind) => Some(state.begin_grab(*kind, 0)),
        Command::ChangeVt(vt) => {
            state.actions.push_back(DisplayAction::ChangeVt(*vt));
            None
        }
        Command::Spawn(_) | Command::Quit => None,
    }
}

fn selected_monitor_id<H: Handle>(state: &State<H>) -> Option<MonitorId> {
    state.selected_monitor().map(|m| m.id)
}

/// Focus the top client of the active monitor, re-arrange it and update the status.
fn refresh<H: Handle>(state: &mut State<H>, monitor: MonitorId) -> Option<bool> {
    let top = state.focus_top(monitor);
    state.focus_client(top, true);
    state.arrange(monitor);
    state.request_status();
    Some(true)
}

fn view<H: Handle>(state: &mut State<H>, tags: TagMask) -> Option<bool> {
    let id = selected_monitor_id(state)?;
    let monitor = state.monitor_mut(id)?;
    if tags == monitor.active_tags() {
        return None;
    }
    monitor.seltags ^= 1;
    if tags != 0 {
        monitor.tagset[monitor.seltags] = tags;
    }
    refresh(state, id)
}

fn toggle_view<H: Handle>(state: &mut State<H>, tags: TagMask) -> Option<bool> {
    let id = selected_monitor_id(state)?;
    let monitor = state.monitor_mut(id)?;
    let tagset = monitor.active_tags() ^ tags;
    if tagset == 0 {
        return None;
    }
    monitor.tagset[monitor.seltags] = tagset;
    refresh(state, id)
}

fn tag<H: Handle>(state: &mut State<H>, tags: TagMask) -> Option<bool> {
    if tags == 0 {
        return None;
    }
    let id = selected_monitor_id(state)?;
    let client = state.selected_client()?;
    state.clients.get_mut(client)?.tags = tags;
    refresh(state, id)
}

fn toggle_tag<H: Handle>(state: &mut State<H>, tags: TagMask) -> Option<bool> {
    let id = selected_monitor_id(state)?;
    let selected = state.selected_client()?;
    let client = state.clients.get_mut(selected)?;
    let new_tags = client.tags ^ tags;
    if new_tags == 0 {
        return None;
    }
    client.tags = new_tags;
    refresh(state, id)
}

/// Switches to the layout at `index` and remembers the current one, or swaps back to the
/// previous layout when `index` is `None`.
fn set_layout<H: Handle>(state: &mut State<H>, index: Option<usize>) -> Option<bool> {
    let layout = match index {
        Some(index) => Some(state.layouts.get(index)?.clone()),
        None => None,
    };
    let id = selected_monitor_id(state)?;
    let monitor = state.monitor_mut(id)?;
    if layout.as_ref() != Some(monitor.layout()) {
        monitor.sellt ^= 1;
    }
    if let Some(layout) = layout {
        monitor.layouts[monitor.sellt] = layout;
    }
    state.arrange(id);
    state.request_status();
    Some(true)
}

/// Values below 1.0 are added to the master fraction, larger ones set it to `value - 1.0`.
fn set_mfact<H: Handle>(state: &mut State<H>, value: f64) -> Option<bool> {
    let id = selected_monitor_id(state)?;
    let monitor = state.monitor_mut(id)?;
    if !monitor.layout().arranges() {
        return None;
    }
    let mfact = if value < 1.0 {
        value + monitor.mfact
    } else {
        value - 1.0
    };
    if !(0.1..=0.9).contains(&mfact) {
        return None;
    }
    monitor.mfact = mfact;
    state.arrange(id);
    Some(true)
}

fn inc_nmaster<H: Handle>(state: &mut State<H>, delta: i32) -> Option<bool> {
    let id = selected_monitor_id(state)?;
    let monitor = state.monitor_mut(id)?;
    let nmaster = i64::from(monitor.nmaster) + i64::from(delta);
    monitor.nmaster = u32::try_from(nmaster.max(0)).unwrap_or(u32::MAX);
    state.arrange(id);
    Some(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Manager, Rect, WindowHandle};

    #[test]
    fn view_switches_and_swaps_back() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        let id = manager.map_client(1);
        manager.state.command_handler(&Command::View(0b10));
        assert_eq!(manager.state.monitors[0].active_tags(), 0b10);
        assert_eq!(manager.state.selected_client(), None);
        manager.state.command_handler(&Command::View(0));
        assert_eq!(manager.state.monitors[0].active_tags(), 1);
        assert_eq!(manager.state.selected_client(), Some(id));
    }

    #[test]
    fn view_ignores_tags_beyond_the_configured_ones() {
        let mut manager = Manager::new_test(vec!["a".to_string(), "b".to_string()]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.state.command_handler(&Command::View(0b111));
        assert_eq!(manager.state.monitors[0].active_tags(), 0b11);
    }

    #[test]
    fn toggle_view_never_empties_the_tagset() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.state.command_handler(&Command::ToggleView(0b100));
        assert_eq!(manager.state.monitors[0].active_tags(), 0b101);
        manager.state.command_handler(&Command::ToggleView(0b101));
        assert_eq!(manager.state.monitors[0].active_tags(), 0b101);
    }

    #[test]
    fn toggle_tag_never_empties_the_client_tags() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        let id = manager.map_client(1);
        manager.state.command_handler(&Command::ToggleTag(0b10));
        assert_eq!(manager.state.clients.get(id).unwrap().tags, 0b11);
        manager.state.command_handler(&Command::ToggleTag(0b11));
        assert_eq!(manager.state.clients.get(id).unwrap().tags, 0b11);
    }

    #[test]
    fn tagging_hides_the_client_and_focuses_the_next() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        let first = manager.map_client(1);
        let second = manager.map_client(2);
        manager.state.command_handler(&Command::Tag(0b1000));
        assert_eq!(manager.state.clients.get(second).unwrap().tags, 0b1000);
        assert_eq!(manager.state.selected_client(), Some(first));
        assert_eq!(
            manager.state.clients.get(first).unwrap().geometry,
            Rect::new(0, 0, 1000, 800)
        );
    }

    #[test]
    fn set_layout_without_index_swaps_with_the_previous() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.state.command_handler(&Command::SetLayout(Some(2)));
        assert_eq!(manager.state.monitors[0].layout().symbol, "[M]");
        manager.state.command_handler(&Command::SetLayout(None));
        assert_eq!(manager.state.monitors[0].layout().symbol, "[]=");
        manager.state.command_handler(&Command::SetLayout(None));
        assert_eq!(manager.state.monitors[0].layout().symbol, "[M]");
        assert!(!manager.state.command_handler(&Command::SetLayout(Some(9))));
    }

    #[test]
    fn mfact_is_relative_below_one_and_bounded() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.state.command_handler(&Command::SetMfact(0.05));
        assert!((manager.state.monitors[0].mfact - 0.6).abs() < 1e-9);
        manager.state.command_handler(&Command::SetMfact(1.3));
        assert!((manager.state.monitors[0].mfact - 0.3).abs() < 1e-9);
        manager.state.command_handler(&Command::SetMfact(-0.25));
        assert!((manager.state.monitors[0].mfact - 0.3).abs() < 1e-9);
        manager.state.command_handler(&Command::SetLayout(Some(1)));
        manager.state.command_handler(&Command::SetMfact(1.5));
        assert!((manager.state.monitors[0].mfact - 0.3).abs() < 1e-9);
    }

    #[test]
    fn nmaster_never_goes_negative() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.state.command_handler(&Command::IncNMaster(-5));
        assert_eq!(manager.state.monitors[0].nmaster, 0);
        manager.state.command_handler(&Command::IncNMaster(2));
        assert_eq!(manager.state.monitors[0].nmaster, 2);
    }

    #[test]
    fn kill_client_asks_the_selected_client_to_close() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.map_client(1);
        manager.state.command_handler(&Command::KillClient);
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::SendClose(WindowHandle(1)))
        );
    }

    #[test]
    fn fullscreen_clients_do_not_toggle_floating() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        let id = manager.map_client(1);
        manager.state.command_handler(&Command::ToggleFloating);
        assert!(manager.state.clients.get(id).unwrap().is_floating());
        manager.state.command_handler(&Command::ToggleFullscreen);
        manager.state.command_handler(&Command::ToggleFloating);
        assert!(manager.state.clients.get(id).unwrap().is_floating());
        assert!(manager.state.clients.get(id).unwrap().is_fullscreen());
    }

    #[test]
    fn quit_is_handled_by_the_manager() {
        let mut manager = Manager::new_test(vec![]);
        assert!(!manager.command_handler(&Command::Quit));
        assert!(manager.quit_requested);
    }

    #[test]
    fn change_vt_is_forwarded() {
        let mut manager = Manager::new_test(vec![]);
        manager.command_handler(&Command::ChangeVt(2));
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::ChangeVt(2))
        );
    }
}
