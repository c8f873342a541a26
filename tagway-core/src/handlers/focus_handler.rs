use crate::command::Direction;
use crate::display_action::DisplayAction;
use crate::models::{ClientId, FocusTarget, Handle, LayerClass, LayerId, MonitorId};
use crate::state::State;
use crate::utils::helpers::relative_find;

/// The part of the focus state a frame shows: which client is on top, which surface has the
/// keyboard and which client gets the focused border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FocusStamp {
    top: Option<ClientId>,
    keyboard: Option<FocusTarget>,
    selected: Option<ClientId>,
}

impl<H: Handle> State<H> {
    pub(crate) fn focus_stamp(&self) -> FocusStamp {
        FocusStamp {
            top: self.focus_manager.stacking.front().copied(),
            keyboard: self.focus_manager.keyboard_focus,
            selected: self.selected_client(),
        }
    }

    /// Gives keyboard focus to a client, or takes it away from everything with `None`. With
    /// `lift` the client is also raised to the top of the stacking order.
    ///
    /// A keyboard interactive layer surface on the top or overlay layer keeps the focus; the
    /// client still becomes the selected one.
    pub fn focus_client(&mut self, client: Option<ClientId>, lift: bool) {
        let old = self.focus_manager.keyboard_focus;
        if let (Some(id), true) = (client, lift) {
            self.focus_manager.raise(id);
        }
        if client.is_some() && old == client.map(FocusTarget::Client) {
            return;
        }

        if let Some(id) = client {
            self.focus_manager.promote_history(id);
            if let Some(c) = self.clients.get_mut(id) {
                c.urgent = false;
                if c.monitor.is_some() {
                    self.focus_manager.selected_monitor = c.monitor;
                }
            }
        }
        self.request_status();

        match old {
            Some(FocusTarget::Layer(layer)) => {
                let keeps_focus = self
                    .layers
                    .get(layer)
                    .is_some_and(|l| l.mapped && l.class.is_above_clients());
                if keeps_focus {
                    return;
                }
            }
            Some(FocusTarget::Client(previous)) => {
                if let Some(previous) = self.clients.get(previous) {
                    self.actions
                        .push_back(DisplayAction::SetActivated(previous.handle, false));
                }
            }
            None => {}
        }

        let Some(handle) = client.and_then(|id| self.clients.get(id)).map(|c| c.handle) else {
            self.focus_manager.keyboard_focus = None;
            self.actions.push_back(DisplayAction::KeyboardClearFocus);
            return;
        };
        self.focus_manager.keyboard_focus = client.map(FocusTarget::Client);
        self.actions.push_back(DisplayAction::KeyboardEnter(handle));
        self.actions
            .push_back(DisplayAction::SetActivated(handle, true));
    }

    /// The most recently focused client visible on `monitor`.
    #[must_use]
    pub fn focus_top(&self, monitor: MonitorId) -> Option<ClientId> {
        let monitor = self.monitor(monitor)?;
        self.focus_manager.history.iter().copied().find(|id| {
            self.clients
                .get(*id)
                .is_some_and(|c| c.is_visible_on(monitor))
        })
    }

    /// The client the user is working with: the most recently focused one, if it is visible on
    /// the active monitor.
    #[must_use]
    pub fn selected_client(&self) -> Option<ClientId> {
        let monitor = self.selected_monitor()?;
        let id = *self.focus_manager.history.front()?;
        self.clients
            .get(id)
            .is_some_and(|c| c.is_visible_on(monitor))
            .then_some(id)
    }

    /// Focuses the next visible client in tiling order, wrapping around at either end.
    pub fn focus_stack(&mut self, shift: i32) -> bool {
        let Some(selected) = self.selected_client() else {
            return false;
        };
        let Some(monitor) = self.focus_manager.selected_monitor else {
            return false;
        };
        let visible: Vec<ClientId> = self
            .focus_manager
            .tiling
            .iter()
            .copied()
            .filter(|id| self.is_visible_on(*id, monitor))
            .collect();
        let Some(next) = relative_find(&visible, |id| *id == selected, shift, true).copied() else {
            return false;
        };
        self.focus_client(Some(next), true);
        true
    }

    /// Moves the selected tiled client to the head of the tiling order. When it is already
    /// there the next tiled client takes its place.
    pub fn zoom(&mut self) -> bool {
        let Some(selected) = self.selected_client() else {
            return false;
        };
        let Some(monitor) = self.selected_monitor() else {
            return false;
        };
        let monitor_id = monitor.id;
        if !monitor.layout().arranges()
            || self.clients.get(selected).map_or(true, |c| c.is_floating())
        {
            return false;
        }
        let mut tiled = self.focus_manager.tiling.iter().copied().filter(|id| {
            self.clients
                .get(*id)
                .is_some_and(|c| !c.is_floating() && c.is_visible_on(monitor))
        });
        let promoted = match tiled.next() {
            Some(first) if first == selected => tiled.next(),
            Some(_) => Some(selected),
            None => None,
        };
        let Some(promoted) = promoted else {
            return false;
        };
        self.focus_manager.promote_tiling(promoted);
        self.focus_client(Some(promoted), true);
        self.arrange(monitor_id);
        true
    }

    /// The nearest enabled monitor in `direction` from the active one. Without one, the
    /// farthest monitor in the other direction, so that moving wraps around.
    #[must_use]
    pub fn monitor_in_direction(&self, direction: Direction) -> Option<MonitorId> {
        let selected = self.selected_monitor()?;
        let reference = selected.full;
        let (x, y) = (f64::from(reference.x), f64::from(reference.y));
        let lies = |dir: Direction, other: &crate::models::Rect| match dir {
            Direction::Left => other.right() <= reference.x,
            Direction::Right => other.x >= reference.right(),
            Direction::Up => other.bottom() <= reference.y,
            Direction::Down => other.y >= reference.bottom(),
        };
        let candidates = |dir: Direction| {
            self.monitors
                .iter()
                .filter(move |m| m.enabled && m.id != selected.id && lies(dir, &m.full))
        };
        let distance = |m: &&crate::models::Monitor| m.full.distance_squared(x, y);

        candidates(direction)
            .min_by(|a, b| distance(a).total_cmp(&distance(b)))
            .or_else(|| {
                candidates(direction.opposite()).max_by(|a, b| distance(a).total_cmp(&distance(b)))
            })
            .map(|m| m.id)
            .or(Some(selected.id))
    }

    pub fn focus_monitor(&mut self, direction: Direction) -> bool {
        let Some(target) = self.monitor_in_direction(direction) else {
            return false;
        };
        if Some(target) == self.focus_manager.selected_monitor {
            return false;
        }
        self.focus_manager.selected_monitor = Some(target);
        let top = self.focus_top(target);
        self.focus_client(top, true);
        true
    }

    /// Sends the selected client to the neighbouring monitor.
    pub fn tag_monitor(&mut self, direction: Direction) -> bool {
        let Some(selected) = self.selected_client() else {
            return false;
        };
        let target = self.monitor_in_direction(direction);
        if target == self.focus_manager.selected_monitor {
            return false;
        }
        self.set_monitor(selected, target, 0);
        true
    }

    /// The topmost managed client under the point.
    #[must_use]
    pub fn client_at(&self, x: f64, y: f64) -> Option<ClientId> {
        self.focus_manager.stacking.iter().copied().find(|id| {
            self.clients.get(*id).is_some_and(|c| {
                c.geometry.contains_point(x, y)
                    && c.monitor.is_some_and(|m| self.is_visible_on(c.id, m))
            })
        })
    }

    /// The most recently mapped unmanaged client under the point.
    #[must_use]
    pub fn independent_at(&self, x: f64, y: f64) -> Option<ClientId> {
        self.independents.iter().rev().copied().find(|id| {
            self.clients
                .get(*id)
                .is_some_and(|c| c.geometry.contains_point(x, y))
        })
    }

    /// The topmost mapped layer surface of `class` under the point, on the monitor containing it.
    #[must_use]
    pub fn layer_at(&self, class: LayerClass, x: f64, y: f64) -> Option<LayerId> {
        let monitor = self
            .monitor_at(x, y)
            .or(self.focus_manager.selected_monitor)?;
        let monitor = self.monitor(monitor)?;
        monitor.layer(class).iter().rev().copied().find(|id| {
            self.layers
                .get(*id)
                .is_some_and(|l| l.mapped && !l.closed && l.geometry.contains_point(x, y))
        })
    }
}
