use super::{ClientId, LayerId, MonitorId};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusBehaviour {
    /// Focus follows the pointer.
    #[default]
    Sloppy,
    ClickTo,
}

impl FocusBehaviour {
    pub fn is_sloppy(self) -> bool {
        self == FocusBehaviour::Sloppy
    }
}

/// A surface that can hold keyboard or pointer focus.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Client(ClientId),
    Layer(LayerId),
}

/// `FocusManager` keeps the three orderings over the mapped, managed clients and what currently
/// holds input focus.
#[derive(Debug, Clone, Default)]
pub struct FocusManager {
    /// Insertion order, the layout engine places clients in this order.
    pub tiling: Vec<ClientId>,
    /// Most recently focused first.
    pub history: VecDeque<ClientId>,
    /// Topmost first.
    pub stacking: VecDeque<ClientId>,
    pub selected_monitor: Option<MonitorId>,
    pub keyboard_focus: Option<FocusTarget>,
    pub pointer_focus: Option<FocusTarget>,
    // configuration, never changed after startup
    pub behaviour: FocusBehaviour,
}

impl FocusManager {
    #[must_use]
    pub fn new(behaviour: FocusBehaviour) -> Self {
        Self {
            behaviour,
            ..Self::default()
        }
    }

    /// Puts a newly mapped client at the head of every ordering.
    pub fn attach(&mut self, id: ClientId) {
        self.detach(id);
        self.tiling.insert(0, id);
        self.history.push_front(id);
        self.stacking.push_front(id);
    }

    pub fn detach(&mut self, id: ClientId) {
        self.tiling.retain(|c| *c != id);
        self.history.retain(|c| *c != id);
        self.stacking.retain(|c| *c != id);
    }

    #[must_use]
    pub fn contains(&self, id: ClientId) -> bool {
        self.tiling.contains(&id)
    }

    /// Moves a client to the top of the stacking order.
    pub fn raise(&mut self, id: ClientId) {
        if let Some(index) = self.stacking.iter().position(|c| *c == id) {
            self.stacking.remove(index);
            self.stacking.push_front(id);
        }
    }

    /// Marks a client as the most recently focused.
    pub fn promote_history(&mut self, id: ClientId) {
        if let Some(index) = self.history.iter().position(|c| *c == id) {
            self.history.remove(index);
            self.history.push_front(id);
        }
    }

    /// Moves a client to the head of the tiling order.
    pub fn promote_tiling(&mut self, id: ClientId) {
        if let Some(index) = self.tiling.iter().position(|c| *c == id) {
            let id = self.tiling.remove(index);
            self.tiling.insert(0, id);
        }
    }

    /// Forgets a surface that no longer accepts focus.
    pub fn forget(&mut self, target: FocusTarget) {
        if self.keyboard_focus == Some(target) {
            self.keyboard_focus = None;
        }
        if self.pointer_focus == Some(target) {
            self.pointer_focus = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with(ids: &[usize]) -> FocusManager {
        let mut manager = FocusManager::default();
        for id in ids {
            manager.attach(ClientId(*id));
        }
        manager
    }

    #[test]
    fn attaching_puts_the_client_first_in_every_order() {
        let manager = manager_with(&[1, 2, 3]);
        assert_eq!(manager.tiling, vec![ClientId(3), ClientId(2), ClientId(1)]);
        assert_eq!(manager.history.front(), Some(&ClientId(3)));
        assert_eq!(manager.stacking.front(), Some(&ClientId(3)));
    }

    #[test]
    fn the_orders_always_share_their_members() {
        let mut manager = manager_with(&[1, 2, 3]);
        manager.raise(ClientId(1));
        manager.promote_history(ClientId(2));
        manager.promote_tiling(ClientId(1));
        manager.detach(ClientId(3));
        let mut tiling = manager.tiling.clone();
        let mut history: Vec<_> = manager.history.iter().copied().collect();
        let mut stacking: Vec<_> = manager.stacking.iter().copied().collect();
        tiling.sort();
        history.sort();
        stacking.sort();
        assert_eq!(tiling, vec![ClientId(1), ClientId(2)]);
        assert_eq!(tiling, history);
        assert_eq!(tiling, stacking);
    }

    #[test]
    fn raising_only_touches_the_stacking_order() {
        let mut manager = manager_with(&[1, 2]);
        manager.raise(ClientId(1));
        assert_eq!(manager.stacking.front(), Some(&ClientId(1)));
        assert_eq!(manager.history.front(), Some(&ClientId(2)));
        assert_eq!(manager.tiling.first(), Some(&ClientId(2)));
    }
}
