use crate::models::{ClientId, Handle, MonitorId};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Fits the visible fullscreen clients of a monitor to its full box, then places the
    /// visible tiled clients, in tiling order, using its current layout. Floating layouts leave
    /// every other client where it is.
    pub fn arrange(&mut self, monitor: MonitorId) {
        let Some(m) = self.monitor(monitor) else {
            return;
        };
        let (full, area, mfact, nmaster, arrangement) =
            (m.full, m.usable, m.mfact, m.nmaster, m.layout().arrangement);
        let fullscreen: Vec<ClientId> = self
            .clients
            .values()
            .filter(|c| c.mapped && c.is_fullscreen() && c.is_visible_on(m))
            .map(|c| c.id)
            .collect();
        let tiled: Vec<ClientId> = self
            .focus_manager
            .tiling
            .iter()
            .copied()
            .filter(|id| {
                self.clients
                    .get(*id)
                    .is_some_and(|c| c.is_tiled() && c.is_visible_on(m))
            })
            .collect();

        for id in fullscreen {
            self.resize(id, full, false);
        }

        let Some(rects) = arrangement.apply(area, mfact, nmaster, tiled.len()) else {
            return;
        };
        for (id, rect) in tiled.into_iter().zip(rects) {
            self.resize(id, rect, false);
        }
    }
}
