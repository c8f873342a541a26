use crate::display_action::DisplayAction;
use crate::display_event::LayerInfo;
use crate::models::{
    Anchor, FocusTarget, Handle, LayerClass, LayerId, LayerState, LayerSurface, MonitorId, Rect,
    WindowHandle,
};
use crate::state::State;

impl<H: Handle> State<H> {
    /// Partitions a monitor between its layer surfaces. Exclusive surfaces are placed first,
    /// front to back, each shrinking the usable area; the tiled clients are re-arranged when the
    /// usable area changed; then the other surfaces are placed inside what is left. Finally the
    /// topmost keyboard interactive surface on the overlay or top layer takes keyboard focus.
    pub fn arrange_layers(&mut self, monitor: MonitorId) {
        let Some(full) = self.monitor(monitor).map(|m| m.full) else {
            return;
        };
        let mut usable = full;
        for class in LayerClass::ARRANGE_ORDER {
            self.arrange_layer(monitor, class, &mut usable, true);
        }

        if let Some(m) = self.monitor_mut(monitor) {
            if m.usable != usable {
                m.usable = usable;
                self.arrange(monitor);
            }
        }

        for class in LayerClass::ARRANGE_ORDER {
            self.arrange_layer(monitor, class, &mut usable, false);
        }

        self.focus_interactive_layer(monitor);
    }

    /// Places the surfaces of one layer whose exclusive zone is positive (`exclusive`) or not.
    /// A surface left without area is closed.
    pub fn arrange_layer(
        &mut self,
        monitor: MonitorId,
        class: LayerClass,
        usable: &mut Rect,
        exclusive: bool,
    ) {
        let Some(m) = self.monitor(monitor) else {
            return;
        };
        let full = m.full;
        let ids = m.layer(class).to_vec();

        for id in ids {
            let Some(layer) = self.layers.get_mut(id) else {
                continue;
            };
            let state = layer.state;
            if layer.closed || exclusive != (state.exclusive_zone > 0) {
                continue;
            }
            let bounds = if state.exclusive_zone == -1 {
                full
            } else {
                *usable
            };

            let Some(geometry) = place(&state, &bounds).and_then(|b| b.intersection(&full)) else {
                tracing::debug!("Closing layer surface {:?} without area", layer.handle);
                layer.closed = true;
                self.actions
                    .push_back(DisplayAction::CloseLayerSurface(layer.handle));
                continue;
            };

            layer.geometry = geometry;
            if state.exclusive_zone > 0 {
                reserve_exclusive_zone(usable, &state);
            }
            if layer.mark_configured(geometry.w, geometry.h) {
                self.actions.push_back(DisplayAction::ConfigureLayerSurface {
                    handle: layer.handle,
                    width: geometry.w,
                    height: geometry.h,
                });
            }
        }
    }

    fn focus_interactive_layer(&mut self, monitor: MonitorId) {
        let Some(m) = self.monitor(monitor) else {
            return;
        };
        let interactive = [LayerClass::Overlay, LayerClass::Top]
            .into_iter()
            .find_map(|class| {
                m.layer(class).iter().rev().copied().find(|id| {
                    self.layers.get(*id).is_some_and(|l| {
                        l.mapped && !l.closed && l.state.keyboard_interactive
                    })
                })
            });
        let Some(id) = interactive else {
            return;
        };
        if self.focus_manager.keyboard_focus == Some(FocusTarget::Layer(id)) {
            return;
        }
        let Some(handle) = self.layers.get(id).map(|l| l.handle) else {
            return;
        };
        self.focus_client(None, false);
        self.focus_manager.keyboard_focus = Some(FocusTarget::Layer(id));
        self.actions.push_back(DisplayAction::KeyboardEnter(handle));
    }

    /// Process a new layer surface. It goes to the requested output, or the active one.
    pub fn layer_created_handler(&mut self, info: LayerInfo<H>) -> bool {
        let monitor = info
            .output
            .as_deref()
            .and_then(|output| self.monitor_by_output(output))
            .map(|m| m.id)
            .or(self.focus_manager.selected_monitor);
        let Some(monitor) = monitor else {
            tracing::debug!("No output for layer surface {:?}", info.handle);
            self.actions
                .push_back(DisplayAction::CloseLayerSurface(info.handle));
            return false;
        };
        let class = info.state.class;
        let id = self
            .layers
            .insert_with(|id| LayerSurface::new(id, info.handle, monitor, info.state));
        if let Some(m) = self.monitor_mut(monitor) {
            m.layer_mut(class).push(id);
        }
        self.arrange_layers(monitor);
        true
    }

    /// Process a commit of new layer state. A changed layer class moves the surface to the
    /// matching list.
    pub fn layer_commit_handler(&mut self, handle: &WindowHandle<H>, state: LayerState) -> bool {
        let Some(id) = self.layer_id(handle) else {
            return false;
        };
        let Some(layer) = self.layers.get_mut(id) else {
            return false;
        };
        let old_class = layer.class;
        layer.state = state;
        layer.class = state.class;
        let monitor = layer.monitor;
        if old_class != state.class {
            if let Some(m) = self.monitor_mut(monitor) {
                m.layer_mut(old_class).retain(|l| *l != id);
                m.layer_mut(state.class).push(id);
            }
        }
        self.arrange_layers(monitor);
        true
    }

    pub fn layer_mapped_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(id) = self.layer_id(handle) else {
            return false;
        };
        let Some(layer) = self.layers.get_mut(id) else {
            return false;
        };
        layer.mapped = true;
        let monitor = layer.monitor;
        if let Some(output) = self.monitor(monitor).map(|m| m.output.clone()) {
            self.actions.push_back(DisplayAction::OutputEnter {
                handle: *handle,
                output,
            });
        }
        self.motion_notify(None);
        true
    }

    /// Process a layer surface being hidden. Keyboard focus it held returns to the selected
    /// client.
    pub fn layer_unmapped_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(id) = self.layer_id(handle) else {
            return false;
        };
        self.unmap_layer(id)
    }

    fn unmap_layer(&mut self, id: LayerId) -> bool {
        let Some(layer) = self.layers.get_mut(id) else {
            return false;
        };
        if !layer.mapped {
            return false;
        }
        layer.mapped = false;
        if self.focus_manager.pointer_focus == Some(FocusTarget::Layer(id)) {
            self.focus_manager.pointer_focus = None;
        }
        if self.focus_manager.keyboard_focus == Some(FocusTarget::Layer(id)) {
            let selected = self.selected_client();
            self.focus_client(selected, true);
        }
        self.motion_notify(None);
        true
    }

    pub fn layer_destroyed_handler(&mut self, handle: &WindowHandle<H>) -> bool {
        let Some(id) = self.layer_id(handle) else {
            return false;
        };
        self.unmap_layer(id);
        self.focus_manager.forget(FocusTarget::Layer(id));
        let Some(layer) = self.layers.remove(id) else {
            return false;
        };
        if let Some(m) = self.monitor_mut(layer.monitor) {
            m.layer_mut(layer.class).retain(|l| *l != id);
        }
        self.arrange_layers(layer.monitor);
        true
    }
}

/// Box of a layer surface inside `bounds`, `None` when it ends up without area.
fn place(state: &LayerState, bounds: &Rect) -> Option<Rect> {
    let anchor = state.anchor;
    let margins = state.margins;
    let horizontal = Anchor::LEFT | Anchor::RIGHT;
    let vertical = Anchor::TOP | Anchor::BOTTOM;
    let mut b = Rect::new(0, 0, state.desired_width, state.desired_height);

    if anchor.contains(horizontal) && b.w == 0 {
        b.x = bounds.x;
        b.w = bounds.w;
    } else if anchor.contains(Anchor::LEFT) {
        b.x = bounds.x;
    } else if anchor.contains(Anchor::RIGHT) {
        b.x = bounds.right() - b.w;
    } else {
        b.x = bounds.x + bounds.w / 2 - b.w / 2;
    }

    if anchor.contains(vertical) && b.h == 0 {
        b.y = bounds.y;
        b.h = bounds.h;
    } else if anchor.contains(Anchor::TOP) {
        b.y = bounds.y;
    } else if anchor.contains(Anchor::BOTTOM) {
        b.y = bounds.bottom() - b.h;
    } else {
        b.y = bounds.y + bounds.h / 2 - b.h / 2;
    }

    if anchor.contains(horizontal) {
        b.x += margins.left;
        b.w -= margins.left + margins.right;
    } else if anchor.contains(Anchor::LEFT) {
        b.x += margins.left;
    } else if anchor.contains(Anchor::RIGHT) {
        b.x -= margins.right;
    }

    if anchor.contains(vertical) {
        b.y += margins.top;
        b.h -= margins.top + margins.bottom;
    } else if anchor.contains(Anchor::TOP) {
        b.y += margins.top;
    } else if anchor.contains(Anchor::BOTTOM) {
        b.y -= margins.bottom;
    }

    (b.w > 0 && b.h > 0).then_some(b)
}

#[derive(Clone, Copy)]
enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Shrinks `usable` along the single edge a surface is anchored to (optionally stretched along
/// it). Surfaces anchored to a corner or to every edge reserve nothing.
fn reserve_exclusive_zone(usable: &mut Rect, state: &LayerState) {
    let horizontal = Anchor::LEFT | Anchor::RIGHT;
    let vertical = Anchor::TOP | Anchor::BOTTOM;
    let margins = state.margins;
    let edges = [
        (Edge::Top, Anchor::TOP, margins.top),
        (Edge::Bottom, Anchor::BOTTOM, margins.bottom),
        (Edge::Left, Anchor::LEFT, margins.left),
        (Edge::Right, Anchor::RIGHT, margins.right),
    ];
    for (edge, single, margin) in edges {
        let across = match edge {
            Edge::Top | Edge::Bottom => horizontal,
            Edge::Left | Edge::Right => vertical,
        };
        let reserved = state.exclusive_zone + margin;
        if !(state.anchor == single || state.anchor == single | across) || reserved <= 0 {
            continue;
        }
        match edge {
            Edge::Top => {
                usable.y += reserved;
                usable.h -= reserved;
            }
            Edge::Bottom => usable.h -= reserved,
            Edge::Left => {
                usable.x += reserved;
                usable.w -= reserved;
            }
            Edge::Right => usable.w -= reserved,
        }
        return;
    }
}
