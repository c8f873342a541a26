//! What every output shows, back to front, in output-relative and scaled coordinates.
use crate::models::{Color, Handle, LayerClass, Monitor, Rect, WindowHandle};
use crate::state::State;

#[derive(Debug, Clone, PartialEq)]
pub enum SceneElement<H: Handle> {
    Surface { handle: WindowHandle<H>, rect: Rect },
    Rect { rect: Rect, color: Color },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputScene<H: Handle> {
    pub output: String,
    pub background: Color,
    /// Set while a visible tiled client has not caught up with its last configure. The previous
    /// frame stays on screen instead of showing a half arranged layout.
    pub hold_frame: bool,
    pub elements: Vec<SceneElement<H>>,
}

impl<H: Handle> State<H> {
    #[must_use]
    pub fn scenes(&self) -> Vec<OutputScene<H>> {
        self.monitors
            .iter()
            .filter(|m| m.enabled)
            .map(|m| self.scene(m))
            .collect()
    }

    fn scene(&self, monitor: &Monitor) -> OutputScene<H> {
        let place = |rect: Rect| rect.relative_to(&monitor.full).scaled(monitor.scale);
        let mut elements = vec![];

        let push_layer = |elements: &mut Vec<SceneElement<H>>, class: LayerClass| {
            for layer in monitor
                .layer(class)
                .iter()
                .filter_map(|id| self.layers.get(*id))
                .filter(|l| l.mapped && !l.closed)
            {
                elements.push(SceneElement::Surface {
                    handle: layer.handle,
                    rect: place(layer.geometry),
                });
            }
        };
        push_layer(&mut elements, LayerClass::Background);
        push_layer(&mut elements, LayerClass::Bottom);

        let selected = self.selected_client();
        for client in self
            .focus_manager
            .stacking
            .iter()
            .rev()
            .filter_map(|id| self.clients.get(*id))
            .filter(|c| c.monitor.is_some_and(|m| self.is_visible_on(c.id, m)))
            .filter(|c| c.geometry.intersects(&monitor.full))
        {
            let color = if selected == Some(client.id) {
                self.focused_border_color
            } else {
                self.border_color
            };
            for rect in border_rects(client.geometry, client.border) {
                elements.push(SceneElement::Rect {
                    rect: place(rect),
                    color,
                });
            }
            elements.push(SceneElement::Surface {
                handle: client.handle,
                rect: place(client.surface_geometry()),
            });
        }

        for client in self
            .independents
            .iter()
            .filter_map(|id| self.clients.get(*id))
            .filter(|c| c.geometry.intersects(&monitor.full))
        {
            elements.push(SceneElement::Surface {
                handle: client.handle,
                rect: place(client.geometry),
            });
        }

        push_layer(&mut elements, LayerClass::Top);
        push_layer(&mut elements, LayerClass::Overlay);

        let hold_frame = self.clients.values().any(|c| {
            c.pending_resize != 0 && !c.is_floating() && c.is_visible_on(monitor)
        });

        OutputScene {
            output: monitor.output.clone(),
            background: self.background_color,
            hold_frame,
            elements,
        }
    }
}

/// Top, bottom, left and right edges of a box with a border.
fn border_rects(geometry: Rect, border: i32) -> Vec<Rect> {
    if border <= 0 {
        return vec![];
    }
    let Rect { x, y, w, h } = geometry;
    let side = h - 2 * border;
    vec![
        Rect::new(x, y, w, border),
        Rect::new(x, y + h - border, w, border),
        Rect::new(x, y + border, border, side),
        Rect::new(x + w - border, y + border, border, side),
    ]
}
