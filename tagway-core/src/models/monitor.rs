use super::{LayerClass, LayerId, OutputHead, OutputMode, Rect, Screen, TagMask, Transform};
use crate::config::MonitorRule;
use crate::layouts::Layout;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorId(pub usize);

pub const DEFAULT_MFACT: f64 = 0.55;
pub const DEFAULT_NMASTER: u32 = 1;

/// Window management state of one output.
#[derive(Debug, Clone)]
pub struct Monitor {
    pub id: MonitorId,
    pub output: String,
    pub enabled: bool,
    /// Area of the output in the layout.
    pub full: Rect,
    /// `full` minus the space reserved by exclusive layer surfaces.
    pub usable: Rect,
    /// The current and the previous layout, `sellt` selects the current one.
    pub layouts: [Layout; 2],
    pub sellt: usize,
    /// The visible and the previous tag-set, `seltags` selects the visible one.
    pub tagset: [TagMask; 2],
    pub seltags: usize,
    pub mfact: f64,
    pub nmaster: u32,
    pub scale: f64,
    pub transform: Transform,
    pub mode: Option<OutputMode>,
    /// Layer surfaces per [`LayerClass`], in creation order.
    pub layers: [Vec<LayerId>; 4],
}

impl Monitor {
    /// A monitor for `screen`, configured from the first matching rule.
    #[must_use]
    pub fn new(
        id: MonitorId,
        screen: &Screen,
        rule: Option<&MonitorRule>,
        layouts: &[Layout],
    ) -> Self {
        let layout_at = |index: usize| {
            layouts
                .get(index)
                .or_else(|| layouts.first())
                .cloned()
                .unwrap_or_default()
        };
        let mut full = screen.bbox;
        let layout = layout_at(rule.map_or(0, |r| r.layout));
        let mut monitor = Self {
            id,
            output: screen.output.clone(),
            enabled: screen.enabled,
            full,
            usable: full,
            layouts: [layout.clone(), layout],
            sellt: 0,
            tagset: [1, 1],
            seltags: 0,
            mfact: DEFAULT_MFACT,
            nmaster: DEFAULT_NMASTER,
            scale: screen.scale,
            transform: screen.transform,
            mode: screen.mode,
            layers: Default::default(),
        };
        if let Some(rule) = rule {
            monitor.mfact = rule.mfact;
            monitor.nmaster = rule.nmaster;
            monitor.scale = rule.scale;
            monitor.transform = rule.transform;
            if let Some((x, y)) = rule.position {
                full.x = x;
                full.y = y;
                monitor.full = full;
                monitor.usable = full;
            }
        }
        monitor
    }

    /// The tag-set currently shown.
    #[must_use]
    pub const fn active_tags(&self) -> TagMask {
        self.tagset[self.seltags]
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layouts[self.sellt]
    }

    #[must_use]
    pub fn layer(&self, class: LayerClass) -> &[LayerId] {
        &self.layers[class.index()]
    }

    pub fn layer_mut(&mut self, class: LayerClass) -> &mut Vec<LayerId> {
        &mut self.layers[class.index()]
    }

    /// The state published to output configuration clients.
    #[must_use]
    pub fn head(&self) -> OutputHead {
        OutputHead {
            output: self.output.clone(),
            enabled: self.enabled,
            mode: self.mode,
            x: self.full.x,
            y: self.full.y,
            transform: self.transform,
            scale: self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Arrangement;

    #[test]
    fn a_new_monitor_shows_the_first_tag() {
        let screen = Screen::new("DP-1", Rect::new(0, 0, 800, 600));
        let monitor = Monitor::new(MonitorId(0), &screen, None, &Layout::defaults());
        assert_eq!(monitor.active_tags(), 1);
        assert_eq!(monitor.layout().arrangement, Arrangement::Tile);
        assert_eq!(monitor.usable, monitor.full);
    }

    #[test]
    fn a_rule_sets_layout_factors_and_position() {
        let screen = Screen::new("eDP-1", Rect::new(0, 0, 800, 600));
        let rule = MonitorRule {
            name: Some("eDP".to_string()),
            mfact: 0.6,
            nmaster: 2,
            scale: 2.0,
            layout: 2,
            transform: Transform::Rotate90,
            position: Some((1920, 0)),
        };
        let monitor = Monitor::new(MonitorId(0), &screen, Some(&rule), &Layout::defaults());
        assert_eq!(monitor.layouts[0].arrangement, Arrangement::Monocle);
        assert_eq!(monitor.layouts[1].arrangement, Arrangement::Monocle);
        assert_eq!(monitor.nmaster, 2);
        assert_eq!(monitor.full, Rect::new(1920, 0, 800, 600));
        assert_eq!(monitor.transform, Transform::Rotate90);
    }
}
