//! `tagway` general configuration

mod checks;
mod default;
mod keybind;

pub use keybind::{Keybind, Modifier, Mousebind, MODKEY};

use serde::{Deserialize, Serialize};
use tagway_core::config::{ClientRule, MonitorRule};
use tagway_core::layouts::Layout;
use tagway_core::models::{Color, FocusBehaviour};

const BORDER_COLOR: Color = Color::rgba(0.5, 0.5, 0.5, 1.0);
const FOCUSED_BORDER_COLOR: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
const BACKGROUND_COLOR: Color = Color::rgba(0.3, 0.3, 0.3, 1.0);

/// General configuration
///
/// Read from `config.ron`, every field may be left out.
///
/// ```ron
/// #![enable(implicit_some)]
/// (
///     modkey: "Alt",
///     tags: ["web", "code", "chat"],
///     client_rules: [(app_id: "firefox", tags: 1)],
///     keybind: [(command: Spawn("foot"), modifier: ["modkey", "Shift"], key: "Return")],
/// )
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Modifier substituted for `modkey` in bindings.
    pub modkey: String,
    pub tags: Vec<String>,
    /// The first layout is the default one.
    pub layouts: Vec<Layout>,
    pub client_rules: Vec<ClientRule>,
    pub monitor_rules: Vec<MonitorRule>,
    pub keybind: Vec<Keybind>,
    pub mousebind: Vec<Mousebind>,
    pub focus_behaviour: FocusBehaviour,
    pub border_width: i32,
    /// Colors are `#RRGGBB` or `#RRGGBBAA`.
    pub border_color: String,
    pub focused_border_color: String,
    pub background_color: String,
    pub natural_scrolling: bool,
    pub tap_to_click: bool,
    /// Keyboard repeats per second.
    pub repeat_rate: i32,
    /// Milliseconds before a held key repeats.
    pub repeat_delay: i32,
    pub log_level: String,
}

fn parse_color(value: &str, fallback: Color) -> Color {
    value.parse().unwrap_or_else(|err| {
        tracing::warn!("{err}, using the default");
        fallback
    })
}

impl tagway_core::Config for Config {
    fn create_list_of_tag_labels(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn client_rules(&self) -> Vec<ClientRule> {
        self.client_rules.clone()
    }

    fn monitor_rules(&self) -> Vec<MonitorRule> {
        self.monitor_rules.clone()
    }

    fn layouts(&self) -> Vec<Layout> {
        if self.layouts.is_empty() {
            Layout::defaults()
        } else {
            self.layouts.clone()
        }
    }

    fn keybinds(&self) -> Vec<tagway_core::config::Keybind> {
        self.keybind
            .iter()
            .filter_map(|keybind| {
                keybind
                    .try_convert_to_core_keybind(&self.modkey)
                    .map_err(|err| tracing::warn!("Ignoring keybind {keybind:?}: {err}"))
                    .ok()
            })
            .collect()
    }

    fn mousebinds(&self) -> Vec<tagway_core::config::Mousebind> {
        self.mousebind
            .iter()
            .filter_map(|mousebind| {
                mousebind
                    .try_convert_to_core_mousebind(&self.modkey)
                    .map_err(|err| tracing::warn!("Ignoring mousebind {mousebind:?}: {err}"))
                    .ok()
            })
            .collect()
    }

    fn focus_behaviour(&self) -> FocusBehaviour {
        self.focus_behaviour
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn default_border_color(&self) -> Color {
        parse_color(&self.border_color, BORDER_COLOR)
    }

    fn focused_border_color(&self) -> Color {
        parse_color(&self.focused_border_color, FOCUSED_BORDER_COLOR)
    }

    fn background_color(&self) -> Color {
        parse_color(&self.background_color, BACKGROUND_COLOR)
    }

    fn natural_scrolling(&self) -> bool {
        self.natural_scrolling
    }

    fn tap_to_click(&self) -> bool {
        self.tap_to_click
    }

    fn repeat_rate(&self) -> i32 {
        self.repeat_rate
    }

    fn repeat_delay(&self) -> i32 {
        self.repeat_delay
    }
}
