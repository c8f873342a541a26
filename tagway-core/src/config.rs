mod keybind;
mod rule;

pub use keybind::{Keybind, Mousebind};
pub use rule::{ClientRule, MonitorRule};
#[cfg(test)]
pub(crate) use tests::TestConfig;

use crate::layouts::Layout;
use crate::models::{Color, FocusBehaviour};

/// Everything the window management state reads from the user configuration.
pub trait Config {
    fn create_list_of_tag_labels(&self) -> Vec<String>;

    fn client_rules(&self) -> Vec<ClientRule>;

    fn monitor_rules(&self) -> Vec<MonitorRule>;

    /// The first layout is the default of monitors without a rule.
    fn layouts(&self) -> Vec<Layout>;

    fn keybinds(&self) -> Vec<Keybind>;

    fn mousebinds(&self) -> Vec<Mousebind>;

    fn focus_behaviour(&self) -> FocusBehaviour;

    fn border_width(&self) -> i32;
    fn default_border_color(&self) -> Color;
    fn focused_border_color(&self) -> Color;
    fn background_color(&self) -> Color;

    fn natural_scrolling(&self) -> bool;
    fn tap_to_click(&self) -> bool;
    fn repeat_rate(&self) -> i32;
    fn repeat_delay(&self) -> i32;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::modmask_lookup::{ModMask, BTN_LEFT, BTN_RIGHT};
    use crate::{models::GrabKind, Command};

    pub const MOD: ModMask = ModMask::Logo;

    #[allow(clippy::module_name_repetitions)]
    pub struct TestConfig {
        pub tags: Vec<String>,
        pub rules: Vec<ClientRule>,
        pub monitor_rules: Vec<MonitorRule>,
        pub keybinds: Vec<Keybind>,
        pub focus_behaviour: FocusBehaviour,
        pub border_width: i32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                tags: (1..=9).map(|i| i.to_string()).collect(),
                rules: vec![],
                monitor_rules: vec![],
                keybinds: vec![
                    Keybind::new(MOD, 0x71, Command::Quit),
                    Keybind::new(MOD, 0x6a, Command::FocusStack(1)),
                ],
                focus_behaviour: FocusBehaviour::ClickTo,
                border_width: 1,
            }
        }
    }

    impl Config for TestConfig {
        fn create_list_of_tag_labels(&self) -> Vec<String> {
            self.tags.clone()
        }
        fn client_rules(&self) -> Vec<ClientRule> {
            self.rules.clone()
        }
        fn monitor_rules(&self) -> Vec<MonitorRule> {
            self.monitor_rules.clone()
        }
        fn layouts(&self) -> Vec<Layout> {
            Layout::defaults()
        }
        fn keybinds(&self) -> Vec<Keybind> {
            self.keybinds.clone()
        }
        fn mousebinds(&self) -> Vec<Mousebind> {
            vec![
                Mousebind::new(MOD, BTN_LEFT, Command::MoveResize(GrabKind::Move)),
                Mousebind::new(MOD, BTN_RIGHT, Command::MoveResize(GrabKind::Resize)),
            ]
        }
        fn focus_behaviour(&self) -> FocusBehaviour {
            self.focus_behaviour
        }
        fn border_width(&self) -> i32 {
            self.border_width
        }
        fn default_border_color(&self) -> Color {
            Color::rgba(0.5, 0.5, 0.5, 1.0)
        }
        fn focused_border_color(&self) -> Color {
            Color::rgba(1.0, 0.0, 0.0, 1.0)
        }
        fn background_color(&self) -> Color {
            Color::rgba(0.1, 0.1, 0.1, 1.0)
        }
        fn natural_scrolling(&self) -> bool {
            false
        }
        fn tap_to_click(&self) -> bool {
            true
        }
        fn repeat_rate(&self) -> i32 {
            25
        }
        fn repeat_delay(&self) -> i32 {
            600
        }
    }
}
