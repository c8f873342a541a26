use super::keybind::{Keybind, Mousebind, MODKEY};
use super::Config;
use tagway_core::config::MonitorRule;
use tagway_core::layouts::Layout;
use tagway_core::models::{FocusBehaviour, GrabKind};
use tagway_core::{Command, Direction};

const TAGS_NUM: u32 = 9;

/// Shifted symbols of the number row, used for the tag keys held with Shift.
const SHIFTED_DIGITS: [&str; TAGS_NUM as usize] = [
    "exclam",
    "at",
    "numbersign",
    "dollar",
    "percent",
    "asciicircum",
    "ampersand",
    "asterisk",
    "parenleft",
];

impl Default for Config {
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        let mut keybind = vec![
            Keybind::new(&[MODKEY], "p", Command::Spawn("wmenu-run".to_owned())),
            Keybind::new(&[MODKEY, "Shift"], "Return", Command::Spawn("foot".to_owned())),
            Keybind::new(&[MODKEY], "j", Command::FocusStack(1)),
            Keybind::new(&[MODKEY], "k", Command::FocusStack(-1)),
            Keybind::new(&[MODKEY], "i", Command::IncNMaster(1)),
            Keybind::new(&[MODKEY], "d", Command::IncNMaster(-1)),
            Keybind::new(&[MODKEY], "h", Command::SetMfact(-0.05)),
            Keybind::new(&[MODKEY], "l", Command::SetMfact(0.05)),
            Keybind::new(&[MODKEY], "Return", Command::Zoom),
            Keybind::new(&[MODKEY], "Tab", Command::View(0)),
            Keybind::new(&[MODKEY, "Shift"], "C", Command::KillClient),
            Keybind::new(&[MODKEY], "t", Command::SetLayout(Some(0))),
            Keybind::new(&[MODKEY], "f", Command::SetLayout(Some(1))),
            Keybind::new(&[MODKEY], "m", Command::SetLayout(Some(2))),
            Keybind::new(&[MODKEY], "space", Command::SetLayout(None)),
            Keybind::new(&[MODKEY, "Shift"], "space", Command::ToggleFloating),
            Keybind::new(&[MODKEY], "e", Command::ToggleFullscreen),
            Keybind::new(&[MODKEY], "0", Command::View(u32::MAX)),
            Keybind::new(&[MODKEY, "Shift"], "parenright", Command::Tag(u32::MAX)),
            Keybind::new(&[MODKEY], "comma", Command::FocusMonitor(Direction::Left)),
            Keybind::new(&[MODKEY], "period", Command::FocusMonitor(Direction::Right)),
            Keybind::new(
                &[MODKEY, "Shift"],
                "less",
                Command::TagMonitor(Direction::Left),
            ),
            Keybind::new(
                &[MODKEY, "Shift"],
                "greater",
                Command::TagMonitor(Direction::Right),
            ),
            Keybind::new(&[MODKEY, "Shift"], "Q", Command::Quit),
            Keybind::new(&["Control", "Alt"], "Terminate_Server", Command::Quit),
        ];

        for (i, shifted) in (0..TAGS_NUM).zip(SHIFTED_DIGITS) {
            let key = (i + 1).to_string();
            let mask = 1 << i;
            keybind.push(Keybind::new(&[MODKEY], &key, Command::View(mask)));
            keybind.push(Keybind::new(
                &[MODKEY, "Control"],
                &key,
                Command::ToggleView(mask),
            ));
            keybind.push(Keybind::new(&[MODKEY, "Shift"], shifted, Command::Tag(mask)));
            keybind.push(Keybind::new(
                &[MODKEY, "Control", "Shift"],
                shifted,
                Command::ToggleTag(mask),
            ));
        }

        // Ctrl-Alt-Fx switches virtual terminals
        for vt in 1..=12 {
            keybind.push(Keybind::new(
                &["Control", "Alt"],
                &format!("XF86Switch_VT_{vt}"),
                Command::ChangeVt(vt),
            ));
        }

        let mousebind = vec![
            Mousebind::new(&[MODKEY], "Left", Command::MoveResize(GrabKind::Move)),
            Mousebind::new(&[MODKEY], "Middle", Command::ToggleFloating),
            Mousebind::new(&[MODKEY], "Right", Command::MoveResize(GrabKind::Resize)),
        ];

        Self {
            modkey: "Logo".to_owned(),
            tags: (1..=TAGS_NUM).map(|i| i.to_string()).collect(),
            layouts: Layout::defaults(),
            client_rules: vec![],
            monitor_rules: vec![MonitorRule::default()],
            keybind,
            mousebind,
            focus_behaviour: FocusBehaviour::Sloppy,
            border_width: 1,
            border_color: "#444444".to_owned(),
            focused_border_color: "#005577".to_owned(),
            background_color: "#222222".to_owned(),
            natural_scrolling: false,
            tap_to_click: true,
            repeat_rate: 25,
            repeat_delay: 600,
            log_level: "info".to_owned(),
        }
    }
}
