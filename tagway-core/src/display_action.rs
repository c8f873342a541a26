use crate::display_event::AxisEvent;
use crate::models::{Handle, OutputHead, Rect, WindowHandle};
use crate::utils::modmask_lookup::ModMask;

/// These are responses from the window manager.
/// The display server should act on these actions.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayAction<H: Handle> {
    /// Ask a surface to take this box (border excluded). Legacy surfaces get a zero serial.
    Configure {
        handle: WindowHandle<H>,
        geometry: Rect,
        serial: u32,
    },
    /// Tell a surface it is tiled on every edge.
    SetTiled(WindowHandle<H>),
    SetFullscreen(WindowHandle<H>, bool),
    SetActivated(WindowHandle<H>, bool),
    /// Nicely ask a surface if it would please close at its convenience.
    SendClose(WindowHandle<H>),
    OutputEnter {
        handle: WindowHandle<H>,
        output: String,
    },
    OutputLeave {
        handle: WindowHandle<H>,
        output: String,
    },

    ConfigureLayerSurface {
        handle: WindowHandle<H>,
        width: i32,
        height: i32,
    },
    CloseLayerSurface(WindowHandle<H>),

    /// Give keyboard focus to a surface, along with the current keyboard state.
    KeyboardEnter(WindowHandle<H>),
    KeyboardClearFocus,
    ForwardKey {
        time: u32,
        keycode: u32,
        pressed: bool,
    },
    ForwardModifiers(ModMask),

    /// Surface local coordinates.
    PointerEnter {
        handle: WindowHandle<H>,
        sx: f64,
        sy: f64,
    },
    /// `None` when the motion was synthesized by the window manager.
    PointerMotion {
        time: Option<u32>,
        sx: f64,
        sy: f64,
    },
    PointerClearFocus,
    ForwardButton {
        time: u32,
        button: u32,
        pressed: bool,
    },
    ForwardAxis(AxisEvent),
    ForwardFrame,
    SetCursorImage(String),
    SetCursorSurface {
        surface: Option<H>,
        hotspot: (i32, i32),
    },
    WarpCursor {
        x: f64,
        y: f64,
    },

    /// Enable a new output with its preferred mode and the given head.
    ConfigureOutput(OutputHead),
    ApplyOutputConfiguration(Vec<OutputHead>),
    OutputConfigurationResult {
        accepted: bool,
    },
    PublishOutputConfiguration(Vec<OutputHead>),

    SetSeatCapabilities {
        pointer: bool,
        keyboard: bool,
    },
    ConfigurePointer {
        tap_to_click: bool,
        natural_scrolling: bool,
    },
    ConfigureKeyboard {
        repeat_rate: i32,
        repeat_delay: i32,
    },
    /// Input happened, reset idle timers.
    NotifyActivity,
    ChangeVt(u32),
}
