use crate::models::{Handle, LayerState, OutputHead, Rect, Screen, WindowHandle};
use crate::utils::keysym_lookup::Keysym;
use crate::utils::modmask_lookup::ModMask;
use crate::Command;

/// What the display server knows about a new toplevel surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientInfo<H: Handle> {
    pub handle: WindowHandle<H>,
    pub kind: crate::models::ClientKind,
    pub app_id: Option<String>,
    pub title: Option<String>,
    /// Dialogs, splash screens, fixed size windows.
    pub prefers_floating: bool,
}

/// A new layer surface. `output` is the name of the requested output, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerInfo<H: Handle> {
    pub handle: WindowHandle<H>,
    pub output: Option<String>,
    pub state: LayerState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDevice {
    Keyboard,
    Pointer,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisEvent {
    pub time: u32,
    pub vertical: bool,
    pub delta: f64,
    pub delta_discrete: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent<H: Handle> {
    ClientCreate(ClientInfo<H>),
    /// The surface is ready to be shown, with the size it committed.
    ClientMap(WindowHandle<H>, Rect),
    ClientUnmap(WindowHandle<H>),
    ClientDestroy(WindowHandle<H>),
    /// A commit, carrying the last configure serial the client acknowledged.
    ClientCommit(WindowHandle<H>, u32),
    ClientTitleChange(WindowHandle<H>, Option<String>),
    ClientFullscreenRequest(WindowHandle<H>, bool),
    ClientActivateRequest(WindowHandle<H>),
    /// A legacy surface asking for a specific box.
    LegacyConfigureRequest(WindowHandle<H>, Rect),

    LayerCreate(LayerInfo<H>),
    LayerCommit(WindowHandle<H>, LayerState),
    LayerMap(WindowHandle<H>),
    LayerUnmap(WindowHandle<H>),
    LayerDestroy(WindowHandle<H>),

    ScreenCreate(Screen),
    ScreenRemove(String),
    /// The output layout changed, carrying every known output.
    ScreenLayoutChange(Vec<Screen>),
    OutputConfigurationRequest {
        heads: Vec<OutputHead>,
        test: bool,
    },

    InputDeviceAdded(InputDevice),
    InputDeviceRemoved(InputDevice),

    PointerMotion {
        time: u32,
        dx: f64,
        dy: f64,
    },
    /// Position normalised to `0.0..=1.0` over the whole layout.
    PointerMotionAbsolute {
        time: u32,
        x: f64,
        y: f64,
    },
    PointerButton {
        time: u32,
        button: u32,
        pressed: bool,
    },
    PointerAxis(AxisEvent),
    PointerFrame,
    CursorSurfaceRequest {
        requester: WindowHandle<H>,
        surface: Option<H>,
        hotspot: (i32, i32),
    },

    Key {
        time: u32,
        keycode: u32,
        keysyms: Vec<Keysym>,
        pressed: bool,
    },
    Modifiers(ModMask),

    SendCommand(Command),
}
