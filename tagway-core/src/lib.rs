//! Window management policy for a tag based tiling Wayland compositor.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
mod display_action;
pub mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod scene;
pub mod state;
pub mod status;
pub mod utils;

pub use command::{Command, Direction};
pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::{AxisEvent, ClientInfo, DisplayEvent, InputDevice, LayerInfo};
pub use display_servers::DisplayServer;
pub use models::Manager;
pub use models::Mode;
pub use scene::{OutputScene, SceneElement};
pub use state::State;
pub use status::StatusWriter;
pub use utils::child_process;
