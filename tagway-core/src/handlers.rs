//! Reactions to display events and commands, grouped by what they act on.
mod arrange_handler;
mod client_handler;
mod command_handler;
mod display_event_handler;
mod focus_handler;
mod grab_handler;
mod input_handler;
mod layer_handler;
mod screen_handler;
