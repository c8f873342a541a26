use super::Config;
use super::DisplayEvent;
use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::models::Handle;
use crate::scene::OutputScene;
use std::collections::VecDeque;

/// Replays queued events and records everything it is told.
pub struct MockDisplayServer<H: Handle> {
    pub events: VecDeque<DisplayEvent<H>>,
    pub actions: Vec<DisplayAction<H>>,
    pub scenes: Vec<OutputScene<H>>,
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Self {
        Self {
            events: VecDeque::new(),
            actions: vec![],
            scenes: vec![],
        }
    }

    // one event per wake up, like a socket delivering them one by one
    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        self.events.pop_front().into_iter().collect()
    }

    fn update_scene(&mut self, scenes: Vec<OutputScene<H>>) {
        self.scenes = scenes;
    }

    fn execute_action(&mut self, act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        self.actions.push(act);
        None
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        Box::pin(futures::future::ready(()))
    }

    fn flush(&self) {}
}
