use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::models::Handle;
use crate::state::State;
use crate::status::StatusWriter;
use crate::utils::child_process::Children;
use std::sync::{atomic::AtomicBool, Arc};

/// Maintains current program state.
#[derive(Debug)]
pub struct Manager<H: Handle, C, SERVER> {
    pub state: State<H>,
    pub config: C,
    pub display_server: SERVER,

    pub(crate) children: Children,
    pub(crate) reap_requested: Arc<AtomicBool>,
    pub(crate) quit_requested: bool,
    pub(crate) status: StatusWriter,
}

impl<H, C, SERVER> Manager<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// A manager writing status lines to standard output.
    pub fn new(config: C) -> Self {
        Self::with_status(config, StatusWriter::stdout())
    }

    pub fn with_status(config: C, status: StatusWriter) -> Self {
        let display_server = SERVER::new(&config);

        Self {
            state: State::new(&config),
            config,
            display_server,
            children: Children::default(),
            reap_requested: Arc::default(),
            quit_requested: false,
            status,
        }
    }

    pub fn register_child_hook(&self) {
        crate::child_process::register_child_hook(self.reap_requested.clone());
    }

    /// Leave the event loop after the current iteration.
    pub fn quit(&mut self) {
        self.quit_requested = true;
    }
}

#[cfg(test)]
pub(crate) type TestManager = Manager<
    crate::models::MockHandle,
    crate::config::TestConfig,
    crate::display_servers::MockDisplayServer<crate::models::MockHandle>,
>;

#[cfg(test)]
impl TestManager {
    /// A manager with the test configuration, using `tags` as labels unless empty.
    pub fn new_test(tags: Vec<String>) -> Self {
        let mut config = crate::config::TestConfig::default();
        if !tags.is_empty() {
            config.tags = tags;
        }
        Self::with_status(config, StatusWriter::new(Box::new(std::io::sink())))
    }

    pub fn add_screen(&mut self, output: &str, bbox: crate::models::Rect) -> super::MonitorId {
        self.state
            .screen_create_handler(crate::models::Screen::new(output, bbox));
        self.state
            .monitor_by_output(output)
            .map(|m| m.id)
            .expect("monitor created")
    }

    pub fn create_client(
        &mut self,
        handle: crate::models::MockHandle,
        app_id: Option<&str>,
        title: Option<&str>,
    ) -> super::ClientId {
        self.state
            .client_created_handler(crate::display_event::ClientInfo {
                handle: super::WindowHandle(handle),
                kind: super::ClientKind::Shell,
                app_id: app_id.map(ToString::to_string),
                title: title.map(ToString::to_string),
                prefers_floating: false,
            })
            .expect("client created")
    }

    /// Creates and maps a shell client, returning its id.
    pub fn map_client(&mut self, handle: crate::models::MockHandle) -> super::ClientId {
        self.map_client_at(handle, crate::models::Rect::new(0, 0, 100, 100))
    }

    pub fn map_client_at(
        &mut self,
        handle: crate::models::MockHandle,
        surface: crate::models::Rect,
    ) -> super::ClientId {
        let id = self.create_client(handle, None, None);
        self.state
            .client_mapped_handler(&super::WindowHandle(handle), surface);
        id
    }
}
