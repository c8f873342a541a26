//! Status lines for external bars, one line per monitor and field:
//!
//! ```text
//! DP-1 title Terminal
//! DP-1 selmon 1
//! DP-1 tags 5 1 1 0
//! DP-1 layout []=
//! ```
//!
//! `tags` carries the occupied, visible, selected client's and urgent tag masks.
use crate::errors::Result;
use crate::models::{Handle, TagMask};
use crate::state::State;
use std::fmt;
use std::io::Write;

impl<H: Handle> State<H> {
    #[must_use]
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.monitors.len() * 4);
        for monitor in &self.monitors {
            let name = &monitor.output;
            let (mut occupied, mut urgent): (TagMask, TagMask) = (0, 0);
            for client in self
                .focus_manager
                .tiling
                .iter()
                .filter_map(|id| self.clients.get(*id))
                .filter(|c| c.monitor == Some(monitor.id))
            {
                occupied |= client.tags;
                if client.urgent {
                    urgent |= client.tags;
                }
            }

            let top = self
                .focus_top(monitor.id)
                .and_then(|id| self.clients.get(id));
            let selected = top.map_or(0, |c| c.tags);
            let title = top.map_or("", |c| c.rule_title());
            let is_selected = self.focus_manager.selected_monitor == Some(monitor.id);

            lines.push(format!("{name} title {title}"));
            lines.push(format!("{name} selmon {}", u8::from(is_selected)));
            lines.push(format!(
                "{name} tags {occupied} {} {selected} {urgent}",
                monitor.active_tags()
            ));
            lines.push(format!("{name} layout {}", monitor.layout().symbol));
        }
        lines
    }
}

/// Writes status lines, skipping a batch identical to the previous one.
pub struct StatusWriter {
    output: Box<dyn Write>,
    last: Vec<String>,
}

impl StatusWriter {
    pub fn new(output: Box<dyn Write>) -> Self {
        Self {
            output,
            last: vec![],
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// The last batch that was written.
    #[must_use]
    pub fn last(&self) -> &[String] {
        &self.last
    }

    /// Returns whether anything was written.
    ///
    /// # Errors
    ///
    /// When the output cannot be written to or flushed.
    pub fn write(&mut self, lines: Vec<String>) -> Result<bool> {
        if lines == self.last {
            return Ok(false);
        }
        for line in &lines {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()?;
        self.last = lines;
        Ok(true)
    }
}

impl fmt::Debug for StatusWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusWriter")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Manager, Rect, WindowHandle};
    use crate::Command;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn an_empty_monitor_reports_no_title_and_its_layout() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        assert_eq!(
            manager.state.status_lines(),
            vec![
                "DP-1 title ".to_string(),
                "DP-1 selmon 1".to_string(),
                "DP-1 tags 0 1 0 0".to_string(),
                "DP-1 layout []=".to_string(),
            ]
        );
    }

    #[test]
    fn tags_report_occupied_selected_and_urgent_masks() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        let first = manager.create_client(1, None, Some("editor"));
        manager
            .state
            .client_mapped_handler(&WindowHandle(1), Rect::new(0, 0, 10, 10));
        manager.state.command_handler(&Command::Tag(0b100));
        manager.map_client(2);
        manager.state.clients.get_mut(first).unwrap().urgent = true;
        let lines = manager.state.status_lines();
        assert_eq!(lines[0], "DP-1 title broken");
        assert_eq!(lines[2], "DP-1 tags 5 1 1 4");
    }

    #[test]
    fn only_the_active_monitor_is_selected() {
        let mut manager = Manager::new_test(vec![]);
        manager.add_screen("DP-1", Rect::new(0, 0, 1000, 800));
        manager.add_screen("HDMI-A-1", Rect::new(1000, 0, 1000, 800));
        let lines = manager.state.status_lines();
        assert!(lines.contains(&"DP-1 selmon 1".to_string()));
        assert!(lines.contains(&"HDMI-A-1 selmon 0".to_string()));
    }

    #[test]
    fn identical_batches_are_written_once() {
        let buffer = SharedBuffer::default();
        let mut writer = StatusWriter::new(Box::new(buffer.clone()));
        let lines = vec!["DP-1 selmon 1".to_string()];
        assert!(writer.write(lines.clone()).unwrap());
        assert!(!writer.write(lines).unwrap());
        assert!(writer.write(vec!["DP-1 selmon 0".to_string()]).unwrap());
        let written = String::from_utf8(buffer.0.borrow().clone()).unwrap();
        assert_eq!(written, "DP-1 selmon 1\nDP-1 selmon 0\n");
    }
}
