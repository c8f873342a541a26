//! Spawned programs and their reaping.
use std::collections::HashMap;
use std::iter::{Extend, FromIterator};
use std::process::{Child, Command, Stdio};
use std::sync::{atomic::AtomicBool, Arc};

pub type ChildID = u32;

/// Programs started through `Spawn` that have not been reaped yet.
#[derive(Debug, Default)]
pub struct Children {
    inner: HashMap<ChildID, Child>,
}

impl Children {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `false` if a child with the same pid is already tracked.
    pub fn insert(&mut self, child: Child) -> bool {
        self.inner.insert(child.id(), child).is_none()
    }

    /// Waits on every finished child so none are left as zombies.
    pub fn remove_finished_children(&mut self) {
        self.inner.retain(|pid, child| match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                tracing::debug!("Child {pid} exited with {status}");
                false
            }
            Err(err) => {
                tracing::warn!("Could not wait on child {pid}: {err}");
                false
            }
        });
    }
}

impl FromIterator<Child> for Children {
    fn from_iter<T: IntoIterator<Item = Child>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().map(|child| (child.id(), child)).collect(),
        }
    }
}

impl Extend<Child> for Children {
    fn extend<T: IntoIterator<Item = Child>>(&mut self, iter: T) {
        self.inner
            .extend(iter.into_iter().map(|child| (child.id(), child)));
    }
}

/// Register the `SIGCHLD` signal handler. Once the signal is received,
/// the flag will be set true. User needs to manually clear the flag.
pub fn register_child_hook(flag: Arc<AtomicBool>) {
    _ = signal_hook::flag::register(signal_hook::consts::signal::SIGCHLD, flag)
        .map_err(|err| tracing::error!("Cannot register SIGCHLD signal handler: {:?}", err));
}

/// Runs `command` through `sh -c` with null stdio and tracks the child.
pub fn exec_shell(command: &str, children: &mut Children) -> Option<ChildID> {
    let child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| tracing::error!("Could not spawn `{command}`: {err}"))
        .ok()?;
    let pid = child.id();
    children.insert(child);
    Some(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_commands_are_tracked_until_reaped() {
        let mut children = Children::new();
        let pid = exec_shell("exit 0", &mut children);
        assert!(pid.is_some());
        assert_eq!(children.len(), 1);

        for _ in 0..200 {
            children.remove_finished_children();
            if children.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(children.is_empty());
    }

    #[test]
    fn running_children_are_kept() {
        let mut children = Children::new();
        let child = Command::new("sleep")
            .arg("5")
            .spawn()
            .expect("sleep should spawn");
        let pid = child.id();
        children.extend(std::iter::once(child));
        children.remove_finished_children();
        assert_eq!(children.len(), 1);

        _ = Command::new("kill").arg(pid.to_string()).status();
        for _ in 0..200 {
            children.remove_finished_children();
            if children.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(children.is_empty());
    }
}
