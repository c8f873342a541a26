use crate::utils::keysym_lookup::Keysym;
use crate::utils::modmask_lookup::ModMask;
use crate::Command;

/// A key combination and the command it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Keybind {
    pub modmask: ModMask,
    pub keysym: Keysym,
    pub command: Command,
}

impl Keybind {
    #[must_use]
    pub const fn new(modmask: ModMask, keysym: Keysym, command: Command) -> Self {
        Self {
            modmask,
            keysym,
            command,
        }
    }
}

/// A pointer button combination and the command it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Mousebind {
    pub modmask: ModMask,
    pub button: u32,
    pub command: Command,
}

impl Mousebind {
    #[must_use]
    pub const fn new(modmask: ModMask, button: u32, command: Command) -> Self {
        Self {
            modmask,
            button,
            command,
        }
    }
}
