//! Process handling, key and button lookups, and list helpers.
pub mod child_process;
pub mod helpers;
pub mod keysym_lookup;
pub mod modmask_lookup;
