use bitflags::bitflags;

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ModMask: u32 {
        const Shift = 1;
        const CapsLock = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2, usually num lock
        const Mod2 = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Logo = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

/// Linux input event codes of the mouse buttons.
pub const BTN_LEFT: u32 = 0x110;
pub const BTN_RIGHT: u32 = 0x111;
pub const BTN_MIDDLE: u32 = 0x112;

/// Combines modifier names into a mask. Returns `None` when a name is unknown.
#[must_use]
pub fn into_modmask(keys: &[String]) -> Option<ModMask> {
    keys.iter()
        .try_fold(ModMask::empty(), |mask, key| Some(mask | into_mod(key)?))
}

#[must_use]
pub fn into_mod(key: &str) -> Option<ModMask> {
    match key {
        "None" => Some(ModMask::empty()),
        "Shift" => Some(ModMask::Shift),
        "Control" | "Ctrl" => Some(ModMask::Control),
        "Mod1" | "Alt" => Some(ModMask::Alt),
        "Mod3" => Some(ModMask::Mod3),
        "Mod4" | "Super" | "Logo" => Some(ModMask::Logo),
        "Mod5" => Some(ModMask::Mod5),
        _ => None,
    }
}

/// Drops the lock modifiers, which never take part in binding matches.
#[must_use]
pub fn clean(mask: ModMask) -> ModMask {
    mask.difference(ModMask::CapsLock | ModMask::Mod2)
}

#[must_use]
pub fn into_button(name: &str) -> Option<u32> {
    match name {
        "Left" | "Button1" => Some(BTN_LEFT),
        "Middle" | "Button2" => Some(BTN_MIDDLE),
        "Right" | "Button3" => Some(BTN_RIGHT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_names_combine() {
        let keys = vec!["Logo".to_string(), "Shift".to_string()];
        assert_eq!(into_modmask(&keys), Some(ModMask::Logo | ModMask::Shift));
    }

    #[test]
    fn an_unknown_modifier_fails_the_whole_mask() {
        let keys = vec!["Logo".to_string(), "Hyper".to_string()];
        assert_eq!(into_modmask(&keys), None);
    }

    #[test]
    fn lock_keys_are_cleaned_away() {
        let mask = ModMask::Logo | ModMask::CapsLock | ModMask::Mod2;
        assert_eq!(clean(mask), ModMask::Logo);
    }
}
