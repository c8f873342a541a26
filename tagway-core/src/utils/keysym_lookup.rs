//! Symbolic key names as used in configuration files, mapped to XKB keysym values.

pub type Keysym = u32;

pub const XKB_KEY_RETURN: Keysym = 0xff0d;
pub const XKB_KEY_TERMINATE_SERVER: Keysym = 0xfed5;
pub const XKB_KEY_XF86SWITCH_VT_1: Keysym = 0x1008_fe01;
pub const XKB_KEY_F1: Keysym = 0xffbe;

/// Resolves a key name. Single printable ASCII characters map onto themselves.
#[must_use]
pub fn into_keysym(name: &str) -> Option<Keysym> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_graphic() {
            return Some(c as Keysym);
        }
    }
    if let Some(number) = name.strip_prefix("XF86Switch_VT_") {
        return vt_keysym(number.parse().ok()?);
    }
    if let Some(number) = name.strip_prefix('F') {
        if let Ok(n) = number.parse::<u32>() {
            return (1..=24).contains(&n).then(|| XKB_KEY_F1 + n - 1);
        }
    }
    let sym = match name {
        "space" => 0x0020,
        "exclam" => 0x0021,
        "quotedbl" => 0x0022,
        "numbersign" => 0x0023,
        "dollar" => 0x0024,
        "percent" => 0x0025,
        "ampersand" => 0x0026,
        "apostrophe" => 0x0027,
        "parenleft" => 0x0028,
        "parenright" => 0x0029,
        "asterisk" => 0x002a,
        "plus" => 0x002b,
        "comma" => 0x002c,
        "minus" => 0x002d,
        "period" => 0x002e,
        "slash" => 0x002f,
        "colon" => 0x003a,
        "semicolon" => 0x003b,
        "less" => 0x003c,
        "equal" => 0x003d,
        "greater" => 0x003e,
        "question" => 0x003f,
        "at" => 0x0040,
        "bracketleft" => 0x005b,
        "backslash" => 0x005c,
        "bracketright" => 0x005d,
        "asciicircum" => 0x005e,
        "underscore" => 0x005f,
        "grave" => 0x0060,
        "braceleft" => 0x007b,
        "bar" => 0x007c,
        "braceright" => 0x007d,
        "asciitilde" => 0x007e,
        "BackSpace" => 0xff08,
        "Tab" => 0xff09,
        "ISO_Left_Tab" => 0xfe20,
        "Return" => XKB_KEY_RETURN,
        "Escape" => 0xff1b,
        "Delete" => 0xffff,
        "Home" => 0xff50,
        "Left" => 0xff51,
        "Up" => 0xff52,
        "Right" => 0xff53,
        "Down" => 0xff54,
        "Prior" | "Page_Up" => 0xff55,
        "Next" | "Page_Down" => 0xff56,
        "End" => 0xff57,
        "Print" => 0xff61,
        "Insert" => 0xff63,
        "Terminate_Server" => XKB_KEY_TERMINATE_SERVER,
        "XF86AudioLowerVolume" => 0x1008_ff11,
        "XF86AudioMute" => 0x1008_ff12,
        "XF86AudioRaiseVolume" => 0x1008_ff13,
        "XF86MonBrightnessUp" => 0x1008_ff02,
        "XF86MonBrightnessDown" => 0x1008_ff03,
        _ => return None,
    };
    Some(sym)
}

/// The keysym switching to virtual terminal `n`.
#[must_use]
pub fn vt_keysym(n: u32) -> Option<Keysym> {
    (1..=12)
        .contains(&n)
        .then(|| XKB_KEY_XF86SWITCH_VT_1 + n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_map_onto_ascii() {
        assert_eq!(into_keysym("j"), Some(0x6a));
        assert_eq!(into_keysym("C"), Some(0x43));
        assert_eq!(into_keysym("1"), Some(0x31));
    }

    #[test]
    fn named_keys_resolve() {
        assert_eq!(into_keysym("Return"), Some(XKB_KEY_RETURN));
        assert_eq!(into_keysym("F12"), Some(0xffc9));
        assert_eq!(into_keysym("XF86Switch_VT_3"), Some(0x1008_fe03));
        assert_eq!(into_keysym("exclam"), Some(0x21));
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(into_keysym("Hyper_Z"), None);
        assert_eq!(into_keysym("F99"), None);
        assert_eq!(into_keysym("XF86Switch_VT_13"), None);
    }
}
