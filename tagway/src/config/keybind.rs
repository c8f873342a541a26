use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tagway_core::utils::keysym_lookup::into_keysym;
use tagway_core::utils::modmask_lookup::{into_button, into_mod, ModMask};
use tagway_core::Command;

/// Name standing for the configured `modkey` in binding modifiers.
pub const MODKEY: &str = "modkey";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keybind {
    pub command: Command,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    pub fn new(modifier: &[&str], key: &str, command: Command) -> Self {
        Self {
            command,
            modifier: Some(Modifier::from(modifier)),
            key: key.to_owned(),
        }
    }

    /// Resolves key and modifier names.
    ///
    /// # Errors
    ///
    /// Fails when the key or one of the modifiers has no known name.
    pub fn try_convert_to_core_keybind(
        &self,
        modkey: &str,
    ) -> Result<tagway_core::config::Keybind> {
        let keysym =
            into_keysym(&self.key).with_context(|| format!("Key `{}` is not valid", self.key))?;
        let modmask = into_modmask(self.modifier.as_ref(), modkey)?;
        Ok(tagway_core::config::Keybind::new(
            modmask,
            keysym,
            self.command.clone(),
        ))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mousebind {
    pub command: Command,
    pub modifier: Option<Modifier>,
    /// `Left`, `Middle` or `Right`.
    pub button: String,
}

impl Mousebind {
    pub fn new(modifier: &[&str], button: &str, command: Command) -> Self {
        Self {
            command,
            modifier: Some(Modifier::from(modifier)),
            button: button.to_owned(),
        }
    }

    /// # Errors
    ///
    /// Fails when the button or one of the modifiers has no known name.
    pub fn try_convert_to_core_mousebind(
        &self,
        modkey: &str,
    ) -> Result<tagway_core::config::Mousebind> {
        let button = into_button(&self.button)
            .with_context(|| format!("Button `{}` is not valid", self.button))?;
        let modmask = into_modmask(self.modifier.as_ref(), modkey)?;
        Ok(tagway_core::config::Mousebind::new(
            modmask,
            button,
            self.command.clone(),
        ))
    }
}

fn into_modmask(modifier: Option<&Modifier>, modkey: &str) -> Result<ModMask> {
    let Some(modifier) = modifier else {
        return Ok(ModMask::empty());
    };
    modifier.into_iter().try_fold(ModMask::empty(), |mask, name| -> Result<ModMask> {
        let name = if name == MODKEY { modkey } else { name.as_str() };
        let m = into_mod(name).with_context(|| format!("Modifier `{name}` is not valid"))?;
        Ok(mask | m)
    })
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl<'a> IntoIterator for &'a Modifier {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Modifier::Single(m) => std::slice::from_ref(m).iter(),
            Modifier::List(ms) => ms.iter(),
        }
    }
}

impl From<&[&str]> for Modifier {
    fn from(names: &[&str]) -> Self {
        match names {
            [single] => Self::Single((*single).to_owned()),
            names => Self::List(names.iter().map(|&n| n.to_owned()).collect()),
        }
    }
}

impl From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}
