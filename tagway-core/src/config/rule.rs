use crate::models::{TagMask, Transform};
use serde::{Deserialize, Serialize};

/// Placement of new clients whose app id and title contain the given substrings.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientRule {
    pub app_id: Option<String>,
    pub title: Option<String>,
    pub tags: TagMask,
    pub floating: bool,
    /// Index into the monitor list.
    pub monitor: Option<usize>,
}

impl ClientRule {
    /// A missing pattern matches anything.
    #[must_use]
    pub fn matches(&self, app_id: &str, title: &str) -> bool {
        self.app_id.as_deref().map_or(true, |p| app_id.contains(p))
            && self.title.as_deref().map_or(true, |p| title.contains(p))
    }
}

/// Settings of outputs whose name contains `name`; a rule without a name matches every output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MonitorRule {
    pub name: Option<String>,
    pub mfact: f64,
    pub nmaster: u32,
    pub scale: f64,
    /// Index into the configured layouts.
    pub layout: usize,
    pub transform: Transform,
    /// Position in the layout, the display server decides when absent.
    pub position: Option<(i32, i32)>,
}

impl Default for MonitorRule {
    fn default() -> Self {
        Self {
            name: None,
            mfact: crate::models::DEFAULT_MFACT,
            nmaster: crate::models::DEFAULT_NMASTER,
            scale: 1.0,
            layout: 0,
            transform: Transform::Normal,
            position: None,
        }
    }
}

impl MonitorRule {
    #[must_use]
    pub fn matches(&self, output: &str) -> bool {
        self.name.as_deref().map_or(true, |name| output.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_rules_match_by_substring() {
        let rule = ClientRule {
            app_id: Some("fire".to_string()),
            ..ClientRule::default()
        };
        assert!(rule.matches("firefox", "Mozilla Firefox"));
        assert!(!rule.matches("gimp", "firefox"));
    }

    #[test]
    fn nameless_monitor_rules_match_everything() {
        assert!(MonitorRule::default().matches("HDMI-A-1"));
        let rule = MonitorRule {
            name: Some("eDP".to_string()),
            ..MonitorRule::default()
        };
        assert!(rule.matches("eDP-1"));
        assert!(!rule.matches("DP-1"));
    }
}
