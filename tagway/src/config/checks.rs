use super::{Config, MODKEY};
use crate::utils::log::parse_log_level;
use std::collections::HashMap;
use tagway_core::models::{mask_for_count, Color, MAX_TAGS};

impl Config {
    /// Every problem found in the configuration, as printable messages.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = self.check_tags();
        problems.extend(self.check_rules());
        problems.extend(self.check_keybinds());
        problems.extend(self.check_mousebinds());
        problems.extend(self.check_colors());
        problems.extend(self.check_log_level());
        problems
    }

    pub fn check_tags(&self) -> Vec<String> {
        let mut problems = vec![];
        if self.tags.is_empty() || self.tags.len() > MAX_TAGS {
            problems.push(format!(
                "{} tags are configured, between 1 and {MAX_TAGS} are supported",
                self.tags.len()
            ));
        }
        for (i, tag) in self.tags.iter().enumerate() {
            if tag.trim().is_empty() {
                problems.push(format!("Tag {} has an empty name", i + 1));
            }
        }
        problems
    }

    /// Client rules must stay within the configured tags, monitor rules within sane factors and
    /// the configured layouts.
    pub fn check_rules(&self) -> Vec<String> {
        let mut problems = vec![];
        let all_tags = mask_for_count(self.tags.len());
        for rule in &self.client_rules {
            if rule.tags & !all_tags != 0 {
                problems.push(format!(
                    "Client rule {rule:?} uses tags outside of the {} configured",
                    self.tags.len()
                ));
            }
        }

        let layouts = if self.layouts.is_empty() {
            tagway_core::layouts::Layout::defaults().len()
        } else {
            self.layouts.len()
        };
        for rule in &self.monitor_rules {
            let name = rule.name.as_deref().unwrap_or("*");
            if !(rule.mfact > 0.0 && rule.mfact < 1.0) {
                problems.push(format!(
                    "Monitor rule `{name}` has a master factor of {}, it must be between 0 and 1",
                    rule.mfact
                ));
            }
            if rule.scale <= 0.0 {
                problems.push(format!(
                    "Monitor rule `{name}` has a scale of {}, it must be positive",
                    rule.scale
                ));
            }
            if rule.layout >= layouts {
                problems.push(format!(
                    "Monitor rule `{name}` uses layout {}, only {layouts} are configured",
                    rule.layout
                ));
            }
        }
        problems
    }

    /// Keys and modifiers must resolve, and no combination may be bound twice.
    pub fn check_keybinds(&self) -> Vec<String> {
        let mut problems = vec![];
        let mut bindings = HashMap::new();
        for keybind in &self.keybind {
            if let Err(err) = keybind.try_convert_to_core_keybind(&self.modkey) {
                problems.push(format!("{err} for keybind {keybind:?}"));
                continue;
            }

            let mut modifiers: Vec<&str> = keybind
                .modifier
                .iter()
                .flatten()
                .map(|name| if name == MODKEY { &self.modkey } else { name })
                .map(String::as_str)
                .collect();
            modifiers.sort_unstable();
            let modifier = modifiers.join("+");
            if let Some(conflict) =
                bindings.insert((modifier.clone(), keybind.key.clone()), &keybind.command)
            {
                problems.push(format!(
                    "Multiple commands bound to key combination {modifier} + {}: {conflict:?} and {:?}",
                    keybind.key, keybind.command
                ));
            }
        }
        problems
    }

    pub fn check_mousebinds(&self) -> Vec<String> {
        self.mousebind
            .iter()
            .filter_map(|mousebind| {
                mousebind
                    .try_convert_to_core_mousebind(&self.modkey)
                    .err()
                    .map(|err| format!("{err} for mousebind {mousebind:?}"))
            })
            .collect()
    }

    pub fn check_colors(&self) -> Vec<String> {
        [
            ("border_color", &self.border_color),
            ("focused_border_color", &self.focused_border_color),
            ("background_color", &self.background_color),
        ]
        .into_iter()
        .filter_map(|(field, value)| {
            value
                .parse::<Color>()
                .err()
                .map(|err| format!("{field}: {err}"))
        })
        .collect()
    }

    pub fn check_log_level(&self) -> Option<String> {
        parse_log_level(&self.log_level).is_none().then(|| {
            format!(
                "Log level `{}` is not one of error, warn, info, debug or trace",
                self.log_level
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, Keybind, MODKEY};
    use tagway_core::config::{ClientRule, MonitorRule};
    use tagway_core::Command;

    #[test]
    fn the_default_config_has_no_problems() {
        assert_eq!(Config::default().problems(), Vec::<String>::new());
    }

    #[test]
    fn tag_counts_and_names_are_checked() {
        let config = Config {
            tags: vec![],
            ..Config::default()
        };
        assert_eq!(config.check_tags().len(), 1);

        let config = Config {
            tags: (0..32).map(|i| i.to_string()).collect(),
            ..Config::default()
        };
        assert_eq!(config.check_tags().len(), 1);

        let config = Config {
            tags: vec!["web".to_owned(), " ".to_owned()],
            ..Config::default()
        };
        assert_eq!(config.check_tags(), vec!["Tag 2 has an empty name"]);
    }

    #[test]
    fn rules_outside_the_configuration_are_reported() {
        let config = Config {
            tags: vec!["1".to_owned(), "2".to_owned()],
            client_rules: vec![ClientRule {
                tags: 0b100,
                ..ClientRule::default()
            }],
            monitor_rules: vec![MonitorRule {
                name: Some("eDP".to_owned()),
                mfact: 1.0,
                scale: 0.0,
                layout: 3,
                ..MonitorRule::default()
            }],
            ..Config::default()
        };
        assert_eq!(config.check_rules().len(), 4);
    }

    #[test]
    fn duplicate_and_unknown_keys_are_reported() {
        let config = Config {
            modkey: "Alt".to_owned(),
            keybind: vec![
                Keybind::new(&[MODKEY, "Shift"], "q", Command::Quit),
                Keybind::new(&["Shift", "Alt"], "q", Command::Zoom),
                Keybind::new(&[MODKEY], "NoSuchKey", Command::Zoom),
            ],
            ..Config::default()
        };
        let problems = config.check_keybinds();
        assert_eq!(problems.len(), 2);
        assert!(problems[0]
            .starts_with("Multiple commands bound to key combination Alt+Shift + q"));
        assert!(problems[1].starts_with("Key `NoSuchKey` is not valid"));
    }

    #[test]
    fn bad_colors_and_log_levels_are_reported() {
        let config = Config {
            background_color: "#12345".to_owned(),
            log_level: "tagway=loud".to_owned(),
            ..Config::default()
        };
        assert_eq!(config.check_colors().len(), 1);
        assert!(config.check_log_level().is_some());
    }
}
