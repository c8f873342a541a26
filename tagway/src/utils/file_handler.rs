use crate::Config;
use anyhow::{Context, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = "// tagway configuration, every field may be left out.\n\n";

/// The `config.ron` in the `tagway` XDG config directory, which is created if missing.
///
/// # Errors
///
/// Fails if the config directory cannot be determined or created.
pub fn get_default_path() -> Result<PathBuf> {
    BaseDirectories::with_prefix("tagway")?
        .place_config_file("config.ron")
        .context("could not create the config directory")
}

/// Loads the configuration from `path`, or from the default path when none is given.
///
/// A missing default file is created with the built-in defaults.
///
/// # Errors
///
/// Fails if the file cannot be read or does not parse. An explicitly given path must exist.
pub fn load_config_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_owned(),
        None => {
            let path = get_default_path()?;
            if !path.exists() {
                tracing::debug!("Config file not found. Using default config file.");
                let config = Config::default();
                write_to_file(&path, &config)?;
                return Ok(config);
            }
            path
        }
    };

    tracing::debug!("Loading config file '{}'", path.display());
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("could not read '{}'", path.display()))?;
    parse_config(&contents).with_context(|| format!("could not parse '{}'", path.display()))
}

/// # Errors
///
/// Fails when `contents` is not a valid RON configuration.
pub fn parse_config(contents: &str) -> Result<Config> {
    let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    let config = ron.from_str(contents)?;
    Ok(config)
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<()> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(3)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(&config, ron_pretty_conf)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}
