use anyhow::{bail, Result};
use clap::{arg, command};
use std::path::PathBuf;
use tagway::utils::file_handler::{get_default_path, load_config_file};

fn main() -> Result<()> {
    let matches = command!("tagway-check")
        .about("Checks syntax and values of the configuration file")
        .help_template(tagway::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs the received configuration."),
            arg!([INPUT] "Sets the input file to use. Uses the default config path otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tagway version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    if verbose {
        match &config_file {
            Some(path) => println!("Using file {}", path.display()),
            None => println!("Using file {}", get_default_path()?.display()),
        }
    }
    let config = match load_config_file(config_file.as_deref()) {
        Ok(config) => {
            tagway::utils::log::setup_logging(&config.log_level);
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {err:#} \x1b[0m");
            bail!("configuration failed to load");
        }
    };
    if verbose {
        dbg!(&config);
    }

    println!("\x1b[0;94m::\x1b[0m Checking configuration values . . .");
    let problems = config.problems();
    for problem in &problems {
        println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {problem} \x1b[0m");
    }
    if problems.is_empty() {
        println!("\x1b[0;92m    -> All values OK \x1b[0m");
    }

    println!("\x1b[0;94m::\x1b[0m Checking environment . . .");
    match std::env::var("XDG_RUNTIME_DIR") {
        Ok(dir) => {
            if verbose {
                println!(":: XDG_RUNTIME_DIR: {dir}");
            }
            println!("\x1b[0;92m    -> Environment OK \x1b[0m");
        }
        Err(_) => println!(
            "\x1b[1;93mWARN: XDG_RUNTIME_DIR is not set, Wayland clients will not find the compositor.\x1b[0m"
        ),
    }

    if !problems.is_empty() {
        bail!("{} problem(s) found", problems.len());
    }
    Ok(())
}
