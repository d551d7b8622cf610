//! Demo application driver

use crate::config::{build_app, parse_config_auto, parse_config_file};
use crate::error::{ConfigError, FlagtreeError};
use crate::model::{App, Command, Flag, Scope};
use crate::parser::is_option;
use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Long name of the option selecting a declaration file
pub const FILE_OPTION: &str = "file";

/// Load the command tree, resolve the process arguments and report the result
pub fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut app = load_app(extract_file_arg(&args))?;
    if app.option(FILE_OPTION).is_none() {
        app.add_option(file_option());
    }

    app.parse(true)?;

    if app.help_requested() {
        return Ok(());
    }

    report(&app, &mut io::stdout().lock())?;
    Ok(())
}

/// The value following `--file`/`-f`, read before the tree exists.
///
/// Only root-level tokens are searched: scanning stops at the first word
/// that cannot be an option value, which is taken as a command.
pub fn extract_file_arg<S: AsRef<str>>(args: &[S]) -> Option<PathBuf> {
    let mut after_option = false;

    for (index, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();

        if matches!(arg, "--file" | "-f") {
            return args.get(index + 1).map(|value| PathBuf::from(value.as_ref()));
        }
        if is_option(arg) {
            after_option = true;
        } else if after_option {
            // Possibly the value of the previous option
            after_option = false;
        } else {
            break;
        }
    }

    None
}

/// Load the tree from `file`, a discovered flagtree.yml, or the built-in demo
pub fn load_app(file: Option<PathBuf>) -> Result<App> {
    if let Some(path) = file {
        let config = parse_config_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        return Ok(build_app(&config)?);
    }

    match parse_config_auto() {
        Ok((config, path)) => {
            info!(path = %path.display(), "using declaration file");
            Ok(build_app(&config).with_context(|| format!("Invalid declaration in {}", path.display()))?)
        }
        Err(FlagtreeError::Config(ConfigError::NotFound(searched))) => {
            debug!(%searched, "no declaration file, using the built-in demo");
            Ok(demo_app())
        }
        Err(e) => Err(e.into()),
    }
}

/// The option that selects a declaration file
pub fn file_option() -> Flag {
    Flag::string(FILE_OPTION, Some('f'), "Load the command tree from a flagtree.yml file", "")
}

/// A small tree with root options and two commands
pub fn demo_app() -> App {
    let long_text = "This is a description long enough to let it go on a new line: \
                     this tests the capability of managing columns automatically.";
    let lipsum = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
                  sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

    let build = Command::new("build", lipsum).with_options([
        Flag::bool("verbose", Some('v'), "Enable verbose output", false),
        Flag::bool("dry", Some('d'), "Test the build environment, but do not compile", false),
    ]);
    let test = Command::new("test", "Do test stuff");

    App::new("AppName", long_text)
        .with_version("0.0.1")
        .with_options([
            Flag::bool("debug", Some('d'), "Enable debug session", false),
            // No short name
            Flag::bool("very-very-long-option", None, "", false),
            // No long name
            Flag::bool("", Some('z'), "Z factor", false),
        ])
        .with_help()
        .with_commands([build, test])
}

/// Print the invoked chain and every option that was set along it
pub fn report<W: Write>(app: &App, out: &mut W) -> io::Result<()> {
    let chain = app.invoked_chain();

    if !chain.is_empty() {
        let names: Vec<&str> = chain.iter().map(|c| c.name()).collect();
        writeln!(out, "Invoked: {}", names.join(" "))?;
    }

    let options = app
        .options()
        .iter()
        .chain(chain.iter().flat_map(|c| c.options().iter()));

    for option in options.filter(|o| o.is_set()) {
        writeln!(out, "{} = {}", option.display_name(), option.render())?;
    }

    Ok(())
}
