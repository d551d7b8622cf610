//! Integration tests for help rendering

mod common;

use flagtree::{App, Command, Flag};

const MAIN_HELP: &str = "AppName version 1.0.0

Application description.

Available options.

--bool\t\t-b\t\tBool value (default value: \"false\")

Available commands.
Use --help {command} {subcommand} for details.

- cmd\t\tThis is the description
";

const SUB_COMMAND_HELP: &str = "AppName version 1.0.0

Application description.

Details for command: cmd-1 cmd-2

This is the description of cmd-2

Available options.

--str\t\t-s\t\tString option example (default value: \"default\")
--bool\t\t-b\t\tBool option example (default value: \"false\")

Available commands.
Use --help {command} {subcommand} for details.

- cmd-3\t\tThis is the description of cmd-3
";

#[test]
fn test_print_main_help() {
    let app = common::main_help_app();
    assert_eq!(app.help_text(&["./app"]), MAIN_HELP);
}

#[test]
fn test_print_sub_command_help() {
    let app = common::nested_help_app();
    assert_eq!(app.help_text(&["./app", "cmd-1", "cmd-2"]), SUB_COMMAND_HELP);
}

#[test]
fn test_option_tokens_are_skipped() {
    let app = common::nested_help_app();
    let tokens = ["./app", "--help", "cmd-1", "-b", "cmd-2", "-s", "value"];
    assert_eq!(app.help_text(&tokens), SUB_COMMAND_HELP);
}

#[test]
fn test_render_into_writer() {
    let app = common::main_help_app();
    let mut out = Vec::new();
    app.render_help(&["./app"], &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), MAIN_HELP);
}

#[test]
fn test_header_without_version() {
    let app = App::new("AppName", "").with_commands([Command::new("cmd", "Description")]);
    assert_eq!(
        app.help_text(&["./app"]),
        "AppName\n\n\nAvailable commands.\nUse --help {command} {subcommand} for details.\n\n- cmd\t\tDescription\n"
    );
}

#[test]
fn test_no_name_no_header() {
    let app = App::default().with_options([Flag::bool("", Some('z'), "Z factor", false)]);
    assert_eq!(
        app.help_text::<&str>(&[]),
        "\nAvailable options.\n\n\t-z\t\tZ factor (default value: \"false\")\n"
    );
}

#[test]
fn test_leaf_command_has_no_tables() {
    let app = common::nested_help_app();
    assert_eq!(
        app.help_text(&["./app", "cmd-1", "cmd-2", "cmd-3"]),
        "AppName version 1.0.0\n\nApplication description.\n\n\
         Details for command: cmd-1 cmd-2 cmd-3\n\nThis is the description of cmd-3\n"
    );
}

#[test]
fn test_long_names_widen_the_column() {
    let app = App::default().with_options([
        Flag::bool("debug", Some('d'), "Enable debug session", false),
        Flag::bool("very-very-long-option", None, "", false),
    ]);
    assert_eq!(
        app.help_text::<&str>(&[]),
        "\nAvailable options.\n\n\
         --debug\t\t\t\t-d\t\tEnable debug session (default value: \"false\")\n\
         --very-very-long-option\t\t\t\t(default value: \"false\")\n"
    );
}

#[test]
fn test_long_command_description_wraps() {
    let app = flagtree::cli::demo_app();
    let help = app.help_text(&["./app"]);

    assert!(help.contains(
        "This is a description long enough to let it go on a new line: this tests the\n\
         capability of managing columns automatically.\n"
    ));
    assert!(help.contains(
        "- build\t\tLorem ipsum dolor sit amet, consectetur adipiscing elit, sed do\n\
         \t\teiusmod tempor incididunt ut labore et dolore magna aliqua.\n"
    ));
    assert!(help.contains("- test\t\tDo test stuff\n"));
}

#[test]
fn test_empty_string_default_is_hidden() {
    let app = App::default().with_options([Flag::string("name", Some('n'), "Your name", "")]);
    assert_eq!(
        app.help_text::<&str>(&[]),
        "\nAvailable options.\n\n--name\t\t-n\t\tYour name\n"
    );
}
