use std::path::PathBuf;

use clap::Parser;
use schedtex::config::CliArgs;

// Integration tests for the CLI surface: two optional positional
// arguments with fixed defaults.

#[test]
fn defaults_apply_when_no_arguments_given() {
    let args = CliArgs::try_parse_from(["schedtex"]).expect("no args is valid");
    assert_eq!(args.input, PathBuf::from("schedule_data.json"));
    assert_eq!(args.output, PathBuf::from("Academic Schedule.tex"));
}

#[test]
fn input_alone_keeps_the_default_output() {
    let args = CliArgs::try_parse_from(["schedtex", "my_term.json"]).expect("one arg is valid");
    assert_eq!(args.input, PathBuf::from("my_term.json"));
    assert_eq!(args.output, PathBuf::from("Academic Schedule.tex"));
}

#[test]
fn both_positional_arguments_are_honored() {
    let args = CliArgs::try_parse_from(["schedtex", "in.json", "out/Schedule.tex"])
        .expect("two args are valid");
    assert_eq!(args.input, PathBuf::from("in.json"));
    assert_eq!(args.output, PathBuf::from("out/Schedule.tex"));
}

#[test]
fn extra_positional_arguments_are_rejected() {
    assert!(CliArgs::try_parse_from(["schedtex", "a", "b", "c"]).is_err());
}
