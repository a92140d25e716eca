use crate::{Cli, Commands};

use clap::Parser;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_accepted() {
    let result = Cli::try_parse_from([
        "tp",
        "resolve",
        "--hostname",
        "1.upscalingmedia.live",
        "--pretty",
    ]);

    assert_that!(result, ok(anything()));
    let cli = result.unwrap();
    assert_that!(cli.hostname.as_str(), eq("1.upscalingmedia.live"));
    assert_that!(cli.pretty, eq(true));
    assert!(matches!(cli.command, Commands::Resolve));
}

#[test]
fn given_login_without_email_when_parsed_then_email_none() {
    let cli = Cli::try_parse_from(["tp", "login", "--password", "secret1"]).unwrap();

    match cli.command {
        Commands::Login {
            email,
            remember,
            forget,
            ..
        } => {
            assert_eq!(email, None);
            assert_that!(remember, eq(false));
            assert_that!(forget, eq(false));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_remember_and_forget_when_parsed_then_rejected() {
    let result = Cli::try_parse_from([
        "tp",
        "login",
        "--password",
        "secret1",
        "--remember",
        "--forget",
    ]);

    assert_that!(result, err(anything()));
}

#[test]
fn given_signup_flags_when_parsed_then_all_fields_set() {
    let cli = Cli::try_parse_from([
        "tp",
        "signup",
        "--email",
        "user@example.com",
        "--password",
        "secret1",
        "--confirm-password",
        "secret1",
        "--accept-terms",
    ])
    .unwrap();

    match cli.command {
        Commands::Signup {
            email,
            confirm_password,
            accept_terms,
            ..
        } => {
            assert_that!(email.as_str(), eq("user@example.com"));
            assert_that!(confirm_password.as_str(), eq("secret1"));
            assert_that!(accept_terms, eq(true));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
