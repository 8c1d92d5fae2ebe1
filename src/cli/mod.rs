//! CLI module
//!
//! - `serve`: run the HTTP API
//! - `login`: authenticate once against the configured users and print the token

pub mod login;
pub mod serve;

use clap::{Parser, Subcommand};

/// Credential verification and access token issuance
#[derive(Parser)]
#[command(name = "auth-token-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Issue a token for a configured user and print it as JSON
    Login(login::LoginArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        let cli = Cli::try_parse_from([
            "auth-token-service",
            "login",
            "--username",
            "alice",
            "--password",
            "secret123",
        ])
        .unwrap();

        match cli.command {
            Command::Login(args) => {
                assert_eq!(args.username, "alice");
                assert_eq!(args.password, "secret123");
            }
            Command::Serve => panic!("expected login"),
        }
    }

    #[test]
    fn test_login_requires_credentials() {
        assert!(Cli::try_parse_from(["auth-token-service", "login"]).is_err());
    }
}
