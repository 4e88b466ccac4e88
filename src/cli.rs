use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::ui::auth::DEFAULT_USER_NAME;
use crate::ui::StartupLogin;

#[derive(Debug, Parser)]
#[command(name = "arsim", version, about = "Build a resume in the terminal with a live preview")]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory exported resumes are written to
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "arsim=trace"
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Start signed in with this email
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Display name used with --email
    #[arg(long, value_name = "NAME", requires = "email")]
    pub name: Option<String>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(dir) = &self.export_dir {
            config.export.output_dir = Some(dir.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        Ok(config)
    }

    pub fn startup_login(&self) -> Option<StartupLogin> {
        let email = self.email.clone()?;
        Some(StartupLogin {
            email,
            name: self
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_without_name_uses_default_user() {
        let cli = Cli::try_parse_from(["arsim", "--email", "ada@example.com"]).unwrap();
        assert_eq!(
            cli.startup_login(),
            Some(StartupLogin {
                email: "ada@example.com".into(),
                name: "User".into(),
            })
        );
    }

    #[test]
    fn name_requires_email() {
        assert!(Cli::try_parse_from(["arsim", "--name", "Ada"]).is_err());
    }

    #[test]
    fn no_login_by_default() {
        let cli = Cli::try_parse_from(["arsim"]).unwrap();
        assert!(cli.startup_login().is_none());
    }
}
