//! `roster sign-in`: append a visitor record to the sign-in log.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use roster_core::RosterConfig;
use roster_signin::SignIn;

/// Arguments for `roster sign-in`.
#[derive(Args, Debug)]
pub struct SignInArgs {
    /// Visitor name.
    #[arg(long)]
    pub name: String,

    /// Email or other contact detail.
    #[arg(long, default_value = "")]
    pub contact: String,

    /// Favorite team or other affiliation.
    #[arg(long, default_value = "")]
    pub affiliation: String,

    /// Log file to append to. Overrides `sign_in_log` from the config.
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

impl SignInArgs {
    /// Fields are trimmed before logging. Write failures are reported as a
    /// warning; the command still succeeds.
    pub fn run(self, config: &RosterConfig) -> Result<()> {
        let path = self.log.unwrap_or_else(|| config.sign_in_log.clone());
        let entry = SignIn::now(
            self.name.trim(),
            self.contact.trim(),
            self.affiliation.trim(),
        );

        match roster_signin::append_at(&path, &entry) {
            Ok(()) => println!("✓ Signed in '{}' ({})", entry.name, path.display()),
            Err(err) => {
                tracing::warn!(error = %err, "sign-in not recorded");
                eprintln!("warning: could not save sign-in: {err}");
            }
        }
        Ok(())
    }
}
