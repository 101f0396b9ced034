//! Admin password hashing tool.
//!
//! Prints the Argon2id PHC string to put in `ADMIN_PASSWORD_HASH`.
//!
//! ```bash
//! # Prompted on stdin
//! hash-password
//!
//! # With the same pepper the server uses
//! PASSWORD_PEPPER=... hash-password --password 'correct horse battery'
//! ```

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use platform::password::ClearTextPassword;

#[derive(Parser)]
#[command(name = "hash-password")]
#[command(version, about = "Hash the admin password for ADMIN_PASSWORD_HASH")]
struct Cli {
    /// Password to hash (read from stdin when omitted)
    #[arg(short, long)]
    password: Option<String>,

    /// Application pepper; must match the server's
    #[arg(long, env = "PASSWORD_PEPPER", hide_env_values = true)]
    pepper: Option<String>,

    /// Skip the password policy (length, common patterns)
    #[arg(long)]
    allow_weak: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let raw = match cli.password {
        Some(password) => password,
        None => {
            eprint!("Password: ");
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let password = if cli.allow_weak {
        ClearTextPassword::for_verification(&raw)
    } else {
        ClearTextPassword::new(raw).context("password rejected by policy (use --allow-weak to override)")?
    };

    let pepper = cli.pepper.filter(|p| !p.is_empty());
    let hashed = password.hash(pepper.as_deref().map(str::as_bytes))?;

    println!("{}", hashed.as_phc_string());
    Ok(())
}
