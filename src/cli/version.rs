//! Version command.

use std::io::Write;

use color_eyre::Result;

/// The current version of Luxxor, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Handle the --version command.
pub fn handle_version_command<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "luxxor {}", VERSION)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        // Version should be in semver format (e.g., "0.1.0")
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_version_output() {
        let mut out = Vec::new();
        handle_version_command(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("luxxor {}\n", VERSION));
    }
}
