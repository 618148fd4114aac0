//! Catalog export command.

use std::io::Write;

use color_eyre::Result;

use crate::catalog::Catalog;
use crate::error::LuxxorResult;

/// Pretty JSON for the built-in catalog.
pub fn catalog_json(catalog: &Catalog) -> LuxxorResult<String> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Handle the --catalog command.
pub fn handle_catalog_command<W: Write>(out: &mut W) -> Result<()> {
    let json = catalog_json(Catalog::global())?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_json_shape() {
        let json = catalog_json(Catalog::global()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["user"]["name"], "Guest Learner");
        assert_eq!(value["user"]["progress"], 15);
        assert_eq!(value["courses"][0]["lessons"][2]["kind"], "quiz");
        assert_eq!(value["courses"][0]["lessons"][2]["is_locked"], true);
        assert_eq!(value["courses"][1]["resources"][0]["type"], "PDF");
    }

    #[test]
    fn test_handle_catalog_command_writes_json() {
        let mut out = Vec::new();
        handle_catalog_command(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('{'));
        assert!(text.contains("Executive Leadership Strategy"));
    }
}
