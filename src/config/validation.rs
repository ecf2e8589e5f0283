// src/config/validation.rs

use super::ConfigBuilder;
use crate::errors::{Error, Result};

/// Validates combinations of options that clap cannot easily express.
///
/// One rule is enforced everywhere (CLI and library):
/// `--preview`, `--interactive` and `--analyze` exclude each other, and
/// `--summary`/`--backup` need a mode that actually writes outputs.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    let sources = [
        builder.local.is_some(),
        builder.github.is_some(),
        builder.gitlab.is_some(),
    ]
    .iter()
    .filter(|set| **set)
    .count();
    match sources {
        0 => {
            return Err(Error::InvalidInput(
                "No source given: use --local, --github or --gitlab".to_string(),
            ))
        }
        1 => {}
        _ => {
            return Err(Error::InvalidInput(
                "Only one of --local, --github or --gitlab may be given".to_string(),
            ))
        }
    }

    let modes: Vec<&str> = [
        (builder.preview, "--preview"),
        (builder.interactive, "--interactive"),
        (builder.analyze, "--analyze"),
    ]
    .iter()
    .filter(|(set, _)| set.unwrap_or(false))
    .map(|(_, name)| *name)
    .collect();
    if modes.len() > 1 {
        return Err(Error::InvalidInput(format!(
            "Cannot use {} simultaneously",
            modes.join(" and ")
        )));
    }

    let read_only_mode = modes
        .first()
        .copied()
        .filter(|m| *m == "--preview" || *m == "--analyze");
    if let Some(mode) = read_only_mode {
        for (set, flag) in [(builder.summary, "--summary"), (builder.backup, "--backup")] {
            if set.unwrap_or(false) {
                return Err(Error::InvalidInput(format!(
                    "Cannot use {} with {}: nothing is written in that mode",
                    flag, mode
                )));
            }
        }
    }

    if builder.use_api.unwrap_or(false) && builder.github.is_none() {
        return Err(Error::InvalidInput(
            "--api is only available for --github sources".to_string(),
        ));
    }

    Ok(())
}
