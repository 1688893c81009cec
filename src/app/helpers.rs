//! Async helper functions for startup

use anyhow::Context;

use crate::features::Preset;

/// Read the indicator preset, if one exists
///
/// A missing file is not an error; a file that cannot be read or parsed is.
pub async fn load_preset() -> anyhow::Result<Option<Preset>> {
    let Some(path) = Preset::file_path() else {
        tracing::debug!("No config directory, using default indicator settings");
        return Ok(None);
    };

    if !path.exists() {
        tracing::debug!("No preset at {}", path.display());
        return Ok(None);
    }

    let preset = Preset::load_from_file(&path)
        .with_context(|| format!("Failed to load preset from {}", path.display()))?;
    tracing::info!("Loaded preset from {}", path.display());
    Ok(Some(preset))
}
