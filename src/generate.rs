use anyhow::{Context, Result};
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::output::SIZE_PLACEHOLDER;
use crate::icon::create_icon;

/// Output path for one icon: `file_name` with `{size}` substituted, under `dir`
pub fn icon_path(dir: &Path, file_name: &str, size: u32) -> PathBuf {
    dir.join(file_name.replace(SIZE_PLACEHOLDER, &size.to_string()))
}

/// Render and save every configured size, in order
///
/// Returns the paths written. Stops at the first failure; files written
/// before it are left in place.
pub fn generate_icons(config: &Config) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let palette = config.icons.palette();
    let mut written = Vec::with_capacity(config.icons.sizes.len());

    for &size in &config.icons.sizes {
        let icon = create_icon(size, &palette)?;
        let path = icon_path(&config.output.dir, &config.output.file_name, size);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
        }

        icon.save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("Failed to save {}", path.display()))?;

        log::info!("Created {}", path.display());
        written.push(path);
    }

    Ok(written)
}
