use anyhow::{anyhow, Context, Result};
use rusttype::{Font, Scale};
use std::fs;

pub(crate) struct FontConfig {
    pub font: Font<'static>,
    pub scale: Scale,
}

/// The three text sizes the dashboard uses, backed by one monospace TTF
/// loaded from the configured path at startup.
pub(crate) struct FontSet {
    pub title: FontConfig,
    pub regular: FontConfig,
    pub small: FontConfig,
}

impl FontSet {
    pub fn load(path: &str) -> Result<Self> {
        let bytes =
            fs::read(path).context(format!("Failed to read font file from {}", path))?;
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| anyhow!("Failed to parse font file {}", path))?;

        Ok(Self {
            title: FontConfig {
                font: font.clone(),
                scale: Scale::uniform(20.0),
            },
            regular: FontConfig {
                font: font.clone(),
                scale: Scale::uniform(16.0),
            },
            small: FontConfig {
                font,
                scale: Scale::uniform(13.0),
            },
        })
    }
}
