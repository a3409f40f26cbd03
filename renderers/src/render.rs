//! Render driver

use crate::cycles::CyclesConfig;
use crate::luxcore::LuxCoreConfig;
use crate::scene::{Scene, SettingValue};
use chrono::Local;
use renderkit_core::error::Result;

/// Engine selection together with its resolved-once configuration.
#[derive(Clone, Debug)]
pub enum RenderConfig {
    Cycles(CyclesConfig),
    LuxCore(LuxCoreConfig),
}

impl RenderConfig {
    /// Returns the flat list of scene settings for the selected engine.
    pub fn resolve(&self) -> Vec<(String, SettingValue)> {
        match self {
            RenderConfig::Cycles(config) => config.resolve(),
            RenderConfig::LuxCore(config) => config.resolve(),
        }
    }
}

/// Returns the current local time as `YYYY-MM-DD_HH-MM-SS`.
pub fn formatted_time() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// Render an RGB image with the given engine into the output directory.
///
/// The current time is appended to the rendered image so that each render has
/// a unique filename. Returns the filepath the still was written to.
///
/// * `scene`            - The host scene to configure and render.
/// * `output_directory` - Directory the still image is written into.
/// * `config`           - Engine configuration to apply.
pub fn render_rgb<S: Scene>(
    scene: &mut S,
    output_directory: &str,
    config: &RenderConfig,
) -> Result<String> {
    let filepath = format!("{}/rgb_{}.png", output_directory, formatted_time());
    scene.set("render.filepath", SettingValue::Str(filepath.clone()));

    for (name, value) in config.resolve() {
        scene.set(&name, value);
    }

    scene.render_still()?;
    info!("Rendered still image to {filepath}");

    Ok(filepath)
}
