//! Cycles render engine

use crate::scene::SettingValue;

/// Configuration for the host's Cycles path tracer. Cycles runs with the
/// host's own defaults, so selecting the engine is the only setting emitted.
#[derive(Clone, Debug, Default)]
pub struct CyclesConfig;

impl CyclesConfig {
    /// Returns the flat list of scene settings for this configuration.
    pub fn resolve(&self) -> Vec<(String, SettingValue)> {
        vec![(
            "render.engine".to_string(),
            SettingValue::Str("CYCLES".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_to_engine_selection_only() {
        let settings = CyclesConfig.resolve();
        assert_eq!(
            settings,
            vec![(
                "render.engine".to_string(),
                SettingValue::Str("CYCLES".to_string())
            )]
        );
    }
}
