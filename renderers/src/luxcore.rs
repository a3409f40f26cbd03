//! LuxCore render engine

use crate::scene::SettingValue;
use renderkit_core::common::Int;
use std::fmt;

/// Compute device for the LuxCore engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Device {
    #[default]
    Cpu,
    OpenCl,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "CPU"),
            Device::OpenCl => write!(f, "OPENCL"),
        }
    }
}

/// Light transport algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TraceEngine {
    /// Bidirectional path tracing.
    #[default]
    Bidir,
    /// Unidirectional path tracing.
    Path,
}

impl fmt::Display for TraceEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEngine::Bidir => write!(f, "BIDIR"),
            TraceEngine::Path => write!(f, "PATH"),
        }
    }
}

/// Sample generation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Sampler {
    Sobol,
    #[default]
    Metropolis,
    Random,
}

impl fmt::Display for Sampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sampler::Sobol => write!(f, "SOBOL"),
            Sampler::Metropolis => write!(f, "METROPOLIS"),
            Sampler::Random => write!(f, "RANDOM"),
        }
    }
}

/// Post-render denoiser.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Denoiser {
    /// Intel Open Image Denoise.
    #[default]
    Oidn,
}

impl fmt::Display for Denoiser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denoiser::Oidn => write!(f, "OIDN"),
        }
    }
}

/// Stopping rule after which the engine considers the image converged and
/// finalizes output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HaltCondition {
    /// Stop after the given number of seconds.
    Time(Int),
    /// Stop after the given sample count.
    Samples(Int),
}

/// Configuration for the host's LuxCore engine, resolved once into a flat
/// list of scene settings instead of mutating nested host objects field by
/// field. `None` for the denoiser or halt condition disables that feature
/// explicitly.
#[derive(Clone, Debug)]
pub struct LuxCoreConfig {
    /// Compute device.
    pub device: Device,

    /// Light transport algorithm.
    pub engine: TraceEngine,

    /// Sample generation strategy.
    pub sampler: Sampler,

    /// Post-render denoiser, if any.
    pub denoiser: Option<Denoiser>,

    /// Stopping rule, if any.
    pub halt: Option<HaltCondition>,
}

impl Default for LuxCoreConfig {
    /// CPU bidirectional tracing with Metropolis sampling, denoised with
    /// OIDN, halting after 60 seconds.
    fn default() -> Self {
        Self {
            device: Device::Cpu,
            engine: TraceEngine::Bidir,
            sampler: Sampler::Metropolis,
            denoiser: Some(Denoiser::Oidn),
            halt: Some(HaltCondition::Time(60)),
        }
    }
}

impl LuxCoreConfig {
    /// Returns the flat list of scene settings for this configuration, in a
    /// deterministic order.
    pub fn resolve(&self) -> Vec<(String, SettingValue)> {
        let mut settings = vec![
            (
                "render.engine".to_string(),
                SettingValue::Str("LUXCORE".to_string()),
            ),
            (
                "luxcore.config.device".to_string(),
                SettingValue::Str(self.device.to_string()),
            ),
            (
                "luxcore.config.engine".to_string(),
                SettingValue::Str(self.engine.to_string()),
            ),
            (
                "luxcore.config.sampler".to_string(),
                SettingValue::Str(self.sampler.to_string()),
            ),
        ];

        match self.denoiser {
            Some(denoiser) => {
                settings.push((
                    "luxcore.denoiser.enabled".to_string(),
                    SettingValue::Bool(true),
                ));
                settings.push((
                    "luxcore.denoiser.type".to_string(),
                    SettingValue::Str(denoiser.to_string()),
                ));
            }
            None => settings.push((
                "luxcore.denoiser.enabled".to_string(),
                SettingValue::Bool(false),
            )),
        }

        match self.halt {
            Some(HaltCondition::Time(seconds)) => {
                settings.push(("luxcore.halt.enable".to_string(), SettingValue::Bool(true)));
                settings.push(("luxcore.halt.use_time".to_string(), SettingValue::Bool(true)));
                settings.push(("luxcore.halt.time".to_string(), SettingValue::Int(seconds)));
            }
            Some(HaltCondition::Samples(count)) => {
                settings.push(("luxcore.halt.enable".to_string(), SettingValue::Bool(true)));
                settings.push((
                    "luxcore.halt.use_samples".to_string(),
                    SettingValue::Bool(true),
                ));
                settings.push(("luxcore.halt.samples".to_string(), SettingValue::Int(count)));
            }
            None => settings.push(("luxcore.halt.enable".to_string(), SettingValue::Bool(false))),
        }

        settings
    }
}
