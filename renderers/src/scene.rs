//! Scene interface

use renderkit_core::common::{Float, Int};
use renderkit_core::error::Result;
use std::fmt;

/// A value assignable to a host scene setting.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(Int),
    Float(Float),
    Str(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{v}"),
            SettingValue::Int(v) => write!(f, "{v}"),
            SettingValue::Float(v) => write!(f, "{v}"),
            SettingValue::Str(v) => write!(f, "{v}"),
        }
    }
}

/// The host application's mutable scene, reduced to the two operations the
/// render drivers need: assigning named settings and rendering a still image
/// to disk. Passing the scene in explicitly keeps the drivers free of hidden
/// global state and lets tests substitute a recording implementation.
pub trait Scene {
    /// Assign a value to a named scene setting.
    ///
    /// * `name`  - Dotted path of the setting, e.g. `luxcore.config.device`.
    /// * `value` - The value to assign.
    fn set(&mut self, name: &str, value: SettingValue);

    /// Render a still image and write it to the scene's configured filepath.
    fn render_still(&mut self) -> Result<()>;
}
