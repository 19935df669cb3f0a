use crate::defaults;
use crate::error::{Error, Result};

/// Which library paths are eligible for disabling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// TFLM micro directory only.
    #[default]
    Micro,
    /// TensorFlow Lite Micro sources.
    Tflm,
    /// Any `.cpp` under the library that appears in the log.
    Any,
}

impl Scope {
    pub const NAMES: [&'static str; 3] = ["micro", "tflm", "any"];

    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "micro" => Ok(Scope::Micro),
            "tflm" => Ok(Scope::Tflm),
            "any" => Ok(Scope::Any),
            _ => Err(Error::validation_invalid_argument(
                "scope",
                format!("Unknown scope '{}'. Use: micro, tflm, any", s),
                Some(Self::NAMES.iter().map(|n| n.to_string()).collect()),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Micro => "micro",
            Scope::Tflm => "tflm",
            Scope::Any => "any",
        }
    }

    /// Directory needle a path must contain, or `None` when unrestricted.
    pub fn needle(&self) -> Option<&'static str> {
        match self {
            Scope::Micro => Some(defaults::MICRO_NEEDLE),
            Scope::Tflm => Some(defaults::TFLM_NEEDLE),
            Scope::Any => None,
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
