//! Wave model selector

use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{FieldError, Result};

/// The closed-form field models
///
/// Tags are matched ignoring ASCII case; `Spheral` is accepted as an alias of
/// [WaveModel::Spherical].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum WaveModel {
    /// `A cos(kx x + ky y - D(kx,ky) c t)`
    #[strum(to_string = "Plane")]
    Plane,
    /// `A cos(k r² - k c t) / r`
    #[strum(to_string = "Spherical", serialize = "Spheral")]
    Spherical,
    /// `A cos(cos(k₁ x)) cos(sin(k₂ x))`
    #[strum(to_string = "Interference")]
    Interference,
}
impl WaveModel {
    /// Parses a model tag, failing on anything but a known model name
    pub fn from_tag(tag: &str) -> Result<Self> {
        Self::from_str(tag).map_err(|_| FieldError::UndefinedModel(tag.to_string()))
    }
    /// Returns true if the model reads the wave vector as a (kx,ky) pair
    pub fn takes_pair(&self) -> bool {
        !matches!(self, WaveModel::Spherical)
    }
    /// The plot title: the model name followed by `EqualPhase`
    pub fn title(&self) -> String {
        format!("{}EqualPhase", self)
    }
}
