use crate::model::WaveModel;

#[derive(thiserror::Error, Debug)]
pub enum FieldError {
    #[error("invalid sampling range: {0}")]
    InvalidRange(String),
    #[error("the field amplitude must be finite, got {0}")]
    InvalidAmplitude(f64),
    #[error("undefined wave model: {0:?}")]
    UndefinedModel(String),
    #[error("the {model} model expects a {expected} wave vector")]
    ShapeMismatch {
        model: WaveModel,
        expected: &'static str,
    },
    #[error("bitwise dispersion requires integral wave vector components, got ({0}, {1})")]
    NonIntegralWaveVector(f64, f64),
    #[error("bitwise dispersion requires wave vector components within the 64-bit integer range, got ({0}, {1})")]
    WaveVectorOutOfRange(f64, f64),
    #[error("failed to draw the field map")]
    Plot(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, FieldError>;
