use incidence_kernel::GeometryError;

/// Failures while handling a UI message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("sweep needs at least one plane")]
    NoPlanes,

    #[error("{count} planes requested, at most {max} supported")]
    TooManyPlanes { count: usize, max: usize },

    #[error("sweep of {count} samples exceeds the per-request limit of {max}")]
    TooManySamples { count: usize, max: usize },

    #[error("{field} = {value} is not finite")]
    NonFinite { field: &'static str, value: f64 },

    #[error("failed to parse message: {reason}")]
    Parse { reason: String },
}
