use canopy_core::errors::{CanopyResult, ConfigError};
use canopy_core::models::ResponseMode;

/// Fail unless `requested` is the one response mode `retriever` supports.
pub(crate) fn ensure_response_mode(
    retriever: &'static str,
    requested: ResponseMode,
    required: ResponseMode,
) -> CanopyResult<()> {
    if requested != required {
        return Err(ConfigError::IncompatibleResponseMode {
            retriever,
            requested,
            required,
        }
        .into());
    }
    Ok(())
}
