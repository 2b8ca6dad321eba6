use thiserror::Error;

/// Failures surfaced by the compute or display stage during a frame
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("surface acquisition failed: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    #[error("GPU ran out of memory")]
    OutOfMemory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_errors_convert() {
        let err: RenderError = wgpu::SurfaceError::Timeout.into();
        assert!(matches!(err, RenderError::Surface(wgpu::SurfaceError::Timeout)));
        assert!(err.to_string().starts_with("surface acquisition failed"));
    }
}
