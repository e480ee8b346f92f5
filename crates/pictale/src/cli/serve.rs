//! HTTP API launcher.

use pictale::server::{ApiState, serve};
use pictale::{ConfigError, Credentials, PictaleConfig, PictaleResult, StoryPipeline};

/// Build the pipeline and serve the upload API until Ctrl-C.
pub async fn serve_api(
    config: &PictaleConfig,
    credentials: &Credentials,
    bind: Option<String>,
) -> PictaleResult<()> {
    let mut server = config.server.clone();
    if let Some(bind) = bind {
        server.bind = bind;
    }
    let addr = server.bind_addr()?;

    let pipeline = StoryPipeline::from_config(config, credentials)?;
    let state = ApiState::new(pipeline, server.max_upload_bytes);

    serve(state, addr)
        .await
        .map_err(|e| ConfigError::new(format!("Server on {} failed: {}", addr, e)).into())
}
