use taskboard_core::init_state;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let state = init_state().await?;

    web::serve_web(Arc::clone(&state)).await?;

    Ok(())
}
