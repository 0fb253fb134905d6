use anyhow::Context;
use s3_download_url::utils::logging::init_local_logging;
use s3_download_url::{app, config, handler_from_env};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载 .env 文件
    dotenvy::dotenv().ok();
    init_local_logging();

    let addr = config::listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("服务器运行在 http://{}", addr);

    axum::serve(listener, app(handler_from_env().await))
        .await
        .context("server error")?;
    Ok(())
}
