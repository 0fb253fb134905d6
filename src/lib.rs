//! S3 预签名下载链接服务
//!
//! 根据查询参数中的对象键，为配置的存储桶生成有效期为一小时的
//! GetObject 预签名 URL，并以纯文本响应返回。主要组成：
//! - Lambda 入口（`src/main.rs`）
//! - 本地开发用的 Axum 服务器（`src/bin/local_server.rs`）
//! - 两者共用的 [`DownloadUrlHandler`]

pub mod config;
pub mod error;
pub mod event;
pub mod handlers;
pub mod utils;

pub use error::DownloadUrlError;
pub use event::{DownloadRequest, DownloadResponse};
pub use handlers::DownloadUrlHandler;
pub use utils::s3::{Presigner, S3Presigner};

use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 使用环境中的 AWS 配置创建处理器
///
/// 存储桶名称从 `S3_BUCKET_NAME` 读取，每次调用时重新读取。
pub async fn handler_from_env() -> DownloadUrlHandler<S3Presigner> {
    let s3_client = Arc::new(config::create_s3_client().await);
    DownloadUrlHandler::new(S3Presigner::new(s3_client))
}

/// 创建并配置Axum应用程序
///
/// 所有 GET 路径都交给下载链接处理器，查询字符串作为调用事件的
/// `queryStringParameters`。附带请求追踪中间件。
///
/// # Returns
///
/// 返回配置好的Axum Router实例
pub fn app<P: Presigner + 'static>(handler: DownloadUrlHandler<P>) -> axum::Router {
    axum::Router::new()
        .fallback(get(handlers::handle_download_url::<P>))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(handler))
}
