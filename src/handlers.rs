//! 请求处理模块
//!
//! - 下载链接处理器：校验请求、读取配置并生成预签名 URL
//! - 本地 HTTP 适配：把 axum 请求转换为调用事件

pub mod download_url;
pub mod serve;

// 重新导出主要的公共接口
pub use download_url::DownloadUrlHandler;
pub use serve::handle_download_url;
