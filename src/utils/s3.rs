use crate::error::DownloadUrlError;
use async_trait::async_trait;
use aws_sdk_s3::{Client, error::DisplayErrorContext, presigning::PresigningConfig};
use std::sync::Arc;
use std::time::Duration;

/// 为 S3 对象生成预签名 GET URL 的能力。
///
/// 处理器只依赖这个 trait，测试中可以用 mock 替换真实的 S3 客户端。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Presigner: Send + Sync {
    /// 为 `bucket` 中的 `key` 生成在 `expires_in` 后过期的预签名 URL。
    ///
    /// # Errors
    ///
    /// 当有效期不合法或 SDK 无法构造签名请求时返回错误。
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, DownloadUrlError>;
}

/// 基于 `aws_sdk_s3::Client` 的预签名实现。
///
/// 签名完全在本地计算，不会发出网络请求。结果不做缓存，
/// 每次调用都会带上新的签名时间。
#[derive(Debug, Clone)]
pub struct S3Presigner {
    client: Arc<Client>,
}

impl S3Presigner {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Presigner for S3Presigner {
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, DownloadUrlError> {
        let presigning_config = PresigningConfig::expires_in(expires_in)?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| DownloadUrlError::Presign(DisplayErrorContext(&e).to_string()))?;

        Ok(presigned_request.uri().to_string())
    }
}
