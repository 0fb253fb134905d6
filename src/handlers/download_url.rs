use crate::config::{BucketSource, URL_EXPIRY};
use crate::error::DownloadUrlError;
use crate::event::{DownloadRequest, DownloadResponse};
use crate::utils::s3::Presigner;
use serde_json::Value;
use tracing::{info, warn};

/// 生成预签名下载链接的处理器。
///
/// 每次调用都会重新解析存储桶名称，然后校验 `key` 查询参数并生成
/// 有效期为 [`URL_EXPIRY`] 的 GetObject 预签名 URL。
#[derive(Debug, Clone)]
pub struct DownloadUrlHandler<P> {
    presigner: P,
    bucket: BucketSource,
}

impl<P: Presigner> DownloadUrlHandler<P> {
    /// 创建处理器，存储桶名称从 `S3_BUCKET_NAME` 读取。
    pub fn new(presigner: P) -> Self {
        Self {
            presigner,
            bucket: BucketSource::default(),
        }
    }

    pub fn with_bucket_source(mut self, bucket: BucketSource) -> Self {
        self.bucket = bucket;
        self
    }

    /// 处理一次调用。
    ///
    /// 成功时返回 200 与预签名 URL；任何错误（缺少参数、缺少配置、签名失败）
    /// 都返回 500，正文为错误信息。两种情况下响应头均为
    /// `Content-Type: text/plain`。
    ///
    /// # 参数
    ///
    /// * `request` - 函数平台传入的请求事件。
    ///
    /// # 返回值
    ///
    /// 可直接序列化给平台的响应。
    pub async fn handle(&self, request: &DownloadRequest) -> DownloadResponse {
        respond(self.generate(request).await)
    }

    /// 处理函数平台传入的原始事件 JSON。
    ///
    /// 事件结构不合法时同样返回 500 纯文本响应，而不是把错误交给运行时。
    pub async fn handle_event(&self, event: &Value) -> DownloadResponse {
        respond(self.generate_from_event(event).await)
    }

    /// 生成预签名 URL。
    ///
    /// # Errors
    ///
    /// 存储桶未配置、缺少 `key` 参数或签名失败时返回错误。
    pub async fn generate(&self, request: &DownloadRequest) -> Result<String, DownloadUrlError> {
        let bucket = self.bucket.resolve()?;
        self.presign(&bucket, request).await
    }

    async fn generate_from_event(&self, event: &Value) -> Result<String, DownloadUrlError> {
        let bucket = self.bucket.resolve()?;
        let request = DownloadRequest::from_event(event)?;
        self.presign(&bucket, &request).await
    }

    async fn presign(
        &self,
        bucket: &str,
        request: &DownloadRequest,
    ) -> Result<String, DownloadUrlError> {
        let key = request.object_key().ok_or(DownloadUrlError::MissingKey)?;

        let url = self.presigner.presign_get(bucket, key, URL_EXPIRY).await?;
        info!(%bucket, %key, "generated presigned download url");
        Ok(url)
    }
}

fn respond(result: Result<String, DownloadUrlError>) -> DownloadResponse {
    match result {
        Ok(url) => DownloadResponse::ok(url),
        Err(e) => {
            warn!(error = %e, "failed to generate download url");
            DownloadResponse::error(e.to_string())
        }
    }
}
