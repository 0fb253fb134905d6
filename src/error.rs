//! 错误类型模块
//!
//! 处理器内部的所有失败都归入 [`DownloadUrlError`]，最终统一渲染为 500 响应的正文。

use aws_sdk_s3::presigning::PresigningConfigError;
use thiserror::Error;

/// 生成下载链接过程中可能出现的错误。
#[derive(Debug, Error)]
pub enum DownloadUrlError {
    /// 查询参数中缺少 `key`（或其值为空）
    #[error("Missing 'key' parameter in the query string")]
    MissingKey,

    /// 存储桶名称的环境变量未设置或为空
    #[error("environment variable {var} is not set")]
    MissingBucket { var: String },

    /// 存储桶名称的环境变量已设置，但不是合法的 Unicode
    #[error("environment variable {var} is not valid unicode")]
    BucketNotUnicode { var: String },

    /// 直接指定的存储桶名称为空
    #[error("configured bucket name is empty")]
    EmptyBucketName,

    /// 事件结构不符合要求，例如 `queryStringParameters` 不是对象
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    /// 预签名有效期超出 SDK 允许的范围
    #[error("invalid presigning config: {0}")]
    PresignConfig(#[from] PresigningConfigError),

    /// S3 SDK 在签名时返回的错误，已展开完整的错误链
    #[error("failed to presign GetObject request: {0}")]
    Presign(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_message_names_the_parameter() {
        let message = DownloadUrlError::MissingKey.to_string();
        assert!(message.contains("'key'"));
        assert!(message.contains("query string"));
    }

    #[test]
    fn missing_bucket_message_names_the_variable() {
        let err = DownloadUrlError::MissingBucket {
            var: "S3_BUCKET_NAME".to_string(),
        };
        assert_eq!(err.to_string(), "environment variable S3_BUCKET_NAME is not set");
    }
}
