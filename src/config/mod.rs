//! 下载链接服务的配置模块。
//!
//! 该模块负责从环境变量读取存储桶名称，并按照标准 AWS 配置链创建 S3 客户端。
//! 存储桶名称在每次调用时重新读取，不做任何缓存。

use crate::error::DownloadUrlError;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use std::env::{self, VarError};
use std::time::Duration;

/// 存储目标存储桶名称的环境变量
pub const BUCKET_NAME_VAR: &str = "S3_BUCKET_NAME";

/// 可选的 S3 兼容服务端点
pub const S3_ENDPOINT_VAR: &str = "S3_ENDPOINT";

/// 设为 `true` 时使用路径风格寻址
pub const S3_FORCE_PATH_STYLE_VAR: &str = "S3_FORCE_PATH_STYLE";

/// 本地开发服务器的监听地址
pub const LISTEN_ADDR_VAR: &str = "LISTEN_ADDR";

/// 未设置 `LISTEN_ADDR` 时的监听地址
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// 预签名 URL 的有效期（1小时 = 3600秒）
pub const URL_EXPIRY: Duration = Duration::from_secs(3600);

/// 存储桶名称的来源。
///
/// `Env` 在每次 [`BucketSource::resolve`] 时重新读取环境变量；
/// `Fixed` 直接使用给定的名称，便于嵌入其他程序或测试。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketSource {
    Env(String),
    Fixed(String),
}

impl Default for BucketSource {
    fn default() -> Self {
        Self::Env(BUCKET_NAME_VAR.to_string())
    }
}

impl BucketSource {
    /// 解析当前的存储桶名称。
    ///
    /// # 返回值
    ///
    /// 存储桶名称；变量未设置或为空时返回 [`DownloadUrlError::MissingBucket`]。
    ///
    /// # Errors
    ///
    /// 当环境变量缺失、为空或不是合法 Unicode 时返回错误；
    /// `Fixed` 名称为空时返回 [`DownloadUrlError::EmptyBucketName`]。
    pub fn resolve(&self) -> Result<String, DownloadUrlError> {
        match self {
            Self::Env(var) => match env::var(var) {
                Ok(name) if !name.is_empty() => Ok(name),
                Ok(_) | Err(VarError::NotPresent) => {
                    Err(DownloadUrlError::MissingBucket { var: var.clone() })
                }
                Err(VarError::NotUnicode(_)) => {
                    Err(DownloadUrlError::BucketNotUnicode { var: var.clone() })
                }
            },
            Self::Fixed(name) if name.is_empty() => Err(DownloadUrlError::EmptyBucketName),
            Self::Fixed(name) => Ok(name.clone()),
        }
    }
}

fn force_path_style() -> bool {
    env::var(S3_FORCE_PATH_STYLE_VAR)
        .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// 使用标准 AWS 配置链创建 S3 客户端。
///
/// 凭据与区域来自 `AWS_*` 环境变量或 Lambda 执行角色。
/// 若设置了 `S3_ENDPOINT`，则覆盖默认端点。
///
/// # 返回值
///
/// 配置好的 `aws_sdk_s3::Client`。
pub async fn create_s3_client() -> Client {
    let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);

    if let Some(endpoint) = env::var(S3_ENDPOINT_VAR).ok().filter(|e| !e.is_empty()) {
        builder = builder.endpoint_url(endpoint);
    }
    if force_path_style() {
        builder = builder.force_path_style(true);
    }

    Client::from_conf(builder.build())
}

/// 获取本地服务器的监听地址，未设置时使用 [`DEFAULT_LISTEN_ADDR`]。
pub fn listen_addr() -> String {
    env::var(LISTEN_ADDR_VAR).unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_reads_variable() {
        temp_env::with_var(BUCKET_NAME_VAR, Some("reports"), || {
            let bucket = BucketSource::default().resolve().unwrap();
            assert_eq!(bucket, "reports");
        });
    }

    #[test]
    fn test_env_source_is_read_on_every_call() {
        let source = BucketSource::default();
        temp_env::with_var(BUCKET_NAME_VAR, Some("first"), || {
            assert_eq!(source.resolve().unwrap(), "first");
        });
        temp_env::with_var(BUCKET_NAME_VAR, Some("second"), || {
            assert_eq!(source.resolve().unwrap(), "second");
        });
    }

    #[test]
    fn test_env_source_unset() {
        temp_env::with_var_unset(BUCKET_NAME_VAR, || {
            let err = BucketSource::default().resolve().unwrap_err();
            assert!(matches!(err, DownloadUrlError::MissingBucket { ref var } if var == BUCKET_NAME_VAR));
        });
    }

    #[test]
    fn test_env_source_empty_value() {
        temp_env::with_var(BUCKET_NAME_VAR, Some(""), || {
            assert!(BucketSource::default().resolve().is_err());
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_env_source_not_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        temp_env::with_var(BUCKET_NAME_VAR, Some(OsStr::from_bytes(&[0x66, 0xff])), || {
            let err = BucketSource::default().resolve().unwrap_err();
            assert!(matches!(err, DownloadUrlError::BucketNotUnicode { .. }));
            assert!(err.to_string().contains("not valid unicode"));
        });
    }

    #[test]
    fn test_fixed_source() {
        let source = BucketSource::Fixed("archive".to_string());
        assert_eq!(source.resolve().unwrap(), "archive");

        let err = BucketSource::Fixed(String::new()).resolve().unwrap_err();
        assert!(matches!(err, DownloadUrlError::EmptyBucketName));
        assert_eq!(err.to_string(), "configured bucket name is empty");
    }

    #[test]
    fn test_force_path_style_flag() {
        temp_env::with_var(S3_FORCE_PATH_STYLE_VAR, Some("TRUE"), || {
            assert!(force_path_style());
        });
        temp_env::with_var(S3_FORCE_PATH_STYLE_VAR, Some("off"), || {
            assert!(!force_path_style());
        });
        temp_env::with_var_unset(S3_FORCE_PATH_STYLE_VAR, || {
            assert!(!force_path_style());
        });
    }

    #[test]
    fn test_listen_addr_default() {
        temp_env::with_var_unset(LISTEN_ADDR_VAR, || {
            assert_eq!(listen_addr(), DEFAULT_LISTEN_ADDR);
        });
        temp_env::with_var(LISTEN_ADDR_VAR, Some("127.0.0.1:8080"), || {
            assert_eq!(listen_addr(), "127.0.0.1:8080");
        });
    }
}
