//! 调用事件与响应的数据结构
//!
//! 字段名与 API Gateway 代理集成的 JSON 格式保持一致（camelCase）。

use crate::error::DownloadUrlError;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// 响应头名称，按原样大小写写入 `headers`
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// 响应的内容类型，成功与失败时相同
pub const CONTENT_TYPE_TEXT_PLAIN: &str = "text/plain";

/// 对象键所在的查询参数名
pub const KEY_PARAM: &str = "key";

/// 事件中保存查询参数的字段
pub const QUERY_PARAMS_FIELD: &str = "queryStringParameters";

/// 函数平台传入的请求事件。
///
/// 只关心 `queryStringParameters` 中的字符串值，其他字段被忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadRequest {
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl DownloadRequest {
    /// 从原始事件 JSON 中提取查询参数。
    ///
    /// 事件不是对象、缺少 `queryStringParameters` 或其值为 `null` 时，
    /// 视为没有查询参数。非字符串的参数值被忽略，`key` 除外。
    ///
    /// # Errors
    ///
    /// `queryStringParameters` 不是对象，或 `key` 不是字符串时返回
    /// [`DownloadUrlError::InvalidEvent`]。
    pub fn from_event(event: &Value) -> Result<Self, DownloadUrlError> {
        let params = match event.get(QUERY_PARAMS_FIELD) {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Object(params)) => params,
            Some(_) => {
                return Err(DownloadUrlError::InvalidEvent(format!(
                    "'{QUERY_PARAMS_FIELD}' must be an object"
                )));
            }
        };

        if params.get(KEY_PARAM).is_some_and(|key| !key.is_string() && !key.is_null()) {
            return Err(DownloadUrlError::InvalidEvent(format!(
                "'{KEY_PARAM}' parameter must be a string"
            )));
        }

        let query_string_parameters = params
            .iter()
            .filter_map(|(name, value)| Some((name.clone(), value.as_str()?.to_string())))
            .collect();

        Ok(Self {
            query_string_parameters: Some(query_string_parameters),
        })
    }

    /// 使用单个 `key` 查询参数构造请求。
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            query_string_parameters: Some(HashMap::from([(KEY_PARAM.to_string(), key.into())])),
        }
    }

    /// 获取非空的 `key` 查询参数。
    pub fn object_key(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(KEY_PARAM)
            .map(String::as_str)
            .filter(|key| !key.is_empty())
    }
}

/// 返回给函数平台的 HTTP 风格响应。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

impl DownloadResponse {
    fn plain_text(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            body,
            headers: BTreeMap::from([(
                CONTENT_TYPE_HEADER.to_string(),
                CONTENT_TYPE_TEXT_PLAIN.to_string(),
            )]),
        }
    }

    /// 200 响应，正文为预签名 URL
    pub fn ok(url: String) -> Self {
        Self::plain_text(200, url)
    }

    /// 500 响应，正文为错误信息
    pub fn error(message: String) -> Self {
        Self::plain_text(500, message)
    }
}
