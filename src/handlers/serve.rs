use super::download_url::DownloadUrlHandler;
use crate::event::{DownloadRequest, DownloadResponse};
use crate::utils::s3::Presigner;
use axum::{
    body::Body,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use http::{HeaderName, HeaderValue, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;

/// 把本地 HTTP 请求转换为调用事件并交给处理器。
///
/// 查询字符串为空时按缺少 `queryStringParameters` 处理，与 API Gateway 的行为一致。
/// 无法解析的查询字符串同样返回 500 纯文本响应。
pub async fn handle_download_url<P: Presigner + 'static>(
    State(handler): State<Arc<DownloadUrlHandler<P>>>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> DownloadResponse {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => return DownloadResponse::error(rejection.body_text()),
    };

    let request = DownloadRequest {
        query_string_parameters: (!params.is_empty()).then_some(params),
    };

    handler.handle(&request).await
}

impl IntoResponse for DownloadResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut builder = http::Response::builder().status(status);

        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                builder = builder.header(name, value);
            }
        }

        match builder.body(Body::from(self.body)) {
            Ok(resp) => resp,
            Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}
