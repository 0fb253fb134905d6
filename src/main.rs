use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use s3_download_url::utils::logging::init_lambda_logging;
use s3_download_url::{DownloadResponse, handler_from_env};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_lambda_logging();

    // 客户端在冷启动时创建一次，存储桶名称仍在每次调用时读取
    let handler = handler_from_env().await;
    let handler = &handler;

    // 事件以原始 JSON 接收，结构错误也由处理器转换为 500 响应
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<DownloadResponse, Error>(handler.handle_event(&event.payload).await)
    }))
    .await
}
