use tracing::Level;
use tracing_subscriber::fmt::time::LocalTime;

/// 初始化 Lambda 环境下的日志输出
///
/// 运行平台会为每行日志加上时间戳，这里不再重复输出时间。
pub fn init_lambda_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

/// 初始化本地开发服务器的日志输出，使用本地时区的 RFC 3339 时间
pub fn init_local_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_timer(LocalTime::rfc_3339())
        .init();
}
