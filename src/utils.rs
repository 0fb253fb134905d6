//! 工具函数模块
//!
//! 此模块包含了项目中使用的各种工具函数：
//! - S3 预签名操作
//! - 日志初始化

pub mod logging;
pub mod s3;
