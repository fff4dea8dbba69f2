// ============================================================================
// 统一错误类型定义
// 使用 thiserror 派生宏，遵循 Rust 错误处理最佳实践
// ============================================================================

use thiserror::Error;

/// 应用统一错误枚举
///
/// 覆盖所有业务场景的错误类型，每个变体对应一类错误。
/// 目录发现阶段不产生错误（未命中只降级、记日志），
/// 因此这里只有参数验证和打包两类业务错误。
#[derive(Debug, Error)]
pub enum AppError {
    /// 参数验证失败（如 -source 路径不存在）
    #[error("验证失败：{0}")]
    ValidationError(String),

    /// 打包过程中的错误（如无法创建 ZIP、读写文件失败）
    #[error("打包失败：{0}")]
    PackError(String),

    /// 文件系统 IO 错误
    #[error("IO 错误：{0}")]
    IoError(#[from] std::io::Error),
}

/// 便捷类型别名，统一项目内的 Result 签名
pub type AppResult<T> = Result<T, AppError>;
