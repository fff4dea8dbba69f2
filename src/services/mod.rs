// ============================================================================
// 业务层：纯 Rust 核心逻辑
// ✅ 特点：不依赖 CLI 层，保持纯净，方便写 #[test]
// ⛔ 禁止：直接向 stdout 打印（统一走 log）
// ============================================================================

pub mod classifier;
pub mod locator;
pub mod packer;
pub mod policy;

// ============================================================================
// 常量定义
// ============================================================================

/// 输出压缩包文件名前缀
pub const OUTPUT_PREFIX: &str = "vc-output";

/// 输出压缩包扩展名
/// 打包遍历同时用它做自产物排除：任何以此结尾的路径不进包
pub const OUTPUT_EXTENSION: &str = ".zip";
