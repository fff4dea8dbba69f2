// ============================================================================
// 数据传输对象（DTO）定义
// 打包流程各阶段之间传递的数据结构，仅包含字段定义
// ⛔ 禁止：包含复杂的业务逻辑方法
// ============================================================================

/// 打包结果，由 `pack_build_output` 返回
/// 包含生成的 ZIP 压缩包信息，供 CLI 输出结果摘要
#[derive(Clone, Debug)]
pub struct PackResult {
    /// 生成的 ZIP 文件的完整路径
    pub zip_path: String,
    /// 写入压缩包的条目数（文件 + 目录）
    pub entry_count: usize,
    /// 被排除规则跳过的条目数
    pub excluded_count: usize,
}
