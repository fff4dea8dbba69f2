// ============================================================================
// [总线] 模块组装
// ✅ 只能做：pub mod 暴露子模块
// ⛔ 禁止：直接实现业务逻辑
// ============================================================================

pub mod logging;
pub mod models;
pub mod services;
pub mod utils;
