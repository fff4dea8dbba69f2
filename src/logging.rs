//! CLI 进度日志初始化。
//!
//! 业务层统一用 `log` 门面输出进度信息，这里在二进制入口装一个
//! tracing-subscriber 后端并桥接 `log` 记录。默认级别 `info`，
//! 可用 `RUST_LOG` 覆盖。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志后端
///
/// 输出到 stderr，紧凑格式。重复初始化时静默忽略（方便测试里调用）。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_log::LogTracer::init().is_err() {
        return;
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
