use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志
///
/// 默认 `info` 级别，可通过 `RUST_LOG` 覆盖。
///
/// # 返回
/// 已经安装过全局 subscriber 时（例如测试中多次调用）返回 false，保留原有的
pub fn init() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}
