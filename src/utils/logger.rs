use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 安裝 CLI 日誌。輸出寫到 stderr，stdout 保留給展開結果。
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let default_directive = if verbose {
        "small_cron=debug,info".to_string()
    } else {
        match level {
            Some(level) => format!("small_cron={}", level),
            None => "small_cron=warn".to_string(),
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // 重複呼叫時保留既有的 subscriber
    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
    {
        tracing::debug!("Logger already initialised: {}", e);
    }
}
