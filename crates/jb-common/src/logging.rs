use std::any::Any;
use std::panic;
use std::path::PathBuf;
use std::sync::{Once, OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_DIR_ENV: &str = "JB_LOG_DIR";

/// ファイル出力時のワーカーを生かしておく
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// tracing subscriber を初期化する
///
/// レベルは `RUST_LOG`（未設定なら `info`）。`JB_LOG_DIR` があれば
/// `<JB_LOG_DIR>/<app>.log` へ日次で書き、なければ stderr。stdout は JSON 出力専用。
pub fn init_tracing_subscriber(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match log_file_writer(app_name) {
        Some(writer) => fmt.with_ansi(false).with_writer(writer).try_init(),
        None => fmt.with_writer(std::io::stderr).try_init(),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already set");
    }
}

fn log_file_writer(app_name: &str) -> Option<BoxMakeWriter> {
    let dir = PathBuf::from(std::env::var_os(LOG_DIR_ENV)?);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("cannot use {}: {err}", dir.display());
        return None;
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, format!("{app_name}.log")));
    FILE_GUARD.get_or_init(|| guard);
    Some(BoxMakeWriter::new(writer))
}

/// panic も error イベントとして記録する。既存のフックはその後に呼ぶ
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static HOOK: Once = Once::new();

    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_default();
            tracing::error!(
                app = app_name,
                %location,
                payload = panic_message(info.payload()),
                "panicked"
            );
            previous(info);
        }));
    });
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&str>() {
        *text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.as_str()
    } else {
        "<non-string payload>"
    }
}
