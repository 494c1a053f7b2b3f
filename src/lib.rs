use std::path::Path;

use chrono::Local;
use error::{BemtronError, ErrorAction, ErrorKind};
use tracing::{level_filters::LevelFilter, Level};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::format::{DefaultFields, Format},
    FmtSubscriber,
};

pub mod configatron;
pub mod derivatron;
pub mod error;
pub mod identity;
pub mod memorion;
pub mod nomenclator;
pub mod types;
pub mod utils;

pub use configatron::{load_bem_options, parse_bem_options, BemOptions, BemSettings};
pub use derivatron::{derive_class_list, derive_tokens_from_map};
pub use identity::{ComponentIdentity, SharedIdentity};
pub use nomenclator::{BemNotation, BlockCall, ElementCall, Nomenclator};
pub use types::{BemValue, ClassList, MixMap, ModifierMap};
pub use utils::join_class_list::join_class_list;

pub type BemtronResult<T> = Result<T, BemtronError>;

pub type BemtronLogSubscriber = FmtSubscriber<DefaultFields, Format, LevelFilter, NonBlocking>;

pub fn generate_log_filename() -> String {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();

    format!("bemtron_log_{}.log", timestamp)
}

/// Builds a subscriber that writes every trace event to a timestamped file inside `logs_dir`.
///
/// The returned guard flushes the non-blocking writer on drop and must be kept alive
/// for as long as the subscriber is in use.
pub fn generate_log_subscriber<P: AsRef<Path>>(
    logs_dir: P,
) -> BemtronResult<(BemtronLogSubscriber, WorkerGuard)> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(generate_log_filename())
        .build(logs_dir.as_ref())
        .map_err(|err| {
            BemtronError::raise_critical_logging_error(
                ErrorKind::LogFileAppenderInitializationFailed,
                &format!("Failed to create the log file appender: {}", err),
                ErrorAction::Notify,
            )
        })?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_writer(non_blocking)
        .finish();

    Ok((subscriber, guard))
}
