use std::path::Path;

use log::{info, LevelFilter};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::{QuizError, Result};

pub fn log_file_path(log_dir: &str) -> String {
    let current_date = chrono::offset::Utc::now().date_naive().to_string();
    Path::new(log_dir)
        .join(format!("{}.log", current_date))
        .to_string_lossy()
        .into_owned()
}

/// Sends every record to the file of the current UTC day under `log_dir`.
/// The terminal's stdout is left to the quiz screens.
pub fn init_file_logger(log_dir: &str, level: LevelFilter) -> Result<()> {
    let path = log_file_path(log_dir);

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)(utc)} {l} - {m}\n",
        )))
        .build(&path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|error| QuizError::Logger(error.to_string()))?;

    log4rs::init_config(config).map_err(|error| QuizError::Logger(error.to_string()))?;
    info!("File logger initialized at {}", path);

    Ok(())
}
