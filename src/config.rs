use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Screens rendered as plain text
    #[default]
    Text,
    /// One JSON response object per line
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "quiz", version, about = "Multiple-choice quiz in the terminal")]
pub struct Args {
    /// JSON question pack; the built-in pack is used when omitted
    #[arg(long, value_name = "PATH")]
    pub pack: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Directory for the daily log files
    #[arg(long, value_name = "DIR", default_value = "log")]
    pub log_dir: String,

    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["quiz"]);
        assert_eq!(args.pack, None);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.log_dir, "log");
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn explicit_flags() {
        let args = Args::parse_from([
            "quiz",
            "--pack",
            "packs/rust.json",
            "--format",
            "json",
            "--log-dir",
            "/tmp/quiz",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.pack.as_deref(), Some("packs/rust.json"));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.log_dir, "/tmp/quiz");
        assert_eq!(args.log_level, LevelFilter::Debug);
    }
}
