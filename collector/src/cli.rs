use clap::Parser;
use std::path::PathBuf;

/// Records accelerometer, gyroscope and magnetometer samples into text files for a fixed time.
#[derive(Parser, Debug)]
#[command(name = "IMU Collector")]
#[command(bin_name = "imu-collector")]
pub struct Cli {
    /// Session hours (0-99). Blank means 0.
    #[arg(long, default_value = "")]
    pub hours: String,

    /// Session minutes (0-59). Blank means 0.
    #[arg(long, default_value = "")]
    pub minutes: String,

    /// Session seconds (0-59). Blank means 5.
    #[arg(long, default_value = "")]
    pub seconds: String,

    /// TOML configuration file.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Directory receiving the log files. Overrides the configuration file.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Debug logs from the collector, including every live value.
    #[arg(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_default_to_blank() {
        let cli = Cli::try_parse_from(["imu-collector"]).unwrap();
        assert_eq!(cli.hours, "");
        assert_eq!(cli.minutes, "");
        assert_eq!(cli.seconds, "");
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_fields_kept_as_text() {
        let cli = Cli::try_parse_from([
            "imu-collector",
            "--minutes",
            "2",
            "--seconds",
            "abc",
            "--output-dir",
            "/tmp/logs",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.minutes, "2");
        assert_eq!(cli.seconds, "abc");
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
