use anyhow::Result;
use clap::Args;

use crate::command::HeapBench;
use crate::runtime::{Config, LogLevel};
use crate::timer::Timer;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Args)]
pub struct HeapBenchCMD {
    /// [max|min] [su|sd] N, by position. With one word it is N, with two
    /// it is the heap type and N
    #[arg(value_name = "ARG", allow_negative_numbers = true)]
    pub words: Vec<String>,

    // Logging verbosity: trace, debug, info, warn, error or off
    #[arg(long = "log-level", value_parser = clap::value_parser!(LogLevel), default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: LogLevel,
}
impl HeapBenchCMD {
    /// Run the commandline option
    pub fn try_execute(&mut self) -> Result<()> {
        let config = Config::from_args(self.words.as_slice())?;

        let mut timer = Timer::new();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        HeapBench::run(&config, &mut timer, &mut out)?;

        log::info!("Heapbench has finished successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        command: HeapBenchCMD,
    }

    #[test]
    fn test_parse_words() {
        let cli = TestCli::try_parse_from(["heapbench", "max", "sd", "3"]).unwrap();
        assert_eq!(cli.command.words, vec!["max", "sd", "3"]);
        assert_eq!(cli.command.log_level, LogLevel::default());

        let cli = TestCli::try_parse_from(["heapbench"]).unwrap();
        assert!(cli.command.words.is_empty());
    }

    #[test]
    fn test_parse_log_level_and_negative_count() {
        let cli = TestCli::try_parse_from(["heapbench", "--log-level", "debug", "-3"]).unwrap();
        assert_eq!(cli.command.words, vec!["-3"]);
        assert_eq!(cli.command.log_level.0, log::LevelFilter::Debug);

        assert!(TestCli::try_parse_from(["heapbench", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_non_numeric_count_fails() {
        let mut cli = TestCli::try_parse_from(["heapbench", "min", "many"]).unwrap();
        let err = cli.command.try_execute().unwrap_err();
        assert!(err.to_string().contains("element count 'many'"));
    }
}
