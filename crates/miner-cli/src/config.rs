use clap::Parser;

/// Default message mined when none is given.
pub const DEFAULT_MESSAGE: &str = "hello world";

#[derive(Parser, Debug, Clone)]
#[command(name = "goblin-mine", about, version)]
pub struct Config {
    #[arg(
        long,
        env = "GOBLIN_MESSAGE",
        default_value = DEFAULT_MESSAGE,
        help = "Message the nonce is appended to"
    )]
    pub message: String,

    #[arg(
        short,
        long,
        env = "GOBLIN_DIFFICULTY",
        default_value_t = 4,
        allow_negative_numbers = true,
        help = "Required leading zero hex digits in the hash"
    )]
    pub difficulty: i64,

    #[arg(
        long,
        env = "GOBLIN_MAX_NONCE",
        default_value_t = 10_000_000,
        help = "Largest nonce to try (inclusive)"
    )]
    pub max_nonce: u32,

    #[arg(
        short,
        long,
        value_name = "THREADS",
        help = "Worker threads (default: number of CPU cores)"
    )]
    pub threads: Option<usize>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,
}

impl Config {
    pub fn threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["goblin-mine"]).unwrap();
        assert_eq!(config.message, DEFAULT_MESSAGE);
        assert_eq!(config.difficulty, 4);
        assert_eq!(config.max_nonce, 10_000_000);
        assert!(!config.json);
        assert!(config.threads() >= 1);
    }

    #[test]
    fn test_negative_difficulty_reaches_core() {
        let config = Config::try_parse_from(["goblin-mine", "--difficulty", "-1"]).unwrap();
        assert_eq!(config.difficulty, -1);
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::try_parse_from([
            "goblin-mine",
            "--message",
            "abc",
            "-d",
            "2",
            "--max-nonce",
            "0",
            "--threads",
            "0",
            "--json",
        ])
        .unwrap();

        assert_eq!(config.message, "abc");
        assert_eq!(config.difficulty, 2);
        assert_eq!(config.max_nonce, 0);
        assert_eq!(config.threads(), 1);
        assert!(config.json);
    }

    #[test]
    fn test_max_nonce_out_of_range() {
        assert!(Config::try_parse_from(["goblin-mine", "--max-nonce", "4294967296"]).is_err());
    }
}
