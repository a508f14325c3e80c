//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Medivox - clinical AI assistant with vision and voice
#[derive(Parser, Debug)]
#[command(name = "medivox")]
#[command(version)]
#[command(about = "Clinical AI assistant with vision and voice, powered by Groq")]
#[command(long_about = None)]
pub struct Cli {
    /// Symptom description as free text
    #[arg(short = 't', long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Path to a medical image to attach
    #[arg(short = 'i', long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Path to a voice recording (overrides --text when given)
    #[arg(short = 'a', long, value_name = "FILE")]
    pub audio: Option<PathBuf>,

    /// Chat model for diagnosis generation
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Voice for the spoken response
    #[arg(long, value_name = "VOICE")]
    pub voice: Option<String>,

    /// Directory for synthesized audio artifacts
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed consultation options
#[derive(Debug, Clone)]
pub struct ConsultOptions {
    pub text: Option<String>,
    pub image: Option<PathBuf>,
    pub audio: Option<PathBuf>,
    pub model: String,
    pub voice: String,
    pub output_dir: PathBuf,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "model", "voice", "output_dir"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["medivox"]);
        assert!(cli.text.is_none());
        assert!(cli.image.is_none());
        assert!(cli.audio.is_none());
        assert!(cli.model.is_none());
        assert!(cli.voice.is_none());
        assert!(cli.output_dir.is_none());
    }

    #[test]
    fn cli_parses_text() {
        let cli = Cli::parse_from(["medivox", "-t", "fever and cough"]);
        assert_eq!(cli.text, Some("fever and cough".to_string()));
    }

    #[test]
    fn cli_parses_attachments() {
        let cli = Cli::parse_from(["medivox", "-i", "scan.png", "-a", "note.wav"]);
        assert_eq!(cli.image, Some(PathBuf::from("scan.png")));
        assert_eq!(cli.audio, Some(PathBuf::from("note.wav")));
    }

    #[test]
    fn cli_parses_model_and_voice() {
        let cli = Cli::parse_from(["medivox", "-m", "mixtral-8x7b-32768", "--voice", "Celeste-PlayAI"]);
        assert_eq!(cli.model, Some("mixtral-8x7b-32768".to_string()));
        assert_eq!(cli.voice, Some("Celeste-PlayAI".to_string()));
    }

    #[test]
    fn cli_parses_output_dir() {
        let cli = Cli::parse_from(["medivox", "-o", "/tmp/artifacts"]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("/tmp/artifacts")));
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["medivox", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["medivox", "config", "set", "voice", "Celeste-PlayAI"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "voice");
            assert_eq!(value, "Celeste-PlayAI");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("model"));
        assert!(is_valid_config_key("voice"));
        assert!(is_valid_config_key("output_dir"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
