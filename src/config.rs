use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_DECKS_PATH: &str = "./decks.csv";
const DEFAULT_MATCHES_PATH: &str = "./matches.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub decks_path: PathBuf,
    pub matches_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let decks_path = path_var("KEYFORGE_DECKS_PATH", DEFAULT_DECKS_PATH)?;
        let matches_path = path_var("KEYFORGE_MATCHES_PATH", DEFAULT_MATCHES_PATH)?;

        Ok(Config {
            decks_path,
            matches_path,
        })
    }
}

fn path_var(name: &str, default: &str) -> Result<PathBuf, AppError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(AppError::ConfigError(format!(
            "{} is set but empty",
            name
        ))),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(env::VarError::NotPresent) => Ok(PathBuf::from(default)),
        Err(env::VarError::NotUnicode(_)) => Err(AppError::ConfigError(format!(
            "{} is not valid unicode",
            name
        ))),
    }
}
