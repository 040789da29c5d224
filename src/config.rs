use std::path::PathBuf;
use std::time::Duration;

pub const GAMES_URL: &str = "https://www.freetogame.com/api/games";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

pub const TEMPLATE_NAME: &str = "index.html";
pub const TEMPLATE_PATH: &str = "templates/index.html";
pub const STATIC_DIR: &str = "css";
pub const STATIC_PREFIX: &str = "/css";

/// Genre value meaning "no genre constraint".
pub const ALL_GENRES: &str = "all";

/// Runtime settings for the HTTP front-end.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub api_url: String,
    pub timeout: Duration,
    pub template_path: PathBuf,
    pub static_dir: PathBuf,
    /// Carry the previous genre selection into submissions that omit one.
    pub sticky_genre: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: GAMES_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            template_path: PathBuf::from(TEMPLATE_PATH),
            static_dir: PathBuf::from(STATIC_DIR),
            sticky_genre: false,
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
