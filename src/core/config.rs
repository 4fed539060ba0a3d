use tracing::debug;

use crate::flags::Flags;

pub const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: String,
    pub show_prompt: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_prompt: true,
            color: true,
        }
    }
}

impl Config {
    pub fn from_flags(flags: &Flags) -> Self {
        Self {
            show_prompt: !flags.is_set("quiet"),
            color: !flags.is_set("no-color"),
            ..Self::default()
        }
    }

    /// Startup files would be read here. There are none, so this does nothing.
    pub fn load(&mut self) {
        debug!("no startup files to load");
    }
}
