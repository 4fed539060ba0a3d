use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub set: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        for (name, short, description) in [
            ("help", "-h", "Print this help message"),
            ("version", "-v", "Show version information"),
            ("quiet", "-q", "Do not print the prompt"),
            ("debug", "-d", "Enable debug output on stderr"),
            ("no-color", "-n", "Never colour output"),
        ] {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: format!("--{}", name),
                    description: description.to_string(),
                    set: false,
                },
            );
        }

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::Flag(format!("unknown argument: {}", arg)))?;
            flag.set = true;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).is_some_and(|f| f.set)
    }

    pub fn print_help(&self) {
        println!("Usage: lsh [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<12} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_unset() {
        let flags = Flags::new();
        for name in ["help", "version", "quiet", "debug", "no-color"] {
            assert!(!flags.is_set(name));
        }
    }

    #[test]
    fn test_short_and_long_forms() {
        let mut flags = Flags::new();
        flags.parse(&args(&["-q", "--debug"])).unwrap();
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_unknown_argument_rejected() {
        let mut flags = Flags::new();
        let result = flags.parse(&args(&["--bogus"]));
        assert!(matches!(result, Err(ShellError::Flag(msg)) if msg.contains("--bogus")));
    }

    #[test]
    fn test_unknown_flag_name_is_unset() {
        assert!(!Flags::new().is_set("config"));
    }
}
