use lsh::core::config::Config;
use lsh::flags::Flags;
use lsh::highlight::Painter;
use lsh::process::UnixProcess;
use lsh::shell::Shell;
use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::{debug, Level};

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("lsh: {}", e);
        flags.print_help();
        return ExitCode::FAILURE;
    }

    if flags.is_set("help") {
        flags.print_help();
        return ExitCode::SUCCESS;
    }

    if flags.is_set("version") {
        println!("lsh {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let level = if flags.is_set("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::from_flags(&flags);
    config.load();

    let painter = if config.color && io::stdout().is_terminal() {
        Painter::detect(&io::stderr())
    } else {
        Painter::plain()
    };

    let stdin = io::stdin().lock();
    let mut shell =
        Shell::new(config, stdin, io::stdout(), io::stderr(), UnixProcess).with_painter(painter);

    match shell.run() {
        Ok(termination) => {
            debug!(?termination, "shell finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("lsh: {}", e);
            ExitCode::FAILURE
        }
    }
}
