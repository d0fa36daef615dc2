use std::process::ExitCode;

use crossterm::style::{Attribute, Color, Stylize};
use tracing_appender::non_blocking::WorkerGuard;

use spanmaze::app::{parse_args, run};

/// Log to `spanmaze.log` in the working directory so stdout only carries the maze.
/// `DEBUG=1` raises the level to debug.
fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "spanmaze.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

fn main() -> ExitCode {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_logging();

    let result = parse_args(std::env::args().skip(1))
        .and_then(|args| run(&args, &mut std::io::stdout()));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!(
                "{}",
                err.to_string().with(Color::Yellow).attribute(Attribute::Bold)
            );
            ExitCode::FAILURE
        }
    }
}
