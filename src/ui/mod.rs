pub mod app;
pub mod prompt;

use crate::ui::app::App;
use anyhow::Result;
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Runs the interactive session on the process's stdin and stdout.
pub fn run_app(path: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let show_progress = io::stderr().is_terminal();
    let color = stdout.is_terminal() && env::var_os("NO_COLOR").is_none();

    let mut app = App::new(stdin.lock(), stdout.lock(), path)
        .with_progress(show_progress)
        .with_color(color);
    app.run()
}
