use crate::cleaner;
use crate::model::{JunkMatch, total_size};
use crate::report::{self, format_size, paint};
use crate::scanner;
use crate::ui::prompt::{confirm, parse_path_input, read_line};
use anyhow::Result;
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    AwaitingPath,
    Scanning,
    ReportDisplayed,
    MenuLoop,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Delete,
    DryRun,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "delete" => Ok(Self::Delete),
            "2" | "dry-run" | "dry" => Ok(Self::DryRun),
            "3" | "exit" | "quit" | "q" => Ok(Self::Exit),
            other => Err(other.to_string()),
        }
    }
}

/// Drives path selection, scan, report and the action menu over any
/// line-oriented input and output.
pub struct App<R, W> {
    input: R,
    out: W,
    pub state: AppState,
    pub root: PathBuf,
    pub matches: Vec<JunkMatch>,
    pending_path: Option<PathBuf>,
    progress: bool,
    color: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, out: W, path: Option<PathBuf>) -> Self {
        Self {
            input,
            out,
            state: AppState::AwaitingPath,
            root: PathBuf::new(),
            matches: Vec::new(),
            pending_path: path,
            progress: false,
            color: false,
        }
    }

    /// Shows a spinner on stderr while scanning.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    /// Styles console output with ANSI colors.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        while self.state != AppState::Exited {
            self.step()?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn step(&mut self) -> Result<()> {
        self.state = match self.state {
            AppState::AwaitingPath => self.await_path()?,
            AppState::Scanning => self.scan()?,
            AppState::ReportDisplayed => self.show_report()?,
            AppState::MenuLoop => self.menu()?,
            AppState::Exited => AppState::Exited,
        };
        Ok(())
    }

    fn await_path(&mut self) -> Result<AppState> {
        let path = match self.pending_path.take() {
            Some(path) => path,
            None => loop {
                let Some(line) =
                    read_line(&mut self.input, &mut self.out, "Enter the project path: ")?
                else {
                    return Ok(AppState::Exited);
                };
                if let Some(path) = parse_path_input(&line) {
                    break path;
                }
                writeln!(self.out, "{}", paint("Please enter a path.".red(), self.color))?;
            },
        };

        match scanner::resolve_root(&path) {
            Ok(root) => {
                self.root = root;
                Ok(AppState::Scanning)
            }
            Err(e) => {
                writeln!(self.out, "❌ {e}")?;
                Ok(AppState::Exited)
            }
        }
    }

    fn scan(&mut self) -> Result<AppState> {
        writeln!(self.out, "🔍 Analyzing project: {}", self.root.display())?;
        if let Some(disk) = report::disk_usage_line(&self.root) {
            writeln!(self.out, "   {disk}")?;
        }
        self.out.flush()?;

        let spinner = if self.progress {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
            pb.enable_steady_tick(Duration::from_millis(100));
            pb.set_message("Scanning...");
            pb
        } else {
            ProgressBar::hidden()
        };

        let root = self.root.clone();
        let cb = |path: &Path| {
            let rel = path.strip_prefix(&root).unwrap_or(path);
            spinner.set_message(format!("Measuring {}", rel.display()));
        };
        self.matches = scanner::scan(&self.root, Some(&cb));
        spinner.finish_and_clear();

        Ok(AppState::ReportDisplayed)
    }

    fn show_report(&mut self) -> Result<AppState> {
        if self.matches.is_empty() {
            writeln!(self.out, "✅ No junk folders found.")?;
            return Ok(AppState::Exited);
        }
        report::render_report(&mut self.out, &self.matches, &self.root, self.color)?;
        Ok(AppState::MenuLoop)
    }

    fn menu(&mut self) -> Result<AppState> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", paint("What would you like to do?".bold(), self.color))?;
        writeln!(self.out, "  1) Delete these folders")?;
        writeln!(self.out, "  2) Dry run (show what would be deleted)")?;
        writeln!(self.out, "  3) Exit")?;

        let Some(line) = read_line(&mut self.input, &mut self.out, "Choose an option [1-3]: ")?
        else {
            return Ok(AppState::Exited);
        };

        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Delete) => self.delete()?,
            Ok(MenuChoice::DryRun) => self.dry_run()?,
            Ok(MenuChoice::Exit) => {
                writeln!(self.out, "👋 Bye.")?;
                return Ok(AppState::Exited);
            }
            Err(choice) => {
                writeln!(
                    self.out,
                    "{}",
                    paint(
                        format!("❌ Invalid choice '{choice}'. Please enter 1, 2 or 3.").red(),
                        self.color
                    )
                )?;
            }
        }
        Ok(AppState::MenuLoop)
    }

    fn delete(&mut self) -> Result<()> {
        if self.matches.is_empty() {
            writeln!(self.out, "Nothing left to clean.")?;
            return Ok(());
        }

        let question = format!(
            "Permanently delete {} folder(s), {}?",
            self.matches.len(),
            format_size(total_size(&self.matches))
        );
        if !confirm(&mut self.input, &mut self.out, &question)? {
            writeln!(self.out, "Cancelled. Nothing was deleted.")?;
            return Ok(());
        }

        let report = cleaner::execute(&self.matches, false, &mut self.out, self.color)?;
        self.matches.retain(|m| !report.removed.contains(m));
        Ok(())
    }

    fn dry_run(&mut self) -> Result<()> {
        if self.matches.is_empty() {
            writeln!(self.out, "Nothing left to clean.")?;
            return Ok(());
        }
        cleaner::execute(&self.matches, true, &mut self.out, self.color)?;
        Ok(())
    }
}
