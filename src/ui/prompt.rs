use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Prints `prompt` and reads one line. `None` means the input is exhausted.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Turns typed or pasted text into a path: strips one pair of surrounding
/// quotes and expands a leading `~`.
pub fn parse_path_input(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|s| s.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        return None;
    }

    if unquoted == "~" {
        return dirs::home_dir().or_else(|| Some(PathBuf::from(unquoted)));
    }
    if let Some(rest) = unquoted.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return Some(home.join(rest));
    }

    Some(PathBuf::from(unquoted))
}

/// Asks a y/N question. Only `y` or `yes` confirms.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<bool> {
    let answer = read_line(input, out, &format!("{question} [y/N]: "))?;
    Ok(answer.is_some_and(|a| {
        let a = a.to_ascii_lowercase();
        a == "y" || a == "yes"
    }))
}
