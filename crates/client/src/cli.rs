use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Run hero commands against the simulated character
#[derive(Debug, Parser)]
#[command(name = "pilot")]
#[command(about = "Run hero commands against the simulated character", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Routine lines such as "Move, x=0.5, y=0.3", run in order
    pub lines: Vec<String>,

    /// Read routine lines from a file, one per line ('#' starts a comment)
    #[arg(short, long)]
    pub routine: Option<PathBuf>,

    /// Number of passes over the routine
    #[arg(short, long, default_value_t = 1)]
    pub passes: u32,

    /// Run on a virtual clock: sleeps return immediately
    #[arg(long)]
    pub instant: bool,

    /// Print the commands the book knows and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Routine lines from the file, if any, followed by those on the command
    /// line. Blank lines and comments are dropped.
    pub fn routine_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        if let Some(path) = &self.routine {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read routine {}", path.display()))?;
            lines.extend(text.lines().map(str::to_string));
        }
        lines.extend(self.lines.iter().cloned());

        Ok(lines
            .into_iter()
            .map(|line| match line.split_once('#') {
                Some((code, _)) => code.trim().to_string(),
                None => line.trim().to_string(),
            })
            .filter(|line| !line.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_and_flags() {
        let cli = Cli::parse_from(["pilot", "--instant", "-p", "3", "Move, 0.5, 0.3", "Shout"]);
        assert!(cli.instant);
        assert_eq!(cli.passes, 3);
        assert_eq!(
            cli.routine_lines().unwrap(),
            vec!["Move, 0.5, 0.3".to_string(), "Shout".to_string()]
        );
    }

    #[test]
    fn drops_comments_and_blank_lines() {
        let cli = Cli::parse_from(["pilot", "  # warm up", "", "Buff  # every pass"]);
        assert_eq!(cli.routine_lines().unwrap(), vec!["Buff".to_string()]);
    }
}
