use crate::store::DEFAULT_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(about = "Interactive to-do list with due dates, priorities and an archive")]
#[command(version)]
pub struct Cli {
    /// Task file to load at startup and save on quit
    #[arg(short, long, env = "TASKS_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Never colour overdue / due-soon markers
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_task_file_in_cwd() {
        let cli = Cli::try_parse_from(["tasks"]).unwrap();
        // TASKS_FILE may be set in the environment running the tests
        if std::env::var_os("TASKS_FILE").is_none() {
            assert_eq!(cli.file, PathBuf::from(DEFAULT_FILE));
        }
        assert!(!cli.no_color);
    }

    #[test]
    fn accepts_file_and_color_flags() {
        let cli = Cli::try_parse_from(["tasks", "--file", "/tmp/work.json", "--no-color"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("/tmp/work.json"));
        assert!(cli.no_color);
    }
}
