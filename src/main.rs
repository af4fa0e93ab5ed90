use anyhow::Context;
use clap::Parser;
use crossterm::tty::IsTty;
use std::io;
use tasks::{config::Cli, store, ui::Console, TaskList};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with prompts; quiet unless RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut list = match store::load(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))
    {
        Ok(list) => list,
        Err(err) => {
            println!("Error loading tasks: {err:#}");
            TaskList::new()
        }
    };

    let stdout = io::stdout();
    let color = !cli.no_color && stdout.is_tty();
    let mut console = Console::new(io::stdin().lock(), stdout.lock(), color);

    let result = console
        .check_overdue(&list)
        .and_then(|_| console.run(&mut list));
    drop(console);

    // Save tasks
    match store::save(&list, &cli.file) {
        Ok(()) => println!("Tasks saved. Goodbye!"),
        Err(err) => println!("Error saving tasks: {err}"),
    }

    if let Err(err) = result {
        eprintln!("{:?}", err);
    }
    Ok(())
}
