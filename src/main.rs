use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minigit::artifacts::core::PagerWriter;
use minigit::artifacts::core::error::repository_error;
use minigit::artifacts::objects::commit::parse_commit_id;
use minigit::Repository;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "MINIGIT_LOG";

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    about = "A minimal local version control system",
    long_about = "This is a minimal version control system, written in Rust. \
    It tracks a single working directory, snapshots staged files into a numbered \
    history and restores the working directory to any earlier commit.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command captures the current content of the given files. \
        Directories are expanded to every file they contain."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit from the staged files",
        long_about = "This command creates a new commit with the specified message and clears the staging area."
    )]
    Commit {
        #[arg(short, long, conflicts_with = "words", help = "The commit message")]
        message: Option<String>,
        #[arg(
            index = 1,
            num_args = 1..,
            required_unless_present = "message",
            help = "The commit message, as one or more words"
        )]
        words: Vec<String>,
    },
    #[command(
        name = "status",
        about = "Show the working directory status",
        long_about = "This command lists staged, modified, deleted and untracked files relative to the last commit."
    )]
    Status {
        #[arg(long, help = "Print the status in a stable, machine-readable format")]
        porcelain: bool,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command prints every commit, most recent first, or a single commit when an id is given."
    )]
    Log {
        #[arg(
            index = 1,
            allow_negative_numbers = true,
            value_parser = integer_arg,
            help = "The id of the commit to show"
        )]
        id: Option<String>,
    },
    #[command(
        name = "restore",
        about = "Restore the working directory to a commit",
        long_about = "This command overwrites the working directory with the files recorded in the given commit. \
        Files the commit does not contain are left untouched."
    )]
    Restore {
        #[arg(
            index = 1,
            allow_negative_numbers = true,
            value_parser = integer_arg,
            help = "The id of the commit to restore"
        )]
        id: String,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(repository_error(&err).map_or(1, |err| err.exit_code()))
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(pwd, Box::new(std::io::stdout()))?
                }
            };

            repository.init()?;
        }
        Commands::Add { paths } => {
            let mut repository = open_repository()?;

            repository.add(paths)?;
        }
        Commands::Commit { message, words } => {
            let mut repository = open_repository()?;
            let message = match message {
                Some(message) => message.clone(),
                None => words.join(" "),
            };

            repository.commit(&message)?;
        }
        Commands::Status { porcelain } => {
            let repository = open_repository()?;

            repository.status(*porcelain)?;
        }
        Commands::Log { id } => {
            let pwd = std::env::current_dir()?;

            if use_pager() {
                let pager = minus::Pager::new();
                let repository =
                    Repository::new(pwd, Box::new(PagerWriter::new(pager.clone())))?;
                repository.ensure_initialized()?;
                let id = id.as_deref().map(parse_commit_id).transpose()?;

                repository.log(id)?;
                minus::page_all(pager)?;
            } else {
                let repository = Repository::new(pwd, Box::new(std::io::stdout()))?;
                repository.ensure_initialized()?;
                let id = id.as_deref().map(parse_commit_id).transpose()?;

                repository.log(id)?;
            }
        }
        Commands::Restore { id } => {
            let mut repository = open_repository()?;
            repository.ensure_initialized()?;

            repository.restore(parse_commit_id(id)?)?;
        }
    }

    Ok(())
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::new(pwd, Box::new(std::io::stdout()))
}

/// Accept any integer, signed or not; range checks are left to the command
fn integer_arg(value: &str) -> Result<String, String> {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);

    if !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(format!("'{value}' is not a commit id"))
    }
}

fn use_pager() -> bool {
    std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal()
}
