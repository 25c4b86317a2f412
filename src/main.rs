use anyhow::Result;
use beargit::config::{CONTROL_DIR_ENV, DEFAULT_CONTROL_DIR, WORK_TREE_ENV};
use beargit::{Config, Head, MergeAction, Repository, Revision};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around and restore files,
but commits are refused until you check out a branch again.

If you want to keep working from here, create a branch at this point:

    beargit checkout -b <new-branch-name>
"#;

#[derive(Parser)]
#[command(
    name = "beargit",
    version = "0.1.0",
    about = "A minimal local version-control engine",
    long_about = "Stage files, freeze them into commits, name points in history with branches, \
    and move the work tree between them.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(
        short = 'C',
        long,
        global = true,
        env = WORK_TREE_ENV,
        help = "Run as if started in this work tree"
    )]
    work_tree: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = CONTROL_DIR_ENV,
        default_value = DEFAULT_CONTROL_DIR,
        help = "Name of the control directory inside the work tree"
    )]
    control_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository")]
    Init,
    #[command(name = "add", about = "Start tracking a file")]
    Add {
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "rm", about = "Stop tracking a file")]
    Rm {
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(name = "status", about = "List tracked files")]
    Status,
    #[command(
        name = "commit",
        about = "Record the tracked files as a new commit",
        long_about = "Record the tracked files as a new commit on the current branch. \
        The message must contain \"THIS IS BEAR TERRITORY!\"."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show history from HEAD")]
    Log {
        #[arg(short = 'n', long, default_value_t = 10, help = "Show at most this many commits")]
        limit: usize,
    },
    #[command(name = "branch", about = "List branches, or create one at HEAD")]
    Branch {
        #[arg(index = 1)]
        name: Option<String>,
    },
    #[command(name = "checkout", about = "Switch to a branch or commit")]
    Checkout {
        #[arg(short = 'b', help = "Create the branch first")]
        new_branch: bool,
        #[arg(index = 1)]
        target: String,
    },
    #[command(name = "reset", about = "Restore a file from a commit")]
    Reset {
        #[arg(index = 1)]
        commit: String,
        #[arg(index = 2)]
        file: PathBuf,
    },
    #[command(name = "merge", about = "Import the files of a branch or commit")]
    Merge {
        #[arg(index = 1)]
        target: String,
    },
    #[command(name = "rev-parse", about = "Print the commit a branch or commit id resolves to")]
    RevParse {
        #[arg(index = 1)]
        token: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR:  {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let work_tree = match cli.work_tree {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let config = Config::try_new(work_tree, cli.control_dir)?;
    let repository = Repository::new(&config)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Init => {
            repository.init()?;
            writeln!(
                out,
                "Initialized empty beargit repository in {}",
                repository.control_path().display()
            )?;
        }
        Commands::Add { file } => {
            repository.add(file)?;
        }
        Commands::Rm { file } => {
            repository.remove(file)?;
        }
        Commands::Status => {
            let tracked = repository.status()?;

            writeln!(out, "Tracked files:\n")?;
            for path in &tracked {
                writeln!(out, "{}", path.display())?;
            }
            match tracked.len() {
                1 => writeln!(out, "\nThere is 1 file total.")?,
                count => writeln!(out, "\nThere are {count} files total.")?,
            }
        }
        Commands::Commit { message } => {
            let commit_id = repository.commit(&message)?;
            writeln!(out, "{commit_id}")?;
        }
        Commands::Log { limit } => {
            let commits = repository.log(limit)?;
            if commits.is_empty() {
                anyhow::bail!("There are no commits.");
            }

            for commit in commits {
                writeln!(out, "commit {}\n   {}\n", commit.id(), commit.message())?;
            }
        }
        Commands::Branch { name: Some(name) } => {
            repository.create_branch(&name)?;
        }
        Commands::Branch { name: None } => {
            for entry in repository.list_branches()? {
                if entry.is_current {
                    writeln!(out, "*  {}", entry.name.to_string().green())?;
                } else {
                    writeln!(out, "   {}", entry.name)?;
                }
            }
        }
        Commands::Checkout { new_branch, target } => {
            let was_detached = repository.head()?.is_detached();

            match repository.checkout(&target, new_branch)? {
                Head::Attached { branch, .. } if new_branch => {
                    eprintln!("Switched to a new branch '{branch}'");
                }
                Head::Attached { branch, .. } => {
                    eprintln!("Switched to branch '{branch}'");
                }
                Head::Detached(commit) => {
                    if !was_detached {
                        eprintln!("Note: checking out '{target}'.\n{DETACHMENT_NOTICE}");
                    }
                    eprintln!("HEAD is now at {}", commit.to_short_id());
                }
            }
        }
        Commands::Reset { commit, file } => {
            repository.reset(&commit, file)?;
        }
        Commands::Merge { target } => {
            let report = repository.merge(&target)?;

            for action in report.actions() {
                match action {
                    MergeAction::Added(path) => writeln!(out, "{} added", path.display())?,
                    MergeAction::Conflicted { path, .. } => {
                        writeln!(out, "{} conflicted copy created", path.display())?
                    }
                }
            }
        }
        Commands::RevParse { token } => {
            match repository.resolve(&token)? {
                Revision::Attached(branch, commit) => writeln!(out, "{commit} ({branch})")?,
                Revision::Detached(commit) => writeln!(out, "{commit}")?,
            }
        }
    }

    Ok(())
}
