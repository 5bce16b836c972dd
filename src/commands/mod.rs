pub mod add;
pub mod delete;
pub mod done;
pub mod init;
pub mod list;
pub mod menu;

use crate::libs::messages::Message;
use crate::libs::store::Store;
use crate::libs::tasks::Tasks;
use crate::{msg_info, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks")]
    List(list::ListArgs),
    #[command(about = "Mark a task as done")]
    Done(done::DoneArgs),
    #[command(about = "Delete a task; the tasks after it are renumbered")]
    Delete(delete::DeleteArgs),
    #[command(about = "Interactive menu")]
    Menu,
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tasks file to use instead of the configured one
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args, &mut open_tasks(self.file)?),
            Commands::List(args) => list::cmd(args, &open_tasks(self.file)?),
            Commands::Done(args) => done::cmd(args, &mut open_tasks(self.file)?),
            Commands::Delete(args) => delete::cmd(args, &mut open_tasks(self.file)?),
            Commands::Menu => menu::cmd(&mut open_tasks(self.file)?),
        }
    }
}

/// Opens the task session. A corrupt tasks file is backed up first; any
/// unreadable file is replaced by an empty collection and never stops the program.
pub fn open_tasks(file: Option<PathBuf>) -> Result<Tasks> {
    let store = match file {
        Some(path) => Store::at(path),
        None => Store::new()?,
    };

    let tasks = match store.try_load() {
        Ok(tasks) => tasks,
        Err(e) if e.is_corrupt() => {
            msg_warning!(Message::TasksFileCorrupt(e.to_string()));
            match store.backup_corrupt() {
                Ok(path) => msg_info!(Message::TasksFileBackedUp(path.display().to_string())),
                Err(e) => msg_warning!(Message::TasksFileBackupFailed(e.to_string())),
            }
            Vec::new()
        }
        Err(e) => {
            msg_warning!(Message::TasksFileUnreadable(e.to_string()));
            Vec::new()
        }
    };

    Ok(Tasks::with_tasks(store, tasks))
}
