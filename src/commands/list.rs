use crate::libs::messages::Message;
use crate::libs::tasks::Tasks;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print one record block per task instead of a table
    #[arg(short, long)]
    plain: bool,
}

pub fn cmd(args: ListArgs, tasks: &Tasks) -> Result<()> {
    show(tasks, args.plain);
    Ok(())
}

pub fn show(tasks: &Tasks, plain: bool) {
    let listing = tasks.list();
    if listing.is_empty() {
        msg_info!(Message::NoTasksFound);
        return;
    }

    if plain {
        View::task_records(listing);
    } else {
        msg_print!(Message::TasksHeader, true);
        View::tasks(listing);
    }
}
