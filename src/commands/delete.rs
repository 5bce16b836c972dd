use crate::libs::messages::Message;
use crate::libs::tasks::Tasks;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DeleteArgs, tasks: &mut Tasks) -> Result<()> {
    delete(tasks, &args.id)
}

pub fn delete(tasks: &mut Tasks, id: &str) -> Result<()> {
    let removed = tasks.delete(id)?;
    msg_success!(Message::TaskDeleted(removed.id));

    // Every task after the removed one moved up by one
    if (removed.id as usize) <= tasks.len() {
        msg_info!(Message::TasksRenumbered);
    }
    Ok(())
}
