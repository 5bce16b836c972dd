use crate::libs::messages::Message;
use crate::libs::tasks::Tasks;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DoneArgs, tasks: &mut Tasks) -> Result<()> {
    mark_done(tasks, &args.id)
}

pub fn mark_done(tasks: &mut Tasks, id: &str) -> Result<()> {
    let task = tasks.mark_done(id)?;
    msg_success!(Message::TaskMarkedDone(task.id));
    Ok(())
}
