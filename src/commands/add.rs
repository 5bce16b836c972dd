use crate::libs::messages::Message;
use crate::libs::task::{parse_due_date, parse_tags};
use crate::libs::tasks::Tasks;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true)]
    title: String,
    /// Due date, YYYY-MM-DD
    #[arg(short, long)]
    due: Option<String>,
    /// Comma separated tags
    #[arg(short, long)]
    tags: Option<String>,
}

impl AddArgs {
    /// Raw answers from the interactive prompts.
    pub fn from_input(title: String, due: String, tags: String) -> Self {
        Self { title, due: Some(due), tags: Some(tags) }
    }
}

pub fn cmd(args: AddArgs, tasks: &mut Tasks) -> Result<()> {
    let due_date = args.due.as_deref().and_then(parse_due_date);
    let tags = args.tags.as_deref().map(parse_tags).unwrap_or_default();

    let task = tasks.add(args.title.trim(), due_date, tags)?;
    msg_success!(Message::TaskCreated(task.id));
    Ok(())
}
