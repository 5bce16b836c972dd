use super::{add, delete, done, list};
use crate::libs::messages::Message;
use crate::libs::tasks::Tasks;
use crate::{msg_error, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy)]
enum MenuAction {
    Add,
    View,
    MarkDone,
    Delete,
    Exit,
}

const ACTIONS: [MenuAction; 5] = [MenuAction::Add, MenuAction::View, MenuAction::MarkDone, MenuAction::Delete, MenuAction::Exit];

impl MenuAction {
    fn label(&self) -> Message {
        match self {
            MenuAction::Add => Message::MenuAddTask,
            MenuAction::View => Message::MenuViewTasks,
            MenuAction::MarkDone => Message::MenuMarkDone,
            MenuAction::Delete => Message::MenuDeleteTask,
            MenuAction::Exit => Message::MenuExit,
        }
    }
}

/// Interactive loop. A failed operation is reported and the menu is shown
/// again; only Exit (or a broken terminal) ends the loop.
pub fn cmd(tasks: &mut Tasks) -> Result<()> {
    let theme = ColorfulTheme::default();
    let labels: Vec<String> = ACTIONS.iter().map(|action| action.label().to_string()).collect();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt(Message::MenuTitle.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        let result = match ACTIONS[selection] {
            MenuAction::Add => prompt_add(&theme, tasks),
            MenuAction::View => {
                list::show(tasks, true);
                Ok(())
            }
            MenuAction::MarkDone => prompt_text(&theme, Message::PromptMarkDoneId).and_then(|id| done::mark_done(tasks, &id)),
            MenuAction::Delete => prompt_text(&theme, Message::PromptDeleteId).and_then(|id| delete::delete(tasks, &id)),
            MenuAction::Exit => {
                msg_print!(Message::MenuGoodbye);
                return Ok(());
            }
        };

        if let Err(e) = result {
            msg_error!(Message::Error(e.to_string()));
        }
    }
}

fn prompt_add(theme: &ColorfulTheme, tasks: &mut Tasks) -> Result<()> {
    let title = prompt_text(theme, Message::PromptTaskTitle)?;
    let due = prompt_text(theme, Message::PromptDueDate)?;
    let tags = prompt_text(theme, Message::PromptTags)?;

    add::cmd(add::AddArgs::from_input(title, due, tags), tasks)
}

fn prompt_text(theme: &ColorfulTheme, prompt: Message) -> Result<String> {
    let text: String = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}
