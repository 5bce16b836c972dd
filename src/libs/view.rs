use super::formatter::FormattedTask;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the task table without printing it.
    pub fn tasks_table<I>(tasks: I) -> Table
    where
        I: IntoIterator<Item = FormattedTask>,
    {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "STATUS", "DUE DATE", "TAGS"]);
        for task in tasks {
            table.add_row(row![task.id, task.title, task.status, task.due_date, task.tags]);
        }

        table
    }

    pub fn tasks<I>(tasks: I)
    where
        I: IntoIterator<Item = FormattedTask>,
    {
        Self::tasks_table(tasks).printstd();
    }

    /// Prints one record block per task, the way the interactive menu shows them.
    pub fn task_records<I>(tasks: I)
    where
        I: IntoIterator<Item = FormattedTask>,
    {
        for task in tasks {
            println!("\n{}", task);
        }
    }
}
