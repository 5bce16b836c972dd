#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(u32),
    TaskMarkedDone(u32),
    TaskDeleted(u32),
    TasksHeader,
    NoTasksFound,
    TasksRenumbered,

    // === STORAGE MESSAGES ===
    TasksFileCorrupt(String),   // error
    TasksFileBackedUp(String),  // backup path
    TasksFileBackupFailed(String),
    TasksFileUnreadable(String), // error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    TasksFileLocation(String), // path

    // === MENU ===
    MenuTitle,
    MenuAddTask,
    MenuViewTasks,
    MenuMarkDone,
    MenuDeleteTask,
    MenuExit,
    MenuGoodbye,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptDueDate,
    PromptTags,
    PromptMarkDoneId,
    PromptDeleteId,
    PromptTasksFile,

    // === ERRORS ===
    Error(String),
}
