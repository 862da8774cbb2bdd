/// CLI Commands

pub const HELP: &str = "help";
pub const VALIDATE: &str = "validate";
pub const BATCH: &str = "batch";
pub const HEALTH: &str = "health";
pub const QUIT: &str = "quit";

/// Various CLI constants

pub const PROMPT: &str = "> ";
