use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "deskboard")]
#[command(about = "Team events and todo dashboard from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Document store base URL (overrides DESKBOARD_STORE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub store_url: Option<String>,

    /// Bearer token for the document store (overrides DESKBOARD_STORE_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Use an ephemeral in-process store (demo mode, nothing persists)
    #[arg(long, global = true)]
    pub memory: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the todo list
    #[command(subcommand)]
    Todo(TodoCommands),
    /// Manage team events
    #[command(subcommand)]
    Event(EventCommands),
    /// Manage the calendar scheduler
    #[command(subcommand)]
    Scheduler(SchedulerCommands),
}

#[derive(Subcommand)]
pub enum TodoCommands {
    /// Add a todo
    #[command(alias = "new")]
    Add {
        /// Todo text
        text: Vec<String>,
    },
    /// List todos in creation order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a todo's checked state
    Done {
        /// Todo ID
        id: String,
    },
    /// Change a todo's text
    Edit {
        /// Todo ID
        id: String,
        /// New text
        text: Vec<String>,
    },
    /// Delete a todo
    Delete {
        /// Todo ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Create a team event
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        organization: String,
        #[arg(long)]
        venue: String,
        #[arg(long)]
        details: String,
        #[arg(long)]
        start_date: String,
        #[arg(long)]
        start_time: String,
        #[arg(long)]
        end_date: String,
        #[arg(long)]
        end_time: String,
    },
    /// List team events
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one event's details
    Show {
        /// Event ID
        id: String,
    },
    /// Edit a single field of an event
    Edit {
        /// Event ID
        id: String,
        /// Field name
        #[arg(long)]
        field: String,
        /// New value
        #[arg(long)]
        value: String,
    },
}

#[derive(Subcommand)]
pub enum SchedulerCommands {
    /// Add a calendar entry
    Add {
        #[arg(long)]
        subject: String,
        #[arg(long, default_value = "")]
        location: String,
        /// ISO 8601 start time
        #[arg(long)]
        start: String,
        /// ISO 8601 end time
        #[arg(long)]
        end: String,
        #[arg(long)]
        all_day: bool,
    },
    /// List calendar entries ordered by start time
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a calendar entry
    Delete {
        /// Entry ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
