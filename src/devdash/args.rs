use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devdash", version)]
#[command(about = "Track code snippets, a learning log and side projects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding devdash data (defaults to the platform data dir)
    #[arg(long, global = true, env = "DEVDASH_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show stats, streak and recent activity (records today's visit)
    #[command(alias = "dash")]
    Dashboard,

    /// Manage code snippets
    #[command(subcommand, alias = "s")]
    Snippet(SnippetCommand),

    /// Manage the learning log
    #[command(subcommand, alias = "l")]
    Learn(LearnCommand),

    /// Manage side projects
    #[command(subcommand, alias = "p")]
    Project(ProjectCommand),

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., activity-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Clear stored data: snippets, learning, projects, visits or all
    Reset {
        #[arg(value_parser = ["snippets", "learning", "projects", "visits", "all"])]
        target: String,
    },
}

#[derive(Args, Debug)]
pub struct IdsArg {
    /// Ids (or unique id prefixes)
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SearchArg {
    /// Only show records matching this text
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SnippetCommand {
    /// Add a snippet
    #[command(alias = "a")]
    Add {
        title: String,

        /// Code body
        #[arg(short, long, conflicts_with = "file")]
        code: Option<String>,

        /// Read the code body from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[arg(short, long, default_value = "text")]
        language: String,

        /// Comma separated tags
        #[arg(short, long)]
        tags: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// List snippets
    #[command(alias = "ls")]
    List(SearchArg),

    /// Show snippets in full
    #[command(alias = "v")]
    View(IdsArg),

    /// Change fields of a snippet
    #[command(alias = "e")]
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long, conflicts_with = "file")]
        code: Option<String>,

        #[arg(short, long)]
        file: Option<PathBuf>,

        #[arg(short, long)]
        language: Option<String>,

        /// Comma separated tags (replaces existing tags)
        #[arg(short, long)]
        tags: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete snippets
    #[command(alias = "rm")]
    Delete(IdsArg),
}

#[derive(Subcommand, Debug)]
pub enum LearnCommand {
    /// Log something you learned
    #[command(alias = "a")]
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,

        #[arg(short = 'g', long, default_value = "General")]
        category: String,

        /// Comma separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// List learning entries
    #[command(alias = "ls")]
    List(SearchArg),

    /// Show learning entries in full
    #[command(alias = "v")]
    View(IdsArg),

    /// Change fields of a learning entry
    #[command(alias = "e")]
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short = 'g', long)]
        category: Option<String>,

        /// Comma separated tags (replaces existing tags)
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Delete learning entries
    #[command(alias = "rm")]
    Delete(IdsArg),
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// Start tracking a project
    #[command(alias = "a")]
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// planning, in-progress, completed or paused
        #[arg(short, long, default_value = "planning")]
        status: String,

        /// Comma separated technologies
        #[arg(short, long)]
        tech: Option<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        live: Option<String>,
    },

    /// List projects
    #[command(alias = "ls")]
    List(SearchArg),

    /// Show projects in full
    #[command(alias = "v")]
    View(IdsArg),

    /// Change fields of a project (an empty URL clears it)
    #[command(alias = "e")]
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        status: Option<String>,

        /// Comma separated technologies (replaces existing ones)
        #[arg(short, long)]
        tech: Option<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        live: Option<String>,
    },

    /// Delete projects
    #[command(alias = "rm")]
    Delete(IdsArg),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["devdash"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_snippet_add() {
        let cli = Cli::try_parse_from([
            "devdash", "snippet", "add", "Hello", "-c", "print()", "-l", "python", "-t", "a,b",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Snippet(SnippetCommand::Add {
                title,
                code,
                language,
                tags,
                ..
            })) => {
                assert_eq!(title, "Hello");
                assert_eq!(code.as_deref(), Some("print()"));
                assert_eq!(language, "python");
                assert_eq!(tags.as_deref(), Some("a,b"));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn code_and_file_conflict() {
        let parsed = Cli::try_parse_from([
            "devdash", "snippet", "add", "T", "--code", "x", "--file", "y.rs",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn delete_requires_ids() {
        assert!(Cli::try_parse_from(["devdash", "project", "rm"]).is_err());
    }

    #[test]
    fn reset_rejects_unknown_target() {
        assert!(Cli::try_parse_from(["devdash", "reset", "everything"]).is_err());
    }
}
