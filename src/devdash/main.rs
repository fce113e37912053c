use clap::Parser;
use devdash::api::DevDashApi;
use devdash::clock::SystemClock;
use devdash::commands::config::ConfigAction;
use devdash::commands::reset::ResetTarget;
use devdash::config::{resolve_data_dir, DevDashConfig};
use devdash::error::{DashError, Result};
use devdash::model::{
    parse_list, LearningEntry, LearningPatch, NewLearningEntry, NewProject, NewSnippet, Project,
    ProjectPatch, ProjectStatus, Snippet, SnippetPatch,
};
use devdash::store::fs::FileStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::{Cli, Commands, LearnCommand, ProjectCommand, SnippetCommand};
use cli::print::{
    print_config, print_dashboard, print_full_entries, print_full_projects, print_full_snippets,
    print_messages, print_rows,
};

const LOG_ENV: &str = "DEVDASH_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "devdash=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut api = init_api(cli.data_dir)?;

    match cli.command {
        Some(Commands::Dashboard) | None => handle_dashboard(&mut api),
        Some(Commands::Snippet(cmd)) => handle_snippet(&mut api, cmd),
        Some(Commands::Learn(cmd)) => handle_learn(&mut api, cmd),
        Some(Commands::Project(cmd)) => handle_project(&mut api, cmd),
        Some(Commands::Config { key, value }) => handle_config(&mut api, key, value),
        Some(Commands::Reset { target }) => handle_reset(&mut api, &target),
    }
}

fn init_api(data_dir: Option<PathBuf>) -> Result<DevDashApi<FileStore>> {
    let data_dir = resolve_data_dir(data_dir)?;
    let config = DevDashConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let store = FileStore::new(data_dir.clone());
    Ok(DevDashApi::new(
        store,
        Box::new(SystemClock),
        config,
        data_dir,
    ))
}

fn handle_dashboard(api: &mut DevDashApi<FileStore>) -> Result<()> {
    let summary = api.dashboard()?;
    print_dashboard(&summary);
    Ok(())
}

fn handle_snippet(api: &mut DevDashApi<FileStore>, cmd: SnippetCommand) -> Result<()> {
    match cmd {
        SnippetCommand::Add {
            title,
            code,
            file,
            language,
            tags,
            description,
        } => {
            let code = match file {
                Some(path) => read_code(&path)?,
                None => code.unwrap_or_default(),
            };
            let draft = NewSnippet {
                title,
                code,
                language,
                tags: tags.as_deref().map(parse_list).unwrap_or_default(),
                description: description.unwrap_or_default(),
            };
            let result = api.add::<Snippet>(draft)?;
            print_messages(&result.messages);
        }
        SnippetCommand::List(args) => {
            let result = api.list::<Snippet>(args.search.as_deref())?;
            print_rows(&result.records, api.today());
            print_messages(&result.messages);
        }
        SnippetCommand::View(args) => {
            let result = api.view::<Snippet, _>(&args.ids)?;
            print_full_snippets(&result.records);
            print_messages(&result.messages);
        }
        SnippetCommand::Update {
            id,
            title,
            code,
            file,
            language,
            tags,
            description,
        } => {
            let code = match file {
                Some(path) => Some(read_code(&path)?),
                None => code,
            };
            let patch = SnippetPatch {
                title,
                code,
                language,
                tags: tags.as_deref().map(parse_list),
                description,
            };
            let result = api.update::<Snippet>(&id, patch)?;
            print_messages(&result.messages);
        }
        SnippetCommand::Delete(args) => {
            let result = api.delete::<Snippet, _>(&args.ids)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_learn(api: &mut DevDashApi<FileStore>, cmd: LearnCommand) -> Result<()> {
    match cmd {
        LearnCommand::Add {
            title,
            content,
            category,
            tags,
        } => {
            let draft = NewLearningEntry {
                title,
                content,
                category,
                tags: tags.as_deref().map(parse_list).unwrap_or_default(),
            };
            let result = api.add::<LearningEntry>(draft)?;
            print_messages(&result.messages);
        }
        LearnCommand::List(args) => {
            let result = api.list::<LearningEntry>(args.search.as_deref())?;
            print_rows(&result.records, api.today());
            print_messages(&result.messages);
        }
        LearnCommand::View(args) => {
            let result = api.view::<LearningEntry, _>(&args.ids)?;
            print_full_entries(&result.records);
            print_messages(&result.messages);
        }
        LearnCommand::Update {
            id,
            title,
            content,
            category,
            tags,
        } => {
            let patch = LearningPatch {
                title,
                content,
                category,
                tags: tags.as_deref().map(parse_list),
            };
            let result = api.update::<LearningEntry>(&id, patch)?;
            print_messages(&result.messages);
        }
        LearnCommand::Delete(args) => {
            let result = api.delete::<LearningEntry, _>(&args.ids)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_project(api: &mut DevDashApi<FileStore>, cmd: ProjectCommand) -> Result<()> {
    match cmd {
        ProjectCommand::Add {
            title,
            description,
            status,
            tech,
            github,
            live,
        } => {
            let draft = NewProject {
                title,
                description,
                status: status.parse::<ProjectStatus>()?,
                technologies: tech.as_deref().map(parse_list).unwrap_or_default(),
                github_url: github.filter(|u| !u.trim().is_empty()),
                live_url: live.filter(|u| !u.trim().is_empty()),
            };
            let result = api.add::<Project>(draft)?;
            print_messages(&result.messages);
        }
        ProjectCommand::List(args) => {
            let result = api.list::<Project>(args.search.as_deref())?;
            print_rows(&result.records, api.today());
            print_messages(&result.messages);
        }
        ProjectCommand::View(args) => {
            let result = api.view::<Project, _>(&args.ids)?;
            print_full_projects(&result.records);
            print_messages(&result.messages);
        }
        ProjectCommand::Update {
            id,
            title,
            description,
            status,
            tech,
            github,
            live,
        } => {
            let patch = ProjectPatch {
                title,
                description,
                status: status.as_deref().map(str::parse::<ProjectStatus>).transpose()?,
                technologies: tech.as_deref().map(parse_list),
                github_url: github.map(optional_url),
                live_url: live.map(optional_url),
            };
            let result = api.update::<Project>(&id, patch)?;
            print_messages(&result.messages);
        }
        ProjectCommand::Delete(args) => {
            let result = api.delete::<Project, _>(&args.ids)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_config(
    api: &mut DevDashApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = api.config(action)?;
    print_config(&result.records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(api: &mut DevDashApi<FileStore>, target: &str) -> Result<()> {
    let target: ResetTarget = target.parse()?;
    let result = api.reset(target);
    print_messages(&result.messages);
    Ok(())
}

/// An empty URL on update means "remove the link".
fn optional_url(url: String) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_code(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        DashError::Api(format!("Could not read {}: {}", path.display(), e))
    })
}
