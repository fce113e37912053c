use chrono::NaiveDate;
use colored::Colorize;
use devdash::activity::{Activity, ActivityKind};
use devdash::commands::config::ConfigEntry;
use devdash::commands::dashboard::DashboardSummary;
use devdash::commands::{CmdMessage, MessageLevel};
use devdash::model::{LearningEntry, Project, ProjectStatus, Snippet};
use std::time::Duration;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const SEPARATOR: &str = "--------------------------------";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

/// One line of a list view.
pub trait ListRow {
    fn row_id(&self) -> &str;
    fn row_title(&self) -> &str;
    fn row_detail(&self) -> String;
    fn row_date(&self) -> NaiveDate;
}

impl ListRow for Snippet {
    fn row_id(&self) -> &str {
        &self.id
    }
    fn row_title(&self) -> &str {
        &self.title
    }
    fn row_detail(&self) -> String {
        bracket_list(&self.language, &self.tags)
    }
    fn row_date(&self) -> NaiveDate {
        self.created_at
    }
}

impl ListRow for LearningEntry {
    fn row_id(&self) -> &str {
        &self.id
    }
    fn row_title(&self) -> &str {
        &self.title
    }
    fn row_detail(&self) -> String {
        bracket_list(&self.category, &self.tags)
    }
    fn row_date(&self) -> NaiveDate {
        self.date
    }
}

impl ListRow for Project {
    fn row_id(&self) -> &str {
        &self.id
    }
    fn row_title(&self) -> &str {
        &self.title
    }
    fn row_detail(&self) -> String {
        bracket_list(self.status.label(), &self.technologies)
    }
    fn row_date(&self) -> NaiveDate {
        self.last_updated
    }
}

fn bracket_list(head: &str, items: &[String]) -> String {
    if items.is_empty() {
        format!("[{}]", head)
    } else {
        format!("[{}] {}", head, items.join(", "))
    }
}

pub fn print_rows<T: ListRow>(rows: &[T], today: NaiveDate) {
    for row in rows {
        let id = format!("{}  ", row.row_id());
        let time = format!(
            "{:>width$}",
            format_days_ago(row.row_date(), today),
            width = TIME_WIDTH
        );

        let text = format!("{}  {}", row.row_title(), row.row_detail());
        let available = LINE_WIDTH.saturating_sub(id.width() + TIME_WIDTH + 2);
        let shown = truncate_to_width(&text, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "{}{}{}  {}",
            id.dimmed(),
            shown,
            " ".repeat(padding),
            time.dimmed()
        );
    }
}

pub fn print_full_snippets(snippets: &[Snippet]) {
    for (i, s) in snippets.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", s.id.yellow(), s.title.bold());
        println!("{}", bracket_list(&s.language, &s.tags).dimmed());
        if !s.description.is_empty() {
            println!("{}", s.description);
        }
        println!("{}", SEPARATOR);
        println!("{}", s.code);
    }
}

pub fn print_full_entries(entries: &[LearningEntry]) {
    for (i, e) in entries.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}", e.id.yellow(), e.title.bold());
        println!(
            "{}",
            format!("{} · learned {}", bracket_list(&e.category, &e.tags), e.date).dimmed()
        );
        println!("{}", SEPARATOR);
        println!("{}", e.content);
    }
}

pub fn print_full_projects(projects: &[Project]) {
    for (i, p) in projects.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!("{} {}  {}", p.id.yellow(), p.title.bold(), status_badge(p.status));
        println!(
            "{}",
            format!("started {} · updated {}", p.start_date, p.last_updated).dimmed()
        );
        if !p.technologies.is_empty() {
            println!("{}", p.technologies.join(", "));
        }
        if let Some(url) = &p.github_url {
            println!("github: {}", url);
        }
        if let Some(url) = &p.live_url {
            println!("live:   {}", url);
        }
        println!("{}", SEPARATOR);
        println!("{}", p.description);
    }
}

fn status_badge(status: ProjectStatus) -> colored::ColoredString {
    let label = status.label();
    match status {
        ProjectStatus::Planning => label.blue(),
        ProjectStatus::InProgress => label.yellow(),
        ProjectStatus::Completed => label.green(),
        ProjectStatus::Paused => label.dimmed(),
    }
}

pub fn print_dashboard(summary: &DashboardSummary) {
    println!("{}", "Welcome back!".bold());
    println!();
    println!("  {:<18}{}", "Code Snippets", summary.snippet_count.to_string().blue());
    println!("  {:<18}{}", "Learning Entries", summary.learning_count.to_string().green());
    println!("  {:<18}{}", "Projects", summary.project_count.to_string().yellow());
    println!("  {:<18}{}", "Streak Days", summary.streak.to_string().magenta());
    println!();
    println!("{}", "Recent Activity".bold());
    if summary.activity.is_empty() {
        println!(
            "{}",
            "No recent activity. Add a snippet, learning entry or project to get started."
                .dimmed()
        );
        return;
    }
    for activity in &summary.activity {
        print_activity(activity);
    }
}

fn print_activity(activity: &Activity) {
    let kind = format!("{:<9}", activity.kind.to_string());
    let kind = match activity.kind {
        ActivityKind::Snippet => kind.blue(),
        ActivityKind::Learning => kind.green(),
        ActivityKind::Project => kind.yellow(),
    };
    println!("  {} {}  {}", kind, activity.title, activity.label.dimmed());
}

pub fn print_config(entries: &[ConfigEntry]) {
    for entry in entries {
        println!("{} = {}", entry.key, entry.value);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let c = if c == '\n' { ' ' } else { c };
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_days_ago(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    if days <= 0 {
        return "today".to_string();
    }
    let formatter = Formatter::new();
    formatter.convert(Duration::from_secs(days as u64 * 24 * 60 * 60))
}
