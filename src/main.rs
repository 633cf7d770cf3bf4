use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use taskflow::config::Config;
use taskflow::models::TaskListParams;
use taskflow::seed;
use taskflow::services::{AuthService, TaskService};
use taskflow::storage::FileStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    let storage = Arc::new(
        FileStorage::new(&config.storage.data_dir).context("Failed to open data directory")?,
    );

    if config.demo.seed {
        seed::seed_demo_data(storage.as_ref())?;
    }

    let auth = AuthService::new(storage.clone());
    let tasks = TaskService::new(storage.clone())
        .with_latency(Duration::from_millis(config.api.latency_ms));

    // Restore a persisted session, or fall back to the demo account.
    let session = match auth.current_session() {
        Some(session) => session,
        None => auth.login(seed::DEMO_USERNAME, seed::DEMO_PASSWORD)?,
    };
    println!("Signed in as {} <{}>", session.username, session.email);

    let stats = tasks.task_stats(&session.id).await?;
    println!(
        "{} tasks: {} todo, {} in progress, {} done, {} urgent",
        stats.total, stats.todo, stats.in_progress, stats.done, stats.urgent
    );

    let params = TaskListParams::default();
    let page = tasks.list_tasks(&session.id, &params).await?;
    println!("Page {} of {} ({} total)", page.page, page.total_pages, page.total);
    for task in &page.items {
        let urgency = if task.is_urgent { ", urgent" } else { "" };
        let due = match task.days_remaining {
            d if d < 0 => format!("overdue by {} days", -d),
            0 => "due today".to_string(),
            d => format!("due in {} days", d),
        };
        println!("  [{:?}] {} ({}{})", task.status, task.title, due, urgency);
    }

    Ok(())
}
