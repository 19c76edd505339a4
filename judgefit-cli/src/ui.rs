use anyhow::Result;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Run `task` behind a spinner showing `message`
pub async fn with_spinner<T, F>(message: &str, task: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = task.await;
    spinner.finish_and_clear();
    output
}

/// Ask before deleting unless `force` is set
pub fn confirm_delete(what: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete {}?", what))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("Cancelled.");
    }
    Ok(confirmed)
}

/// Left-aligned cell clipped to `width` characters
pub fn cell(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        format!("{:<width$}", value, width = width)
    } else {
        let clipped: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", clipped)
    }
}

/// Footer for a list that the server paginated beyond what was shown
pub fn more_results_note(shown: usize, total: u64, has_more: bool) -> Option<String> {
    if !has_more {
        return None;
    }
    Some(format!(
        "Showing {} of {}; more results on the server.",
        shown, total
    ))
}

pub fn or_dash(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
