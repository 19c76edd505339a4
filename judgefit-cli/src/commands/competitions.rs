use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use judgefit::forms::FormState;
use judgefit::models::{Competition, CompetitionDraft, ResourceId};

use super::athletes::form_error;
use crate::context::AppContext;
use crate::ui::{cell, confirm_delete, more_results_note, or_dash, with_spinner};

#[derive(Subcommand)]
pub enum CompetitionCommand {
    /// List competitions
    List,

    /// Show competition details
    Show {
        /// Competition ID
        id: ResourceId,
    },

    /// Create a competition
    Create(CompetitionArgs),

    /// Update a competition, keeping fields that are not given
    Update {
        /// Competition ID
        id: ResourceId,

        #[command(flatten)]
        fields: CompetitionArgs,
    },

    /// Delete a competition
    Delete {
        /// Competition ID
        id: ResourceId,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Default)]
pub struct CompetitionArgs {
    #[arg(long)]
    name: Option<String>,

    /// First day (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Last day (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<NaiveDate>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Whether submissions are open
    #[arg(long)]
    active: Option<bool>,
}

impl CompetitionArgs {
    fn apply(self, mut draft: CompetitionDraft) -> CompetitionDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        draft.start_date = self.start_date.or(draft.start_date);
        draft.end_date = self.end_date.or(draft.end_date);
        draft.location = self.location.or(draft.location);
        draft.description = self.description.or(draft.description);
        draft.is_active = self.active.or(draft.is_active);
        draft
    }
}

impl CompetitionCommand {
    pub async fn execute(self, ctx: &AppContext) -> Result<()> {
        ctx.require_login()?;
        let competitions = &ctx.client.competitions;

        match self {
            CompetitionCommand::List => {
                let page = with_spinner("Fetching competitions...", competitions.page()).await?;
                let (total, has_more) = (page.total(), page.has_more());
                let list = page.into_vec();
                print_competitions(&list);
                if let Some(note) = more_results_note(list.len(), total, has_more) {
                    println!("{}", note);
                }
                Ok(())
            }
            CompetitionCommand::Show { id } => {
                let competition = competitions.get(id).await?;
                print_competition(&competition);
                Ok(())
            }
            CompetitionCommand::Create(fields) => {
                let draft = fields.apply(CompetitionDraft::default());
                let mut form = FormState::new();
                let competition = form
                    .submit(competitions.create(&draft))
                    .await
                    .ok_or_else(|| form_error(&form, "Failed to create competition"))?;

                println!(
                    "✓ Created competition #{} ({})",
                    competition.id,
                    competition.title()
                );
                Ok(())
            }
            CompetitionCommand::Update { id, fields } => {
                let current = competitions.get(id).await?;
                let draft = fields.apply(CompetitionDraft::from(&current));
                let mut form = FormState::new();
                let competition = form
                    .submit(competitions.update(id, &draft))
                    .await
                    .ok_or_else(|| form_error(&form, "Failed to update competition"))?;

                println!(
                    "✓ Updated competition #{} ({})",
                    competition.id,
                    competition.title()
                );
                Ok(())
            }
            CompetitionCommand::Delete { id, force } => {
                if !confirm_delete(&format!("competition #{}", id), force)? {
                    return Ok(());
                }
                competitions.delete(id).await?;
                println!("✓ Deleted competition #{}", id);
                Ok(())
            }
        }
    }
}

fn print_competitions(competitions: &[Competition]) {
    if competitions.is_empty() {
        println!("No competitions found.");
        return;
    }

    println!(
        "{} {} {} {}",
        cell("ID", 6),
        cell("Title", 32),
        cell("Dates", 24),
        "Location"
    );
    println!("{}", "─".repeat(80));
    for competition in competitions {
        println!(
            "{} {} {} {}",
            cell(&competition.id.to_string(), 6),
            cell(competition.title(), 32),
            cell(&date_range(competition), 24),
            competition.location.as_deref().unwrap_or("-")
        );
    }
    println!();
    println!("{} competition(s)", competitions.len());
}

fn print_competition(competition: &Competition) {
    println!("Competition #{}", competition.id);
    println!("────────────────────────────────");
    println!("  Title:     {}", competition.title());
    println!("  Dates:     {}", date_range(competition));
    println!("  Location:  {}", or_dash(competition.location.as_deref()));
    println!("  Active:    {}", or_dash(competition.is_active));
    println!("  Created:   {}", competition.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(description) = &competition.description {
        println!();
        println!("{}", description);
    }
}

fn date_range(competition: &Competition) -> String {
    match (competition.start_date, competition.end_date) {
        (Some(start), Some(end)) => format!("{} – {}", start, end),
        (Some(start), None) => format!("from {}", start),
        (None, Some(end)) => format!("until {}", end),
        (None, None) => "-".to_string(),
    }
}
