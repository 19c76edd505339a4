use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use judgefit::forms::FormState;
use judgefit::models::{Athlete, AthleteDraft, Gender, ResourceId};

use crate::context::AppContext;
use crate::ui::{cell, confirm_delete, more_results_note, or_dash, with_spinner};

#[derive(Subcommand)]
pub enum AthleteCommand {
    /// List athletes
    List,

    /// Show athlete details
    Show {
        /// Athlete ID
        id: ResourceId,
    },

    /// Create an athlete profile
    Create(AthleteArgs),

    /// Update an athlete profile, keeping fields that are not given
    Update {
        /// Athlete ID
        id: ResourceId,

        #[command(flatten)]
        fields: AthleteArgs,
    },

    /// Delete an athlete
    Delete {
        /// Athlete ID
        id: ResourceId,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Default)]
pub struct AthleteArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    surname: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// M, F or O
    #[arg(long, value_parser = parse_gender)]
    gender: Option<Gender>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    date_of_birth: Option<NaiveDate>,

    /// Height in centimetres
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Country ID
    #[arg(long)]
    country: Option<ResourceId>,

    /// Affiliate ID
    #[arg(long)]
    affiliate: Option<ResourceId>,

    #[arg(long)]
    emergency_contact_name: Option<String>,

    #[arg(long)]
    emergency_contact_phone: Option<String>,
}

impl AthleteArgs {
    /// Overlay the given flags onto `draft`
    fn apply(self, mut draft: AthleteDraft) -> AthleteDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(surname) = self.surname {
            draft.surname = surname;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        draft.gender = self.gender.or(draft.gender);
        draft.date_of_birth = self.date_of_birth.or(draft.date_of_birth);
        draft.height = self.height.or(draft.height);
        draft.weight = self.weight.or(draft.weight);
        draft.country = self.country.or(draft.country);
        draft.affiliate = self.affiliate.or(draft.affiliate);
        draft.emergency_contact_name = self.emergency_contact_name.or(draft.emergency_contact_name);
        draft.emergency_contact_phone =
            self.emergency_contact_phone.or(draft.emergency_contact_phone);
        draft
    }
}

fn parse_gender(value: &str) -> Result<Gender, String> {
    match value.to_ascii_uppercase().as_str() {
        "M" => Ok(Gender::Male),
        "F" => Ok(Gender::Female),
        "O" => Ok(Gender::Other),
        _ => Err(format!("invalid gender '{}', expected M, F or O", value)),
    }
}

impl AthleteCommand {
    pub async fn execute(self, ctx: &AppContext) -> Result<()> {
        ctx.require_login()?;
        let athletes = &ctx.client.athletes;

        match self {
            AthleteCommand::List => {
                let page = with_spinner("Fetching athletes...", athletes.page()).await?;
                let (total, has_more) = (page.total(), page.has_more());
                let list = page.into_vec();
                print_athletes(&list);
                if let Some(note) = more_results_note(list.len(), total, has_more) {
                    println!("{}", note);
                }
                Ok(())
            }
            AthleteCommand::Show { id } => {
                let athlete = athletes.get(id).await?;
                print_athlete(&athlete);
                Ok(())
            }
            AthleteCommand::Create(fields) => {
                let draft = fields.apply(AthleteDraft::default());
                let mut form = FormState::new();
                let athlete = form
                    .submit(athletes.create(&draft))
                    .await
                    .ok_or_else(|| form_error(&form, "Failed to create athlete"))?;

                println!("✓ Created athlete #{} ({})", athlete.id, athlete.full_name());
                Ok(())
            }
            AthleteCommand::Update { id, fields } => {
                let current = athletes.get(id).await?;
                let draft = fields.apply(AthleteDraft::from(&current));
                let mut form = FormState::new();
                let athlete = form
                    .submit(athletes.update(id, &draft))
                    .await
                    .ok_or_else(|| form_error(&form, "Failed to update athlete"))?;

                println!("✓ Updated athlete #{} ({})", athlete.id, athlete.full_name());
                Ok(())
            }
            AthleteCommand::Delete { id, force } => {
                if !confirm_delete(&format!("athlete #{}", id), force)? {
                    return Ok(());
                }
                athletes.delete(id).await?;
                println!("✓ Deleted athlete #{}", id);
                Ok(())
            }
        }
    }
}

/// Turn the form's error message into the command's failure
pub(crate) fn form_error(form: &FormState, action: &str) -> anyhow::Error {
    match form.error() {
        Some(message) => anyhow!("{}: {}", action, message),
        None => anyhow!("{}", action),
    }
}

fn print_athletes(athletes: &[Athlete]) {
    if athletes.is_empty() {
        println!("No athletes found.");
        return;
    }

    println!(
        "{} {} {} {}",
        cell("ID", 6),
        cell("Name", 28),
        cell("Email", 32),
        "Created"
    );
    println!("{}", "─".repeat(80));
    for athlete in athletes {
        println!(
            "{} {} {} {}",
            cell(&athlete.id.to_string(), 6),
            cell(&athlete.full_name(), 28),
            cell(&athlete.email, 32),
            athlete.created_at.format("%Y-%m-%d")
        );
    }
    println!();
    println!("{} athlete(s)", athletes.len());
}

fn print_athlete(athlete: &Athlete) {
    println!("Athlete #{}", athlete.id);
    println!("────────────────────────────────");
    println!("  Name:       {}", athlete.full_name());
    println!("  Email:      {}", athlete.email);
    println!("  Gender:     {}", or_dash(athlete.gender.map(gender_label)));
    println!("  Born:       {}", or_dash(athlete.date_of_birth));
    println!("  Height:     {}", or_dash(athlete.height));
    println!("  Weight:     {}", or_dash(athlete.weight));
    println!("  Country:    {}", or_dash(athlete.country));
    println!("  Affiliate:  {}", or_dash(athlete.affiliate));
    if let Some(name) = &athlete.emergency_contact_name {
        println!(
            "  Emergency:  {} {}",
            name,
            athlete.emergency_contact_phone.as_deref().unwrap_or("")
        );
    }
    println!("  Created:    {}", athlete.created_at.format("%Y-%m-%d %H:%M"));
}

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Male",
        Gender::Female => "Female",
        Gender::Other => "Other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gender() {
        assert_eq!(parse_gender("m").unwrap(), Gender::Male);
        assert_eq!(parse_gender("F").unwrap(), Gender::Female);
        assert!(parse_gender("x").is_err());
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut current = AthleteDraft::new("Jane", "Doe", "jane@example.com");
        current.height = Some(170.0);

        let fields = AthleteArgs {
            email: Some("jane@judgefit.io".to_string()),
            ..Default::default()
        };
        let draft = fields.apply(current);

        assert_eq!(draft.name, "Jane");
        assert_eq!(draft.email, "jane@judgefit.io");
        assert_eq!(draft.height, Some(170.0));
    }

    #[test]
    fn test_form_error_includes_message() {
        let mut form = FormState::new();
        form.begin_submit();
        form.finish::<()>(Err(judgefit::ApiError::Validation { field: "email" }));

        let error = form_error(&form, "Failed to create athlete");
        assert_eq!(error.to_string(), "Failed to create athlete: email is required");
    }
}
