use anyhow::Result;
use clap::{Args, Subcommand};

use judgefit::forms::FormState;
use judgefit::models::{ResourceId, ResourceRef, Video, VideoSubmission};

use super::athletes::form_error;
use crate::context::AppContext;
use crate::ui::{cell, confirm_delete, more_results_note, or_dash, with_spinner};

#[derive(Subcommand)]
pub enum VideoCommand {
    /// List submitted videos
    List,

    /// Show video details
    Show {
        /// Video ID
        id: ResourceId,
    },

    /// Submit a workout video
    Submit(VideoArgs),

    /// Update a submission, keeping fields that are not given
    Update {
        /// Video ID
        id: ResourceId,

        #[command(flatten)]
        fields: VideoArgs,
    },

    /// Delete a submission
    Delete {
        /// Video ID
        id: ResourceId,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Default)]
pub struct VideoArgs {
    /// Video URL
    #[arg(long)]
    url: Option<String>,

    /// Competition ID or name
    #[arg(long)]
    competition: Option<ResourceRef>,

    /// Workout ID or name
    #[arg(long)]
    workout: Option<ResourceRef>,

    /// Athlete ID, when submitting on someone's behalf
    #[arg(long)]
    athlete: Option<ResourceId>,
}

impl VideoArgs {
    /// Build a submission from the flags, falling back to `current`.
    /// Missing required fields are left blank for validation to reject.
    fn into_submission(self, current: Option<&Video>) -> VideoSubmission {
        let blank = || ResourceRef::Name(String::new());

        VideoSubmission {
            athlete_id: self.athlete.or(current.and_then(|v| v.athlete_id)),
            video_url: self
                .url
                .or_else(|| current.and_then(|v| v.video_url.clone()))
                .unwrap_or_default(),
            competition: self
                .competition
                .or_else(|| current.and_then(|v| v.competition.clone()))
                .unwrap_or_else(blank),
            workout: self
                .workout
                .or_else(|| current.and_then(|v| v.workout.clone()))
                .unwrap_or_else(blank),
        }
    }
}

impl VideoCommand {
    pub async fn execute(self, ctx: &AppContext) -> Result<()> {
        ctx.require_login()?;
        let videos = &ctx.client.videos;

        match self {
            VideoCommand::List => {
                let page = with_spinner("Fetching videos...", videos.page()).await?;
                let (total, has_more) = (page.total(), page.has_more());
                let list = page.into_vec();
                print_videos(&list);
                if let Some(note) = more_results_note(list.len(), total, has_more) {
                    println!("{}", note);
                }
                Ok(())
            }
            VideoCommand::Show { id } => {
                let video = videos.get(id).await?;
                print_video(&video);
                Ok(())
            }
            VideoCommand::Submit(fields) => {
                let submission = fields.into_submission(None);
                let mut form = FormState::new();
                let video = form
                    .submit(videos.create(&submission))
                    .await
                    .ok_or_else(|| form_error(&form, "Failed to submit video"))?;

                println!("✓ Submitted video #{}", video.id);
                Ok(())
            }
            VideoCommand::Update { id, fields } => {
                let current = videos.get(id).await?;
                let submission = fields.into_submission(Some(&current));
                let mut form = FormState::new();
                let video = form
                    .submit(videos.update(id, &submission))
                    .await
                    .ok_or_else(|| form_error(&form, "Failed to update video"))?;

                println!("✓ Updated video #{}", video.id);
                Ok(())
            }
            VideoCommand::Delete { id, force } => {
                if !confirm_delete(&format!("video #{}", id), force)? {
                    return Ok(());
                }
                videos.delete(id).await?;
                println!("✓ Deleted video #{}", id);
                Ok(())
            }
        }
    }
}

fn print_videos(videos: &[Video]) {
    if videos.is_empty() {
        println!("No videos found.");
        return;
    }

    println!(
        "{} {} {} {} {}",
        cell("ID", 6),
        cell("Athlete", 8),
        cell("Competition", 16),
        cell("Workout", 12),
        "URL"
    );
    println!("{}", "─".repeat(80));
    for video in videos {
        println!(
            "{} {} {} {} {}",
            cell(&video.id.to_string(), 6),
            cell(&or_dash(video.athlete_id), 8),
            cell(&or_dash(video.competition.as_ref()), 16),
            cell(&or_dash(video.workout.as_ref()), 12),
            video.video_url.as_deref().unwrap_or("-")
        );
    }
    println!();
    println!("{} video(s)", videos.len());
}

fn print_video(video: &Video) {
    println!("Video #{}", video.id);
    println!("────────────────────────────────");
    println!("  Athlete:      {}", or_dash(video.athlete_id));
    println!("  Competition:  {}", or_dash(video.competition.as_ref()));
    println!("  Workout:      {}", or_dash(video.workout.as_ref()));
    println!("  URL:          {}", or_dash(video.video_url.as_deref()));
    println!(
        "  Submitted:    {}",
        or_dash(video.created_at.map(|t| t.format("%Y-%m-%d %H:%M")))
    );
}
