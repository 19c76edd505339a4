use anyhow::{bail, Result};
use clap::Args;
use dialoguer::{Input, Password};

use judgefit::forms::FormState;
use judgefit::models::Credentials;

use crate::context::AppContext;

#[derive(Args)]
pub struct LoginCommand {
    /// Username, prompted for when omitted
    #[arg(short, long)]
    username: Option<String>,

    /// Password, prompted for when omitted
    #[arg(long, env = "JUDGEFIT_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl LoginCommand {
    pub async fn execute(self, mut ctx: AppContext) -> Result<()> {
        let username = match self.username {
            Some(username) => username,
            None => Input::new().with_prompt("Username").interact_text()?,
        };
        let password = match self.password {
            Some(password) => password,
            None => Password::new().with_prompt("Password").interact()?,
        };

        println!("Logging in as {}...", username);

        let credentials = Credentials::new(username, password);
        let mut form = FormState::new();
        let route = form
            .submit(ctx.guard.login(&ctx.client.auth, &credentials))
            .await;

        match route {
            Some(_) => {
                println!("✓ Login successful!");
                println!();
                println!("You can now use JudgeFit CLI commands.");
                Ok(())
            }
            None => bail!(
                "Login failed: {}",
                form.error().unwrap_or(judgefit::api::GENERIC_ERROR_MESSAGE)
            ),
        }
    }
}
