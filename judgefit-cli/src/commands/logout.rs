use anyhow::Result;
use clap::Args;

use crate::context::AppContext;

#[derive(Args)]
pub struct LogoutCommand {}

impl LogoutCommand {
    pub fn execute(self, mut ctx: AppContext) -> Result<()> {
        if !ctx.guard.is_authenticated() {
            println!("You are not logged in.");
            return Ok(());
        }

        ctx.guard.logout(&ctx.client.auth)?;

        println!("✓ Logged out successfully!");

        Ok(())
    }
}
