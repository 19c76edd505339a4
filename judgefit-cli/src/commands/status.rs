use anyhow::Result;
use clap::Args;

use judgefit::auth::Route;

use crate::context::AppContext;

#[derive(Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub fn execute(self, ctx: AppContext) -> Result<()> {
        let api = &ctx.config.api;

        println!("JudgeFit Status");
        println!("────────────────────────────────");
        match ctx.guard.route() {
            Route::Authenticated => println!("  Session:  ✓ Logged in"),
            Route::Unauthenticated => println!("  Session:  Not logged in"),
        }
        println!("  API URL:  {}", ctx.client.http().base_url());
        println!("  Videos:   {}", ctx.client.videos.prefix());
        println!("  Timeout:  {}s", api.timeout_seconds);
        println!(
            "  Refresh:  {}",
            if api.refresh_on_unauthorized {
                "on 401"
            } else {
                "off"
            }
        );
        println!("  Tokens:   {}", ctx.config.session_file()?.display());

        if !ctx.guard.is_authenticated() {
            println!();
            println!("Use 'judgefit login' to authenticate.");
        }

        Ok(())
    }
}
