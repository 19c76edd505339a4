use anyhow::Result;

use judgefit::Config;

pub fn show_config(api_url: Option<&str>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
    }
    let config_str = toml::to_string_pretty(&config)?;

    println!("Current Configuration");
    println!("────────────────────────────────");
    println!("File: {}", Config::config_file()?.display());
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    let config_file = Config::config_file()?;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config::default();
    config.save()?;

    println!("✓ Configuration initialized at: {}", config_file.display());

    Ok(())
}
