//! Config Command
//!
//! Inspect the merged configuration and the file paths it resolves from.

use crate::cli::Output;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Print the merged configuration (defaults → global → project → env).
pub fn show(json: bool) -> Result<()> {
    let config = ConfigLoader::load()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let out = Output::new();
    out.header("CodeSweep Configuration");
    println!("Version: {}", config.version);

    out.section("Scan");
    println!("Workers: {}", config.scan.workers);
    println!("Trackers:");
    for tracker in &config.scan.trackers {
        out.bullet(tracker);
    }

    out.section("Network");
    println!("Timeout: {}s", config.network.timeout_secs);
    println!("User-Agent: {}", config.network.user_agent);

    Ok(())
}

/// Print the configuration file paths in resolution order.
pub fn path() -> Result<()> {
    let out = Output::new();
    out.header("Configuration Paths");

    match ConfigLoader::global_config_path() {
        Some(global) => println!(
            "Global:  {} {}",
            global.display(),
            if global.exists() { "(exists)" } else { "(missing)" }
        ),
        None => println!("Global:  <unresolvable: no HOME>"),
    }

    let project = ConfigLoader::project_config_path();
    println!(
        "Project: {} {}",
        project.display(),
        if project.exists() { "(exists)" } else { "(missing)" }
    );

    Ok(())
}
