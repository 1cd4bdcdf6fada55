use std::path::Path;

use anyhow::Result;
use orbit_config::ConfigSource;

pub fn run(path: Option<&Path>) -> Result<()> {
    let load = super::load_config(path)?;

    let source = match &load.source {
        ConfigSource::Default => "built-in defaults".to_string(),
        ConfigSource::EnvPath(path) => {
            format!("$ORBIT_CONFIG_PATH ({})", path.display())
        }
        ConfigSource::EnvInline => "$ORBIT_CONFIG_JSON".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
    };
    println!("config OK: {source}");
    println!(
        "  profile: {:?}, interval: {}ms, transition: {}ms",
        load.config.profile, load.config.interval_ms, load.config.transition_ms
    );
    for (index, breakpoint) in load.config.breakpoints.iter().enumerate() {
        println!("  breakpoint {index}: {}", breakpoint.media);
    }

    if load.warnings.is_empty() {
        return Ok(());
    }
    println!("{} warning(s):", load.warnings.len());
    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => println!("  - {} (hint: {hint})", warning.message),
            None => println!("  - {}", warning.message),
        }
    }
    Ok(())
}
