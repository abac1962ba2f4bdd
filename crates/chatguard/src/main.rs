//! `chatguard` - CLI for the chat contact-information filter
//!
//! This binary checks messages against the filter the chat-send path uses,
//! for debugging patterns and auditing the blocking policy.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use chatguard::cli::{CheckCommand, Cli, Command, ConfigCommand, PatternsCommand};
use chatguard::moderation::builtin_patterns;
use chatguard::sanitize::escape_markup;
use chatguard::{init_logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Check(cmd) => handle_check(&config, &cmd),
        Command::Patterns(cmd) => handle_patterns(&cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_check(config: &Config, cmd: &CheckCommand) -> Result<()> {
    let filter = config.build_filter();
    let verdict = filter.filter_message(&cmd.message, cmd.role);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    if verdict.allowed {
        println!("Allowed (role: {})", cmd.role);
        let stored = if cmd.escape {
            escape_markup(&verdict.filtered_message)
        } else {
            verdict.filtered_message
        };
        println!("Stored message: {stored}");
    } else {
        // A block is a policy decision, not a failure; report it and exit 0.
        let reason = verdict.reason.as_deref().unwrap_or("unknown");
        println!("Blocked (role: {}): {reason}", cmd.role);
        println!("Stored message: {}", verdict.filtered_message);
    }
    Ok(())
}

fn handle_patterns(cmd: &PatternsCommand) -> Result<()> {
    let patterns = builtin_patterns();

    if cmd.json {
        let entries: Vec<_> = patterns
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "reason": p.category.reason(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("Built-in detection patterns (evaluated in order):");
        println!();
        for pattern in &patterns {
            println!("  {:<22} {}", pattern.name, pattern.description);
            println!("  {:<22} -> {}", "", pattern.category.reason());
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Filter]");
                println!(
                    "  Custom patterns:    {}",
                    config.filter.custom_patterns.len()
                );
                for pattern in &config.filter.custom_patterns {
                    println!("    {pattern}");
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}
