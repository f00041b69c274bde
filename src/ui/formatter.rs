//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from the
//! bump workflow. Styling goes through `console`, which drops colours when
//! the stream is not a terminal.

use console::style;

use crate::domain::{BumpPolicy, Channel, Version};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Render the proposed version change as a multi-line block.
///
/// # Arguments
/// * `current` - Version read from the manifest
/// * `next` - Version computed by the bump
/// * `policy` - Policy the caller selected
pub fn format_proposed_version(current: &Version, next: &Version, policy: BumpPolicy) -> String {
    format!(
        "{}\n  From: {} ({})\n  To:   {} ({})",
        style(format!("Proposed {} bump:", policy)).bold(),
        style(current).red(),
        channel_label(current.channel()),
        style(next).green(),
        channel_label(next.channel()),
    )
}

/// Display the proposed version change.
pub fn display_proposed_version(current: &Version, next: &Version, policy: BumpPolicy) {
    println!("\n{}\n", format_proposed_version(current, next, policy));
}

/// Display what a dry run would have executed.
///
/// # Arguments
/// * `program` - External tool that would write the version
/// * `args` - Arguments it would receive
pub fn display_dry_run(program: &str, args: &[String]) {
    display_status("Dry run: manifest left untouched");
    println!("  Would run: {}", style(format!("{} {}", program, args.join(" "))).cyan());
}

fn channel_label(channel: Channel) -> String {
    match channel {
        Channel::Release => channel.to_string(),
        Channel::PreRelease => style(channel).yellow().to_string(),
    }
}
