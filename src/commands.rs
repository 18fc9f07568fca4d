//! Subcommand handlers.
//!
//! Each handler writes its user-facing output to `out` so tests can capture
//! it; diagnostics go through `tracing`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use pa_color::Color;
use pa_theme::{IdSource, Theme, slot};

use crate::cli::Command;

/// Dispatch one parsed subcommand.
pub fn run(command: &Command, ids: &mut impl IdSource, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Demo { out: path } => demo(path, ids, out),
        Command::New {
            name,
            fill,
            out: path,
            pretty,
        } => new_theme(name, fill, path.as_deref(), *pretty, ids, out),
        Command::Show { path, pretty } => show(path, *pretty, ids, out),
    }
}

/// The gray sample, with each slot group set through a different
/// constructor. All of them encode to `7F7F7F`.
pub fn full_gray(ids: &mut impl IdSource) -> Theme {
    let mut theme = Theme::named("Full Gray", ids);
    theme.gui = Color::rgb8(0x7F, 0x7F, 0x7F);
    theme.background = Color::rgb8(127, 127, 127);
    theme.players = [Color::gray(0.5); pa_theme::PLAYER_COUNT];
    theme.objects = [Color::rgb8(127, 127, 127); pa_theme::OBJECT_COUNT];
    theme.background_objects[slot::BG_OBJECT_1] = Color::rgb(0.5, 0.5, 0.5);
    for c in &mut theme.background_objects[slot::BG_OBJECT_2..] {
        c.set_r_u8(127);
        c.set_g_u8(127);
        c.set_b_u8(127);
    }
    theme
}

fn demo(path: &Path, ids: &mut impl IdSource, out: &mut impl Write) -> Result<()> {
    let mut theme = full_gray(ids);
    // Hex input, with and without `#`, in either case.
    theme.gui = "#7F7F7F".parse()?;
    theme.objects[slot::OBJECT_1] = "7f7f7f".parse()?;
    theme.background_objects[slot::BG_OBJECT_9] = "#7f7f7f".parse()?;

    tracing::info!(id = %theme.id(), path = %path.display(), "writing sample theme");
    theme
        .export_to_file(path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let reread = Theme::import_from_file(path, ids)
        .with_context(|| format!("failed to read back {}", path.display()))?;
    tracing::info!(old = %theme.id(), new = %reread.id(), "read sample theme back");

    writeln!(out, "{}", reread.to_json_pretty())?;
    Ok(())
}

fn new_theme(
    name: &str,
    fill: &str,
    path: Option<&Path>,
    pretty: bool,
    ids: &mut impl IdSource,
    out: &mut impl Write,
) -> Result<()> {
    let color = fill
        .parse::<Color>()
        .with_context(|| format!("bad --fill value {fill:?}"))?;
    let theme = Theme::filled(name, color, ids);

    match path {
        Some(path) => {
            theme
                .export_to_file(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "{} {}", theme.id(), path.display())?;
        }
        None => print_theme(&theme, pretty, out)?,
    }
    Ok(())
}

fn show(path: &Path, pretty: bool, ids: &mut impl IdSource, out: &mut impl Write) -> Result<()> {
    let theme = Theme::import_from_file(path, ids)
        .with_context(|| format!("failed to load theme {}", path.display()))?;
    print_theme(&theme, pretty, out)
}

fn print_theme(theme: &Theme, pretty: bool, out: &mut impl Write) -> Result<()> {
    if pretty {
        writeln!(out, "{}", theme.to_json_pretty())?;
    } else {
        writeln!(out, "{theme}")?;
    }
    Ok(())
}
