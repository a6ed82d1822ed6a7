//! CLI logic for the Placard layout previewer.
//!
//! Loads an item from a TOML items file and either renders a layout for it
//! through the built-in preview templates or reports which of the layout's
//! positions produce output.

pub mod error_adapter;

mod args;
mod config;
mod preview;

pub use args::Args;
pub use config::ConfigError;
pub use preview::PreviewEngine;

use std::{fmt::Write as _, fs, io};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use placard::{
    ItemRenderer, PlacardError, RenderContext,
    item::{Item, Record},
    layout::layout_name,
    params::LayoutArgs,
    user::User,
};

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse items file: {0}")]
    Items(String),

    #[error("Unknown item `{id}` in {path}")]
    UnknownItem { id: String, path: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Placard(#[from] PlacardError),
}

/// Contents of an items file: a list of `[[item]]` records.
#[derive(Debug, Default, Deserialize)]
struct ItemsFile {
    #[serde(default)]
    item: Vec<Record>,
}

/// Run the Placard CLI application
///
/// Produces the preview (or check report) and writes it to the output file,
/// or to stdout when no output file is given.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Items file parsing errors and unknown items
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    let output = execute(args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path; "Preview written");
        }
        None => println!("{output}"),
    }

    Ok(())
}

/// Produce the preview or check report for `args` without writing it.
///
/// # Errors
///
/// See [`run`].
pub fn execute(args: &Args) -> Result<String, CliError> {
    info!(
        items_path = args.items,
        item = args.item,
        layout = args.layout;
        "Processing item"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::with_root(app_config, args.root.as_deref())?;

    let item = load_item(&args.items, &args.item)?;

    let renderer = ItemRenderer::builder(PreviewEngine)
        .with_config(app_config)
        .with_user(user(args))
        .build();

    if args.check {
        return check_report(&renderer, &item, &args.layout);
    }

    let mut layout_args = LayoutArgs::for_item(&item);
    if let Some(style) = &args.style {
        layout_args = layout_args.with("style", style.as_str());
    }

    Ok(renderer.render(&args.layout, &layout_args)?)
}

/// One `<position>: yes|no` line per declared position, then the overall
/// result for the layout.
fn check_report(
    renderer: &ItemRenderer,
    item: &Record,
    layout: &str,
) -> Result<String, CliError> {
    let Some(declared) = renderer.catalog().positions(layout)? else {
        return Ok(format!("{layout}: no positions declared"));
    };

    let ctx = RenderContext::for_item(item, layout_name(layout));
    let mut report = String::new();
    for position in declared.positions() {
        let visible = renderer.check_position(&ctx, position)?;
        writeln!(report, "{position}: {}", yes_no(visible))
            .expect("Writing to String buffer is infallible");
    }

    let any =
        renderer.check_positions(&RenderContext::default(), layout, Some(item as &dyn Item))?;
    write!(report, "{layout}: {}", yes_no(any)).expect("Writing to String buffer is infallible");
    Ok(report)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn user(args: &Args) -> User {
    let user = match &args.user {
        Some(id) => User::registered(id.as_str()),
        None => User::guest(),
    };
    args.groups
        .iter()
        .fold(user, |user, group| user.with_group(group.as_str()))
}

fn load_item(path: &str, id: &str) -> Result<Record, CliError> {
    let content = fs::read_to_string(path)?;
    let items: ItemsFile =
        toml::from_str(&content).map_err(|e| CliError::Items(e.to_string()))?;

    items
        .item
        .into_iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| CliError::UnknownItem {
            id: id.to_string(),
            path: path.to_string(),
        })
}
