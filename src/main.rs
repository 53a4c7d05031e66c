use clap::Parser;
use colored::Colorize;
use git_tree_status::core::{
    category_style, find_repo_root, print_error, DecorationTable, Result, StatusCategory,
    StatusConfig, StatusMap, StatusService, TreeStatusError,
};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "git-tree-status")]
#[command(about = "Annotate a directory listing with git status indicators")]
#[command(version = "0.1.0")]
struct Cli {
    /// Directory to annotate (defaults to the current directory)
    path: Option<PathBuf>,

    /// Disable directory-level aggregate indicators
    #[arg(long)]
    no_directory_status: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        if let TreeStatusError::NotInRepository = e {
            print_error("Not inside a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let dir = match cli.path {
        Some(path) => path,
        None => env::current_dir()?,
    };
    let dir = dir.canonicalize()?;

    let mut config = StatusConfig::load_or_create().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        StatusConfig::default()
    });
    if cli.no_directory_status {
        config.show_directory_status = false;
    }

    let root = find_repo_root(&dir).ok_or(TreeStatusError::NotInRepository)?;
    let service = StatusService::new(config);
    let map = service.acquire(&dir);

    render_listing(&dir, &root, &map)
}

/// Prints the directory's entries with their status symbol and color.
/// Directories are looked up with a trailing separator, matching the
/// derived keys in the status map.
fn render_listing(dir: &Path, root: &Path, map: &StatusMap) -> Result<()> {
    let table = DecorationTable::default();

    println!("\n{} {}", "Repository:".bold(), root.display());

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for path in entries {
        let is_dir = path.is_dir();
        let key = if is_dir {
            format!("{}/", path.display())
        } else {
            path.display().to_string()
        };
        let category = StatusCategory::classify(map.get(&key).copied());
        let style = category_style(category);

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let suffix = if is_dir { "/" } else { "" };

        println!("  {} {}{}", style(table.symbol(category)), style(&name), suffix);
    }
    println!();

    Ok(())
}
