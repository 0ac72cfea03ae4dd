use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use libcat_server::{LibcatServer, ServerConfig};
use libcat_store::{Catalog, JsonFileStore};
use libcat_types::{Book, BookId, BookPatch};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Init(args) => cmd_init(args),
        Command::Serve(args) => cmd_serve(args),
        Command::List(args) => cmd_list(args, &cli.format),
        Command::Show(args) => cmd_show(args, &cli.format),
        Command::Update(args) => cmd_update(args, &cli.format),
        Command::Remove(args) => cmd_remove(args),
    }
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from("data.json"));
    let existed = path.exists();
    JsonFileStore::init(&path)?;
    if existed {
        println!("Catalog already present at {}", path.display().to_string().bold());
    } else {
        println!(
            "{} Initialized empty catalog in {}",
            "✓".green().bold(),
            path.display().to_string().bold()
        );
    }
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = serve_config(&args)?;
    let server = LibcatServer::new(config)?;
    println!(
        "Library catalog on {} (data: {})",
        server.config().bind_addr.to_string().bold(),
        server.config().data_file.display()
    );
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(server.serve())?;
    Ok(())
}

/// Merge the optional config file with command-line overrides.
fn serve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(data) = &args.data {
        config.data_file = data.clone();
    }
    if args.cors {
        config.enable_cors = true;
    }
    Ok(config)
}

fn cmd_list(args: DataArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let books = open(&args.data).list_all()?;
    println!("{}", render_books(&books, format)?);
    Ok(())
}

fn cmd_show(args: IdArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let book = open(&args.data.data).get_by_id(&BookId::from(args.id))?;
    println!("{}", render_book(&book, format)?);
    Ok(())
}

fn cmd_update(args: UpdateArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let patch = update_patch(&args);
    if patch.is_empty() {
        anyhow::bail!("nothing to update: pass --title, --author, --genre, --year or --copies");
    }
    let book = open(&args.data.data).patch_by_id(&BookId::from(args.id), &patch)?;
    println!("{}", render_book(&book, format)?);
    Ok(())
}

fn update_patch(args: &UpdateArgs) -> BookPatch {
    let mut patch = BookPatch::default();
    if let Some(title) = &args.title {
        patch = patch.with_title(title);
    }
    if let Some(author) = &args.author {
        patch = patch.with_author(author);
    }
    if let Some(genre) = &args.genre {
        patch = patch.with_genre(genre);
    }
    if let Some(year) = args.year {
        patch = patch.with_year(year);
    }
    if let Some(copies) = args.copies {
        patch = patch.with_copies(copies);
    }
    patch
}

fn cmd_remove(args: IdArgs) -> anyhow::Result<()> {
    let book = open(&args.data.data).delete_by_id(&BookId::from(args.id))?;
    println!("{} Deleted {} ({})", "✓".green(), book.book_id.to_string().yellow(), book.title);
    Ok(())
}

fn open(path: &Path) -> Catalog {
    Catalog::with_store(JsonFileStore::new(path))
}

fn render_books(books: &[Book], format: &OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(books)?),
        OutputFormat::Text if books.is_empty() => Ok("No books.".to_string()),
        OutputFormat::Text => Ok(books.iter().map(book_line).collect::<Vec<_>>().join("\n")),
    }
}

fn render_book(book: &Book, format: &OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(book)?),
        OutputFormat::Text => Ok(format!(
            "{}\n  Title:  {}\n  Author: {}\n  Genre:  {}\n  Year:   {}\n  Copies: {}",
            book.book_id.to_string().yellow().bold(),
            book.title,
            book.author,
            book.genre,
            book.year,
            book.copies
        )),
    }
}

fn book_line(book: &Book) -> String {
    format!(
        "{}  {} by {} ({}, {}) x{}",
        book.book_id.to_string().yellow(),
        book.title.bold(),
        book.author,
        book.genre.cyan(),
        book.year,
        book.copies
    )
}
