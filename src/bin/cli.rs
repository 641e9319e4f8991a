//! tableview CLI
//!
//! Shows one page of a JSON record file, or drives a view interactively.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;

use clap::{Parser, ValueEnum};
use crossbeam::channel::{self, select};
use tableview::debounce::DebounceWorker;
use tableview::event::{parse_request, Event, Request};
use tableview::filter::FieldSelector;
use tableview::pagination::PaginationToken;
use tableview::sort::SortDirection;
use tableview::{dataset, Column, Config, Engine, Record, SortScope};
use tracing_subscriber::{fmt, EnvFilter};

/// tableview CLI
#[derive(Parser, Debug)]
#[command(name = "tableview")]
#[command(about = "Search, paginate and sort a JSON record file")]
#[command(version)]
struct Args {
    /// JSON file holding an array of records
    file: PathBuf,

    /// Field identifying each record
    #[arg(short, long, default_value = "id")]
    key_field: String,

    /// Columns to show (comma separated); defaults to the first record's fields
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Records per page
    #[arg(short = 'n', long)]
    page_size: Option<usize>,

    /// Page to show
    #[arg(short, long)]
    page: Option<usize>,

    /// Search term
    #[arg(short, long)]
    search: Option<String>,

    /// Field to search (default: all fields)
    #[arg(short, long)]
    field: Option<String>,

    /// Field to sort by
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    desc: bool,

    /// What a sort reorders
    #[arg(long, value_enum, default_value_t = ScopeArg::Page)]
    scope: ScopeArg,

    /// Show every record instead of one page
    #[arg(long)]
    no_pagination: bool,

    /// Read commands from stdin
    #[arg(long)]
    repl: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScopeArg {
    Page,
    Source,
}

impl From<ScopeArg> for SortScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::Page => SortScope::Page,
            ScopeArg::Source => SortScope::Source,
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tableview=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let records = match dataset::load_path(&args.file) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };
    tracing::info!("Loaded {} records from {}", records.len(), args.file.display());

    let columns = if args.columns.is_empty() {
        infer_columns(&records)
    } else {
        args.columns.iter().map(|f| Column::new(f.as_str(), f.as_str())).collect()
    };

    // Build config from args
    let config = Config::builder()
        .key_field(&args.key_field)
        .columns(columns)
        .searchable(true)
        .show_filter_column(true)
        .show_page_entries(!args.no_pagination)
        .show_pagination(!args.no_pagination)
        .sort_scope(args.scope.into())
        .build();

    let mut engine = match Engine::with_records(config, records) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Failed to create view: {}", e);
            std::process::exit(1);
        }
    };

    apply_args(&mut engine, &args);

    if args.repl {
        if let Err(e) = repl(&mut engine) {
            tracing::error!("Session failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    print_view(&engine);
}

/// Apply the initial view options, in the order a user would set them
fn apply_args(engine: &mut Engine, args: &Args) {
    if let Some(size) = args.page_size {
        engine.set_page_size(size);
    }
    if let Some(field) = &args.field {
        engine.set_filter_field(FieldSelector::parse(field));
    }
    if let Some(term) = &args.search {
        engine.search(term);
    }
    if let Some(page) = args.page {
        engine.go_to_page(page);
    }
    if let Some(field) = &args.sort {
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        engine.apply_sort(field.as_str(), direction);
    }
}

enum Input {
    Line(String),
    Settled(String),
    Closed,
}

/// Interactive loop: stdin commands and settled searches, whichever comes first
fn repl(engine: &mut Engine) -> tableview::Result<()> {
    let worker = DebounceWorker::spawn(engine.config().search_delay)?;
    let (line_tx, line_rx) = channel::unbounded::<String>();

    thread::Builder::new()
        .name("tableview-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines().map_while(Result::ok) {
                if line_tx.send(line).is_err() {
                    break;
                }
            }
        })?;

    print_view(engine);

    loop {
        let input = select! {
            recv(line_rx) -> line => line.map_or(Input::Closed, Input::Line),
            recv(worker.settled()) -> term => term.map_or(Input::Closed, Input::Settled),
        };

        match input {
            Input::Line(line) => match parse_request(&line) {
                Ok(Some(Request::Apply(Event::SearchInput(raw)))) => worker.push(raw),
                Ok(Some(Request::Apply(event))) => {
                    engine.execute(event);
                    println!("{}", engine.summary_message());
                }
                Ok(Some(Request::Show)) => print_view(engine),
                Ok(Some(Request::Quit)) => break,
                Ok(None) => {}
                Err(e) => eprintln!("{e}"),
            },
            Input::Settled(term) => {
                engine.search(&term);
                print_view(engine);
            }
            Input::Closed => break,
        }
    }

    let pending = worker.shutdown();
    if let Some(term) = pending.last() {
        engine.search(term);
        print_view(engine);
    }
    Ok(())
}

fn infer_columns(records: &[Record]) -> Vec<Column> {
    records
        .first()
        .map(|record| {
            record
                .fields()
                .map(|(field, _)| Column::new(field, field))
                .collect()
        })
        .unwrap_or_default()
}

fn print_view(engine: &Engine) {
    let columns = &engine.config().columns;
    let rows: Vec<Vec<String>> = engine
        .visible_records()
        .iter()
        .map(|record| columns.iter().map(|c| record.display(&c.field)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(c.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!("{:<w$}", c.label, w = *w))
        .collect();
    println!("{}", header.join(" | "));
    println!(
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-")
    );

    if !engine.has_records() {
        println!("(no records)");
    } else if !engine.has_rendered_rows() {
        println!("(no matching records)");
    }
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        println!("{}", cells.join(" | "));
    }

    let tokens = engine.pagination_tokens();
    if !tokens.is_empty() {
        let line: Vec<String> = tokens.iter().map(token_label).collect();
        println!("{}", line.join(" "));
    }
    println!("{}", engine.summary_message());
}

fn token_label(token: &PaginationToken) -> String {
    match token {
        PaginationToken::Previous => "<".to_string(),
        PaginationToken::Next => ">".to_string(),
        PaginationToken::Page { number, active: true } => format!("[{number}]"),
        other => other.to_string(),
    }
}
