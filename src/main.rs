// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::needless_pass_by_value)]

use clap::Parser;

use leadnotes::cli::commands::{Cli, Command};
use leadnotes::cli::output;
use leadnotes::config::Config;
use leadnotes::db::Database;
use leadnotes::models::status::LeadStatus;
use leadnotes::operations;
use leadnotes::parser::{split_insights, CompanyParser};

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays pure JSON. `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> CmdResult {
    let config = get_config()?;
    match cli.command {
        Command::Init => cmd_init(&config),
        Command::Parse { file } => cmd_parse(&config, file.as_deref()),
        Command::Split { file } => cmd_split(&config, file.as_deref()),
        Command::Import { file } => cmd_import(&config, file.as_deref()),
        Command::Sample => cmd_sample(&config),
        Command::List { query } => cmd_list(&config, &query),
        Command::Show { name } => cmd_show(&config, &name),
        Command::Status { name, status } => cmd_status(&config, &name, Some(status)),
        Command::Reset { name } => cmd_status(&config, &name, None),
        Command::Progress => cmd_progress(&config),
        Command::Clear { yes } => cmd_clear(&config, yes),
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn get_config() -> Result<Config, Box<dyn std::fmt::Display>> {
    Config::from_cwd().map_err(map_err)
}

fn get_db(config: &Config) -> Result<Database, Box<dyn std::fmt::Display>> {
    config.ensure_data_dir().map_err(map_err)?;
    Database::open(&config.db_path).map_err(map_err)
}

fn print(config: &Config, result: &impl serde::Serialize) {
    println!("{}", output::format_output(result, config.pretty_output()));
}

/// Read the whole input from `file`, or stdin when it is missing or "-".
fn read_input(file: Option<&str>) -> Result<String, Box<dyn std::fmt::Display>> {
    match file {
        None | Some("-") => std::io::read_to_string(std::io::stdin()).map_err(map_err),
        Some(path) => std::fs::read_to_string(path).map_err(|e| map_err(format!("{path}: {e}"))),
    }
}

#[derive(serde::Serialize)]
struct InitResult {
    config: String,
    created: bool,
}

fn cmd_init(config: &Config) -> CmdResult {
    let created = config.init_settings().map_err(map_err)?;
    let result = InitResult {
        config: config.config_path.display().to_string(),
        created,
    };
    print(config, &result);
    Ok(())
}

fn cmd_parse(config: &Config, file: Option<&str>) -> CmdResult {
    let text = read_input(file)?;
    let companies = CompanyParser::with_markers(config.markers()).parse(&text);
    print(config, &companies);
    Ok(())
}

fn cmd_split(config: &Config, file: Option<&str>) -> CmdResult {
    let text = read_input(file)?;
    print(config, &split_insights(&text));
    Ok(())
}

fn cmd_import(config: &Config, file: Option<&str>) -> CmdResult {
    let text = read_input(file)?;
    let db = get_db(config)?;
    let result = operations::import_text(&db, &config.markers(), &text).map_err(map_err)?;
    print(config, &result);
    Ok(())
}

fn cmd_sample(config: &Config) -> CmdResult {
    let db = get_db(config)?;
    let result = operations::load_sample(&db).map_err(map_err)?;
    print(config, &result);
    Ok(())
}

fn cmd_list(config: &Config, query: &str) -> CmdResult {
    let db = get_db(config)?;
    let result = operations::list_companies(&db, query).map_err(map_err)?;
    print(config, &result);
    Ok(())
}

fn cmd_show(config: &Config, name: &str) -> CmdResult {
    let db = get_db(config)?;
    let result = operations::show_company(&db, name).map_err(map_err)?;
    print(config, &result);
    Ok(())
}

fn cmd_status(config: &Config, name: &str, status: Option<LeadStatus>) -> CmdResult {
    let db = get_db(config)?;
    let result = operations::set_status(&db, name, status).map_err(map_err)?;
    print(config, &result);
    Ok(())
}

fn cmd_progress(config: &Config) -> CmdResult {
    let db = get_db(config)?;
    let result = operations::get_progress(&db).map_err(map_err)?;
    print(config, &result);
    Ok(())
}

fn cmd_clear(config: &Config, yes: bool) -> CmdResult {
    let db = get_db(config)?;
    let result = operations::clear_all(&db, yes).map_err(map_err)?;
    print(config, &result);
    Ok(())
}
