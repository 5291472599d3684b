use std::io::Read;
use std::path::Path;

use story_domain::SubjectCatalog;
use storyflow_rust::cli::{parse_args, Command};
use storyflow_rust::config::{StoryConfig, CONFIG};
use storyflow_rust::errors::AppError;
use storyflow_rust::run_story;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn read_script(file: Option<&Path>) -> Result<String, AppError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cfg: &StoryConfig) -> Result<i32, AppError> {
    let catalog = SubjectCatalog::standard();
    let script = read_script(cfg.file.as_deref())?;
    info!(subject = %cfg.subject, nested = cfg.nested_fallback, "running story");
    let report = run_story(&catalog, cfg, &script);
    if cfg.json_report {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(report.exit_code())
}

fn main() {
    // Cargar .env si existe para obtener STORY_*
    let _ = dotenvy::dotenv();
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = match parse_args(&args, &CONFIG.story) {
        Ok(Command::List) => {
            for name in SubjectCatalog::standard().names() {
                println!("{name}");
            }
            0
        }
        Ok(Command::Run(cfg)) => match run(&cfg) {
            Ok(code) => code,
            Err(e) => {
                error!("[main-story] {e}");
                2
            }
        },
        Err(e) => {
            eprintln!("[main-story] {e}");
            eprintln!("uso: main-story [--file <PATH>] [--subject <NAME>] [--direct] [--json] [--list]");
            2
        }
    };
    std::process::exit(code);
}
