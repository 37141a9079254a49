//! DocQuiz — PDF summarizer and quiz/Q&A bot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use docquiz_core::{DocQuizConfig, Error, LinguisticResources, ResourceKind};
use docquiz_server::{build_router, AppState, Session, SessionSettings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn resolve_data_dir() -> PathBuf {
    std::env::var("DOCQUIZ_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));
            if let Some(dir) = exe_dir {
                let parent_data = dir.join("../data");
                if parent_data.exists() {
                    return parent_data;
                }
            }
            PathBuf::from("data")
        })
}

/// Install any missing resource files (unless disabled), then probe.
fn load_resources(dir: &Path, install: bool) -> LinguisticResources {
    if install {
        match LinguisticResources::install_defaults(dir) {
            Ok(installed) if !installed.is_empty() => {
                info!("Installed {} default resource(s)", installed.len())
            }
            Ok(_) => {}
            Err(e) => warn!("Could not install linguistic resources: {}", e),
        }
    }
    LinguisticResources::probe(dir)
}

fn print_help() {
    println!("DocQuiz — PDF summarizer and quiz/Q&A bot");
    println!();
    println!("Usage: docquiz [--no-install] [command]");
    println!();
    println!("Commands:");
    println!("  serve                    Start the server (default)");
    println!("  summarize <pdf>          Print the summary of a PDF");
    println!("  quiz <pdf> [n]           Print quiz questions for a PDF");
    println!("  ask <pdf> <question>     Answer a question from a PDF");
    println!("  resources [dir]          Install and report linguistic resources");
    println!("  help                     Show this help message");
    println!();
    println!("Options:");
    println!("  --no-install             Do not write default linguistic resources");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let install = !args.iter().any(|a| a == "--no-install");
    args.retain(|a| a != "--no-install");

    let command = args.first().map(String::as_str).unwrap_or("serve");
    match command {
        "--help" | "-h" | "help" => {
            print_help();
            return Ok(());
        }
        "resources" => {
            let dir = match args.get(1) {
                Some(dir) => PathBuf::from(dir),
                None => DocQuizConfig::from_env(resolve_data_dir())?
                    .data_paths
                    .resources,
            };
            let resources = load_resources(&dir, install);
            let status = resources.status();
            println!("Resources in {}:", dir.display());
            for (kind, available) in [
                (ResourceKind::Stopwords, status.stopwords),
                (ResourceKind::Lexicon, status.lexicon),
                (ResourceKind::Abbreviations, status.abbreviations),
            ] {
                let state = if available { "available" } else { "missing (fallback)" };
                println!("  {:<14} {:<28} {}", kind.to_string(), kind.relative_path(), state);
            }
            return Ok(());
        }
        "summarize" | "quiz" | "ask" => return run_oneshot(command, &args[1..], install),
        "serve" => {}
        other => {
            eprintln!("Unknown command: {}. Use 'docquiz help' for usage.", other);
            std::process::exit(1);
        }
    }

    // Normal server startup
    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = DocQuizConfig::from_env(&data_dir)?;
    let port = config.port;
    let resources = load_resources(&config.data_paths.resources, install);

    let state = Arc::new(AppState::new(config, resources));
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("DocQuiz server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// `summarize`, `quiz` and `ask` against a PDF on disk, without the server.
fn run_oneshot(command: &str, args: &[String], install: bool) -> anyhow::Result<()> {
    let Some(pdf) = args.first() else {
        eprintln!("Usage: docquiz {} <pdf> ...", command);
        std::process::exit(1);
    };

    let config = DocQuizConfig::from_env(resolve_data_dir())?;
    let resources = Arc::new(load_resources(&config.data_paths.resources, install));
    let mut settings = SessionSettings::from(&config);
    if command == "quiz" {
        if let Some(n) = args.get(1) {
            settings.question_count = n
                .parse()
                .map_err(|_| anyhow::anyhow!("question count must be a number, got {:?}", n))?;
        }
    }

    let path = PathBuf::from(pdf);
    let bytes = std::fs::read(&path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf")
        .to_string();

    let mut session = Session::new(resources, settings);
    session.upload(filename, bytes);
    let summary = match session.extract_and_summarize() {
        Ok(outcome) => outcome,
        Err(Error::NoText(msg)) | Err(Error::Precondition(msg)) => {
            eprintln!("{}", msg);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    match command {
        "summarize" => println!("{}", summary.summary),
        "quiz" => {
            session.generate_questions()?;
            for q in session.numbered_questions() {
                println!("Q{}. {}", q.number, q.question);
            }
        }
        _ => {
            let question = args[1..].join(" ");
            let outcome = session.ask(&question).map_err(|e| anyhow::anyhow!("{}", e))?;
            println!("{}", outcome.answer);
            if !outcome.context.is_empty() {
                println!();
                println!("Context: {}", outcome.context);
            }
        }
    }
    Ok(())
}
