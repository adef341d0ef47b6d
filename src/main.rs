// ABOUTME: Main entry point for the deck-viewer program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use deck_viewer::{
    staging, text, ApiClient, App, Config, Console, HtmlOptions, SharedPage, SlideApi,
};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the slide generator service (overrides SLIDE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in milliseconds (overrides REQUEST_TIMEOUT_MS)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the templates offered by the service
    Templates,

    /// Generate a deck from the service's sample data
    Sample(OutputArgs),

    /// Upload data files and generate a deck from them
    Upload(UploadArgs),

    /// Interactive console: stage files, pick templates and page through slides
    Present(PresentArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Template id; defaults to the first template the service lists
    #[arg(short, long)]
    template: Option<String>,

    /// Write the deck as an HTML page instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Serve the HTML page locally after generating it
    #[arg(long)]
    serve: bool,

    /// Port for the local preview server (overrides SERVE_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args)]
struct UploadArgs {
    /// Data files or glob patterns (.csv, .xlsx, .xls, .pdf)
    #[arg(required = true)]
    files: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct PresentArgs {
    /// Template id; defaults to the first template the service lists
    #[arg(short, long)]
    template: Option<String>,

    /// Serve the current deck as an HTML page while presenting
    #[arg(long)]
    serve: bool,

    /// Port for the local preview server (overrides SERVE_PORT)
    #[arg(long)]
    port: Option<u16>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from_env().with_overrides(cli.api_url.clone(), cli.timeout_ms);

    let result = match &cli.command {
        Some(Commands::Templates) => list_templates(&config),
        Some(Commands::Sample(args)) => generate(&config, &[], args),
        Some(Commands::Upload(args)) => generate(&config, &args.files, &args.output),
        Some(Commands::Present(args)) => present(&config, args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn html_options(config: &Config) -> HtmlOptions {
    HtmlOptions {
        chart_js_url: config.chart_js_url.clone(),
        ..HtmlOptions::default()
    }
}

fn list_templates(config: &Config) -> deck_viewer::Result<()> {
    let client = ApiClient::new(config)?;
    let mut stdout = io::stdout().lock();
    for id in client.list_templates()? {
        writeln!(stdout, "{}", id)
            .map_err(|e| anyhow::anyhow!("Failed to write template list: {}", e))?;
    }
    Ok(())
}

/// Run one upload (when `files` is non-empty) or sample request through the
/// application shell and emit the resulting deck.
fn generate(config: &Config, files: &[String], args: &OutputArgs) -> deck_viewer::Result<()> {
    let mut app = App::new(ApiClient::new(config)?);
    app.mount();
    if let Some(template) = &args.template {
        app.select_template(template);
    }

    if files.is_empty() {
        app.load_sample();
    } else {
        for pattern in files {
            app.add_files(staging::expand_pattern(pattern)?);
        }
        app.upload();
    }

    if let Some(message) = app.error() {
        return Err(deck_viewer::DeckError::RequestFailed(message.to_string()));
    }
    let Some(deck) = app.deck() else {
        return Ok(());
    };

    let wants_html = args.output.is_some() || args.serve;
    if !wants_html {
        io::stdout()
            .lock()
            .write_all(text::render_deck_text(deck).as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write deck text: {}", e))?;
        return Ok(());
    }

    let page = deck_viewer::generate_html(deck, &html_options(config))?;
    if let Some(output) = &args.output {
        deck_viewer::write_html_to_file(&page, output)?;
        println!("HTML generated successfully: {:?}", output);
    }

    if args.serve {
        let port = args.port.unwrap_or(config.serve_port);
        let port = deck_viewer::start_server(SharedPage::new(page), port)?;
        println!(
            "Serving deck on http://localhost:{} (Press Ctrl+C to stop)",
            port
        );
        loop {
            std::thread::park();
        }
    }
    Ok(())
}

fn present(config: &Config, args: &PresentArgs) -> deck_viewer::Result<()> {
    let mut app = App::new(ApiClient::new(config)?);
    app.mount();
    if let Some(template) = &args.template {
        app.select_template(template);
    }

    let mut console = Console::new(app, html_options(config));
    if args.serve {
        let page = SharedPage::new("<!DOCTYPE html><html><body><p>No slides yet.</p></body></html>");
        let port = deck_viewer::start_server(page.clone(), args.port.unwrap_or(config.serve_port))?;
        println!("Preview on http://localhost:{}", port);
        console = console.with_page(page);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console.run(stdin.lock(), &mut stdout)
}
