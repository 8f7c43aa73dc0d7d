use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use inksaver::api;
use inksaver::server;

#[derive(Parser)]
#[command(name = "inksaver")]
#[command(about = "InkSaver - print-friendly black-and-white conversion for document photos")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Convert a single image file without starting a server
    Convert {
        /// Input image (JPEG, PNG, BMP, WebP, ...)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JPEG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Luma cutoff separating ink from background (0-255)
        #[arg(short, long, default_value_t = 120)]
        threshold: u8,

        /// Treat dark regions as background (for dark-mode screenshots)
        #[arg(long)]
        invert: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "InkSaver API",
        description = "Print-friendly black-and-white conversion for document photos",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_process),
    tags(
        (name = "Document", description = "Document upload and conversion")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Convert {
            input,
            output,
            threshold,
            invert,
        }) => run_convert_command(&input, &output, threshold, invert),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert one file directly (no server needed)
fn run_convert_command(
    input: &PathBuf,
    output: &PathBuf,
    threshold: u8,
    invert: bool,
) -> anyhow::Result<()> {
    use ink_threshold::ThresholdParams;
    use inksaver::processing;

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inksaver=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let bytes = std::fs::read(input)?;
    let params = ThresholdParams { threshold, invert };
    let jpeg = processing::process_document(&bytes, params)
        .map_err(|e| anyhow::anyhow!("Conversion failed: {e}"))?;
    std::fs::write(output, &jpeg)?;
    println!("Converted {} ({} bytes)", output.display(), jpeg.len());

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let cors_origin = std::env::var("CORS_ORIGIN").ok();

    println!("InkSaver v{VERSION}");
    println!("Print-friendly black-and-white conversion for document photos\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:5000 (default)")
    );
    println!(
        "  CORS_ORIGIN = {}",
        cors_origin
            .as_deref()
            .unwrap_or("http://localhost:3000 (default)")
    );

    println!("\nCommands:");
    println!("  inksaver serve     Start the HTTP server");
    println!("  inksaver convert   Convert a single image file");
    println!("\nRun 'inksaver --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inksaver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    let cors_origin = std::env::var("CORS_ORIGIN").ok();

    tracing::info!(
        cors_origin = cors_origin.as_deref().unwrap_or("http://localhost:3000"),
        "CORS origin configured"
    );

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(cors_origin.as_deref())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "InkSaver server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
