use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use wanderlens::AppContext;
use wanderlens::domain::entities::{Category, ImagePayload, ImageQuery};
use wanderlens::infrastructure::{AppConfig, CliArgs, Command, LoadedConfig, StorageManager};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<LoadedConfig> {
    let storage = StorageManager::new()?;
    let mut loaded = storage.load_config(args.config.as_deref())?;
    loaded.config.merge_with_args(args);
    Ok(loaded)
}

fn report_rejected_config(loaded: &LoadedConfig) {
    let Some(error) = &loaded.rejected else {
        return;
    };
    warn!(path = %loaded.path.display(), error = %error, "Malformed config file, using defaults");
    if loaded.config.log_path.is_some() {
        eprintln!(
            "warning: ignoring malformed config {}: {error}",
            loaded.path.display()
        );
    }
}

fn describe(payload: Option<&ImagePayload>) -> String {
    payload.map_or_else(
        || "no image".to_string(),
        |payload| format!("{} base64 chars", payload.encoded_len()),
    )
}

async fn write_image(payload: &ImagePayload, output: &Path) -> Result<()> {
    let bytes = payload
        .decode()
        .wrap_err("Cached payload is not valid base64")?;
    tokio::fs::write(output, &bytes)
        .await
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
    println!("wrote {} bytes to {}", bytes.len(), output.display());
    Ok(())
}

async fn run(context: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Get {
            query,
            output,
            base64,
        } => {
            let payload = context.images().get_image(&query).await;
            match (&payload, output) {
                (Some(payload), Some(output)) => write_image(payload, &output).await?,
                (Some(payload), None) if base64 => println!("{}", payload.as_str()),
                _ => println!("{query}: {}", describe(payload.as_ref())),
            }
        }
        Command::Prime { queries } => {
            for (query, payload) in context.images().prime_images(queries).await {
                println!("{query}: {}", describe(payload.as_ref()));
            }
        }
        Command::Category {
            country,
            category,
            all,
        } => {
            let results: Vec<(Category, Option<ImagePayload>)> = match category {
                Some(category) if !all => {
                    let payload = context.categories().thumbnail(&country, category).await;
                    vec![(category, payload)]
                }
                _ => context.categories().prime_country(&country).await,
            };
            for (category, payload) in results {
                println!("{country} / {category}: {}", describe(payload.as_ref()));
            }
        }
        Command::Url { query } => {
            let url = match ImageQuery::new(query.as_str()) {
                Some(query) => context.provider().find_image_url(&query).await,
                None => None,
            };
            println!("{}", url.as_deref().unwrap_or("no image"));
        }
        Command::Inspect { query } => {
            let images = context.images();
            let (state, age) = images.entry_status(&query).await;
            match age {
                Some(age) => println!(
                    "{query}: {state} (fetched {}h{:02}m ago, ttl {}h)",
                    age.num_hours(),
                    age.num_minutes() % 60,
                    images.ttl().num_hours()
                ),
                None => println!("{query}: {state}"),
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let loaded = load_config(&args)?;

    init_logging(&loaded.config)?;
    report_rejected_config(&loaded);

    info!(version = wanderlens::VERSION, "Starting {}", wanderlens::NAME);

    let context = AppContext::from_config(loaded.config).await?;

    run(&context, args.command).await
}
