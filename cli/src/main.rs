//! CLI entrypoint for faqsmith
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use faqsmith_application::{
    Interlinker, KeywordIndexLoader, NoProgress, PageBrowser, ResultCache, WorkflowController,
    WorkflowError, WorkflowProgress,
};
use faqsmith_domain::{ContentSource, OutputFormat, WorkflowVariant};
use faqsmith_infrastructure::{
    ConfigLoader, FileConfig, FileResultCache, HttpBackendConfig, HttpFaqBackend,
    MemoryResultCache, SystemClock,
};
use faqsmith_presentation::{
    CacheCommand, Cli, Command, ConsoleFormatter, KeywordsCommand, NewArgs, OutputConfig,
    ProgressReporter, SimpleProgress,
};
use std::io::{IsTerminal, Read};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config: {}", issue);
        }
        bail!("Invalid configuration ({} problems)", issues.len());
    }

    let output_config = OutputConfig {
        format: config.output.format,
        color: config.output.color_enabled(),
        show_progress: config.output.progress && !cli.quiet,
    };
    output_config.apply_color();
    let format = output_config.resolve_format(cli.output.map(OutputFormat::from));

    let Some(command) = cli.command else {
        bail!("A command is required. Run with --help for usage.");
    };

    info!("Starting faqsmith against {}", config.backend.base_url);

    // === Dependency Injection ===
    let backend = Arc::new(build_backend(&config)?);
    let cache = build_cache(&config);

    let progress: Box<dyn WorkflowProgress> = if !output_config.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    match command {
        Command::Existing(args) => {
            let source = ContentSource::cms(args.collection, args.page);
            run_workflow(
                backend,
                cache,
                &config,
                source,
                WorkflowVariant::ExistingPage,
                progress.as_ref(),
                format,
            )
            .await
        }
        Command::New(args) => {
            let source = pasted_source(&args)?;
            run_workflow(
                backend,
                cache,
                &config,
                source,
                WorkflowVariant::NewPage,
                progress.as_ref(),
                format,
            )
            .await
        }
        Command::Pages { collection } => {
            let listing = PageBrowser::new(backend, cache)
                .list_pages(&collection)
                .await?;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::to_json(&listing.pages)),
                _ => print!("{}", ConsoleFormatter::format_pages(&listing.pages)),
            }
            Ok(())
        }
        Command::Links { keyword } => {
            let links = Interlinker::new(backend).related_links(&keyword).await;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::to_json(&links)),
                _ => print!("{}", ConsoleFormatter::format_links(&keyword, &links)),
            }
            Ok(())
        }
        Command::Keywords(KeywordsCommand::Refresh) => {
            let index = KeywordIndexLoader::new(backend, cache)
                .refresh_from_backend()
                .await
                .context("Failed to refresh the keyword index")?;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::to_json(&index)),
                _ => print!("{}", ConsoleFormatter::format_index_refresh(index.as_ref())),
            }
            Ok(())
        }
        Command::Cache(CacheCommand::Info { key }) => {
            match cache.age(&key) {
                Some(age) => println!(
                    "{}: {:.1} hours old",
                    key,
                    age.as_secs_f64() / 3600.0
                ),
                None => println!("{}: not cached", key),
            }
            Ok(())
        }
        Command::Cache(CacheCommand::Clear { key }) => {
            cache.clear(&key);
            println!("{}: cleared", key);
            Ok(())
        }
    }
}

fn build_backend(config: &FileConfig) -> Result<HttpFaqBackend> {
    let mut backend_config = HttpBackendConfig::new(config.backend.base_url.clone())
        .with_keywords_file_url(config.backend.keywords_file_url());
    if let Some(seconds) = config.backend.timeout_seconds {
        backend_config = backend_config.with_timeout(Duration::from_secs(seconds));
    }
    HttpFaqBackend::new(backend_config).context("Failed to create HTTP client")
}

fn build_cache(config: &FileConfig) -> Arc<dyn ResultCache> {
    let clock = Arc::new(SystemClock);
    if config.cache.enabled {
        if let Some(dir) = config.cache.resolved_dir() {
            info!("Using cache directory {}", dir.display());
            return Arc::new(FileResultCache::new(dir, clock));
        }
        warn!("No cache directory available; caching in memory for this run");
    }
    Arc::new(MemoryResultCache::new(clock))
}

fn pasted_source(args: &NewArgs) -> Result<ContentSource> {
    let mut content = String::new();
    if args.reads_stdin() {
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read content from stdin")?;
    } else if let Some(path) = &args.content_file {
        content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }

    let mut source = ContentSource::pasted(content);
    if let Some(keyword) = &args.keyword {
        source = source.with_keyword(keyword.clone());
    }
    if let (Some(url), Some(category)) = (&args.url, &args.category) {
        source = source.with_index_hint(url.clone(), category.clone());
    }
    Ok(source)
}

async fn run_workflow(
    backend: Arc<HttpFaqBackend>,
    cache: Arc<dyn ResultCache>,
    config: &FileConfig,
    source: ContentSource,
    variant: WorkflowVariant,
    progress: &dyn WorkflowProgress,
    format: OutputFormat,
) -> Result<()> {
    let params = config.workflow.to_workflow_params();
    let mut controller = WorkflowController::new(backend, cache, params, variant);
    if let Some(origin) = controller.load_keyword_index().await {
        info!("Keyword index loaded from {}", origin.as_str());
    }

    controller.select_source(source, progress);
    let outcome = controller.start(progress).await.map(|_| ());
    let state = controller.into_state();

    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&state),
        OutputFormat::Plain => ConsoleFormatter::format_plain(&state),
        OutputFormat::Json => ConsoleFormatter::format_json(&state),
    };
    println!("{}", output);

    match outcome {
        Ok(()) => Ok(()),
        // Not-found is a notice: the content is shown, nothing is generated
        Err(WorkflowError::NotFound(message)) => {
            warn!("{}", message);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
