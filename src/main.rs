use browser_portal::adapters::renderers_for;
use browser_portal::config::toml_config::REFERENCE_CONFIG;
use browser_portal::domain::ports::Renderer;
use browser_portal::utils::error::{ErrorSeverity, PortalError};
use browser_portal::utils::logger;
use browser_portal::{
    CliConfig, FooterDate, FsAssetProbe, JsonRenderer, LocalStorage, PageConfig, PageEngine,
    PortalConfig,
};
use clap::Parser;

fn exit_code(e: &PortalError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(stage: &str, e: &PortalError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e).max(1));
}

fn load_page_config(args: &CliConfig) -> browser_portal::Result<PageConfig> {
    let mut config = PortalConfig::from_file(&args.config)?;
    config.apply_overrides(&args.overrides());
    config.to_page_config()
}

fn display_config_summary(config: &PageConfig, args: &CliConfig) {
    tracing::info!("📋 Page: {}", config.title());
    tracing::info!(
        "👤 Contact: {} <{}>",
        config.contact_name(),
        config.contact_email()
    );
    match config.logo() {
        Some(logo) => tracing::info!("🖼️ Logo: {} ({}px)", logo.path, logo.width_px),
        None => tracing::info!("🖼️ Logo: none"),
    }
    for (i, entry) in config.entries().iter().enumerate() {
        tracing::info!("🔗 {}. {} -> {}", i + 1, entry.name, entry.url);
    }
    tracing::info!("📁 Output: {} ({})", args.output_path, args.format.join(", "));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.print_reference_config {
        print!("{}", REFERENCE_CONFIG);
        return Ok(());
    }

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting browser-portal");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match load_page_config(&args) {
        Ok(config) => config,
        Err(e) => fail("Configuration", &e),
    };
    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let renderers = match renderers_for(args.format.as_slice()) {
        Ok(renderers) => renderers,
        Err(e) => fail("Configuration", &e),
    };

    let footer_date = if args.no_timestamp {
        FooterDate::Omit
    } else {
        FooterDate::Today
    };

    let storage = LocalStorage::new(args.output_path.clone());
    let probe = FsAssetProbe::for_config_file(&args.config);
    let engine = PageEngine::new(storage, probe, renderers).with_footer_date(footer_date);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        match engine.preview(&config) {
            Ok(page) => {
                match JsonRenderer.render(&page) {
                    Ok(document) => println!("{}", document),
                    Err(e) => fail("Rendering", &e),
                }
                return Ok(());
            }
            Err(e) => fail("Composition", &e),
        }
    }

    match engine.run(&config).await {
        Ok(written) => {
            tracing::info!("✅ Page rendered successfully!");
            println!("✅ Page rendered to {}", args.output_path);
            for path in written {
                println!("📄 {}", path);
            }
        }
        Err(e) => fail("Rendering", &e),
    }

    Ok(())
}
