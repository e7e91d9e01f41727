use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use clap_mangen::Man;
use std::io;
use std::path::PathBuf;
use tracing::info;

use declarative::cli::mapping::{
    handle_apply_command, handle_check_command, MappingArgs, OutputFormat,
};
use declarative::cli::schema::{handle_models_command, handle_schema_command};
use declarative::cli::load_config;
use declarative::symbols::*;

#[derive(Parser)]
#[command(name = "declarative")]
#[command(about = "Map declarative TOML build documents onto typed configuration models")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum)]
    completions: Option<Shell>,

    /// Generate man page
    #[arg(long)]
    man: bool,

    /// Show detailed information about the tool
    #[arg(long)]
    info: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
enum Commands {
    /// Map a build document onto a model and print the result
    Apply {
        #[command(flatten)]
        mapping: MappingArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Validate a build document and show what would be applied
    Check {
        #[command(flatten)]
        mapping: MappingArgs,
    },
    /// Print the JSON Schema of the keys a model accepts
    Schema {
        /// Model to describe (uses config if not specified)
        #[arg(short, long)]
        model: Option<String>,

        /// Reject keys the model does not declare
        #[arg(long)]
        strict: bool,

        /// Describe the tool's own configuration file instead
        #[arg(long, conflicts_with_all = ["model", "strict"])]
        tool_config: bool,
    },
    /// List registered models
    Models,
}

fn create_subscriber(
    verbose: bool,
    time_format: &str,
) -> Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let format_desc = time::format_description::parse_owned::<1>(time_format)
        .with_context(|| format!("Invalid time format '{time_format}'"))?;

    // Logs go to stderr so mapped output on stdout stays machine readable
    Ok(Box::new(
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .with_timer(tracing_subscriber::fmt::time::LocalTime::new(format_desc))
            .finish(),
    ))
}

fn print_info() {
    println!(
        "{SYMBOL_TOOL_CONFIG} declarative v{}",
        env!("CARGO_PKG_VERSION")
    );
    println!("{SYMBOL_DOC_NOTE} {}", env!("CARGO_PKG_DESCRIPTION"));
    println!("{SYMBOL_SCOPE_GLOBAL} Repository: {}", env!("CARGO_PKG_REPOSITORY"));
    println!("{SYMBOL_CONTENT_FILE} License: {}", env!("CARGO_PKG_LICENSE"));
    println!("{SYMBOL_DOC_TAG} Keywords: toml, declarative, configuration, android, cli");
    println!();
    println!("{SYMBOL_CONTENT_PACKAGE} Built-in Models:");
    println!("  • android-application  (com.android.application)");
    println!("  • android-library      (com.android.library)");
    println!();
    println!("{SYMBOL_ACTION_LAUNCH} Usage:");
    println!("   declarative apply [FILE] [OPTIONS]   # Map and print the model");
    println!("   declarative check [FILE] [OPTIONS]   # Dry run");
    println!("   declarative schema [OPTIONS]         # JSON Schema for editors");
    println!("   Use --help for detailed options");
    println!();
    println!("{SYMBOL_TOOL_CONFIG} Shell Completions:");
    println!("   declarative --completions bash > /usr/local/etc/bash_completion.d/declarative");
    println!("   declarative --completions zsh > ~/.zfunc/_declarative");
    println!();
    println!("{SYMBOL_DOC_BOOK} Man Page:");
    println!("   declarative --man > /usr/local/share/man/man1/declarative.1");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --completions flag early
    if let Some(shell) = args.completions {
        let mut app = Args::command();
        generate(shell, &mut app, "declarative", &mut io::stdout());
        return Ok(());
    }

    // Handle --man flag early
    if args.man {
        let app = Args::command();
        let man = Man::new(app);
        man.render(&mut io::stdout())?;
        return Ok(());
    }

    if args.info {
        print_info();
        return Ok(());
    }

    let config = load_config(args.config.as_deref()).await?;

    let verbose = args.verbose || config.is_verbose_default();
    let subscriber = create_subscriber(verbose, &config.get_time_format())?;
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(config_path) = &args.config {
        info!(
            "{SYMBOL_INDICATOR_INFO} Using custom config file: {}",
            config_path.display()
        );
    }

    match args.command {
        Some(Commands::Apply { mapping, format }) => {
            handle_apply_command(mapping, format, &config).await
        }
        Some(Commands::Check { mapping }) => handle_check_command(mapping, &config).await,
        Some(Commands::Schema {
            model,
            strict,
            tool_config,
        }) => handle_schema_command(model, strict, tool_config, &config),
        Some(Commands::Models) => {
            handle_models_command();
            Ok(())
        }
        None => {
            let mut app = Args::command();
            app.print_help()?;
            Ok(())
        }
    }
}
