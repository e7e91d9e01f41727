use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::config::Config;
use crate::core::document::Document;
use crate::core::parser::{DeclarativeParser, MappingPlan};
use crate::core::registry::{Model, ModelDescriptor, ModelRegistry};
use crate::symbols::*;

/// Arguments shared by `apply` and `check`
#[derive(Args, Debug, Clone, Default)]
pub struct MappingArgs {
    /// Build document to read (uses config or build.toml if not specified)
    pub file: Option<PathBuf>,

    /// Registered model to map onto
    #[arg(short, long)]
    pub model: Option<String>,

    /// Top-level table of the document to map
    #[arg(short, long)]
    pub section: Option<String>,

    /// Fail on keys the model does not declare
    #[arg(long)]
    pub strict: bool,
}

/// Output format for the mapped model
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// A parsed document together with the resolved mapping settings
pub struct MappingSession {
    pub path: PathBuf,
    pub section: String,
    pub model: &'static ModelDescriptor,
    document: Document,
    parser: DeclarativeParser,
}

impl MappingSession {
    /// Resolve settings (command line over config over defaults) and read the document
    pub async fn open(args: &MappingArgs, config: &Config) -> Result<Self> {
        let path = args
            .file
            .clone()
            .unwrap_or_else(|| config.get_document_path());
        let section = args.section.clone().unwrap_or_else(|| config.get_section());
        let model_name = args.model.clone().unwrap_or_else(|| config.get_model());

        let model = resolve_model(&model_name)?;
        let document = read_document(&path).await?;
        let parser = DeclarativeParser::with_options(config.parser_options(args.strict));

        debug!(
            "Mapping [{section}] of {} onto {} ({} unknown keys)",
            path.display(),
            model.name,
            parser.options().unknown_keys
        );

        Ok(Self {
            path,
            section,
            model,
            document,
            parser,
        })
    }

    /// Validate the section without building anything
    pub fn plan(&self) -> Result<MappingPlan> {
        self.parser
            .plan_section(&self.document, &self.section, self.model.target)
            .with_context(|| self.failure_context())
    }

    /// Map the section onto a fresh model instance
    pub fn apply(&self) -> Result<Box<dyn Model>> {
        let mut model = self.model.create();
        self.parser
            .parse_section(&self.document, &self.section, model.as_configurable())
            .with_context(|| self.failure_context())?;
        Ok(model)
    }

    fn failure_context(&self) -> String {
        let mut context = format!(
            "Failed to map [{}] of {} onto {}",
            self.section,
            self.path.display(),
            self.model.name
        );
        if self.document.section(&self.section).is_none() {
            let sections = self.document.sections();
            if sections.is_empty() {
                context.push_str(" (the document has no sections)");
            } else {
                context.push_str(&format!(" (available sections: {})", sections.join(", ")));
            }
        }
        context
    }
}

fn resolve_model(name: &str) -> Result<&'static ModelDescriptor> {
    let registry = ModelRegistry::discover();
    registry.get(name).ok_or_else(|| {
        anyhow!(
            "Unknown model '{name}'. Available models: {}",
            registry.names().join(", ")
        )
    })
}

async fn read_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read build document {}", path.display()))?;
    content
        .parse::<Document>()
        .with_context(|| format!("Failed to parse build document {}", path.display()))
}

/// Render a mapped model in the requested format
pub fn render_model(model: &dyn Model, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let value = model.to_json().context("Failed to serialize model to JSON")?;
            serde_json::to_string_pretty(&value).context("Failed to serialize model to JSON")
        }
        OutputFormat::Toml => model.to_toml().context("Failed to serialize model to TOML"),
    }
}

/// Handle the `apply` command: map the document and print the model
pub async fn handle_apply_command(
    args: MappingArgs,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let session = MappingSession::open(&args, config).await?;
    let model = session.apply()?;

    info!(
        "{SYMBOL_INDICATOR_SUCCESS} Mapped [{}] of {} onto {}",
        session.section,
        session.path.display(),
        session.model.name
    );
    println!("{}", render_model(&*model, format)?);

    Ok(())
}

/// Handle the `check` command: print the planned effects without applying them
pub async fn handle_check_command(args: MappingArgs, config: &Config) -> Result<()> {
    let session = MappingSession::open(&args, config).await?;
    let plan = session.plan()?;

    print!("{plan}");

    let skipped = plan.skipped_keys();
    for key in &skipped {
        println!("{SYMBOL_INDICATOR_WARNING} Skipped unknown key {key}");
    }

    println!(
        "{SYMBOL_INDICATOR_SUCCESS} {} assignments planned, {} keys skipped",
        plan.assignment_count(),
        skipped.len()
    );

    Ok(())
}
