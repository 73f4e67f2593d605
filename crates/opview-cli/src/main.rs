//! opview CLI entrypoint
//! Parses command-line arguments and dispatches to the core synthesizer.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use opview_core::{ApiModel, Config, Synthesizer, TargetKind};
use tokio::fs;
use url::Url;

#[derive(Parser)]
#[command(name = "opview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Synthesize renderer facts from a parsed API description
    Synthesize {
        /// Project name
        #[arg(long, default_value = "opview_project")]
        project_name: String,
        /// Path or URL to the parsed API description (YAML or JSON)
        ///
        /// Can be a local file path or an HTTP/HTTPS URL
        /// Example: --model-path path/to/petstore.model.yaml
        /// Example: --model-path https://example.com/petstore.model.json
        #[arg(long)]
        model_path: String,
        /// Target dialect for synthesis (e.g. scala_cask, scala_client)
        #[arg(long, default_value = "scala_cask")]
        target: String,
        /// File to write the enriched model to (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Operation ids to include (all operations when empty)
        #[arg(long = "include")]
        include_operations: Vec<String>,
        /// Operation ids to exclude
        #[arg(long = "exclude")]
        exclude_operations: Vec<String>,
        /// Overrides the model's base path (Optional)
        #[arg(long)]
        base_url: Option<Url>,
        /// Emit per-operation synthesis traces
        #[arg(long)]
        debug: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Synthesize {
            project_name,
            model_path,
            target,
            output,
            include_operations,
            exclude_operations,
            base_url,
            debug,
        } => {
            // Parse target
            let target_kind: TargetKind = target
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid target '{target}': {e}"))?;

            let config = Config {
                project_name: project_name.clone(),
                model_path: model_path.clone(),
                output_path: output
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
                target: target.clone(),
                debug: *debug,
                include_all: include_operations.is_empty(),
                include_operations: include_operations.clone(),
                exclude_operations: exclude_operations.clone(),
                base_url: base_url.clone(),
            };

            tracing::info!(
                "Synthesizing with target: {}, model: {}",
                target_kind.as_str(),
                config.model_path
            );

            // Load the parsed API description from either a file or URL
            let mut model = ApiModel::from_file_or_url(&config.model_path)
                .await
                .context("Failed to load API description")?;

            if let Some(base_url) = &config.base_url {
                model.base_path = Some(base_url.clone());
            }

            // Apply the operation filter before synthesis
            model.operations.retain(|op| config.includes(&op.id));
            if model.operations.is_empty() {
                anyhow::bail!("No operations left after filtering");
            }

            let synthesizer = Synthesizer::new(target_kind, config.debug);
            synthesizer
                .enrich_model(&mut model)
                .context("Synthesis failed")?;

            let rendered = serde_json::to_string_pretty(&model)?;
            match output {
                Some(path) => {
                    fs::write(path, &rendered)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!(
                        "✅ Synthesized {} operations into: {}",
                        model.operations.len(),
                        path.display()
                    );
                }
                None => println!("{rendered}"),
            }
        }
    }
    Ok(())
}
