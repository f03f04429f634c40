//! `modelgen` — generate schema, model and form stubs from a field list.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use modelgen_codegen_lib::{demo_fields, loader, Artifact};
use tracing::info;

use config::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "modelgen", about = "Generate schema, model and form code from a field list")]
struct Cli {
    /// Path to config file (default: ~/.modelgen/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate from a .json or .toml field list.
    Generate {
        /// Field list file.
        input: PathBuf,
        #[command(flatten)]
        emit: EmitArgs,
    },

    /// Generate from the built-in gender/age/name field list.
    Demo {
        #[command(flatten)]
        emit: EmitArgs,
    },

    /// List the supported field types and how each maps.
    Types,
}

#[derive(clap::Args, Debug)]
struct EmitArgs {
    /// Emit a single artifact.
    #[arg(long, value_enum)]
    only: Option<ArtifactArg>,

    /// Write files instead of printing. Without a value, uses the configured
    /// output directory.
    #[arg(long, num_args = 0..=1)]
    out: Option<Option<PathBuf>>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ArtifactArg {
    Schema,
    Model,
    Form,
}

impl From<ArtifactArg> for Artifact {
    fn from(arg: ArtifactArg) -> Self {
        match arg {
            ArtifactArg::Schema => Artifact::Schema,
            ArtifactArg::Model => Artifact::Model,
            ArtifactArg::Form => Artifact::Form,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only generated code.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(CliConfig::default_path);
    info!("Loading configuration from {}", config_path.display());
    let config = CliConfig::load(&config_path)?;

    match cli.command {
        Commands::Generate { input, emit } => {
            let fields = loader::load(&input)?;
            run(fields, &config, emit)?;
        }
        Commands::Demo { emit } => {
            run(demo_fields(), &config, emit)?;
        }
        Commands::Types => {
            print!("{}", commands::type_table());
        }
    }

    Ok(())
}

fn run(
    fields: Vec<modelgen_codegen_lib::FieldDescriptor>,
    config: &CliConfig,
    emit: EmitArgs,
) -> anyhow::Result<()> {
    let selected: Vec<Artifact> = match emit.only {
        Some(only) => vec![only.into()],
        None => Artifact::ALL.to_vec(),
    };

    let code = commands::generate(fields, config);

    match emit.out {
        Some(dir) => {
            let dir = dir.unwrap_or_else(|| config.output.dir.clone());
            for path in commands::write_files(&code, &selected, &dir, &config.output)? {
                println!("wrote {}", path.display());
            }
        }
        None => print!("{}", commands::render(&code, &selected)),
    }

    Ok(())
}
