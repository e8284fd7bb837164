use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

use container2compose::compose::{DEFAULT_COMPOSE_VERSION, DEFAULT_OUTPUT_FILE};
use container2compose::{
    CliEngine, ComposeGenerator, GeneratorOptions, Notifier, TagSelection,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum EngineKind {
    Docker,
    Nerdctl,
    Podman,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TagChoice {
    /// First tag reported by the engine
    First,
    /// Lexicographically smallest tag
    Sorted,
}

impl From<TagChoice> for TagSelection {
    fn from(choice: TagChoice) -> Self {
        match choice {
            TagChoice::First => TagSelection::First,
            TagChoice::Sorted => TagSelection::Sorted,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(help = "Container names or ids to include")]
    containers: Vec<String>,

    #[arg(
        short,
        long,
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Output compose file"
    )]
    output: PathBuf,

    #[arg(
        short,
        long,
        value_enum,
        default_value = "docker",
        help = "Container engine to use"
    )]
    engine: EngineKind,

    #[arg(long, default_value = DEFAULT_COMPOSE_VERSION, help = "Compose file format version")]
    compose_version: String,

    #[arg(
        long,
        value_enum,
        default_value = "first",
        help = "Which repository tag names an image with several tags"
    )]
    tag_selection: TagChoice,

    #[arg(long, help = "Print the compose document instead of writing a file")]
    stdout: bool,

    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Verbose mode (-v for info, -vv for debug, -vvv for trace). Also switches to text-based progress"
    )]
    verbose: u8,
}

fn connect(kind: EngineKind) -> Result<CliEngine> {
    let engine = match kind {
        EngineKind::Docker => CliEngine::docker(),
        EngineKind::Nerdctl => CliEngine::nerdctl(),
        EngineKind::Podman => CliEngine::podman(),
    };
    engine.map_err(|e| anyhow!("Failed to initialize {:?} engine: {:#}", kind, e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.containers.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let notifier = Notifier::new(cli.verbose);
    notifier.debug(&format!("Output file: {}", cli.output.display()));
    notifier.debug(&format!("Engine: {:?}", cli.engine));

    let engine = connect(cli.engine)?;
    let options = GeneratorOptions {
        compose_version: cli.compose_version,
        tag_selection: cli.tag_selection.into(),
    };

    let generator = ComposeGenerator::new(engine, notifier, options);
    let report = generator.generate(cli.containers.as_slice());

    if !report.is_complete() {
        let skipped: Vec<&str> = report
            .skipped
            .iter()
            .map(|s| s.identifier.as_str())
            .collect();
        generator.notifier().warn(&format!(
            "Skipped {} container(s) that could not be inspected: {}",
            skipped.len(),
            skipped.join(", ")
        ));
    }

    if cli.stdout {
        print!("{}", report.document.to_yaml()?);
    } else {
        report.document.write_to(&cli.output)?;
        eprintln!(
            "Wrote {} service(s) to {}",
            report.document.services.len(),
            cli.output.display()
        );
    }

    Ok(())
}
