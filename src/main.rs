use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use modgraph::core::{AnalyzerConfig, DependencyAnalyzer, DependencyGraph, ModuleId};
use modgraph::formatters::{
    Direction, DotFormatter, GraphvizWriter, ImageFormat, JsonCompactFormatter,
};
use modgraph::parsers::DeclarationSyntax;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "modgraph",
    version,
    author = "modgraph developers",
    about = "Module dependency grapher for multi-module Gradle builds"
)]
struct Cli {
    /// The module to analyze (e.g. :account:account-domain)
    #[arg(
        short,
        long,
        value_name = "MODULE",
        required_unless_present = "list_modules"
    )]
    module: Option<String>,

    /// Maximum depth to analyze (0 for no limit)
    #[arg(short, long, default_value_t = 0)]
    depth: usize,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "module_dependencies.svg")]
    output: PathBuf,

    /// Graph direction: LR (horizontal) or TB (vertical)
    #[arg(long, value_name = "DIR", default_value = "LR", value_parser = parse_direction)]
    direction: Direction,

    /// Duplicate nodes so that each node has at most one incoming edge
    #[arg(long)]
    duplicate: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Root directory of the Gradle build
    #[arg(long, value_name = "PATH", default_value = ".")]
    project_root: PathBuf,

    /// Additional version-catalog accessor to treat as a library (e.g. testLibs)
    #[arg(long = "library-prefix", value_name = "PREFIX")]
    library_prefixes: Vec<String>,

    /// List every module with a build descriptor and exit
    #[arg(long)]
    list_modules: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Svg,
    Png,
    Dot,
    Json,
}

impl OutputFormat {
    /// Images go exactly where asked; text exports get their own extension so the
    /// default `module_dependencies.svg` never holds DOT or JSON.
    fn output_path(self, output: &Path) -> PathBuf {
        match self {
            OutputFormat::Svg | OutputFormat::Png => output.to_path_buf(),
            OutputFormat::Dot => output.with_extension("dot"),
            OutputFormat::Json => output.with_extension("json"),
        }
    }
}

fn parse_direction(value: &str) -> std::result::Result<Direction, String> {
    value.parse()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        module,
        depth,
        output,
        direction,
        duplicate,
        format,
        project_root,
        library_prefixes,
        list_modules,
    } = cli;

    let syntax = library_prefixes
        .into_iter()
        .fold(DeclarationSyntax::default(), |syntax, prefix| {
            syntax.with_library_prefix(prefix)
        });
    let config = AnalyzerConfig::new(project_root.clone()).with_syntax(syntax);
    let analyzer = DependencyAnalyzer::new(config);

    if list_modules {
        let modules = analyzer
            .locator()
            .discover_modules()
            .with_context(|| format!("Failed to scan {}", project_root.display()))?;
        for module in &modules {
            println!("{module}");
        }
        println!("\n{} modules found", modules.len());
        return Ok(());
    }

    let module = module.context("a module is required unless --list-modules is given")?;
    let root = ModuleId::new(module);

    println!("\nAnalyzing dependencies for {root}");
    if depth > 0 {
        println!("Max depth: {depth}");
    }
    println!("Graph direction: {direction}");
    println!("Node duplication: {duplicate}");

    let start_time = Instant::now();
    let graph = analyzer.analyze(&root, depth);
    println!(
        "Analysis completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    print_dependencies(&graph);

    let formatter = DotFormatter::new()
        .with_direction(direction)
        .with_duplicate_nodes(duplicate);

    match format {
        OutputFormat::Svg | OutputFormat::Png => {
            let image_format = if format == OutputFormat::Svg {
                ImageFormat::Svg
            } else {
                ImageFormat::Png
            };
            let diagram = formatter.render(&graph, &root)?;
            GraphvizWriter::new()
                .write(&diagram, image_format, &output)
                .context("Failed to render diagram with Graphviz")?;
            println!(
                "\n{} visualization generated at: {}",
                image_format.as_str().to_uppercase(),
                output.display()
            );
        }
        OutputFormat::Dot => {
            let output = format.output_path(&output);
            formatter.format_to_file(&graph, &root, &output)?;
            println!("\nDOT description written to: {}", output.display());
        }
        OutputFormat::Json => {
            let output = format.output_path(&output);
            JsonCompactFormatter::new()
                .with_pretty(true)
                .format_to_file(&graph, &root, &output)?;
            println!("\nJSON output: {}", output.display());
        }
    }

    Ok(())
}

fn print_dependencies(graph: &DependencyGraph) {
    println!("\nProject Dependencies:");
    for (module, deps) in graph.projects() {
        if deps.is_empty() {
            continue;
        }
        println!("\n{module} depends on projects:");
        for dep in deps {
            println!("  - {dep}");
        }
    }

    println!("\nLibrary Dependencies:");
    for (module, deps) in graph.libraries() {
        if deps.is_empty() {
            continue;
        }
        println!("\n{module} depends on libs:");
        for dep in deps {
            println!("  - {dep}");
        }
    }

    println!(
        "\n{} modules, {} project edges, {} library edges",
        graph.module_count(),
        graph.project_edge_count(),
        graph.library_edge_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_formats_replace_the_image_extension() {
        let default = Path::new("module_dependencies.svg");
        assert_eq!(
            OutputFormat::Dot.output_path(default),
            PathBuf::from("module_dependencies.dot")
        );
        assert_eq!(
            OutputFormat::Json.output_path(default),
            PathBuf::from("module_dependencies.json")
        );
        assert_eq!(OutputFormat::Svg.output_path(default), default);
        assert_eq!(
            OutputFormat::Png.output_path(Path::new("out/graph.png")),
            PathBuf::from("out/graph.png")
        );
    }

    #[test]
    fn cli_defaults_match_documented_flags() {
        let cli = Cli::try_parse_from(["modgraph", "--module", ":app"]).unwrap();
        assert_eq!(cli.depth, 0);
        assert_eq!(cli.format, OutputFormat::Svg);
        assert_eq!(cli.direction, Direction::LeftRight);
        assert!(!cli.duplicate);

        assert!(Cli::try_parse_from(["modgraph"]).is_err());
        assert!(Cli::try_parse_from(["modgraph", "--list-modules"]).is_ok());
    }
}
