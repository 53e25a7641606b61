use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "retrospect", version)]
struct Cli {
    /// Log layout and font decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a blank questionnaire JSON to fill in.
    Template(TemplateArgs),
    /// Render a filled questionnaire as a PNG poster.
    Render(RenderArgs),
    /// Print the computed layout as JSON without drawing.
    Measure(MeasureArgs),
}

#[derive(Parser, Debug)]
struct TemplateArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Pre-fill the writer field.
    #[arg(long)]
    writer: Option<String>,

    /// Date label; defaults to today.
    #[arg(long)]
    date: Option<String>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input questionnaire JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Poster config JSON (layout, theme, labels).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file; overrides the config's `font_path`.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MeasureArgs {
    /// Input questionnaire JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Poster config JSON (layout, theme, labels).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Template(args) => cmd_template(args),
        Command::Render(args) => cmd_render(args),
        Command::Measure(args) => cmd_measure(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<retrospect::PosterConfig> {
    let config = match path {
        Some(p) => retrospect::PosterConfig::from_path(p)
            .with_context(|| format!("load poster config '{}'", p.display()))?,
        None => retrospect::PosterConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn read_questionnaire(path: &Path) -> anyhow::Result<retrospect::Questionnaire> {
    let q = retrospect::Questionnaire::from_path(path)
        .with_context(|| format!("load questionnaire '{}'", path.display()))?;
    q.validate()?;
    Ok(q)
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_template(args: TemplateArgs) -> anyhow::Result<()> {
    let q = retrospect::blank_questionnaire(args.writer.as_deref(), args.date.as_deref());

    create_parent_dir(&args.out)?;
    let f = File::create(&args.out)
        .with_context(|| format!("create template '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &q).with_context(|| "write template JSON")?;
    w.flush()
        .with_context(|| format!("flush template '{}'", args.out.display()))?;

    tracing::info!(path = %args.out.display(), "wrote template");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let q = read_questionnaire(&args.in_path)?;
    let mut config = read_config(args.config.as_deref())?;
    if let Some(font) = args.font {
        config.font_path = font;
    }

    let poster = retrospect::render(&q, &config)?;
    poster.save_png(&args.out)?;

    tracing::info!(
        path = %args.out.display(),
        width = poster.width(),
        height = poster.height(),
        builtin_font = poster.builtin_font,
        "wrote poster"
    );
    Ok(())
}

fn cmd_measure(args: MeasureArgs) -> anyhow::Result<()> {
    let q = read_questionnaire(&args.in_path)?;
    let config = read_config(args.config.as_deref())?;

    let plan = retrospect::plan_poster(&q, &config.layout);
    let out = serde_json::to_string_pretty(&plan.summary()).with_context(|| "encode layout")?;
    println!("{out}");
    Ok(())
}
