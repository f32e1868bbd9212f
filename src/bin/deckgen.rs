use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use deckgen::{
    ArchitectureSpec, ContentDocument, Mapper, TemplateSet, Theme,
    export::{render_png, write_html, write_pptx},
};

#[derive(Parser, Debug)]
#[command(name = "deckgen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the content document into a .pptx slide deck.
    Deck(DeckArgs),
    /// Render the content document into a standalone HTML slideshow.
    Html(HtmlArgs),
    /// Render the system architecture diagram as an SVG + PNG pair.
    Diagram(DiagramArgs),
}

#[derive(Parser, Debug)]
struct DeckArgs {
    /// Input content document JSON.
    #[arg(long, default_value = "presentation_content.json")]
    content: PathBuf,

    /// Layout template set JSON; the builtin set is used when omitted.
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Directory that relative image paths resolve against.
    /// Defaults to the content document's directory.
    #[arg(long)]
    assets_root: Option<PathBuf>,

    /// Output .pptx path.
    #[arg(long, default_value = "presentation.pptx")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct HtmlArgs {
    /// Input content document JSON.
    #[arg(long, default_value = "presentation_content.json")]
    content: PathBuf,

    /// Output HTML path.
    #[arg(long, default_value = "presentation.html")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DiagramArgs {
    /// Diagram spec JSON; the builtin system diagram is used when omitted.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long, default_value = "system_architecture.svg")]
    svg_out: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = "system_architecture.png")]
    png_out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Deck(args) => cmd_deck(args),
        Command::Html(args) => cmd_html(args),
        Command::Diagram(args) => cmd_diagram(args),
    }
}

fn cmd_deck(args: DeckArgs) -> anyhow::Result<()> {
    let doc = ContentDocument::load(&args.content)?;
    let templates = match &args.templates {
        Some(path) => TemplateSet::load(path)?,
        None => TemplateSet::builtin(),
    };
    let assets_root = args.assets_root.clone().unwrap_or_else(|| {
        args.content
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    });

    let theme = Theme::default();
    let mapper = Mapper::new(&templates, &theme, assets_root);
    let slides = mapper.map_document(&doc)?;
    write_pptx(&args.out, &doc, &slides, &theme)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_html(args: HtmlArgs) -> anyhow::Result<()> {
    let doc = ContentDocument::load(&args.content)?;
    write_html(&args.out, &doc)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_diagram(args: DiagramArgs) -> anyhow::Result<()> {
    let spec = match &args.spec {
        Some(path) => ArchitectureSpec::load(path)?,
        None => ArchitectureSpec::default(),
    };
    let markup = spec.to_svg().to_string();
    std::fs::write(&args.svg_out, &markup)?;
    eprintln!("wrote {}", args.svg_out.display());

    render_png(&args.png_out, &markup)?;
    eprintln!("wrote {}", args.png_out.display());
    Ok(())
}
