use std::{
    io::Write as _,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "treemap",
    version,
    about = "Lay out a JSON tree description as a treemap and render or export it"
)]
struct Cli {
    /// Output encoding (`none` writes the laid-out tree as JSON).
    #[arg(short = 'f', long = "format", value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// Output width in pixels.
    #[arg(short = 'x', long, default_value_t = 720)]
    width: u32,

    /// Output height in pixels.
    #[arg(short = 'y', long, default_value_t = 720)]
    height: u32,

    /// Renderer to use.
    #[arg(short = 's', long = "style", value_enum, default_value_t = StyleChoice::Plain)]
    style: StyleChoice,

    /// Output path. Defaults to stdout.
    #[arg(short = 'o', long = "out")]
    out: Option<PathBuf>,

    /// Spacing between sibling blocks.
    #[arg(long, default_value_t = treemap::DEFAULT_MARGIN)]
    margin: f64,

    /// Abort the layout if it takes longer than this many milliseconds.
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Log progress to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Input tree description (JSON).
    input: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Jpeg,
    Gif,
    None,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    Plain,
    Volume,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let info = treemap::TreeInfo::from_path(&cli.input)
        .with_context(|| format!("read tree '{}'", cli.input.display()))?;

    let cancel = treemap::CancelToken::new();
    if let Some(ms) = cli.deadline_ms {
        let timer = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(ms));
            timer.cancel();
        });
    }

    let settings = treemap::LayoutSettings { margin: cli.margin };
    let tree = info
        .tree_with(&cancel, &settings)
        .with_context(|| format!("lay out '{}'", cli.input.display()))?;
    tracing::info!(blocks = tree.count(), "tree laid out");

    let render = treemap::RenderSettings {
        width: cli.width,
        height: cli.height,
        clear_rgba: None,
    };
    let bytes = treemap::encode_tree(&tree, cli.style.into(), cli.format.into(), &render)?;

    match &cli.out {
        Some(path) => write_output(path, &bytes)?,
        None => std::io::stdout()
            .lock()
            .write_all(&bytes)
            .context("write stdout")?,
    }
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

impl From<FormatChoice> for treemap::Encoding {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Png => Self::Png,
            FormatChoice::Jpeg => Self::Jpeg,
            FormatChoice::Gif => Self::Gif,
            FormatChoice::None => Self::None,
        }
    }
}

impl From<StyleChoice> for treemap::RendererKind {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Plain => Self::Plain,
            StyleChoice::Volume => Self::Volume,
        }
    }
}
