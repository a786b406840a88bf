use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfb", about = "Booklet imposition for PDF documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose a PDF as a saddle-stitched booklet
    Booklet {
        /// Input PDF file(s), merged in order before imposing
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file (default: booklet-<first input name>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Options file (JSON); flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Whether the paper is the folded sheet or the booklet page size
        #[arg(long, value_enum)]
        sheet: Option<SheetArg>,

        /// Scaling mode
        #[arg(long, value_enum)]
        scaling: Option<ScalingArg>,

        /// Draw a dashed fold line down the middle of each sheet
        #[arg(long)]
        fold_line: bool,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print which pages go on each sheet face
    Plan {
        /// Input PDF file
        #[arg(short, long, conflicts_with = "pages", required_unless_present = "pages")]
        input: Option<PathBuf>,

        /// Page count to plan for, without a file
        #[arg(long)]
        pages: Option<usize>,
    },

    /// Merge PDF files into one
    Merge {
        /// Input PDF files, in order
        #[arg(short, long, required = true, num_args = 2..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum SheetArg {
    /// Paper is the printed sheet, folded in half
    Folded,
    /// Paper is the booklet page; sheet holds two of them side by side
    Spread,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScalingArg {
    Fit,
    Shrink,
}

impl From<PaperArg> for pdf_booklet::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<ScalingArg> for pdf_booklet::ScalingMode {
    fn from(arg: ScalingArg) -> Self {
        match arg {
            ScalingArg::Fit => Self::Fit,
            ScalingArg::Shrink => Self::ShrinkToFit,
        }
    }
}

fn sheet_format(
    current: pdf_booklet::SheetFormat,
    paper: Option<PaperArg>,
    sheet: Option<SheetArg>,
) -> pdf_booklet::SheetFormat {
    use pdf_booklet::SheetFormat;

    let paper = paper.map(Into::into).unwrap_or(current.paper());
    match sheet {
        Some(SheetArg::Folded) => SheetFormat::Folded(paper),
        Some(SheetArg::Spread) => SheetFormat::Spread(paper),
        None => match current {
            SheetFormat::Folded(_) => SheetFormat::Folded(paper),
            SheetFormat::Spread(_) => SheetFormat::Spread(paper),
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Booklet {
            input,
            output,
            config,
            paper,
            sheet,
            scaling,
            fold_line,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => pdf_booklet::BookletOptions::load(path)
                    .await
                    .with_context(|| format!("loading options from {}", path.display()))?,
                None => pdf_booklet::BookletOptions::default(),
            };
            options.sheet_format = sheet_format(options.sheet_format, paper, sheet);
            if let Some(scaling) = scaling {
                options.scaling_mode = scaling.into();
            }
            options.fold_line |= fold_line;
            options.validate()?;

            let stats = {
                let documents = pdf_booklet::load_multiple_pdfs(&input)
                    .await
                    .context("reading input PDFs")?;
                pdf_booklet::calculate_statistics(&documents)?
            };
            println!("Booklet Statistics:");
            println!("  Source pages: {}", stats.source_pages);
            println!("  Sheets to print: {}", stats.sheets);
            println!("  Output pages: {}", stats.output_pages);

            if stats_only {
                return Ok(());
            }

            let output = output.unwrap_or_else(|| pdf_booklet::default_output_path(&input[0]));
            let faces = pdf_booklet::generate_booklet(&input, &output, &options)
                .await
                .with_context(|| format!("writing {}", output.display()))?;

            println!("Booklet ({} sheet sides) → {}", faces, output.display());
            println!("Print double-sided (flip on long edge), fold the stack in half and staple the fold.");
        }

        Commands::Plan { input, pages } => {
            let count = match input {
                Some(path) => pdf_booklet::load_pdf(&path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?
                    .get_pages()
                    .len(),
                None => pages.context("either --input or --pages is required")?,
            };

            let page_count = pdf_booklet::validate_page_count(count)?;
            log::info!("{} pages on {} sheets", page_count, page_count.sheets());
            for side in pdf_booklet::imposition_plan(page_count) {
                println!("{}", side);
            }
        }

        Commands::Merge { input, output } => {
            let documents = pdf_booklet::load_multiple_pdfs(&input)
                .await
                .context("reading input PDFs")?;
            let merged = tokio::task::spawn_blocking(move || pdf_booklet::merge_documents(documents))
                .await??;
            let pages = merged.get_pages().len();
            pdf_booklet::save_pdf(merged, &output)
                .await
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Merged {} files ({} pages) → {}", input.len(), pages, output.display());
        }
    }

    Ok(())
}
