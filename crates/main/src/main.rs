use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kaag_pdf::demo::PlayerProfile;
use kaag_pdf::{PageSize, ReportGenerator};
use log::info;

/// Renders KAAG branded PDF reports from the command line.
///
/// Brand fonts are read from `--font-dir` or the `KAAG_PDF_FONTS_DIR`
/// environment variable; without them the built-in Helvetica faces are used.
/// Set `RUST_LOG=debug` to follow the counting and rendering passes.
#[derive(Parser)]
#[command(author, version, about = "Render KAAG branded PDF reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sample player report.
    #[command(name = "sample", aliases = ["report"])]
    Sample(SampleArgs),
}

#[derive(clap::Args)]
struct SampleArgs {
    /// Where to write the PDF.
    #[arg(short, long, default_value = "player_report.pdf")]
    output: PathBuf,

    /// Directory with the brand font files.
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Fail instead of falling back when a brand font is missing.
    #[arg(long)]
    strict_fonts: bool,

    /// Logo image drawn in the header.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Date printed in the header instead of today's date.
    #[arg(long)]
    date: Option<String>,

    /// Paper size: a3, a4, a5, letter or legal.
    #[arg(long, default_value = "a4", value_parser = parse_page_size)]
    page_size: PageSize,

    /// Text printed on the left of every footer.
    #[arg(long, default_value = "KAA Gent - Scouting")]
    footer_text: String,

    /// Add a PDF outline entry for every section.
    #[cfg(feature = "bookmarks")]
    #[arg(long)]
    bookmarks: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sample(args) => render_sample(args),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn render_sample(args: SampleArgs) -> Result<(), Box<dyn Error>> {
    let mut builder = ReportGenerator::builder()
        .with_page_size(args.page_size)
        .with_footer_text(args.footer_text)
        .strict_fonts(args.strict_fonts);
    if let Some(font_dir) = args.font_dir {
        builder = builder.with_font_dir(font_dir);
    }
    if let Some(logo) = args.logo {
        builder = builder.with_logo_path(logo);
    }
    if let Some(date) = args.date {
        builder = builder.with_report_date(date);
    }
    let generator = builder.build()?;

    let player = PlayerProfile::sample();
    #[cfg(feature = "bookmarks")]
    let bytes = if args.bookmarks {
        generator.create_report_with_bookmarks(player.report_request())?
    } else {
        generator.create_report(player.report_request())?
    };
    #[cfg(not(feature = "bookmarks"))]
    let bytes = generator.create_report(player.report_request())?;

    std::fs::write(&args.output, &bytes)?;
    info!("wrote {} bytes to {}", bytes.len(), args.output.display());
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn parse_page_size(name: &str) -> Result<PageSize, String> {
    PageSize::from_name(name).ok_or_else(|| format!("unknown page size '{name}'"))
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
