// Generate tint/shade palettes for the colors listed in an Hjson file
// and write them as CSS, SCSS and/or JSON:
//
//     palette-tools colors.hjson --out-dir dist --report
//
// Invalid colors are reported and skipped; the other palettes are
// still written.  Set RUST_LOG=debug to trace each generation.

use std::{fs::File,
          io::{self, BufWriter, prelude::*},
          path::PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tint_shade::{export::{self, ExportFormat}, format_hex, generate_all,
                 Palette};

mod entries;

#[derive(Parser, Debug)]
#[command(name = "palette-tools",
          about = "Accessible tint/shade palettes from base colors")]
struct Cli {
    /// Hjson or JSON file with a list of `{ name, hex }` objects.
    input: PathBuf,
    /// Directory where the exported files are written.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// Base name of the exported files.
    #[arg(long, default_value = "color_palettes")]
    stem: String,
    /// Formats to write (repeatable).  All of them if not given.
    #[arg(short, long = "format", value_enum)]
    formats: Vec<FormatArg>,
    /// Print the contrast of each shade with black and white text.
    #[arg(long)]
    report: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Css,
    Scss,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Css => ExportFormat::Css,
            FormatArg::Scss => ExportFormat::Scss,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

fn print_report(fh: &mut impl Write, p: &Palette) -> io::Result<()> {
    writeln!(fh, "{} palette", p.name())?;
    writeln!(fh, "  {:<16} {:<8} {:>12} {:>12}  text",
             "shade", "hex", "black text", "white text")?;
    for r in p.report() {
        writeln!(fh, "  {:<16} {:<8} {:>6.2} {:<5} {:>6.2} {:<5}  {}",
                 r.key, r.hex,
                 r.black_text.ratio, r.black_text.tier,
                 r.white_text.ratio, r.white_text.tier,
                 format_hex(r.text_color))?;
    }
    writeln!(fh)
}

fn invalid_message(e: &tint_shade::Error) -> String {
    format!("{e}.  Please enter a valid hex color (e.g., #FF5733).")
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let entries = entries::read_entries(&cli.input)?;
    info!(count = entries.len(), input = %cli.input.display(),
          "read base colors");

    let mut palettes = Vec::with_capacity(entries.len());
    for r in generate_all(&entries) {
        match r {
            Ok(p) => palettes.push(p),
            Err(e) => eprintln!("{}", invalid_message(&e)),
        }
    }

    if cli.report {
        let stdout = io::stdout();
        let mut fh = BufWriter::new(stdout.lock());
        for p in &palettes {
            print_report(&mut fh, p)?;
        }
        fh.flush()?;
    }

    let formats: Vec<ExportFormat> = if cli.formats.is_empty() {
        ExportFormat::ALL.to_vec()
    } else {
        cli.formats.iter().map(|&f| f.into()).collect()
    };
    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("cannot create {}", cli.out_dir.display()))?;
    for format in formats {
        let path = cli.out_dir
            .join(format!("{}.{}", cli.stem, format.extension()));
        let mut fh = BufWriter::new(File::create(&path)
            .with_context(|| format!("cannot create {}", path.display()))?);
        fh.write_all(export::export(format, &palettes).as_bytes())?;
        fh.flush()?;
        info!(path = %path.display(), mime = format.mime_type(),
              palettes = palettes.len(), "wrote palettes");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_every_shade() {
        let p = Palette::generate("#4287f5", "blue").unwrap();
        let mut out = Vec::new();
        print_report(&mut out, &p).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("blue palette\n"));
        assert_eq!(out.lines().filter(|l| l.contains("blue.")).count(), 9);
        assert!(out.contains("blue.500         #4287f5    6.02 AA      3.49 FAIL   #ffffff"));
    }

    #[test]
    fn invalid_entry_message() {
        let entries = [tint_shade::ColorEntry::new("blue", "#4287f5"),
                       tint_shade::ColorEntry::new("Red", "#428")];
        let errs: Vec<_> = generate_all(&entries).into_iter()
            .filter_map(|r| r.err()).collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(invalid_message(&errs[0]),
                   "invalid hex color \"#428\" for color 2 (Red).  \
                    Please enter a valid hex color (e.g., #FF5733).");
    }

    #[test]
    fn formats_convert() {
        assert_eq!(ExportFormat::from(FormatArg::Scss), ExportFormat::Scss);
        let cli = Cli::parse_from(["palette-tools", "in.hjson", "-f", "css",
                                   "--format", "json"]);
        assert_eq!(cli.formats.len(), 2);
        assert_eq!(cli.out_dir, PathBuf::from("."));
    }
}
