use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use tint_shade::{format_hex, valid_palettes, ColorEntry, Palette};

type Err = Box<dyn Error>;

fn table_of_palette(fh: &mut impl Write, p: &Palette) -> Result<(), Err> {
    writeln!(fh, "<h3>{}</h3>", p.name())?;
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px 4px\">")?;
    for r in p.report() {
        writeln!(fh, "<tr style=\"background-color: {}\">", r.hex)?;
        writeln!(fh, "  <td style=\"width: 90px; padding: 8px; color: black\">\
                      <b>{:.2}</b><br/>{}</td>",
                 r.black_text.ratio, r.black_text.tier)?;
        writeln!(fh, "  <td style=\"width: 160px; text-align: center; \
                      color: {}\"><b>{}</b><br/>{}</td>",
                 format_hex(r.text_color), r.key, r.hex)?;
        writeln!(fh, "  <td style=\"width: 90px; padding: 8px; color: white; \
                      text-align: right\"><b>{:.2}</b><br/>{}</td>",
                 r.white_text.ratio, r.white_text.tier)?;
        writeln!(fh, "</tr>")?;
    }
    writeln!(fh, "</table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let entries = [ColorEntry::new("blue", "#4287f5"),
                   ColorEntry::new("red", "#FF5733"),
                   ColorEntry::new("green", "2e8b57"),
                   ColorEntry::new("grey", "#aaaaaa"),
                   ColorEntry::new("broken", "#12345")];

    let mut fh = BufWriter::new(File::create("palette_preview.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>tint-shade: test {}</title>\n\
                  </head>\n\
                  <body style=\"display: flex; gap: 24px\">",
             env::args().next().unwrap_or_default())?;
    for p in valid_palettes(&entries) {
        writeln!(fh, "<div>")?;
        table_of_palette(&mut fh, &p)?;
        writeln!(fh, "</div>")?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    fh.flush()?;
    Ok(())
}
