//! README generator for the downloadable bundle.

use std::fmt::Write;

use folio_model::PortfolioDocument;

use crate::{BuildStamp, GenerationError, INDEX_HTML, MAIN_JS, README_MD, STYLES_CSS};

pub fn generate(
    portfolio: &PortfolioDocument,
    template_name: &str,
    stamp: &BuildStamp,
) -> Result<String, GenerationError> {
    let mut md = String::new();

    writeln!(md, "# {} - Portfolio Website", portfolio.display_name())?;
    writeln!(md)?;
    writeln!(
        md,
        "Generated with the \"{}\" template on {}.",
        template_name,
        stamp.date.format("%B %-d, %Y")
    )?;
    writeln!(md)?;
    writeln!(md, "## Files")?;
    writeln!(md)?;
    writeln!(md, "- `{INDEX_HTML}` - the portfolio page")?;
    writeln!(md, "- `{STYLES_CSS}` - colors and layout")?;
    writeln!(md, "- `{MAIN_JS}` - smooth scrolling and navigation highlighting")?;
    writeln!(md, "- `{README_MD}` - this file")?;
    writeln!(md)?;
    writeln!(md, "## Viewing locally")?;
    writeln!(md)?;
    writeln!(md, "Unzip the archive and open `{INDEX_HTML}` in any web browser.")?;
    writeln!(md, "No build step or server is required.")?;
    writeln!(md)?;
    writeln!(md, "## Publishing")?;
    writeln!(md)?;
    writeln!(md, "Upload the whole folder, keeping its structure, to any static host")?;
    writeln!(md, "(GitHub Pages, Netlify, Vercel, or a plain web server).")?;
    writeln!(md)?;
    writeln!(md, "## Customizing")?;
    writeln!(md)?;
    writeln!(md, "The color scheme is defined as CSS custom properties in the `:root`")?;
    writeln!(md, "block at the top of `{STYLES_CSS}`. Change them to restyle the page.")?;

    Ok(md)
}
