//! Download file names.

/// Base name used when the portfolio has no usable name.
pub const DEFAULT_BASENAME: &str = "my-portfolio";

/// Lower-case `name`, collapse every run of characters other than ASCII
/// letters and digits into one `-`, and trim hyphens from both ends.
///
/// ```
/// use folio_export::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My Cool Portfolio!!"), "my-cool-portfolio");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// `"{sanitized name}.zip"`, falling back to `my-portfolio.zip`.
pub fn archive_filename(name: &str) -> String {
    let base = sanitize_filename(name);
    if base.is_empty() {
        format!("{DEFAULT_BASENAME}.zip")
    } else {
        format!("{base}.zip")
    }
}
