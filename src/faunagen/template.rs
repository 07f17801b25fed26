//! Page template handling: read the template, splice the generated fragment
//! over the placeholder token, write the finished page.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// The single token the page template carries where the animal cards go.
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

/// Result of a placeholder substitution. `replaced` is false when the
/// template did not contain the placeholder; the html is then the template
/// verbatim and the caller decides whether to warn.
#[derive(Debug)]
pub struct Injection {
    pub html: String,
    pub replaced: bool,
}

/// Replace the first occurrence of `placeholder` in `template` with
/// `fragment`. A template without the placeholder passes through unchanged.
pub fn inject(template: &str, placeholder: &str, fragment: &str) -> Injection {
    let replaced = template.contains(placeholder);
    Injection {
        html: template.replacen(placeholder, fragment, 1),
        replaced,
    }
}

pub fn read_template<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write the finished page verbatim, overwriting any existing file.
pub fn write_page<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}
