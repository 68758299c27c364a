//! Site patterns: where an old name may be rewritten.
//!
//! Each pattern matches one kind of site and rewrites `old` to `new` there,
//! leaving everything around the name byte-for-byte intact. The engine only
//! talks to the `SitePattern` trait, so a token-aware matcher can replace a
//! regex one without touching the engine loop.

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::output::Site;
use crate::rename_table::RenameEntry;

/// New content and match count from a pass that changed something.
pub type Rewrite = (String, usize);

pub trait SitePattern {
    fn site(&self) -> Site;

    /// Rewrite every site of `entry.old` in `content`.
    ///
    /// Returns `None` when the output would be identical to the input,
    /// including for entries whose old and new names are equal.
    fn apply(&self, content: &str, entry: &RenameEntry) -> Result<Option<Rewrite>>;
}

/// The default pattern set, in the order the engine applies them.
pub fn default_patterns() -> Vec<Box<dyn SitePattern>> {
    vec![Box::new(DeclarationSite), Box::new(UsageSite)]
}

// ============================================================================
// Declaration sites
// ============================================================================

/// A bare name preceded by whitespace and followed by a comma or line end,
/// e.g. an entry inside a multi-line import list.
pub struct DeclarationSite;

impl SitePattern for DeclarationSite {
    fn site(&self) -> Site {
        Site::Declaration
    }

    fn apply(&self, content: &str, entry: &RenameEntry) -> Result<Option<Rewrite>> {
        let re = compile(&format!(
            r"(?m)(\s+){}(\s*,|\s*$)",
            regex::escape(&entry.old)
        ))?;

        rewrite(&re, content, |caps| {
            format!("{}{}{}", &caps[1], entry.new, &caps[2])
        })
    }
}

// ============================================================================
// Usage sites
// ============================================================================

/// A tag opening with the name: `<Name>` or `<Name attr="x" />`.
///
/// The name must be followed by whitespace or `>`; `<Name/>` is not a site.
pub struct UsageSite;

impl SitePattern for UsageSite {
    fn site(&self) -> Site {
        Site::Usage
    }

    fn apply(&self, content: &str, entry: &RenameEntry) -> Result<Option<Rewrite>> {
        let re = compile(&format!(r"<{}(\s+[^>]*)?>", regex::escape(&entry.old)))?;

        rewrite(&re, content, |caps| {
            let attrs = caps.get(1).map_or("", |m| m.as_str());
            format!("<{}{}>", entry.new, attrs)
        })
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        Error::internal_unexpected(format!("Invalid site pattern '{}': {}", pattern, e))
    })
}

fn rewrite<F>(re: &Regex, content: &str, replacer: F) -> Result<Option<Rewrite>>
where
    F: Fn(&Captures) -> String,
{
    let mut count = 0;
    let replaced = re.replace_all(content, |caps: &Captures| {
        count += 1;
        replacer(caps)
    });

    if replaced == content {
        return Ok(None);
    }

    Ok(Some((replaced.into_owned(), count)))
}
