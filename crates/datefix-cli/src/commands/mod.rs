//! Command implementations

mod rewrite;
mod scan;

pub use rewrite::run_rewrite;
pub use scan::run_scan;

use std::path::Path;

use datefix_content::TokenPair;
use datefix_fs::{ConfigResolver, NormalizedPath};

use crate::error::{CliError, Result};

/// Resolve the effective token pair.
///
/// CLI flags override the config layers, which override the defaults.
pub(crate) fn resolve_tokens(
    cwd: &Path,
    from: Option<String>,
    to: Option<String>,
) -> Result<TokenPair> {
    let config = ConfigResolver::new(NormalizedPath::new(cwd)).resolve()?;

    let mut tokens = TokenPair::default();
    if let Some(value) = config.tokens.from {
        tokens.from = value;
    }
    if let Some(value) = config.tokens.to {
        tokens.to = value;
    }
    if let Some(value) = from {
        tokens.from = value;
    }
    if let Some(value) = to {
        tokens.to = value;
    }

    if tokens.from.is_empty() {
        return Err(CliError::user("the from-token must not be empty"));
    }
    Ok(tokens)
}
