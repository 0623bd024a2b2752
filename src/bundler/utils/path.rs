//! Output path resolution.

use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Output location used when none is given.
pub const DEFAULT_OUTPUT: &str = "locale";

/// Resolves the user-supplied output location into an absolute path.
///
/// Absolute input is returned verbatim. Relative input (or [`DEFAULT_OUTPUT`]
/// when `out` is `None`) is joined onto `base` and normalized with the
/// platform's lexical rules. No filesystem access happens here.
pub fn resolve_output_path(out: Option<&Path>, base: &Path) -> PathBuf {
    let out = out.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT));

    if out.is_absolute() {
        return out.to_path_buf();
    }

    match out.absolutize_from(base) {
        Ok(resolved) => resolved.into_owned(),
        // absolutize_from only fails on cwd lookup, which a given base avoids
        Err(_) => base.join(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lands_under_base() {
        let base = Path::new("/work/project");
        assert_eq!(
            resolve_output_path(None, base),
            PathBuf::from("/work/project/locale")
        );
    }

    #[test]
    fn relative_path_is_normalized_against_base() {
        let base = Path::new("/work/project");
        assert_eq!(
            resolve_output_path(Some(Path::new("../dist/./fr.zip")), base),
            PathBuf::from("/work/dist/fr.zip")
        );
    }

    #[test]
    fn absolute_path_is_kept_verbatim() {
        let base = Path::new("/work/project");
        let out = Path::new("/srv/bundles/../fr");
        assert_eq!(resolve_output_path(Some(out), base), out.to_path_buf());
    }
}
