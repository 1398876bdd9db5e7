use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("invalid directory argument {position}: '{value}'")]
    #[diagnostic(
        code(webwerf::config::invalid_directory),
        help("Each positional argument must name an existing directory.")
    )]
    NotADirectory { position: usize, value: String },
}

/// The three validated directories a build runs against.
///
/// Validation happens once, at construction; every later stage can assume the
/// paths existed as directories when the run started.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding the `index.html` template.
    pub input_dir: PathBuf,
    /// Directory the site is assembled into.
    pub output_dir: PathBuf,
    /// Directory holding the example source files.
    pub examples_dir: PathBuf,
}
impl BuildConfig {
    /// Resolves the three positional arguments (positions 1, 2 and 3) into a
    /// validated config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotADirectory`] naming the first offending
    /// position if any argument does not resolve to an existing directory.
    pub fn resolve(input: &str, output: &str, examples: &str) -> Result<Self, ConfigError> {
        let input_dir = resolve_dir_arg(1, input)?;
        let output_dir = resolve_dir_arg(2, output)?;
        let examples_dir = resolve_dir_arg(3, examples)?;

        Ok(BuildConfig {
            input_dir,
            output_dir,
            examples_dir,
        })
    }
}

fn resolve_dir_arg(position: usize, value: &str) -> Result<PathBuf, ConfigError> {
    let path = Path::new(value);

    if !path.is_dir() {
        return Err(ConfigError::NotADirectory {
            position,
            value: value.to_string(),
        });
    }

    Ok(path.to_path_buf())
}
