use crate::{
    config::{BuildConfig, ConfigError},
    errors::IoError,
    site,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum WebwerfError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Assembles the site: validates the three directories, copies every
/// examples-source entry into `<output>/examples/`, and writes the filled-in
/// `index.html` into the output directory.
///
/// # Errors
///
/// Returns a [`WebwerfError`] if:
///
/// - Any positional argument does not name an existing directory.
/// - The template cannot be read or the examples directory cannot be listed.
/// - The `examples` output directory already exists, or any copy or write
///   fails. Output written before the failing step is left in place.
pub fn build_site(input: &str, output: &str, examples: &str) -> Result<(), WebwerfError> {
    let config = BuildConfig::resolve(input, output, examples)?;

    log::debug!(
        "resolved build config: input={}, output={}, examples={}",
        config.input_dir.display(),
        config.output_dir.display(),
        config.examples_dir.display()
    );

    site::try_build(&config)?;

    Ok(())
}
