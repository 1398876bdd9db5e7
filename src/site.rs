use crate::{
    config::BuildConfig,
    errors::{FileOperation, IoError},
    listing::read_listing,
    render::{example_names, link_fragment, render_page},
    vfs::{VirtualEntry, VirtualFS},
};
use colored::Colorize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const TEMPLATE_FILE: &str = "index.html";
const EXAMPLES_SUBDIR: &str = "examples";

/// Everything a build will do, staged before any write happens.
#[derive(Debug, Clone)]
pub struct SitePlan {
    pub vfs: VirtualFS,
    /// Display names derived from the listing, in listing order. Kept on the
    /// plan so diagnostics can report them without re-deriving.
    pub example_names: Vec<String>,
}

/// Stages the whole build from a directory listing and the raw template text.
///
/// Pure: no I/O happens here. Entry order is load-bearing — the `examples`
/// directory first, then one copy per listing entry in listing order, then
/// the rendered index page.
pub fn plan_site(examples_dir: &Path, listing: &[OsString], template: &str) -> SitePlan {
    let mut vfs = VirtualFS::new();

    vfs.entries.push(VirtualEntry::Dir {
        destination: PathBuf::from(EXAMPLES_SUBDIR),
    });

    // every entry is copied, whether or not it yields an example name
    for name in listing {
        vfs.entries.push(VirtualEntry::CopyFile {
            source: examples_dir.join(name),
            destination: Path::new(EXAMPLES_SUBDIR).join(name),
        });
    }

    let names = example_names(listing);

    let fragment = link_fragment(&names);

    let page = render_page(template, &fragment);

    vfs.entries.push(VirtualEntry::WriteFile {
        destination: PathBuf::from(TEMPLATE_FILE),
        content: page,
    });

    SitePlan {
        vfs,
        example_names: names,
    }
}

/// Applies staged entries to disk, in order, stopping at the first failure.
///
/// There is no rollback: whatever was written before a failing entry stays on
/// disk and the error propagates as-is.
pub fn apply_vfs(vfs: &VirtualFS, output_dir: &Path) -> Result<(), IoError> {
    for entry in &vfs.entries {
        match entry {
            VirtualEntry::Dir { destination } => {
                let path = output_dir.join(destination);

                create_directory(&path)?;
            }
            VirtualEntry::CopyFile {
                source,
                destination,
            } => {
                let path = output_dir.join(destination);

                copy_file(source, &path)?;
            }
            VirtualEntry::WriteFile {
                destination,
                content,
            } => {
                let path = output_dir.join(destination);

                write_file(&path, content)?;
            }
        }
    }

    Ok(())
}

/// Runs the full pipeline against a validated [`BuildConfig`]: read template,
/// list examples, stage the plan, apply it.
///
/// # Errors
///
/// Returns an [`IoError`] from the first failing filesystem operation; earlier
/// stages' output is left in place.
pub fn try_build(config: &BuildConfig) -> Result<(), IoError> {
    println!(
        "building website with args: {} {} {}",
        config.input_dir.display(),
        config.output_dir.display(),
        config.examples_dir.display()
    );

    let template_path = config.input_dir.join(TEMPLATE_FILE);

    let template = std::fs::read_to_string(&template_path)
        .map_err(|error| IoError::new(FileOperation::Read, template_path.clone(), error))?;

    let listing = read_listing(&config.examples_dir)?;

    println!("copying {} files to examples directory", listing.len());
    println!("{}", join_names(&listing));

    let plan = plan_site(&config.examples_dir, &listing, &template);

    println!("found {} examples", plan.example_names.len());
    println!("{}", plan.example_names.join(", "));

    apply_vfs(&plan.vfs, &config.output_dir)?;

    println!("website build done.");

    Ok(())
}

fn join_names(listing: &[OsString]) -> String {
    listing
        .iter()
        .map(|name| name.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Creates a single directory (non-recursive). An already existing directory
/// is a hard failure: the build assumes a clean output tree.
fn create_directory(path: &Path) -> Result<(), IoError> {
    std::fs::create_dir(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    println!("{} {}", "create".green(), path.display());

    Ok(())
}

fn copy_file(source: &Path, destination: &Path) -> Result<(), IoError> {
    std::fs::copy(source, destination)
        .map_err(|error| IoError::new(FileOperation::Copy, destination.to_path_buf(), error))?;

    log::debug!("copied {} -> {}", source.display(), destination.display());

    println!("{} {}", "copy".green(), destination.display());

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    println!("{} {}", "create".green(), path.display());

    Ok(())
}
