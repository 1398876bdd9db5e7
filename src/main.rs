use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command};

// The CLI layer only parses inputs and forwards them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input")
                .help("directory containing the index.html template")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .help("directory the site is assembled into")
                .required(true),
        )
        .arg(
            Arg::new("examples")
                .help("directory containing the example source files")
                .required(true),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    let mut logger = env_logger::Builder::from_default_env();
    if is_verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let input = matches.get_one::<String>("input").expect("input required");
    let output = matches.get_one::<String>("output").expect("output required");
    let examples = matches
        .get_one::<String>("examples")
        .expect("examples required");

    webwerf::build_site(input, output, examples)?;

    Ok(())
}
