//! Command line tool for plotting polar hydrodynamics outputs

// Split into subfiles for development
mod cli;
mod discover;
mod error;
mod interrupt;
mod render;
mod scratch;
mod settings;

// standard library
use std::path::Path;

// hydroplot modules
use hydroplot::script::{build_script, DataFiles, DataSource};

// crate modules
use cli::Cli;
use error::{Error, Result};
use interrupt::Interrupt;
use render::render;
use scratch::ScratchFiles;
use settings::{GridSource, Settings};

// external crates
use clap::Parser;
use log::{debug, error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version go to stdout and are not failures
            let code = if e.use_stderr() { -1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging_init(&cli);

    // scratch files are cleaned up before run() returns
    let code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}

async fn run(cli: &Cli) -> Result<()> {
    // nothing exists on disk until the settings are known to be valid
    let settings = Settings::resolve(cli)?;

    // listen before any scratch file can be written
    let mut interrupt = Interrupt::register()?;
    let mut scratch = ScratchFiles::new();

    pipeline(&settings, &scratch, &mut interrupt).await?;

    if settings.keep {
        scratch.keep();
    }

    Ok(())
}

async fn pipeline(settings: &Settings, scratch: &ScratchFiles, interrupt: &mut Interrupt) -> Result<()> {
    info!("Reformatting {}", settings.primary.path.display());
    let primary = reformat(settings, &settings.primary, &scratch.data, false, interrupt).await?;
    let mut data = DataFiles::new(primary);

    if let Some(extension) = &settings.extension {
        info!("Reformatting 1-D extension {}", extension.path.display());
        let secondary = reformat(settings, extension, &scratch.data_1d, true, interrupt).await?;
        data = data.with_secondary(secondary);
    }

    let script = build_script(&settings.plot, &data);

    if settings.print_script {
        print!("{script}");
        return Ok(());
    }

    std::fs::write(&scratch.script, &script)?;
    debug!("Wrote script to {}", scratch.script.display());

    tokio::select! {
        status = render(&settings.renderer, &scratch.script) => status,
        _ = interrupt.recv() => Err(Error::Interrupted),
    }
}

/// Reformat one grid source on a blocking thread
///
/// The blocking task cannot be cancelled, so an interrupt waits for it to
/// finish before cleanup can remove what it wrote.
async fn reformat(
    settings: &Settings,
    source: &GridSource,
    output: &Path,
    profile: bool,
    interrupt: &mut Interrupt,
) -> Result<DataSource> {
    let axis = settings.axis(source)?;
    let reformatter = settings.reformatter;
    let shape = source.shape;
    let input = source.path.clone();
    let destination = output.to_path_buf();

    let mut task = tokio::task::spawn_blocking(move || match profile {
        true => reformatter.reformat_profile_file(&input, shape, &axis, &destination),
        false => reformatter.reformat_file(&input, shape, &axis, &destination),
    });

    let written = tokio::select! {
        joined = &mut task => joined??,
        _ = interrupt.recv() => {
            let _ = task.await;
            return Err(Error::Interrupted);
        }
    };

    // rows actually written, fewer than declared only for truncated input
    let nrad = match reformatter.curve {
        true => written,
        false => written / (shape.nsec + 1),
    };

    Ok(DataSource::new(output, nrad, shape.nsec))
}

fn report(error: &Error) {
    error!("{error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        error!("  caused by: {cause}");
        source = cause.source();
    }

    if error.is_usage() {
        error!("For more information, try '--help'");
    }
}

fn logging_init(cli: &Cli) {
    let result = stderrlog::new()
        .modules([
            module_path!(),
            "hydroplot_grid",
            "hydroplot_par",
            "hydroplot_script",
            "hydroplot_utils",
        ])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .show_level(true)
        .init();

    if let Err(e) = result {
        eprintln!("unable to initialise logging ({e})");
    }
}
