use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_scramble::cli::{Cli, CliInterface, parse_cli};
use word_scramble::logging::init_logging;
use word_scramble::tui::TuiInterface;
use word_scramble::validator::LANGUAGE;
use word_scramble::{
    EMBEDDED_ROOT_WORDS, WordListError, game_loop, load_dictionary, load_root_words_from_file,
    load_root_words_from_str,
};

fn main() -> ExitCode {
    let cli = parse_cli();
    if let Some(path) = init_logging(cli.verbose) {
        log::info!("Logging to {}", path.display());
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), WordListError> {
    let root_words = match &cli.root_words_path {
        Some(path) => load_root_words_from_file(path)?,
        None => load_root_words_from_str(EMBEDDED_ROOT_WORDS),
    };
    log::info!("Loaded {} root words", root_words.len());

    let dictionary = load_dictionary(LANGUAGE, cli.dictionary_path.as_deref())?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let session = if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&root_words, &dictionary, &mut interface, &mut rng)?,
            Err(e) => {
                log::warn!("Could not start the terminal UI, falling back to CLI: {e}");
                let mut interface = CliInterface::new(io::stdin().lock());
                game_loop(&root_words, &dictionary, &mut interface, &mut rng)?
            }
        }
    } else {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&root_words, &dictionary, &mut interface, &mut rng)?
    };

    println!(
        "Final score on {}: {}",
        session.display_root(),
        session.score()
    );
    log::info!(
        "Finished on '{}' with score {}",
        session.root_word(),
        session.score()
    );
    Ok(())
}
