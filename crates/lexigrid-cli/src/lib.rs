//! Command-line front end for Lexigrid.
//!
//! `lexigrid generate` builds a puzzle and prints it as text or as a
//! [`PuzzleDto`](dto::PuzzleDto). `lexigrid check` loads such a puzzle and
//! reports whether a selection matches a placed word as a
//! [`SelectionResponseDto`](dto::SelectionResponseDto). `lexigrid hint`
//! reveals a random word that is not yet found as a
//! [`HintResponseDto`](dto::HintResponseDto), and `lexigrid level` prints a
//! [`LevelDto`](dto::LevelDto).

use std::{fs, io::Write, path::Path};

use lexigrid_core::Position;
use lexigrid_game::{Game, selection};
use lexigrid_generator::{GeneratedPuzzle, PuzzleGenerator};
use rand::Rng;

pub use self::error::CliError;
use self::{
    cli::{CheckArgs, Cli, Command, GenerateArgs, HintArgs},
    dto::{HintResponseDto, LevelDto, PuzzleDto, SelectionResponseDto},
};

pub mod cli;
pub mod dto;
mod error;
pub mod words;

/// Runs a parsed command, writing its output to `out`.
///
/// # Errors
///
/// Returns a [`CliError`] if the configuration is invalid, the puzzle file
/// cannot be read or parsed, a selection is out of bounds, or writing fails.
pub fn run<W>(cli: &Cli, out: &mut W) -> Result<(), CliError>
where
    W: Write + ?Sized,
{
    match &cli.command {
        Command::Generate(args) => generate(args, out),
        Command::Check(args) => check(args, out),
        Command::Hint(args) => hint(args, out),
        Command::Level(args) => {
            serde_json::to_writer(&mut *out, &LevelDto::from_level(args.level))?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn generate<W>(args: &GenerateArgs, out: &mut W) -> Result<(), CliError>
where
    W: Write + ?Sized,
{
    let generator = PuzzleGenerator::new(args.config())?;
    let seed = args.seed();
    let puzzle = if args.words.is_empty() {
        log::info!("using the built-in {:?} word list", args.level);
        generator.generate_with_seed(args.level.words(), seed)
    } else {
        generator.generate_with_seed(&args.words, seed)
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &PuzzleDto::from_puzzle(&puzzle))?;
        writeln!(out)?;
    } else {
        write_puzzle(out, &puzzle)?;
    }
    Ok(())
}

fn check<W>(args: &CheckArgs, out: &mut W) -> Result<(), CliError>
where
    W: Write + ?Sized,
{
    let dto = load_puzzle(&args.puzzle)?;
    let response = check_selection(&dto, &args.select, &args.found)?;
    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    Ok(())
}

fn hint<W>(args: &HintArgs, out: &mut W) -> Result<(), CliError>
where
    W: Write + ?Sized,
{
    let dto = load_puzzle(&args.puzzle)?;
    let response = reveal_hint(&dto, &args.found, args.hints_used, &mut rand::rng())?;
    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    Ok(())
}

/// Reads a [`PuzzleDto`] from a JSON file.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be read and
/// [`CliError::Json`] if it is not a puzzle document.
pub fn load_puzzle(path: &Path) -> Result<PuzzleDto, CliError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Checks `selected` against a puzzle in which `found` words were already
/// claimed.
///
/// # Errors
///
/// Returns [`CliError::Puzzle`] for an inconsistent puzzle and
/// [`CliError::Game`] for an unknown found word or an out-of-bounds
/// selection.
pub fn check_selection<S>(
    dto: &PuzzleDto,
    selected: &[Position],
    found: &[S],
) -> Result<SelectionResponseDto, CliError>
where
    S: AsRef<str>,
{
    let puzzle = dto.to_puzzle()?;
    let mut game = Game::with_progress(puzzle, found, 0)?;
    let outcome = game.submit_selection(selected)?;
    Ok(SelectionResponseDto::from_outcome(
        &outcome,
        selection::classify(selected),
    ))
}

/// Picks a word not among `found` and reveals its cells.
///
/// The returned hint count is `hints_used` plus one.
///
/// # Errors
///
/// Returns [`CliError::Puzzle`] for an inconsistent puzzle and
/// [`CliError::Game`] for an unknown found word or when every word is
/// already found.
pub fn reveal_hint<S, R>(
    dto: &PuzzleDto,
    found: &[S],
    hints_used: u32,
    rng: &mut R,
) -> Result<HintResponseDto, CliError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let puzzle = dto.to_puzzle()?;
    let mut game = Game::with_progress(puzzle, found, hints_used)?;
    let placement = game.hint(rng)?.clone();
    log::debug!("revealed {} after {hints_used} hints", placement.word());
    Ok(HintResponseDto::from_placement(&placement, game.hints_used()))
}

fn write_puzzle<W>(out: &mut W, puzzle: &GeneratedPuzzle) -> Result<(), CliError>
where
    W: Write + ?Sized,
{
    if let Some(seed) = puzzle.seed {
        writeln!(out, "Seed: {seed}")?;
    }
    writeln!(out)?;
    for row in puzzle.grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| cell.map_or_else(|| ".".to_owned(), |letter| letter.to_string()))
            .collect();
        writeln!(out, "  {}", line.join(" "))?;
    }
    writeln!(out)?;

    writeln!(out, "Placed words ({}):", puzzle.placements.len())?;
    for placement in &puzzle.placements {
        writeln!(
            out,
            "  {:<12} {:<20} {} -> {}",
            placement.word(),
            placement.direction().name(),
            placement.start(),
            placement.end(),
        )?;
    }
    if !puzzle.unplaced.is_empty() {
        writeln!(out, "Unplaced words ({}):", puzzle.unplaced.len())?;
        for unplaced in &puzzle.unplaced {
            writeln!(out, "  {:<12} {}", unplaced.word, unplaced.reason)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use clap::Parser as _;
    use lexigrid_game::GameError;
    use lexigrid_generator::PuzzleSeed;

    use super::*;
    use crate::words::Level;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn generate_json(args: &[&str]) -> PuzzleDto {
        let mut full = vec!["lexigrid", "generate", "--json"];
        full.extend_from_slice(args);
        serde_json::from_str(&run_args(&full).unwrap()).unwrap()
    }

    #[test]
    fn test_generate_text() {
        let text = run_args(&[
            "lexigrid", "generate", "cat", "dog", "elephant", "--size", "5", "--phrase", "zoo",
        ])
        .unwrap();
        let seed = PuzzleSeed::from_phrase("zoo");
        assert!(text.starts_with(&format!("Seed: {seed}\n")));
        assert!(text.contains("Placed words (2):"));
        assert!(text.contains("Unplaced words (1):"));
        assert!(text.contains("elephant"));
    }

    #[test]
    fn test_generate_json_is_reproducible() {
        let a = generate_json(&["sun", "moon", "star", "--phrase", "sky"]);
        let b = generate_json(&["sun", "moon", "star", "--phrase", "sky"]);
        assert_eq!(a, b);
        assert_eq!(a.seed, Some(PuzzleSeed::from_phrase("sky").to_string()));
        assert_eq!(a.size, 8);
        assert_eq!(a.placements.len() + a.unplaced.len(), 3);
    }

    #[test]
    fn test_generate_level_word_list() {
        let dto = generate_json(&["--level", "hard", "--phrase", "levels"]);
        assert_eq!(dto.size, 12);
        assert_eq!(dto.placements.len() + dto.unplaced.len(), 8);
    }

    #[test]
    fn test_generate_invalid_config() {
        let err = run_args(&["lexigrid", "generate", "cat", "--size", "0"]).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        let err = run_args(&["lexigrid", "generate", "cat", "--max-attempts", "0"]).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_check_selection_against_generated_puzzle() {
        let dto = generate_json(&["cat", "dog", "--size", "6", "--phrase", "pets"]);
        let (word, placement) = dto.placements.iter().next().unwrap();
        let mut selected: Vec<Position> = placement
            .positions
            .iter()
            .map(|&[row, col]| Position::new(row, col))
            .collect();
        selected.reverse();

        let response = check_selection::<&str>(&dto, &selected, &[]).unwrap();
        assert!(response.matched);
        assert_eq!(&response.word, word);
        assert!(!response.direction.is_empty());

        let again = check_selection(&dto, &selected, &[word.as_str()]).unwrap();
        assert_eq!(again, response);

        selected.pop();
        if selected.len() >= 2 {
            let partial = check_selection::<&str>(&dto, &selected, &[]).unwrap();
            assert_eq!(partial, SelectionResponseDto::no_match());
        }

        let outside = [Position::new(0, 6), Position::new(0, 5)];
        let err = check_selection::<&str>(&dto, &outside, &[]).unwrap_err();
        assert!(matches!(err, CliError::Game(_)));
    }

    #[test]
    fn test_check_reads_puzzle_file() {
        let dto = generate_json(&["owl", "bee", "--size", "5", "--phrase", "file"]);
        let path = env::temp_dir().join(format!("lexigrid-check-{}.json", std::process::id()));
        fs::write(&path, serde_json::to_string(&dto).unwrap()).unwrap();

        let output = run_args(&[
            "lexigrid",
            "check",
            "--puzzle",
            path.to_str().unwrap(),
            "--select",
            "0,0",
            "1,1",
            "2,3",
        ]);
        fs::remove_file(&path).unwrap();

        let response: SelectionResponseDto = serde_json::from_str(&output.unwrap()).unwrap();
        assert_eq!(response, SelectionResponseDto::no_match());
    }

    #[test]
    fn test_hint_reveals_unfound_words() {
        let dto = generate_json(&["cat", "dog", "owl", "--size", "6", "--phrase", "hints"]);
        let words: Vec<&str> = dto.placements.keys().map(String::as_str).collect();
        assert!(words.len() >= 2);
        let mut rng = PuzzleSeed::from_phrase("hint rng").to_rng();

        let hint = reveal_hint::<&str, _>(&dto, &[], 0, &mut rng).unwrap();
        assert_eq!(hint.hints_used, 1);
        let placement = &dto.placements[&hint.word];
        assert_eq!(hint.positions, placement.positions);
        assert_eq!(hint.direction, placement.direction);

        let found = &words[1..];
        for _ in 0..10 {
            let hint = reveal_hint(&dto, found, 4, &mut rng).unwrap();
            assert_eq!(hint.word, words[0]);
            assert_eq!(hint.hints_used, 5);
        }

        let err = reveal_hint(&dto, &words[..], 0, &mut rng).unwrap_err();
        assert!(matches!(err, CliError::Game(GameError::AllWordsFound)));
        let err = reveal_hint(&dto, &["ZEBRA"], 0, &mut rng).unwrap_err();
        assert!(matches!(err, CliError::Game(GameError::UnknownWord { .. })));
    }

    #[test]
    fn test_hint_reads_puzzle_file() {
        let dto = generate_json(&["sun", "sea", "--size", "5", "--phrase", "beach"]);
        let path = env::temp_dir().join(format!("lexigrid-hint-{}.json", std::process::id()));
        fs::write(&path, serde_json::to_string(&dto).unwrap()).unwrap();

        let output = run_args(&[
            "lexigrid",
            "hint",
            "--puzzle",
            path.to_str().unwrap(),
            "--hints-used",
            "2",
        ]);
        fs::remove_file(&path).unwrap();

        let hint: HintResponseDto = serde_json::from_str(&output.unwrap()).unwrap();
        assert!(dto.placements.contains_key(&hint.word));
        assert_eq!(hint.hints_used, 3);
    }

    #[test]
    fn test_level_command() {
        let output = run_args(&["lexigrid", "level", "hard"]).unwrap();
        let level: LevelDto = serde_json::from_str(&output).unwrap();
        assert_eq!(level, LevelDto::from_level(Level::Hard));
        assert_eq!(level.next_level, Some(4));
    }

    #[test]
    fn test_check_missing_file() {
        let err = run_args(&[
            "lexigrid",
            "check",
            "--puzzle",
            "/nonexistent/lexigrid.json",
            "--select",
            "0,0",
        ])
        .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
