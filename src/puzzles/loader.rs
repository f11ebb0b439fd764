//! Puzzle loading utilities
//!
//! Parses the plain-text puzzle format from files, strings or the embedded
//! samples.

use super::{PUZZLES, Puzzle, PuzzleError};
use crate::core::Slot;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy)]
enum Section {
    Slots,
    Words,
}

/// Parse a puzzle from its text form
///
/// # Errors
///
/// Returns an error if a slot line is malformed, text appears before any
/// section header, or either section is missing.
///
/// # Examples
/// ```
/// use crossword_solver::puzzles::loader::parse_puzzle;
///
/// let puzzle = parse_puzzle("[slots]\n1 1 down\n3 1 across\n[words]\nhello ladies gentlemen").unwrap();
/// assert_eq!(puzzle.slots.len(), 2);
/// assert_eq!(puzzle.words, ["hello", "ladies", "gentlemen"]);
/// ```
pub fn parse_puzzle(text: &str) -> Result<Puzzle, PuzzleError> {
    let mut section = None;
    let mut slots = None;
    let mut words = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        match line.to_ascii_lowercase().as_str() {
            "[slots]" => {
                section = Some(Section::Slots);
                slots.get_or_insert_with(Vec::new);
                continue;
            }
            "[words]" => {
                section = Some(Section::Words);
                words.get_or_insert_with(Vec::new);
                continue;
            }
            _ => {}
        }

        match section {
            Some(Section::Slots) => {
                let slot: Slot = line.parse().map_err(|reason| PuzzleError::InvalidSlot {
                    line: line_no,
                    reason,
                })?;
                slots.get_or_insert_with(Vec::new).push(slot);
            }
            Some(Section::Words) => {
                words
                    .get_or_insert_with(Vec::new)
                    .extend(line.split_whitespace().map(str::to_string));
            }
            None => {
                return Err(PuzzleError::UnexpectedLine {
                    line: line_no,
                    text: line.to_string(),
                });
            }
        }
    }

    Ok(Puzzle {
        slots: slots.ok_or(PuzzleError::MissingSection("slots"))?,
        words: words.ok_or(PuzzleError::MissingSection("words"))?,
    })
}

/// Load a puzzle from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
///
/// # Examples
/// ```no_run
/// use crossword_solver::puzzles::loader::load_from_file;
///
/// let puzzle = load_from_file("data/puzzles/simple.txt").unwrap();
/// println!("Loaded {} slots", puzzle.slots.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
    let content = fs::read_to_string(path)?;
    parse_puzzle(&content)
}

/// Look up an embedded sample puzzle by name
///
/// # Errors
///
/// Returns an error if no sample has that name.
///
/// # Examples
/// ```
/// use crossword_solver::puzzles::loader::by_name;
///
/// let puzzle = by_name("simple").unwrap();
/// assert_eq!(puzzle.words, ["hello", "ladies", "gentlemen"]);
/// ```
pub fn by_name(name: &str) -> Result<Puzzle, PuzzleError> {
    let (_, text) = PUZZLES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .ok_or_else(|| PuzzleError::UnknownPuzzle(name.to_string()))?;
    parse_puzzle(text)
}

/// Resolve a puzzle argument: an embedded name first, otherwise a file path
///
/// # Errors
///
/// Returns an error if `arg` names no embedded puzzle and the file cannot
/// be loaded.
pub fn resolve(arg: &str) -> Result<Puzzle, PuzzleError> {
    if PUZZLES.iter().any(|(name, _)| *name == arg) {
        by_name(arg)
    } else {
        load_from_file(arg)
    }
}
