//! Build script to embed the sample puzzles
//!
//! Reads every puzzle file under `data/puzzles` and generates a const table of
//! `(name, contents)` pairs, sorted by name.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const PUZZLE_DIR: &str = "data/puzzles";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("puzzles.rs");

    let mut entries: Vec<(String, String)> = fs::read_dir(PUZZLE_DIR)
        .unwrap_or_else(|e| panic!("Failed to read {PUZZLE_DIR}: {e}"))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_else(|| panic!("Non UTF-8 puzzle name: {}", path.display()))
                .to_string();
            let absolute = fs::canonicalize(&path)
                .unwrap_or_else(|e| panic!("Failed to resolve {}: {e}", path.display()));
            (name, absolute.display().to_string())
        })
        .collect();
    entries.sort();

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Sample puzzles as `(name, contents)`, sorted by name").unwrap();
    writeln!(output, "pub const PUZZLES: &[(&str, &str)] = &[").unwrap();

    for (name, path) in &entries {
        writeln!(output, "    ({name:?}, include_str!({path:?})),").unwrap();
    }

    writeln!(output, "];").unwrap();

    println!("cargo:rerun-if-changed={PUZZLE_DIR}");
}
