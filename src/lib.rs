use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod frontend;

use crate::ast::Program;
use crate::config::cli::SOURCE_EXTENSION;
use crate::errors::{Pl0Error, Pl0Result, SyntaxResult};

/// Read one source file. Files without a `.pl0` extension are accepted
/// with a warning.
pub fn read(filename: &Path) -> Pl0Result<String> {
    if filename.extension().map_or(true, |ext| ext != SOURCE_EXTENSION) {
        tracing::warn!(path = %filename.display(), "input file does not have a .{} extension", SOURCE_EXTENSION);
    }
    let mut file = File::open(filename).map_err(|err| {
        Pl0Error::FileReadError(format!("cannot open '{}': {}", filename.display(), err))
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn read_stdin() -> Pl0Result<String> {
    let mut contents = String::new();
    io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
}

/// Concatenate all `paths` into one program text, or read standard input
/// when no path is given.
pub fn read_sources(paths: &[PathBuf]) -> Pl0Result<String> {
    if paths.is_empty() {
        return read_stdin();
    }
    let mut program = String::new();
    for path in paths {
        program.push_str(&read(path)?);
    }
    Ok(program)
}

/// Scan and parse a complete program text.
pub fn parse_source(source: &str) -> SyntaxResult<Program> {
    let tokens = frontend::tokenize(source)?;
    frontend::parse(&tokens)
}
