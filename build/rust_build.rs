/**
 * Generates the static German prefix table from resources/de_area_codes.txt
 */

use std::{collections::BTreeMap, env, fmt::Write as _, fs::{self, File}, io::{BufRead, BufReader}, path::Path};

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Prefix '{prefix}' on line {line_num} must contain only ascii digits")]
    InvalidPrefix { prefix: String, line_num: usize },

    #[error("Prefix '{prefix}' on line {line_num} is defined twice")]
    DuplicatePrefix { prefix: String, line_num: usize },

    #[error("Failed to write generated table: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("OUT_DIR is not set")]
    NoOutDir,
}

fn parse_prefixes(path: &Path, prefixes: &mut BTreeMap<String, String>) -> Result<(), BuildError> {
    prefixes.clear();

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if line_buffer.len() > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((prefix_str, locality)) = line.split_once('|') {
            let prefix_str = prefix_str.trim();
            if prefix_str.is_empty() {
                continue;
            }
            if !prefix_str.bytes().all(|b| b.is_ascii_digit()) {
                return Err(BuildError::InvalidPrefix {
                    prefix: prefix_str.to_string(),
                    line_num: line_number,
                });
            }
            if prefixes.insert(prefix_str.to_string(), locality.trim().to_string()).is_some() {
                return Err(BuildError::DuplicatePrefix {
                    prefix: prefix_str.to_string(),
                    line_num: line_number,
                });
            }
        }
    }

    Ok(())
}

fn write_table(name: &str, prefixes: &BTreeMap<String, String>) -> Result<String, BuildError> {
    let mut out = String::with_capacity(prefixes.len() * 32);
    writeln!(out, "pub static {}: &[(&str, &str)] = &[", name)?;
    for (prefix, locality) in prefixes {
        writeln!(out, "    ({:?}, {:?}),", prefix, locality)?;
    }
    writeln!(out, "];")?;
    Ok(out)
}

fn main() -> Result<(), BuildError> {
    let out_dir = env::var_os("OUT_DIR").ok_or(BuildError::NoOutDir)?;
    let tables_dir = Path::new(&out_dir).join("area_codes");
    fs::create_dir_all(&tables_dir)?;

    let mut prefixes = BTreeMap::new();
    let source = Path::new("resources/de_area_codes.txt");
    println!("cargo:rerun-if-changed={}", source.display());
    parse_prefixes(source, &mut prefixes)?;
    fs::write(tables_dir.join("de.rs"), write_table("DE_AREA_CODES", &prefixes)?)?;

    Ok(())
}
