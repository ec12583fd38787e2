use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};

use normtext_core::categories::category;
use normtext_core::encoding::{decode_as, resolve_encoding};
use normtext_core::transliterate::latin_mapping;

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct CodePointRow {
    pub char: String,
    pub code_point: String,
    pub category: &'static str,
    pub latin: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct InspectOut {
    pub encoding: String,
    pub code_points: Vec<CodePointRow>,
}

pub fn run(input_arg: &str, encoding_label: &str) -> Result<()> {
    let bytes = input::read_bytes(input_arg)?;

    let encoding = resolve_encoding(&bytes, encoding_label);
    let text = decode_as(&bytes, encoding)?;

    let rows: Vec<CodePointRow> = text
        .chars()
        .map(|ch| CodePointRow {
            char: ch.to_string(),
            code_point: format!("U+{:04X}", ch as u32),
            category: category(ch).code(),
            latin: latin_mapping(ch),
        })
        .collect();

    if output::is_json() {
        return output::print_json(&InspectOut {
            encoding: encoding.name().to_string(),
            code_points: rows,
        });
    }

    let mut stream = output::stdout();
    writeln!(stream, "encoding: {}", encoding.name())?;
    for row in &rows {
        let display: String = row.char.chars().flat_map(|c| c.escape_debug()).collect();
        write!(stream, "{:<8} {:<10} ", display, row.code_point)?;
        stream.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stream, "{:<4}", row.category)?;
        stream.reset()?;
        match row.latin {
            Some(mapped) => writeln!(stream, " -> {mapped:?}")?,
            None => writeln!(stream, " (unmapped)")?,
        }
    }
    Ok(())
}
