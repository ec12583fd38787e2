use anyhow::Result;
use serde::Serialize;

use normtext_core::encoding::{decode_as, resolve_encoding};
use normtext_core::slugify_str;

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct SlugifyOut {
    pub encoding: String,
    pub sep: char,
    pub slug: Option<String>,
}

pub fn run(input_arg: &str, sep: char, encoding_label: &str) -> Result<()> {
    let bytes = input::read_bytes(input_arg)?;

    let encoding = resolve_encoding(&bytes, encoding_label);
    let text = decode_as(&bytes, encoding)?;
    let slug = slugify_str(&text, sep);

    if output::is_json() {
        return output::print_json(&SlugifyOut {
            encoding: encoding.name().to_string(),
            sep,
            slug,
        });
    }

    match slug {
        Some(slug) => println!("{slug}"),
        None => output::note("no usable text after normalization"),
    }
    Ok(())
}
