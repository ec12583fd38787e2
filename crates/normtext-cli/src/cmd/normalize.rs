use anyhow::Result;
use serde::Serialize;

use normtext_core::categories::CategorySet;
use normtext_core::config::NormalizeOptions;
use normtext_core::encoding::{decode_as, resolve_encoding};
use normtext_core::normalize_str;

use crate::args::PipelineArgs;
use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct NormalizeOut {
    pub encoding: String,
    pub options: NormalizeOptions,
    pub result: Option<String>,
}

pub fn run(input_arg: &str, args: &PipelineArgs) -> Result<()> {
    let bytes = input::read_bytes(input_arg)?;
    let opts = build_options(args)?;

    let encoding = resolve_encoding(&bytes, &args.encoding);
    let text = decode_as(&bytes, encoding)?;
    let result = normalize_str(&text, &opts);

    if output::is_json() {
        return output::print_json(&NormalizeOut {
            encoding: encoding.name().to_string(),
            options: opts,
            result,
        });
    }

    match result {
        Some(text) => println!("{text}"),
        None => output::note("no usable text after normalization"),
    }
    Ok(())
}

fn build_options(args: &PipelineArgs) -> Result<NormalizeOptions> {
    let mut opts = NormalizeOptions {
        lowercase: !args.no_lowercase,
        collapse: !args.no_collapse,
        decompose: args.decompose,
        latinize: args.latinize,
        ascii: args.ascii,
        ..NormalizeOptions::default()
    };

    if let Some(codes) = &args.replace {
        opts.replace_categories = CategorySet::parse_codes(codes)?;
    }

    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> PipelineArgs {
        PipelineArgs {
            no_lowercase: false,
            no_collapse: false,
            decompose: false,
            latinize: false,
            ascii: false,
            replace: None,
            encoding: "utf-8".to_string(),
        }
    }

    #[test]
    fn flags_map_onto_options() {
        let mut args = base_args();
        args.no_lowercase = true;
        args.ascii = true;

        let opts = build_options(&args).unwrap();
        assert!(!opts.lowercase);
        assert!(opts.ascii);
        assert!(opts.collapse);
        assert_eq!(opts.replace_categories, CategorySet::default_replace());
    }

    #[test]
    fn replace_codes_override_default_set() {
        let mut args = base_args();
        args.replace = Some("Po,Zs".to_string());

        let opts = build_options(&args).unwrap();
        assert_eq!(opts.replace_categories.len(), 2);
    }

    #[test]
    fn bad_replace_codes_error() {
        let mut args = base_args();
        args.replace = Some("Po,Xq".to_string());
        assert!(build_options(&args).is_err());
    }
}
