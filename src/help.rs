use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::arg_parsers::ColorGrammar;

pub fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    format!("{} {cpu}", env!("CARGO_PKG_VERSION"))
}

/// Printed after the option list by `--help`
pub fn color_help() -> String {
    let mut help = String::from("Background colors, tried in this order:\n");
    for grammar in ColorGrammar::VARIANTS {
        let name: &'static str = grammar.into();
        help.push_str(&format!(
            "  {name:6} {:9} {}\n",
            grammar.example(),
            grammar.help_text()
        ));
    }
    help.push_str("Anything else is reported and black (0) is used instead.");
    help
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_help_lists_every_grammar() {
        let help = color_help();
        for grammar in ColorGrammar::VARIANTS {
            assert!(help.contains(grammar.example()), "{help}");
        }
        assert!(help.find("rrggbb").unwrap() < help.find("(r,g,b)").unwrap());
    }

    #[test]
    fn test_version_has_package_version() {
        assert!(version_string().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
