#![no_main]

use std::str::FromStr;

use libfuzzer_sys::fuzz_target;
use mkvidoverlay::arg_parsers::ColorSpec;

fuzz_target!(|data: &str| {
    let (color, error) = ColorSpec::parse_or_default(data);
    if error.is_some() {
        assert_eq!(color, ColorSpec::default());
        return;
    }
    // whatever we accept, we must also accept in the form we print it
    let printed = color.to_string();
    assert_eq!(ColorSpec::from_str(&printed), Ok(color), "{data:?} -> {printed}");
});
