use std::num::ParseIntError;

/// Error reporting for a single option value, e.g. a malformed `--color`.
/// Use `.display_with_arg()` to properly present this error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgParseErr {
    pub message: Option<String>,
}

impl ArgParseErr {
    pub fn display_with_arg(&self, arg_name: &str, value: &str) -> String {
        // if there is a specific message, show it to the user,
        // otherwise simply echo the value the user has passed
        let message = if let Some(msg) = &self.message {
            msg.as_str()
        } else {
            value
        };

        format!("invalid argument for option `{arg_name}': {message}")
    }

    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_msg(str: impl ToString) -> Self {
        let string = str.to_string();
        Self {
            message: Some(string),
        }
    }
}

impl From<ParseIntError> for ArgParseErr {
    fn from(_value: ParseIntError) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_value_without_message() {
        let err: ArgParseErr = "x".parse::<u8>().unwrap_err().into();
        assert_eq!(
            err.display_with_arg("transparency", "x"),
            "invalid argument for option `transparency': x"
        );
    }

    #[test]
    fn prefers_specific_message() {
        let err = ArgParseErr::with_msg("unrecognized color `zz'");
        assert_eq!(
            err.display_with_arg("color", "zz"),
            "invalid argument for option `color': unrecognized color `zz'"
        );
    }
}
