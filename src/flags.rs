//! Scanner for override flags embedded in a raw kubectl command string.

/// Extracts the value of `--<flag>` from a free-form command string.
///
/// Both `--flag=value` and `--flag value` forms are recognized; if the
/// flag appears more than once the last occurrence wins, regardless of
/// form. A token consumed as a space-form value is never re-scanned as
/// a flag, and a `--flag` with nothing after it contributes no value.
/// Anything else in the string is ignored.
pub fn extract_flag(raw: &str, flag: &str) -> Option<String> {
    let eq_form = format!("--{flag}=");
    let space_form = format!("--{flag}");

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let mut value = None;

    let mut index = 0;
    while index < tokens.len() {
        let token = tokens[index];
        if let Some(rest) = token.strip_prefix(&eq_form) {
            value = Some(rest.to_string());
        } else if token == space_form {
            if let Some(next) = tokens.get(index + 1) {
                value = Some((*next).to_string());
                index += 1;
            }
        }
        index += 1;
    }

    value
}
