use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// `{{ env.VAR | default("fallback") }}` substitutes the fallback when the
/// variable is unset. An unset variable without a fallback is an error.
/// Expansion runs on the raw text before deserialization, so config structs
/// hold plain `String`/`SecretString` values. TOML comment lines are passed
/// through untouched so commented-out secrets never fail the load.
pub fn expand_env(input: &str) -> Result<String, String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        // Group 1: variable name; group 2: optional default("...") fallback
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    });

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in re.captures_iter(line) {
            let placeholder = captures.get(0).expect("group 0 always present");
            let var_name = &captures[1];
            let fallback = captures.get(2).map(|m| m.as_str());

            output.push_str(&line[last_end..placeholder.start()]);

            match std::env::var(var_name) {
                Ok(value) => output.push_str(&value),
                Err(_) => match fallback {
                    Some(fallback) => output.push_str(fallback),
                    None => return Err(format!("environment variable not found: `{var_name}`")),
                },
            }

            last_end = placeholder.end();
        }
        output.push_str(&line[last_end..]);
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
