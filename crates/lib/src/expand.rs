//! Variable expansion for target commands.
//!
//! Both `$NAME` and `${NAME}` are replaced with the value of a defined
//! variable. Expansion is a single left-to-right pass: substituted values are
//! copied to the output as-is and never rescanned, so a value containing `$X`
//! stays literal.
//!
//! `$NAME` is matched textually against the defined names, not against an
//! identifier grammar: with `CC=gcc`, `$CCx` expands to `gccx`. When several
//! defined names match at the same `$`, the longest wins.
//!
//! A variable with an empty name (from a line like `=X`) is never
//! referenced: both `$` and `${}` are left as they are.
//!
//! References to undefined variables are left untouched, which lets shell
//! variables like `$HOME` pass through to the command.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use makeover_lib::expand::expand;
//!
//! let vars = HashMap::from([("CC".to_string(), "gcc".to_string())]);
//! assert_eq!(expand("$CC -o out in.c", &vars), "gcc -o out in.c");
//! assert_eq!(expand("${CC}x $HOME", &vars), "gccx $HOME");
//! ```

use std::collections::HashMap;

/// Expand `$NAME` and `${NAME}` references in `text`.
pub fn expand(text: &str, variables: &HashMap<String, String>) -> String {
  if variables.is_empty() || !text.contains('$') {
    return text.to_string();
  }

  let mut out = String::with_capacity(text.len());
  let mut rest = text;

  while let Some(pos) = rest.find('$') {
    out.push_str(&rest[..pos]);
    let after = &rest[pos + 1..];

    match resolve(after, variables) {
      Some((value, consumed)) => {
        out.push_str(value);
        rest = &after[consumed..];
      }
      None => {
        out.push('$');
        rest = after;
      }
    }
  }

  out.push_str(rest);
  out
}

/// Resolve the reference directly after a `$`.
///
/// Returns the value and the number of bytes of `after` the reference spans.
fn resolve<'a>(after: &str, variables: &'a HashMap<String, String>) -> Option<(&'a str, usize)> {
  if let Some(inner) = after.strip_prefix('{')
    && let Some(end) = inner.find('}')
    && end > 0
    && let Some(value) = variables.get(&inner[..end])
  {
    return Some((value.as_str(), end + 2));
  }

  variables
    .iter()
    .filter(|(name, _)| !name.is_empty() && after.starts_with(name.as_str()))
    .max_by_key(|(name, _)| name.len())
    .map(|(name, value)| (value.as_str(), name.len()))
}
