//! Parsing and serialization of the path spec attached to a command.
//!
//! A path spec is the raw textual form stored in the registry: either a
//! bare single directory path, or a bracketed comma-separated list
//! `[p1,p2,...]`. Elements are stored with forward slashes regardless of
//! host; expansion back to the native separator happens at parse time,
//! never at store time.

/// Expand a stored path spec into the sequence of directories to run in.
///
/// Bracketed specs split on `,` with surrounding whitespace and quote
/// characters trimmed from each element. Anything else is a single path,
/// returned as-is in a one-element vec — an empty spec yields `[""]`,
/// which dispatch treats as "current process directory", not an error.
///
/// No check is made that any path exists; nonexistent directories are a
/// dispatch-time failure.
pub fn parse(raw: &str) -> Vec<String> {
    let raw = to_native_separators(raw);
    match raw.strip_prefix('[') {
        Some(rest) => rest
            .strip_suffix(']')
            .unwrap_or(rest)
            .split(',')
            .map(|element| {
                element
                    .trim()
                    .trim_matches(|c| c == '\'' || c == '"')
                    .to_string()
            })
            .collect(),
        None => vec![raw],
    }
}

/// Split a registration-time input list on `,` and bring each element to
/// the canonical on-disk form: forward slashes, no surrounding whitespace.
///
/// ```
/// let paths = adhoc::pathspec::normalize(r"C:\dev\ssb, C:\dev\website");
/// assert_eq!(paths, vec!["C:/dev/ssb", "C:/dev/website"]);
/// ```
pub fn normalize(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|path| path.replace('\\', "/").trim().to_string())
        .collect()
}

/// Canonical stored form: bare path for a single element, bracketed comma
/// list for more than one.
pub fn serialize(elements: &[String]) -> String {
    match elements {
        [] => String::new(),
        [single] => single.clone(),
        many => format!("[{}]", many.join(",")),
    }
}

fn to_native_separators(raw: &str) -> String {
    if cfg!(windows) {
        raw.replace('/', "\\")
    } else {
        raw.to_string()
    }
}
