//! Console prompt and result-document rendering
//!
//! The interactive pieces are written against `BufRead`/`Write` so the
//! behavior is testable with in-memory buffers; the public entry points
//! bind them to stdin/stdout.

use std::io;
use std::io::{BufRead, Write};

use typedb_driver::answer::JSON;

use crate::error::SampleError;

/// Ask a yes/no question on stdout and read the answer from stdin.
///
/// Returns true iff the first non-blank character of the reply is `y` or
/// `Y`; everything else, including an empty reply, counts as no.
pub fn ask_yes_no(prompt: &str) -> Result<bool, SampleError> {
    let stdin = io::stdin();
    prompt_yes_no(prompt, &mut stdin.lock(), &mut io::stdout())
}

fn prompt_yes_no<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, SampleError> {
    writeln!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y')))
}

/// Render one fetched result document the way the demonstration prints it:
/// string leaves quoted on their own line, maps as `key:` headers with the
/// nested body indented two spaces. Keys print in sorted order so output
/// is stable across runs.
pub fn format_document(document: &JSON) -> String {
    let mut rendered = String::new();
    write_json(document, 0, &mut rendered);
    rendered
}

fn write_json(json: &JSON, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    match json {
        JSON::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in entries {
                out.push_str(&format!("{pad}{key}:\n"));
                write_json(value, depth + 1, out);
            }
        }
        JSON::Array(items) => {
            for item in items {
                write_json(item, depth, out);
            }
        }
        JSON::String(value) => out.push_str(&format!("{pad}'{value}'\n")),
        other => out.push_str(&format!("{pad}{other}\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;

    fn answer(reply: &str) -> bool {
        let mut input = Cursor::new(reply.as_bytes().to_vec());
        let mut output = Vec::new();
        prompt_yes_no("Replace? (Y/N)", &mut input, &mut output).unwrap()
    }

    #[test]
    fn test_prompt_accepts_yes_variants() {
        assert!(answer("y\n"));
        assert!(answer("Y\n"));
        assert!(answer("yes\n"));
        assert!(answer("  yep\n"));
    }

    #[test]
    fn test_prompt_rejects_everything_else() {
        assert!(!answer("n\n"));
        assert!(!answer("no\n"));
        assert!(!answer("\n"));
        assert!(!answer(""));
        assert!(!answer("ok\n"));
    }

    #[test]
    fn test_prompt_writes_the_question() {
        let mut input = Cursor::new(b"y\n".to_vec());
        let mut output = Vec::new();
        prompt_yes_no("Replace? (Y/N)", &mut input, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Replace? (Y/N)\n");
    }

    #[test]
    fn test_format_string_leaf() {
        let document = JSON::String("Kevin Morrison".into());
        assert_eq!(format_document(&document), "'Kevin Morrison'\n");
    }

    #[test]
    fn test_format_nested_document() {
        let mut attribute = HashMap::new();
        attribute.insert(
            "value".into(),
            JSON::String("kevin.morrison@typedb.com".into()),
        );
        let mut user = HashMap::new();
        user.insert("email".into(), JSON::Array(vec![JSON::Object(attribute)]));
        let document = JSON::Object(user);

        assert_eq!(
            format_document(&document),
            "email:\n  value:\n    'kevin.morrison@typedb.com'\n"
        );
    }

    #[test]
    fn test_format_sorts_keys() {
        let mut map = HashMap::new();
        map.insert("b".into(), JSON::String("2".into()));
        map.insert("a".into(), JSON::String("1".into()));
        let document = JSON::Object(map);

        assert_eq!(format_document(&document), "a:\n  '1'\nb:\n  '2'\n");
    }
}
