//! File name inference from clipboard content.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Stem used for inferred names when no explicit file name is found.
pub const DEFAULT_STEM: &str = "new_file";

/// Extension used when no signature matches.
pub const FALLBACK_EXTENSION: &str = "txt";

/// First line that starts with "anything, a dot, word characters".
/// `\r`, `\n` and `\r\n` all end a line.
static FILE_NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^(.*\.[A-Za-z0-9_]+)").expect("valid file name pattern"));

/// Content signatures, checked in order. The first match wins, so
/// TypeScript must stay ahead of JavaScript.
static SIGNATURES: Lazy<Vec<(Regex, Language)>> = Lazy::new(|| {
    [
        (r"(?mR)^import\s|^from\s|def\s|class\s", Language::Python),
        (r"<!DOCTYPE html>|<html>|<head>|<body>", Language::Html),
        (r"interface\s|type\s|namespace\s", Language::TypeScript),
        (r"function\s|const\s|let\s|var\s|import\s|export\s", Language::JavaScript),
    ]
    .into_iter()
    .map(|(pattern, language)| (Regex::new(pattern).expect("valid signature pattern"), language))
    .collect()
});

/// Language recognised by a content signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    Html,
    TypeScript,
    JavaScript,
}

impl Language {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Html => "html",
            Self::TypeScript => "ts",
            Self::JavaScript => "js",
        }
    }

    /// Lowercase language name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Html => "html",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a suggested name was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// A line of the content names the file.
    Explicit,
    /// The content matched a language signature.
    Signature(Language),
    /// Nothing matched.
    Fallback,
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => f.write_str("explicit"),
            Self::Signature(language) => write!(f, "signature:{}", language),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// A suggested file name with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestedName {
    /// File name including extension.
    pub name: String,
    /// How the name was inferred.
    pub source: NameSource,
}

/// Find a file name written at the start of a line.
///
/// The match runs from the line start through the last `.ext` on that line
/// and is returned trimmed, e.g. `report.md` or `src/main.rs`.
pub fn explicit_file_name(content: &str) -> Option<String> {
    let captures = FILE_NAME_LINE.captures(content)?;
    Some(captures.get(1)?.as_str().trim().to_string())
}

/// Detect a language from content signatures.
pub fn detect_language(content: &str) -> Option<Language> {
    SIGNATURES
        .iter()
        .find(|(pattern, _)| pattern.is_match(content))
        .map(|(_, language)| *language)
}

/// Suggest a file name for clipboard content.
///
/// An explicit file name line wins; otherwise the first matching language
/// signature picks the extension for `stem`; otherwise `<stem>.txt`.
pub fn suggest_file_name(content: &str, stem: &str) -> SuggestedName {
    if let Some(name) = explicit_file_name(content) {
        return SuggestedName { name, source: NameSource::Explicit };
    }

    match detect_language(content) {
        Some(language) => SuggestedName {
            name: format!("{}.{}", stem, language.extension()),
            source: NameSource::Signature(language),
        },
        None => SuggestedName {
            name: format!("{}.{}", stem, FALLBACK_EXTENSION),
            source: NameSource::Fallback,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggest(content: &str) -> String {
        suggest_file_name(content, DEFAULT_STEM).name
    }

    #[test]
    fn test_python_function() {
        assert_eq!(suggest("def foo():\n    pass"), "new_file.py");
    }

    #[test]
    fn test_python_import_at_line_start() {
        assert_eq!(suggest("x = 1\nimport os"), "new_file.py");
    }

    #[test]
    fn test_html_document() {
        assert_eq!(suggest("<!DOCTYPE html><html></html>"), "new_file.html");
    }

    #[test]
    fn test_explicit_name_wins_over_signature() {
        assert_eq!(suggest("report.md\n# Title"), "report.md");

        let suggestion = suggest_file_name("main.py\ndef main(): pass", DEFAULT_STEM);
        assert_eq!(suggestion.name, "main.py");
        assert_eq!(suggestion.source, NameSource::Explicit);
    }

    #[test]
    fn test_explicit_name_is_trimmed() {
        assert_eq!(explicit_file_name("   notes.txt   \nbody"), Some("notes.txt".to_string()));
    }

    #[test]
    fn test_explicit_name_on_later_line() {
        let content = "First line\nsrc/lib.rs\nmore";
        assert_eq!(explicit_file_name(content), Some("src/lib.rs".to_string()));
    }

    #[test]
    fn test_carriage_return_ends_a_line() {
        assert_eq!(explicit_file_name("a.b\rc.d"), Some("a.b".to_string()));
        assert_eq!(explicit_file_name("Title\rnotes.md\rbody"), Some("notes.md".to_string()));
        assert_eq!(explicit_file_name("report.md\r\n# Title"), Some("report.md".to_string()));
    }

    #[test]
    fn test_python_import_after_carriage_return() {
        assert_eq!(detect_language("# script\rimport os"), Some(Language::Python));
    }

    #[test]
    fn test_explicit_name_extends_to_last_extension_on_line() {
        // Greedy: everything up to the last ".word" on the first matching line.
        assert_eq!(explicit_file_name("console.log(a.b)"), Some("console.log(a.b".to_string()));
    }

    #[test]
    fn test_typescript_beats_javascript() {
        let content = "interface Foo {\n  bar: number\n}\nconst foo = {}";
        let suggestion = suggest_file_name(content, DEFAULT_STEM);
        assert_eq!(suggestion.name, "new_file.ts");
        assert_eq!(suggestion.source, NameSource::Signature(Language::TypeScript));
    }

    #[test]
    fn test_javascript() {
        assert_eq!(suggest("const x = () => 1"), "new_file.js");
        assert_eq!(suggest("export default function () {}"), "new_file.js");
    }

    #[test]
    fn test_python_beats_html() {
        assert_eq!(suggest("class Page:\n  html = '<html>'"), "new_file.py");
    }

    #[test]
    fn test_fallback() {
        let suggestion = suggest_file_name("hello world", DEFAULT_STEM);
        assert_eq!(suggestion.name, "new_file.txt");
        assert_eq!(suggestion.source, NameSource::Fallback);
    }

    #[test]
    fn test_keyword_needs_trailing_whitespace() {
        assert_eq!(suggest("constant"), "new_file.txt");
        assert_eq!(suggest("undefined"), "new_file.txt");
    }

    #[test]
    fn test_custom_stem() {
        assert_eq!(suggest_file_name("def f(): pass", "snippet").name, "snippet.py");
    }

    #[test]
    fn test_name_source_display() {
        assert_eq!(NameSource::Explicit.to_string(), "explicit");
        assert_eq!(NameSource::Signature(Language::Html).to_string(), "signature:html");
        assert_eq!(NameSource::Fallback.to_string(), "fallback");
    }
}
