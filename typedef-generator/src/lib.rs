use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use parser::{ParseError, ParsedProtocolFile, parse_file};

/// Target syntaxes a type definition file can be requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Syntax {
    Flow,
    Typescript,
}

impl Syntax {
    pub fn as_str(self) -> &'static str {
        match self {
            Syntax::Flow => "flow",
            Syntax::Typescript => "typescript",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Syntax {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flow" => Ok(Syntax::Flow),
            "typescript" => Ok(Syntax::Typescript),
            _ => Err(GenerateError::UnknownSyntax(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum GenerateError {
    Parse(ParseError),
    Io(std::io::Error),
    UnknownSyntax(String),
    SyntaxNotImplemented(Syntax),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Parse(e) => write!(f, "parse error: {}", e),
            GenerateError::Io(e) => write!(f, "IO error: {}", e),
            GenerateError::UnknownSyntax(s) => write!(f, "unknown syntax: {}", s),
            GenerateError::SyntaxNotImplemented(s) => {
                write!(f, "no emitter implemented for syntax: {}", s)
            }
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<ParseError> for GenerateError {
    fn from(e: ParseError) -> Self {
        GenerateError::Parse(e)
    }
}
impl From<std::io::Error> for GenerateError {
    fn from(e: std::io::Error) -> Self {
        GenerateError::Io(e)
    }
}

/// Render type definition source text for a parsed protocol file.
///
/// The parsing front end is complete, but no emission backend exists yet;
/// every syntax currently reports [`GenerateError::SyntaxNotImplemented`].
pub fn render_type_definitions(
    _file: &ParsedProtocolFile,
    syntax: Syntax,
) -> Result<String, GenerateError> {
    // TODO: emit flow and typescript declarations from the AST.
    match syntax {
        Syntax::Flow | Syntax::Typescript => Err(GenerateError::SyntaxNotImplemented(syntax)),
    }
}

/// Parse `protocol_file`, render it in the requested syntax and write the
/// result to `type_definition_file`.
pub fn execute<P: AsRef<Path>, Q: AsRef<Path>>(
    protocol_file: P,
    type_definition_file: Q,
    syntax: Syntax,
) -> Result<(), GenerateError> {
    let parsed = parse_file(protocol_file)?;
    let rendered = render_type_definitions(&parsed, syntax)?;
    fs::write(type_definition_file, rendered)?;
    Ok(())
}

// Test module.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_choices_parse_from_strings() {
        assert_eq!("flow".parse::<Syntax>().unwrap(), Syntax::Flow);
        assert_eq!("typescript".parse::<Syntax>().unwrap(), Syntax::Typescript);
    }

    #[test]
    fn unknown_syntax_is_rejected() {
        let result = "java".parse::<Syntax>();
        assert!(matches!(result, Err(GenerateError::UnknownSyntax(ref s)) if s == "java"));
    }

    #[test]
    fn rendering_reports_missing_emitter() {
        let parsed = parse_file("tests/resources/simple.proto").expect("parse failed");
        for syntax in [Syntax::Flow, Syntax::Typescript] {
            let result = render_type_definitions(&parsed, syntax);
            assert!(matches!(
                result,
                Err(GenerateError::SyntaxNotImplemented(s)) if s == syntax
            ));
        }
    }

    #[test]
    fn execute_parses_before_failing_on_emission() {
        let out = "target/tmp/simple.js";
        let result = execute("tests/resources/simple.proto", out, Syntax::Flow);
        assert!(matches!(
            result,
            Err(GenerateError::SyntaxNotImplemented(Syntax::Flow))
        ));
        assert!(!Path::new(out).exists());
    }

    #[test]
    fn execute_surfaces_parse_errors() {
        let result = execute("tests/resources/__missing.proto", "out.js", Syntax::Flow);
        assert!(matches!(result, Err(GenerateError::Parse(ParseError::Io(_)))));
    }
}
