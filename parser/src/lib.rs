mod model;

use pest::Parser as _;
use pest::iterators::Pair;
use pest_derive::Parser;
use std::fmt;
use std::fs;
use std::path::Path;

pub use model::*;

#[derive(Parser)]
#[grammar = "resources/proto.pest"] // Path relative to parser/src
pub struct ProtoParser;

#[derive(Debug)]
pub enum ParseError {
    /// The protocol file could not be read; raised only by [`parse_file`].
    Io(std::io::Error),
    /// The grammar could not match at some position. Carries the pest
    /// error with line/column and the expected tokens at that point.
    Syntax(Box<pest::error::Error<Rule>>),
    Message(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "IO error: {}", e),
            ParseError::Syntax(e) => write!(f, "Syntax error: {}", e),
            ParseError::Message(m) => write!(f, "{}", m),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<pest::error::Error<Rule>> for ParseError {
    fn from(e: pest::error::Error<Rule>) -> Self {
        Self::Syntax(Box::new(e))
    }
}

/// Parse the .proto file at `path` and attach the resolved absolute path
/// to the result.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedProtocolFile, ParseError> {
    let full_path = std::path::absolute(path)?;
    let content = fs::read_to_string(&full_path)?;
    let file = parse_source(&content)?;
    Ok(ParsedProtocolFile::new(full_path, file))
}

/// Parse raw .proto source text into a [`ProtocolFile`].
///
/// The whole input must be consumed; the first position where no grammar
/// alternative matches aborts the parse with [`ParseError::Syntax`].
pub fn parse_source(source: &str) -> Result<ProtocolFile, ParseError> {
    let mut pairs = ProtoParser::parse(Rule::proto, source)?;
    let proto = pairs
        .next()
        .ok_or(ParseError::Message("expected proto root"))?;
    Ok(build_protocol_file(proto))
}

// Bottom-up construction: one builder per grammar rule. Mixed bodies are
// partitioned by rule tag, keeping each kind in source order.

fn build_protocol_file(pair: Pair<Rule>) -> ProtocolFile {
    let mut file = ProtocolFile::default();
    for item in pair.into_inner() {
        match item.as_rule() {
            Rule::message_block => file.messages.push(build_message(item)),
            Rule::enum_block => file.enums.push(build_enum(item)),
            _ => {} // EOI
        }
    }
    file
}

fn build_message(pair: Pair<Rule>) -> Message {
    let mut message = Message::default();
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::message_name => message.name = part.as_str().to_string(),
            Rule::field => {
                if let Some(field) = build_field(part) {
                    message.fields.push(field);
                }
            }
            Rule::enum_block => message.enums.push(build_enum(part)),
            _ => {}
        }
    }
    message
}

fn build_enum(pair: Pair<Rule>) -> Enum {
    let mut decl = Enum::default();
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::enum_name => decl.name = part.as_str().to_string(),
            Rule::enum_field => decl.values.push(build_enum_value(part)),
            _ => {}
        }
    }
    decl
}

fn build_enum_value(pair: Pair<Rule>) -> EnumValue {
    // The numeric tag is also in this pair; the grammar checks it and we
    // drop it here.
    let value = pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::enum_field_name)
        .map(|p| p.as_str().to_string())
        .unwrap_or_default();
    EnumValue { value }
}

fn build_field(pair: Pair<Rule>) -> Option<Field> {
    let mut repeated = false;
    let mut ty: Option<FieldType> = None;
    let mut name: Option<String> = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::field_modifier => repeated = true,
            Rule::field_type => ty = Some(build_field_type(part)),
            Rule::field_name => name = Some(part.as_str().to_string()),
            Rule::tag => { /* not retained */ }
            _ => {}
        }
    }

    match (ty, name) {
        (Some(ty), Some(name)) => Some(Field { name, ty, repeated }),
        _ => None,
    }
}

fn build_field_type(pair: Pair<Rule>) -> FieldType {
    // field_type = { scalar_type | type_reference }
    match pair.into_inner().next() {
        Some(p) if p.as_rule() == Rule::scalar_type => {
            FieldType::Scalar(scalar_from_keyword(p.as_str()))
        }
        Some(p) => FieldType::Custom(p.as_str().to_string()),
        None => FieldType::Custom(String::new()),
    }
}

fn scalar_from_keyword(s: &str) -> ScalarType {
    match s {
        "double" => ScalarType::Double,
        "float" => ScalarType::Float,
        "int32" => ScalarType::Int32,
        "int64" => ScalarType::Int64,
        "uint32" => ScalarType::Uint32,
        "uint64" => ScalarType::Uint64,
        "sint32" => ScalarType::Sint32,
        "sint64" => ScalarType::Sint64,
        "fixed32" => ScalarType::Fixed32,
        "fixed64" => ScalarType::Fixed64,
        "sfixed32" => ScalarType::Sfixed32,
        "sfixed64" => ScalarType::Sfixed64,
        "bool" => ScalarType::Bool,
        "string" => ScalarType::String,
        "bytes" => ScalarType::Bytes,
        _ => ScalarType::String, // fallback shouldn't happen
    }
}
