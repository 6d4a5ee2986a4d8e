use std::path::PathBuf;

// AST for the restricted .proto dialect.
// - A file holds top-level messages and top-level enums.
// - A message holds fields plus the enums declared lexically inside it.
// - Field and enum-value order is source order and is preserved.
// - Enum value tags are consumed by the grammar but not retained.
// Every node is built once by the parser and never mutated afterwards.

/// Result of parsing raw source text, before any path is known.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProtocolFile {
    pub messages: Vec<Message>,
    pub enums: Vec<Enum>,
}

/// Result of parsing a file on disk: the parsed tree plus the resolved
/// absolute path it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedProtocolFile {
    pub full_path: PathBuf,
    pub messages: Vec<Message>,
    pub enums: Vec<Enum>,
}

impl ParsedProtocolFile {
    pub(crate) fn new(full_path: PathBuf, file: ProtocolFile) -> Self {
        Self {
            full_path,
            messages: file.messages,
            enums: file.enums,
        }
    }
}

// ---------------- Message & Fields ----------------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    pub name: String,
    pub fields: Vec<Field>,
    pub enums: Vec<Enum>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
    pub repeated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarType),
    /// A reference to a message or enum by name; never resolved or
    /// validated against the declarations in the file.
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

// ---------------- Enum ----------------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Enum {
    pub name: String,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub value: String,
}
