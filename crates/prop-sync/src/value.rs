//! Typed setting values and their persisted string forms

use std::fmt;

/// Type tag for a declared setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropType {
    Str,
    Int,
    Short,
    Byte,
    Bool,
    Float,
    Double,
}

impl PropType {
    /// Label used in comment headers and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Int => "int",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A setting value. The variant always matches the descriptor's declared
/// [`PropType`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Str(String),
    Int(i32),
    Short(i16),
    Byte(i8),
    Bool(bool),
    Float(f32),
    Double(f64),
}

impl PropValue {
    pub fn prop_type(&self) -> PropType {
        match self {
            Self::Str(_) => PropType::Str,
            Self::Int(_) => PropType::Int,
            Self::Short(_) => PropType::Short,
            Self::Byte(_) => PropType::Byte,
            Self::Bool(_) => PropType::Bool,
            Self::Float(_) => PropType::Float,
            Self::Double(_) => PropType::Double,
        }
    }

    /// Parse a persisted string as a value of `ty`.
    ///
    /// Strings pass through unchanged; integers are base-10; booleans are
    /// case-insensitive `true`/`false`; floats use the standard decimal
    /// parse. Returns `None` when `raw` is not a valid `ty`.
    pub fn parse(ty: PropType, raw: &str) -> Option<Self> {
        match ty {
            PropType::Str => Some(Self::Str(raw.to_string())),
            PropType::Int => raw.parse().ok().map(Self::Int),
            PropType::Short => raw.parse().ok().map(Self::Short),
            PropType::Byte => raw.parse().ok().map(Self::Byte),
            PropType::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" => Some(Self::Bool(true)),
                "false" => Some(Self::Bool(false)),
                _ => None,
            },
            PropType::Float => raw.parse().ok().map(Self::Float),
            PropType::Double => raw.parse().ok().map(Self::Double),
        }
    }

    /// Numeric view for bounds checking; `None` for strings and booleans.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(f64::from(*v)),
            Self::Short(v) => Some(f64::from(*v)),
            Self::Byte(v) => Some(f64::from(*v)),
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            Self::Str(_) | Self::Bool(_) => None,
        }
    }
}

/// Canonical stringification: exactly what gets persisted.
impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(v) => f.write_str(v),
            Self::Int(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i16> for PropValue {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<i8> for PropValue {
    fn from(v: i8) -> Self {
        Self::Byte(v)
    }
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for PropValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}
