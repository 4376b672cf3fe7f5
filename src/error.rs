use thiserror::Error;

use crate::token::Pos;

/// Every failure the interpreter can report. The `Display` form is the full
/// diagnostic line the driver writes to stderr:
/// `Error: <CATEGORY> [<line>:<col>] - <message>`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Error: MISSING_FILE_ERROR [0:0] - {message}")]
    MissingFile { message: String },
    #[error("Error: FILE_OPEN_ERROR [0:0] - {message}")]
    FileOpen { message: String },
    #[error("Error: INDENTATION_ERROR {pos} - {message}")]
    Indentation { pos: Pos, message: String },
    #[error("Error: LEXICAL_ERROR {pos} - {message}")]
    Lexical { pos: Pos, message: String },
    #[error("Error: RESERVED_KEYWORD_ERROR {pos} - {message}")]
    ReservedKeyword { pos: Pos, message: String },
    #[error("Error: SYNTAX_ERROR {pos} - {message}")]
    Syntax { pos: Pos, message: String },
    #[error("Error: INTERNAL_ERROR {pos} - {message}")]
    Internal { pos: Pos, message: String },
    #[error("Error: SEMANTIC_ERROR {pos} - {message}")]
    Semantic { pos: Pos, message: String },
    #[error("Error: INDEX_ERROR {pos} - {message}")]
    Index { pos: Pos, message: String },
    #[error("Error: EVALUATION_ERROR {pos} - {message}")]
    Evaluation { pos: Pos, message: String },
    #[error("Error: ZERO_DIVISION {pos} - Division by zero")]
    ZeroDivision { pos: Pos },
    #[error("Error: TYPE_ERROR {pos} - {message}")]
    Type { pos: Pos, message: String },
}

impl Error {
    pub fn missing_file(message: impl Into<String>) -> Self {
        Self::MissingFile {
            message: message.into(),
        }
    }

    pub fn file_open(message: impl Into<String>) -> Self {
        Self::FileOpen {
            message: message.into(),
        }
    }

    pub fn indentation(pos: Pos, message: impl Into<String>) -> Self {
        Self::Indentation {
            pos,
            message: message.into(),
        }
    }

    pub fn lexical(pos: Pos, message: impl Into<String>) -> Self {
        Self::Lexical {
            pos,
            message: message.into(),
        }
    }

    pub fn reserved_keyword(pos: Pos, message: impl Into<String>) -> Self {
        Self::ReservedKeyword {
            pos,
            message: message.into(),
        }
    }

    pub fn syntax(pos: Pos, message: impl Into<String>) -> Self {
        Self::Syntax {
            pos,
            message: message.into(),
        }
    }

    pub fn internal(pos: Pos, message: impl Into<String>) -> Self {
        Self::Internal {
            pos,
            message: message.into(),
        }
    }

    pub fn semantic(pos: Pos, message: impl Into<String>) -> Self {
        Self::Semantic {
            pos,
            message: message.into(),
        }
    }

    pub fn index(pos: Pos, message: impl Into<String>) -> Self {
        Self::Index {
            pos,
            message: message.into(),
        }
    }

    pub fn type_error(pos: Pos, message: impl Into<String>) -> Self {
        Self::Type {
            pos,
            message: message.into(),
        }
    }

    pub fn zero_division(pos: Pos) -> Self {
        Self::ZeroDivision { pos }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingFile { .. } => "MISSING_FILE_ERROR",
            Self::FileOpen { .. } => "FILE_OPEN_ERROR",
            Self::Indentation { .. } => "INDENTATION_ERROR",
            Self::Lexical { .. } => "LEXICAL_ERROR",
            Self::ReservedKeyword { .. } => "RESERVED_KEYWORD_ERROR",
            Self::Syntax { .. } => "SYNTAX_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
            Self::Semantic { .. } => "SEMANTIC_ERROR",
            Self::Index { .. } => "INDEX_ERROR",
            Self::Evaluation { .. } => "EVALUATION_ERROR",
            Self::ZeroDivision { .. } => "ZERO_DIVISION",
            Self::Type { .. } => "TYPE_ERROR",
        }
    }
}
