//! Token kinds, the keyword table and token type decoration.

use std::fmt;

/// The closed set of lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Literals and generic classes
    Identifier,
    String,
    Number,
    Operator,
    Punctuation,

    // Template literal pieces
    TemplateStart,
    TemplateEnd,
    TemplateContent,
    TemplateExpressionStart,
    TemplateExpressionEnd,

    Eof,

    // Keywords
    Break,
    Case,
    Catch,
    Class,
    Const,
    Var,
    Let,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    If,
    In,
    For,
    Instanceof,
    New,
    Return,
    Switch,
    This,
    Throw,
    Try,
    Finally,
    Typeof,
    Void,
    While,
    Yield,
    Function,
    Import,
    Export,
    Super,
    Extends,
    True,
    False,
    Null,
    Undefined,
    Async,
    Await,
    From,
    Of,
    Constructor,
    Static,
    Public,
    As,
}

impl TokenKind {
    /// Every keyword kind, in keyword-table order.
    pub const KEYWORDS: &'static [TokenKind] = &[
        TokenKind::Break,
        TokenKind::Case,
        TokenKind::Catch,
        TokenKind::Class,
        TokenKind::Const,
        TokenKind::Var,
        TokenKind::Let,
        TokenKind::Continue,
        TokenKind::Debugger,
        TokenKind::Default,
        TokenKind::Delete,
        TokenKind::Do,
        TokenKind::Else,
        TokenKind::If,
        TokenKind::In,
        TokenKind::For,
        TokenKind::Instanceof,
        TokenKind::New,
        TokenKind::Return,
        TokenKind::Switch,
        TokenKind::This,
        TokenKind::Throw,
        TokenKind::Try,
        TokenKind::Finally,
        TokenKind::Typeof,
        TokenKind::Void,
        TokenKind::While,
        TokenKind::Yield,
        TokenKind::Function,
        TokenKind::Import,
        TokenKind::Export,
        TokenKind::Super,
        TokenKind::Extends,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::Undefined,
        TokenKind::Async,
        TokenKind::Await,
        TokenKind::From,
        TokenKind::Of,
        TokenKind::Constructor,
        TokenKind::Static,
        TokenKind::Public,
        TokenKind::As,
    ];

    /// Human-readable name. For keywords this is the reserved word itself.
    pub const fn label(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::TemplateStart => "templateStart",
            TokenKind::TemplateEnd => "templateEnd",
            TokenKind::TemplateContent => "templateContent",
            TokenKind::TemplateExpressionStart => "templateExpressionStart",
            TokenKind::TemplateExpressionEnd => "templateExpressionEnd",
            TokenKind::Eof => "eof",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Catch => "catch",
            TokenKind::Class => "class",
            TokenKind::Const => "const",
            TokenKind::Var => "var",
            TokenKind::Let => "let",
            TokenKind::Continue => "continue",
            TokenKind::Debugger => "debugger",
            TokenKind::Default => "default",
            TokenKind::Delete => "delete",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::For => "for",
            TokenKind::Instanceof => "instanceof",
            TokenKind::New => "new",
            TokenKind::Return => "return",
            TokenKind::Switch => "switch",
            TokenKind::This => "this",
            TokenKind::Throw => "throw",
            TokenKind::Try => "try",
            TokenKind::Finally => "finally",
            TokenKind::Typeof => "typeof",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::Yield => "yield",
            TokenKind::Function => "function",
            TokenKind::Import => "import",
            TokenKind::Export => "export",
            TokenKind::Super => "super",
            TokenKind::Extends => "extends",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Undefined => "undefined",
            TokenKind::Async => "async",
            TokenKind::Await => "await",
            TokenKind::From => "from",
            TokenKind::Of => "of",
            TokenKind::Constructor => "constructor",
            TokenKind::Static => "static",
            TokenKind::Public => "public",
            TokenKind::As => "as",
        }
    }

    /// Whether this kind is a reserved word.
    pub const fn is_keyword(self) -> bool {
        !matches!(
            self,
            TokenKind::Identifier
                | TokenKind::String
                | TokenKind::Number
                | TokenKind::Operator
                | TokenKind::Punctuation
                | TokenKind::TemplateStart
                | TokenKind::TemplateEnd
                | TokenKind::TemplateContent
                | TokenKind::TemplateExpressionStart
                | TokenKind::TemplateExpressionEnd
                | TokenKind::Eof
        )
    }

    /// Look up a reserved word.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "break" => Some(TokenKind::Break),
            "case" => Some(TokenKind::Case),
            "catch" => Some(TokenKind::Catch),
            "class" => Some(TokenKind::Class),
            "const" => Some(TokenKind::Const),
            "var" => Some(TokenKind::Var),
            "let" => Some(TokenKind::Let),
            "continue" => Some(TokenKind::Continue),
            "debugger" => Some(TokenKind::Debugger),
            "default" => Some(TokenKind::Default),
            "delete" => Some(TokenKind::Delete),
            "do" => Some(TokenKind::Do),
            "else" => Some(TokenKind::Else),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "for" => Some(TokenKind::For),
            "instanceof" => Some(TokenKind::Instanceof),
            "new" => Some(TokenKind::New),
            "return" => Some(TokenKind::Return),
            "switch" => Some(TokenKind::Switch),
            "this" => Some(TokenKind::This),
            "throw" => Some(TokenKind::Throw),
            "try" => Some(TokenKind::Try),
            "finally" => Some(TokenKind::Finally),
            "typeof" => Some(TokenKind::Typeof),
            "void" => Some(TokenKind::Void),
            "while" => Some(TokenKind::While),
            "yield" => Some(TokenKind::Yield),
            "function" => Some(TokenKind::Function),
            "import" => Some(TokenKind::Import),
            "export" => Some(TokenKind::Export),
            "super" => Some(TokenKind::Super),
            "extends" => Some(TokenKind::Extends),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "null" => Some(TokenKind::Null),
            "undefined" => Some(TokenKind::Undefined),
            "async" => Some(TokenKind::Async),
            "await" => Some(TokenKind::Await),
            "from" => Some(TokenKind::From),
            "of" => Some(TokenKind::Of),
            "constructor" => Some(TokenKind::Constructor),
            "static" => Some(TokenKind::Static),
            "public" => Some(TokenKind::Public),
            "as" => Some(TokenKind::As),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extra information attached to a token type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenTypeInfo {
    pub is_keyword: bool,
    pub is_hex_number: bool,
}

/// A partial [`TokenTypeInfo`]; `None` fields keep the base value when merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoPatch {
    pub is_keyword: Option<bool>,
    pub is_hex_number: Option<bool>,
}

impl InfoPatch {
    pub fn hex_number(is_hex_number: bool) -> Self {
        Self {
            is_hex_number: Some(is_hex_number),
            ..Self::default()
        }
    }
}

/// A token kind plus its info. Two types are equal iff kind and info match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenType {
    pub kind: TokenKind,
    pub info: TokenTypeInfo,
}

impl TokenType {
    pub const fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            info: TokenTypeInfo {
                is_keyword: kind.is_keyword(),
                is_hex_number: false,
            },
        }
    }

    /// The keyword type for a reserved word, otherwise `Identifier`.
    pub fn from_identifier_text(text: &str) -> Self {
        Self::new(TokenKind::from_keyword(text).unwrap_or(TokenKind::Identifier))
    }

    /// A new type whose info is `base.info` shallow-merged with `patch`.
    pub fn decorate(base: TokenType, patch: InfoPatch) -> Self {
        Self {
            kind: base.kind,
            info: TokenTypeInfo {
                is_keyword: patch.is_keyword.unwrap_or(base.info.is_keyword),
                is_hex_number: patch.is_hex_number.unwrap_or(base.info.is_hex_number),
            },
        }
    }

    /// `Number` tagged with its radix.
    pub fn number(is_hex_number: bool) -> Self {
        Self::decorate(Self::new(TokenKind::Number), InfoPatch::hex_number(is_hex_number))
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    #[inline]
    pub fn is_keyword(&self) -> bool {
        self.info.is_keyword
    }

    #[inline]
    pub fn is_hex_number(&self) -> bool {
        self.info.is_hex_number
    }
}

impl From<TokenKind> for TokenType {
    fn from(kind: TokenKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
