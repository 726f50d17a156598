/// Comment grammar of a language family.
///
/// A descriptor is pure data: the line-comment marker, the block-comment
/// delimiters and whether block comments nest. Markers are ASCII byte
/// sequences; `None` means the language has no such comment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub line: Option<&'static str>,
    pub block: Option<(&'static str, &'static str)>,
    pub nested: bool,
}

impl CommentSyntax {
    pub const fn new(
        line: Option<&'static str>,
        block: Option<(&'static str, &'static str)>,
        nested: bool,
    ) -> Self {
        Self {
            line,
            block,
            nested,
        }
    }

    /// Nesting only applies when both block delimiters exist.
    pub fn nests(&self) -> bool {
        self.nested && self.block.is_some()
    }
}

/// Markdown, JSON, HAML.
pub const NONE: CommentSyntax = CommentSyntax::new(None, None, false);

/// C family: `//` and non-nesting `/* */`.
pub const C_STYLE: CommentSyntax = CommentSyntax::new(Some("//"), Some(("/*", "*/")), false);

/// Rust, Swift, Kotlin, Scala: `//` and nesting `/* */`.
pub const C_NESTED: CommentSyntax = CommentSyntax::new(Some("//"), Some(("/*", "*/")), true);

pub const SHELL_STYLE: CommentSyntax = CommentSyntax::new(Some("#"), None, false);

/// Assembly and the Lisp family.
pub const SEMICOLON_STYLE: CommentSyntax = CommentSyntax::new(Some(";"), None, false);

pub const HASKELL_STYLE: CommentSyntax = CommentSyntax::new(Some("--"), Some(("{-", "-}")), true);

pub const JULIA_STYLE: CommentSyntax = CommentSyntax::new(Some("#"), Some(("#=", "=#")), true);

pub const OCAML_STYLE: CommentSyntax = CommentSyntax::new(None, Some(("(*", "*)")), true);

pub const SQL_STYLE: CommentSyntax = CommentSyntax::new(Some("--"), Some(("/*", "*/")), false);

/// The line marker is a prefix of the block opener.
pub const LUA_STYLE: CommentSyntax = CommentSyntax::new(Some("--"), Some(("--[[", "]]")), false);

/// Triple-quoted strings are treated as block comments. This is an
/// approximation: docstrings count as comments, but so does any other
/// triple-quoted literal.
pub const PYTHON_STYLE: CommentSyntax = CommentSyntax::new(Some("#"), Some(("\"\"\"", "\"\"\"")), false);

pub const XML_STYLE: CommentSyntax = CommentSyntax::new(None, Some(("<!--", "-->")), false);

pub const CSS_STYLE: CommentSyntax = CommentSyntax::new(None, Some(("/*", "*/")), false);

/// Erlang and MATLAB-like languages.
pub const PERCENT_STYLE: CommentSyntax = CommentSyntax::new(Some("%"), None, false);

pub const PROLOG_STYLE: CommentSyntax = CommentSyntax::new(Some("%"), Some(("/*", "*/")), false);
