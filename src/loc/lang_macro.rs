/// The `lang_spec!` macro for declaring registry entries.
///
/// # Variants
///
/// - `lang_spec!("C", ext: [".c", ".h"], C_STYLE)`: match on file extension,
///   written with its leading dot and compared case-sensitively
/// - `lang_spec!("Make", files: ["Makefile"], SHELL_STYLE)`: match on the exact
///   file name, for extensionless build files
///
/// The last argument names a `CommentSyntax` constant from `syntax`.
macro_rules! lang_spec {
    ($name:expr, ext: [$($ext:expr),+ $(,)?], $syntax:ident) => {
        LanguageSpec {
            name: $name,
            matcher: Matcher::Extensions(&[$($ext),+]),
            syntax: syntax::$syntax,
        }
    };
    ($name:expr, files: [$($f:expr),+ $(,)?], $syntax:ident) => {
        LanguageSpec {
            name: $name,
            matcher: Matcher::Filenames(&[$($f),+]),
            syntax: syntax::$syntax,
        }
    };
}

pub(super) use lang_spec;
