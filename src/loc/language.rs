use std::path::Path;

use super::lang_macro::lang_spec;
use super::syntax::{self, CommentSyntax};

/// How a language claims files.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Extensions including the leading dot, compared case-sensitively.
    Extensions(&'static [&'static str]),
    /// Exact base names.
    Filenames(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Matcher::Extensions(exts) => {
                let ext = extension(file_name);
                !ext.is_empty() && exts.contains(&ext)
            }
            Matcher::Filenames(names) => names.contains(&file_name),
        }
    }
}

/// Everything from the last dot of the base name on, or `""`.
fn extension(file_name: &str) -> &str {
    file_name.rfind('.').map_or("", |i| &file_name[i..])
}

#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    pub name: &'static str,
    pub matcher: Matcher,
    pub syntax: CommentSyntax,
}

/// Ordered language table. Lookup is a linear scan and the first matching
/// entry wins, so when two entries claim the same extension the one
/// registered earlier owns every such file.
#[derive(Debug, Clone, Copy)]
pub struct Registry<'a> {
    languages: &'a [LanguageSpec],
}

impl<'a> Registry<'a> {
    pub fn new(languages: &'a [LanguageSpec]) -> Self {
        Self { languages }
    }

    pub fn detect(&self, path: &Path) -> Option<&'a LanguageSpec> {
        let file_name = path.file_name()?.to_str()?;
        self.languages
            .iter()
            .find(|spec| spec.matcher.matches(file_name))
    }
}

impl Registry<'static> {
    pub fn builtin() -> Self {
        Self::new(languages())
    }
}

pub fn languages() -> &'static [LanguageSpec] {
    static LANGUAGES: &[LanguageSpec] = &[
        lang_spec!("Thrift", ext: [".thrift"], C_STYLE),
        lang_spec!("C", ext: [".c", ".h"], C_STYLE),
        lang_spec!("C++", ext: [".cc", ".cpp", ".cxx", ".hh", ".hpp", ".hxx"], C_STYLE),
        lang_spec!("Go", ext: [".go"], C_STYLE),
        lang_spec!("Scala", ext: [".scala"], C_NESTED),
        lang_spec!("Java", ext: [".java"], C_STYLE),
        lang_spec!("YACC", ext: [".y"], C_STYLE),
        lang_spec!("Lex", ext: [".l"], C_STYLE),
        lang_spec!("SQL", ext: [".sql"], SQL_STYLE),
        lang_spec!("Haskell", ext: [".hs", ".lhs"], HASKELL_STYLE),
        // Perl owns `.pl`; Prolog below is only reachable through `.pro`.
        lang_spec!("Perl", ext: [".pl", ".pm"], SHELL_STYLE),
        lang_spec!("PHP", ext: [".php"], C_STYLE),
        lang_spec!("Shell", ext: [".sh"], SHELL_STYLE),
        lang_spec!("Bash", ext: [".bash"], SHELL_STYLE),
        lang_spec!("Ruby", ext: [".rb"], SHELL_STYLE),
        lang_spec!("Python", ext: [".py"], PYTHON_STYLE),
        lang_spec!("Assembly", ext: [".asm", ".s"], SEMICOLON_STYLE),
        lang_spec!("Lisp", ext: [".lsp", ".lisp"], SEMICOLON_STYLE),
        lang_spec!("Scheme", ext: [".scm", ".scheme"], SEMICOLON_STYLE),
        lang_spec!("Make", files: ["makefile", "Makefile", "MAKEFILE"], SHELL_STYLE),
        lang_spec!("CMake", files: ["CMakeLists.txt"], SHELL_STYLE),
        lang_spec!("Jam", files: ["Jamfile", "Jamrules"], SHELL_STYLE),
        lang_spec!("Markdown", ext: [".md"], NONE),
        lang_spec!("HAML", ext: [".haml"], NONE),
        lang_spec!("SASS", ext: [".sass"], CSS_STYLE),
        lang_spec!("SCSS", ext: [".scss"], CSS_STYLE),
        lang_spec!("HTML", ext: [".htm", ".html", ".xhtml"], XML_STYLE),
        lang_spec!("XML", ext: [".xml"], XML_STYLE),
        lang_spec!("CSS", ext: [".css"], CSS_STYLE),
        lang_spec!("JavaScript", ext: [".js"], C_STYLE),
        lang_spec!("TypeScript", ext: [".ts"], C_STYLE),
        lang_spec!("Rust", ext: [".rs"], C_NESTED),
        lang_spec!("C#", ext: [".cs"], C_STYLE),
        lang_spec!("Kotlin", ext: [".kt", ".kts"], C_NESTED),
        lang_spec!("Swift", ext: [".swift"], C_NESTED),
        lang_spec!("Lua", ext: [".lua"], LUA_STYLE),
        lang_spec!("Julia", ext: [".jl"], JULIA_STYLE),
        lang_spec!("OCaml", ext: [".ml", ".mli"], OCAML_STYLE),
        lang_spec!("Clojure", ext: [".clj", ".cljs", ".cljc"], SEMICOLON_STYLE),
        lang_spec!("Erlang", ext: [".erl", ".hrl"], PERCENT_STYLE),
        lang_spec!("Prolog", ext: [".pl", ".pro"], PROLOG_STYLE),
        lang_spec!("TOML", ext: [".toml"], SHELL_STYLE),
        lang_spec!("YAML", ext: [".yaml", ".yml"], SHELL_STYLE),
        lang_spec!("JSON", ext: [".json"], NONE),
    ];
    LANGUAGES
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
