use super::*;
use std::collections::HashSet;
use std::path::Path;

fn detect(path: &str) -> Option<&'static str> {
    Registry::builtin().detect(Path::new(path)).map(|spec| spec.name)
}

#[test]
fn detect_by_extension() {
    assert_eq!(detect("main.c"), Some("C"));
    assert_eq!(detect("util.h"), Some("C"));
    assert_eq!(detect("server.go"), Some("Go"));
    assert_eq!(detect("lib.rs"), Some("Rust"));
    assert_eq!(detect("init.lua"), Some("Lua"));
}

#[test]
fn detect_uses_base_name_of_nested_path() {
    assert_eq!(detect("src/deep/dir/main.cpp"), Some("C++"));
    assert_eq!(detect("build/Makefile"), Some("Make"));
}

#[test]
fn detect_by_filename() {
    assert_eq!(detect("Makefile"), Some("Make"));
    assert_eq!(detect("makefile"), Some("Make"));
    assert_eq!(detect("CMakeLists.txt"), Some("CMake"));
    assert_eq!(detect("Jamrules"), Some("Jam"));
}

#[test]
fn extension_match_is_case_sensitive() {
    assert_eq!(detect("MAIN.C"), None);
    assert_eq!(detect("Main.Go"), None);
}

#[test]
fn only_the_last_extension_counts() {
    assert_eq!(detect("archive.c.orig"), None);
    assert_eq!(detect("types.d.ts"), Some("TypeScript"));
}

#[test]
fn unknown_files_are_unrecognized() {
    assert_eq!(detect("file.xyz123"), None);
    assert_eq!(detect("randomfile"), None);
    assert_eq!(detect("trailingdot."), None);
}

#[test]
fn filename_matcher_ignores_extensions() {
    assert_eq!(detect("Makefile.am"), None);
}

#[test]
fn first_registered_wins_on_collision() {
    static TABLE: &[LanguageSpec] = &[
        LanguageSpec {
            name: "A",
            matcher: Matcher::Extensions(&[".x"]),
            syntax: syntax::C_STYLE,
        },
        LanguageSpec {
            name: "B",
            matcher: Matcher::Extensions(&[".x", ".y"]),
            syntax: syntax::SHELL_STYLE,
        },
    ];
    let registry = Registry::new(TABLE);
    assert_eq!(registry.detect(Path::new("f.x")).unwrap().name, "A");
    assert_eq!(registry.detect(Path::new("f.y")).unwrap().name, "B");
}

#[test]
fn builtin_pl_collision_resolves_to_perl() {
    assert_eq!(detect("script.pl"), Some("Perl"));
    assert_eq!(detect("facts.pro"), Some("Prolog"));
}

#[test]
fn builtin_names_are_unique() {
    let mut seen = HashSet::new();
    for spec in languages() {
        assert!(!spec.name.is_empty());
        assert!(seen.insert(spec.name), "duplicate language {}", spec.name);
    }
}

#[test]
fn builtin_markers_are_printable_ascii() {
    for spec in languages() {
        let syntax = spec.syntax;
        let markers = syntax
            .line
            .into_iter()
            .chain(syntax.block.into_iter().flat_map(|(s, e)| [s, e]));
        for marker in markers {
            assert!(!marker.is_empty(), "{}", spec.name);
            assert!(marker.bytes().all(|b| b.is_ascii_graphic()), "{}", spec.name);
        }
    }
}

#[test]
fn builtin_extensions_carry_leading_dot() {
    for spec in languages() {
        if let Matcher::Extensions(exts) = spec.matcher {
            assert!(exts.iter().all(|e| e.starts_with('.')), "{}", spec.name);
        }
    }
}
