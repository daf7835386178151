//! Cross-checks `t!` call sites against the fallback bundle and every other
//! locale against the fallback.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "portalchat_ui.ftl";
const FALLBACK: &str = "en-US";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Message ids defined in an FTL file. Terms (`-name`), attributes and
/// continuation lines are skipped.
fn message_ids(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && !id.starts_with('#') && !id.starts_with('-'))
        .filter(|id| id.chars().all(is_id_char))
        .map(str::to_string)
        .collect()
}

fn is_id_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of every `t!("...")` under `dir`.
fn referenced_ids(dir: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let Ok(entries) = fs::read_dir(dir) else {
        return found;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            found.extend(referenced_ids(&path));
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in source.split("t!(\"").skip(1) {
            if let Some(end) = chunk.find('"') {
                let id = &chunk[..end];
                if !id.is_empty() && id.chars().all(is_id_char) {
                    found.insert(id.to_string());
                }
            }
        }
    }

    found
}

fn read_locale(locale: &str) -> String {
    let path = crate_root().join("i18n").join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {path:?}: {err}"))
}

fn locales() -> Vec<String> {
    let mut out: Vec<String> = fs::read_dir(crate_root().join("i18n"))
        .expect("i18n directory")
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .filter(|name| name.contains('-'))
        .collect();
    out.sort();
    out
}

#[test]
fn every_referenced_id_exists_in_fallback() {
    let fallback = message_ids(&read_locale(FALLBACK));
    assert!(!fallback.is_empty(), "fallback bundle has no messages");

    let referenced = referenced_ids(&crate_root().join("src"));
    assert!(referenced.contains("nav-home"), "scanner found no t! call sites");

    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty(),
        "t! ids missing from {FALLBACK}:\n{}",
        missing.join("\n")
    );

    let unused: Vec<_> = fallback.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] {} fallback ids unused: {}", unused.len(), unused.join(", "));
    }
}

#[test]
fn every_locale_covers_the_fallback() {
    let fallback = message_ids(&read_locale(FALLBACK));
    let mut report = Vec::new();

    for locale in locales() {
        let ids = message_ids(&read_locale(&locale));
        let missing: Vec<_> = fallback.difference(&ids).cloned().collect();
        if !missing.is_empty() {
            report.push(format!("{locale}: {}", missing.join(", ")));
        }
    }

    assert!(report.is_empty(), "incomplete locales:\n{}", report.join("\n"));
}

#[test]
fn id_parser_skips_comments_terms_and_attributes() {
    let src = "# comment\n-brand = Portal\nnav-home = Home\n    .title = Tooltip\nchat-title = Chat\n";
    let ids = message_ids(src);
    assert_eq!(
        ids.into_iter().collect::<Vec<_>>(),
        vec!["chat-title".to_string(), "nav-home".to_string()]
    );
}

#[test]
fn bundle_file_is_named_after_the_crate() {
    // `fl!` resolves the fallback bundle from the package name with `-` mapped to `_`.
    let expected = format!("{}.ftl", env!("CARGO_PKG_NAME").replace('-', "_"));
    assert_eq!(FTL_FILENAME, expected);
    for locale in locales() {
        let path = crate_root().join("i18n").join(&locale).join(&expected);
        assert!(path.is_file(), "missing bundle {path:?}");
    }
}
