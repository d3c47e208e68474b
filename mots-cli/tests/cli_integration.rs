//! Integration tests for the mots CLI

use assert_cmd::Command;
use mots_core::{Gender, Language, Lexicon, Tag, WordVariant};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a small archive into `dir` and return its path
fn write_lexicon(dir: &Path) -> PathBuf {
    let mut lexicon = Lexicon::new();
    let fr = |tag| WordVariant::new(tag, Language::French);
    for (spelling, tag) in [
        ("la", Tag::Determiner),
        ("vie", Tag::Noun),
        ("est", Tag::Verb),
        ("belle", Tag::Adjective),
        ("c'est", Tag::Verb),
        ("vrai", Tag::Adjective),
        ("aujourd'hui", Tag::Adverb),
        ("chat", Tag::Noun),
    ] {
        lexicon.insert(spelling, [fr(tag)]).unwrap();
    }
    lexicon
        .insert("chatte", [fr(Tag::Noun).with_gender(Gender::Female)])
        .unwrap();
    lexicon.insert("chaton", [fr(Tag::Adjective)]).unwrap();
    for spelling in ["tact", "test"] {
        lexicon
            .insert(spelling, [WordVariant::new(Tag::Noun, Language::English)])
            .unwrap();
    }

    let path = dir.join("lexique.bin");
    lexicon.save(&path).unwrap();
    path
}

fn mots(lexicon: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mots").unwrap();
    cmd.env("MOTS_LEXICON", lexicon);
    cmd
}

#[test]
fn test_tokenize_literal_text() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(dir.path());

    mots(&lexicon)
        .args(["tokenize", "--skip-whitespace", "La vie est belle, aujourd'hui."])
        .assert()
        .success()
        .stdout(predicate::str::contains("La\tword\tDeterminer/fr"))
        .stdout(predicate::str::contains("vie\tword\tNoun/fr"))
        .stdout(predicate::str::contains("aujourd'hui\tword\tAdverb/fr"))
        .stdout(predicate::str::contains(",\tword\tComma"))
        .stdout(predicate::str::contains(" \tword").not());
}

#[test]
fn test_tokenize_without_compounding() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(dir.path());

    mots(&lexicon)
        .args(["tokenize", "--no-compound", "aujourd'hui"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aujourd\tunresolved"))
        .stdout(predicate::str::contains("hui\tunresolved"));
}

#[test]
fn test_sentences_from_file_as_json() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(dir.path());
    let input = dir.path().join("texte.txt");
    fs::write(&input, "La vie est belle. (C'est vrai.)").unwrap();

    mots(&lexicon)
        .arg("sentences")
        .arg("-i")
        .arg(&input)
        .args(["-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"La vie est belle.\""))
        .stdout(predicate::str::contains("\"label\": \"parenthetical\""))
        .stdout(predicate::str::contains("separator").not());
}

#[test]
fn test_sentences_markdown_with_separators() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(dir.path());

    mots(&lexicon)
        .args(["sentences", "--separators", "-f", "markdown", "La vie est belle. C'est vrai."])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. `La vie est belle.` (sentence)"))
        .stdout(predicate::str::contains("2. ` ` (separator)"))
        .stdout(predicate::str::contains("*Total records: 3*"));
}

#[test]
fn test_sentences_glob_over_several_files() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(dir.path());
    fs::write(dir.path().join("a.txt"), "La vie est belle.").unwrap();
    fs::write(dir.path().join("b.txt"), "C'est vrai.").unwrap();
    let pattern = dir.path().join("*.txt").display().to_string();

    mots(&lexicon)
        .args(["sentences", "-q", "-i", &pattern])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt\tLa vie est belle.\tsentence"))
        .stdout(predicate::str::contains("b.txt\tC'est vrai.\tsentence"));
}

#[test]
fn test_lookup() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(dir.path());

    mots(&lexicon)
        .args(["lookup", "--prefix", "chatte", "chattes", "zut"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chatte\tfound\tNoun/fr"))
        .stdout(predicate::str::contains("chatte\tprefix\tNoun/fr"))
        .stdout(predicate::str::contains("zut\tmissing"));
}

#[test]
fn test_complete_with_tag_filter() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(dir.path());

    mots(&lexicon)
        .args(["complete", "chat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chaton\tcompletion"))
        .stdout(predicate::str::contains("chatte\tcompletion"));

    mots(&lexicon)
        .args(["complete", "--tag", "adj", "chat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chaton\tcompletion"))
        .stdout(predicate::str::contains("chatte").not());

    mots(&lexicon)
        .args(["complete", "--tag", "nom", "chat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tag"));
}

#[test]
fn test_correct() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(dir.path());

    mots(&lexicon)
        .args(["correct", "--language", "en", "tast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tact\tdistance 1\tNoun/en"))
        .stdout(predicate::str::contains("test\tdistance 1\tNoun/en"));

    mots(&lexicon)
        .args(["correct", "--language", "en", "-d", "0", "tast"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_lexicon() {
    let mut cmd = Command::cargo_bin("mots").unwrap();
    cmd.env_remove("MOTS_LEXICON")
        .args(["tokenize", "vie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No lexicon given"));
}

#[test]
fn test_generate_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let lexicon = write_lexicon(dir.path());
    let config = dir.path().join("mots.toml");

    Command::cargo_bin("mots")
        .unwrap()
        .arg("generate-config")
        .arg("--lexicon")
        .arg(&lexicon)
        .arg("-o")
        .arg(&config)
        .assert()
        .success();

    Command::cargo_bin("mots")
        .unwrap()
        .env_remove("MOTS_LEXICON")
        .arg("lookup")
        .arg("-c")
        .arg(&config)
        .arg("vie")
        .assert()
        .success()
        .stdout(predicate::str::contains("vie\tfound\tNoun/fr"));
}
