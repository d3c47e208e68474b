//! End-to-end scenarios through the public API

use mots_core::{
    application::TraversalConfig, CancellationToken, Config, Error, Gender, Grammar, Input,
    Language, Lexicon, Number, PhraseKind, Processor, SentenceKind, Suggester, Tag, Tokenizer,
    WordVariant,
};

fn french(tag: Tag) -> WordVariant {
    WordVariant::new(tag, Language::French)
}

fn sample_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::with_builtins();
    for (spelling, tag) in [
        ("la", Tag::Determiner),
        ("une", Tag::Determiner),
        ("vie", Tag::Noun),
        ("maison", Tag::Noun),
        ("est", Tag::Verb),
        ("belle", Tag::Adjective),
        ("blanche", Tag::Adjective),
        ("aujourd'hui", Tag::Adverb),
        ("c'est", Tag::Verb),
        ("vrai", Tag::Adjective),
        ("ce", Tag::Determiner),
        ("soir", Tag::Noun),
    ] {
        lexicon.insert(spelling, [french(tag)]).unwrap();
    }
    lexicon
        .insert(
            "chatte",
            [french(Tag::Noun)
                .with_gender(Gender::Female)
                .with_number(Number::SINGULAR)],
        )
        .unwrap();
    lexicon
        .insert(
            "chat",
            [french(Tag::Noun)
                .with_gender(Gender::Male)
                .with_number(Number::SINGULAR)],
        )
        .unwrap();
    lexicon
        .insert("chats", [french(Tag::Noun).with_number(Number::PLURAL)])
        .unwrap();
    for spelling in ["tact", "test", "texte", "toast"] {
        lexicon
            .insert(spelling, [WordVariant::new(Tag::Noun, Language::English)])
            .unwrap();
    }
    lexicon
}

#[test]
fn test_tokens_tile_the_input() {
    let lexicon = sample_lexicon();
    let tokenizer = Tokenizer::new(&lexicon).unwrap();
    let text = "La vie est belle, aujourd'hui... (12h40) @lapresse 25°C";
    let tokens = tokenizer.tokenize(text, true);

    let mut expected_start = 0;
    for token in &tokens {
        assert_eq!(token.start(), expected_start);
        assert!(token.end() > token.start());
        expected_start = token.end();
    }
    assert_eq!(expected_start, text.len());

    let find = |piece: &str| {
        tokens
            .iter()
            .find(|t| t.text(text) == piece)
            .unwrap_or_else(|| panic!("no token {piece:?}"))
    };
    assert!(find("aujourd'hui").is_tagged(Tag::Adverb));
    assert!(find("...").is_sentence_end());
    assert!(find("12h40").is_time());
    assert!(find("@lapresse").is_url());
    assert!(find("25°C").is_temperature());
}

#[test]
fn test_sentences_with_parenthetical() {
    let lexicon = sample_lexicon();
    let tokenizer = Tokenizer::new(&lexicon).unwrap();
    let text = "La vie est belle. (C'est vrai.)";
    let sentences = tokenizer.segment_sentences(text);

    let summary: Vec<(SentenceKind, &str)> =
        sentences.iter().map(|s| (s.kind(), s.text(text))).collect();
    assert_eq!(
        summary,
        vec![
            (SentenceKind::Sentence, "La vie est belle."),
            (SentenceKind::Separator, " "),
            (SentenceKind::Parenthetical, "(C'est vrai.)"),
        ]
    );
}

#[test]
fn test_archive_round_trip_on_disk() {
    let lexicon = sample_lexicon();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.bin");

    let written = lexicon.save(&path).unwrap();
    assert_eq!(written, lexicon.word_count());

    let loaded = Lexicon::from_file(&path).unwrap();
    assert_eq!(loaded.word_count(), lexicon.word_count());
    assert_eq!(loaded.max_entry_tokens(), lexicon.max_entry_tokens());
    for spelling in ["aujourd'hui", "chatte", "...", "\u{a0}"] {
        assert_eq!(
            loaded.get(spelling).map(|w| w.variants().to_vec()),
            lexicon.get(spelling).map(|w| w.variants().to_vec()),
            "{spelling:?}"
        );
    }
}

#[test]
fn test_loading_into_existing_lexicon_merges() {
    let mut source = Lexicon::new();
    source.insert("vie", [french(Tag::Noun)]).unwrap();
    let mut archive = Vec::new();
    mots_core::domain::write_lexicon(&source, &mut archive).unwrap();

    let mut target = Lexicon::new();
    target
        .insert("vie", [WordVariant::new(Tag::Noun, Language::English)])
        .unwrap();
    mots_core::domain::read_lexicon(archive.as_slice(), &mut target).unwrap();

    let word = target.get("vie").unwrap();
    assert_eq!(word.variants().len(), 2);
    assert_eq!(target.word_count(), 1);
}

#[test]
fn test_alternatives_sequential_and_parallel_agree() {
    let lexicon = sample_lexicon();
    let spell = |words: Vec<&mots_core::Word>| -> Vec<String> {
        words.iter().map(|w| lexicon.spelling(w)).collect()
    };

    let sequential = Suggester::with_config(&lexicon, &TraversalConfig::sequential())
        .unwrap()
        .find_alternatives("tast", Language::English, 1)
        .unwrap();
    assert_eq!(spell(sequential.clone()), vec!["tact", "test"]);

    let parallel = Suggester::with_config(&lexicon, &TraversalConfig { threads: Some(4) })
        .unwrap()
        .find_alternatives("tast", Language::English, 1)
        .unwrap();
    assert_eq!(spell(parallel), spell(sequential));

    assert!(lexicon
        .find_alternatives("tast", Language::French, 1)
        .is_empty());
}

#[test]
fn test_autocomplete_with_filter() {
    let lexicon = sample_lexicon();
    let all: Vec<String> = lexicon
        .autocomplete("chat", None)
        .iter()
        .map(|w| lexicon.spelling(w))
        .collect();
    assert_eq!(all, vec!["chat", "chats", "chatte"]);

    let query = french(Tag::Noun).with_gender(Gender::Female);
    let feminine: Vec<String> = lexicon
        .autocomplete("ch", Some(&query))
        .iter()
        .map(|w| lexicon.spelling(w))
        .collect();
    assert_eq!(feminine, vec!["chatte"]);

    assert!(lexicon.autocomplete("xyz", None).is_empty());
}

#[test]
fn test_cancelled_traversal_fails() {
    let lexicon = sample_lexicon();
    let token = CancellationToken::new();
    token.cancel();
    for threads in [1, 4] {
        let suggester = Suggester::with_config(
            &lexicon,
            &TraversalConfig {
                threads: Some(threads),
            },
        )
        .unwrap()
        .with_cancellation(token.clone());
        assert!(matches!(
            suggester.autocomplete("ch", None),
            Err(Error::Cancelled)
        ));
    }
}

#[test]
fn test_noun_phrase_after_tokenization() {
    let lexicon = sample_lexicon();
    let tokenizer = Tokenizer::new(&lexicon).unwrap();
    let text = "une maison blanche";
    let tokens = tokenizer.tokenize(text, true);
    let phrase = Grammar::noun_phrases().match_tokens(&tokens).unwrap();
    assert_eq!(phrase.kind, PhraseKind::DeterminerNounAdjective);
    assert_eq!(phrase.range, 0..tokens.len());
}

#[test]
fn test_processor_reads_file_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("texte.txt");
    std::fs::write(&path, "La vie est belle.\tCe soir").unwrap();

    let processor = Processor::with_config(
        sample_lexicon(),
        Config::builder().threads(Some(1)).build().unwrap(),
    )
    .unwrap();
    let analysis = processor.process(Input::from_file(&path)).unwrap();
    let kinds: Vec<SentenceKind> = analysis.sentences.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, vec![SentenceKind::Sentence, SentenceKind::Sentence]);
    assert_eq!(analysis.unresolved().count(), 0);
}
