use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordle_game::{load_dictionary, Dictionary, WordleError};

#[test]
fn test_parse_uppercases_and_skips_bad_entries() {
    let dictionary = Dictionary::parse("crane\n\n  slate \nab\ntoolong\nc4ane\nTRACE\n").unwrap();

    assert_eq!(dictionary.len(), 3);
    assert_eq!(dictionary.words(), &["CRANE", "SLATE", "TRACE"]);
}

#[test]
fn test_contains_is_case_insensitive() {
    let dictionary = Dictionary::from_words(["crane"]).unwrap();

    assert!(dictionary.contains("CRANE"));
    assert!(dictionary.contains("crane"));
    assert!(dictionary.contains("CrAnE"));
    assert!(!dictionary.contains("TRACE"));
}

#[test]
fn test_duplicates_collapse() {
    let dictionary = Dictionary::from_words(["crane", "CRANE", "Crane", "slate"]).unwrap();
    assert_eq!(dictionary.len(), 2);
}

#[test]
fn test_empty_dictionary_is_rejected() {
    let err = Dictionary::from_words(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, WordleError::EmptyDictionary { len: 5 }));

    let err = Dictionary::parse("abc\nabcdef\n").unwrap_err();
    assert!(matches!(err, WordleError::EmptyDictionary { .. }));
}

#[test]
fn test_load_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "crane\ntrace\nslate").unwrap();

    let dictionary = Dictionary::load_from_path(file.path()).unwrap();
    assert_eq!(dictionary.len(), 3);
    assert!(dictionary.contains("TRACE"));
}

#[test]
fn test_load_from_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    match Dictionary::load_from_path(&path) {
        Err(WordleError::DictionaryRead { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[test]
fn test_choose_draws_members() {
    let dictionary = Dictionary::from_words(["crane", "trace", "slate"]).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let word = dictionary.choose(&mut rng);
        assert!(dictionary.contains(word));
    }
}

#[test]
fn test_choose_reaches_every_word() {
    let dictionary = Dictionary::from_words(["crane", "trace", "slate"]).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(dictionary.choose(&mut rng).to_string());
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_embedded_dictionary() {
    let dictionary = load_dictionary().unwrap();

    assert!(dictionary.len() > 100);
    assert!(dictionary.contains("crane"));
    assert!(dictionary.contains("TRACE"));
    assert!(!dictionary.contains("ZZZZZ"));
    assert!(dictionary.words().iter().all(|w| w.len() == 5 && w.chars().all(|c| c.is_ascii_uppercase())));
}
