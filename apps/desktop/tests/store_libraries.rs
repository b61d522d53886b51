//! Library registry tests.

mod common;

use pretty_assertions::assert_eq;
use vocab_core::types::{Library, QueryOrder, Status, DEFAULT_LIBRARY_ID};
use vocab_desktop::db::{DbError, LibraryRepository, WordRepository};

const ALL: [Status; 3] = [Status::New, Status::Review, Status::Mastered];

#[test]
fn fresh_store_has_default_library() {
    let repo = common::repo();
    let libraries = repo.list_libraries().unwrap();

    assert_eq!(libraries.len(), 1);
    assert_eq!(libraries[0].id, DEFAULT_LIBRARY_ID);
    assert_eq!(libraries[0].name, "default");
    assert!(libraries[0].active);
    assert_eq!(libraries[0].word_count, 0);
}

#[test]
fn add_creates_active_library() {
    let repo = common::repo();
    let id = repo.add_library("CET4").unwrap();

    assert_eq!(
        repo.get_library(id).unwrap(),
        Some(Library {
            id,
            name: "CET4".to_string(),
            active: true,
        })
    );
}

#[test]
fn same_name_creates_separate_libraries() {
    let repo = common::repo();
    let a = repo.add_library("words").unwrap();
    let b = repo.add_library("words").unwrap();
    assert_ne!(a, b);
    assert_eq!(repo.list_libraries().unwrap().len(), 3);
}

#[test]
fn delete_removes_only_owned_words() {
    let repo = common::repo();
    let keep = common::library_with(&repo, "keep", &[("cat", "猫"), ("dog", "狗")]);
    let doomed = common::library_with(&repo, "drop", &[("cat", "猫"), ("bird", "鸟"), ("fish", "鱼")]);

    let before: Vec<_> = repo
        .query_words(&ALL, QueryOrder::Sequential, None)
        .unwrap()
        .into_iter()
        .filter(|w| w.library_id == keep)
        .collect();

    assert_eq!(repo.delete_library(doomed).unwrap(), 3);

    assert_eq!(repo.get_library(doomed).unwrap(), None);
    let after = repo.query_words(&ALL, QueryOrder::Sequential, None).unwrap();
    assert_eq!(after, before);
    assert_eq!(repo.total_count().unwrap(), 2);
}

#[test]
fn delete_unknown_library_fails() {
    let repo = common::repo();
    assert!(matches!(
        repo.delete_library(404),
        Err(DbError::LibraryNotFound(404))
    ));
}

#[test]
fn inactive_library_is_hidden_from_reads_but_listed() {
    let repo = common::repo();
    let shown = common::library_with(&repo, "shown", &[("one", "一")]);
    let hidden = common::library_with(&repo, "hidden", &[("two", "二"), ("three", "三")]);

    let mastered = repo
        .query_words(&ALL, QueryOrder::Sequential, None)
        .unwrap()
        .into_iter()
        .find(|w| w.library_id == hidden)
        .unwrap();
    repo.update_status(mastered.id, Status::Mastered).unwrap();

    repo.set_library_active(hidden, false).unwrap();

    let visible = repo.query_words(&ALL, QueryOrder::Sequential, None).unwrap();
    assert!(visible.iter().all(|w| w.library_id == shown));
    assert_eq!(visible.len(), 1);
    assert_eq!(repo.total_count().unwrap(), 1);
    assert_eq!(repo.word_stats().unwrap().mastered, 0);
    assert!(repo.words_by_status(Status::Mastered).unwrap().is_empty());

    let listed = repo.list_libraries().unwrap();
    let hidden_summary = listed.iter().find(|l| l.id == hidden).unwrap();
    assert!(!hidden_summary.active);
    assert_eq!(hidden_summary.word_count, 2);

    repo.set_library_active(hidden, true).unwrap();
    assert_eq!(repo.total_count().unwrap(), 3);
    assert_eq!(repo.word_stats().unwrap().mastered, 1);
}

#[test]
fn word_count_ignores_status() {
    let repo = common::repo();
    let id = common::library_with(&repo, "mixed", &[("a", "甲"), ("b", "乙")]);
    for word in repo.query_words(&ALL, QueryOrder::Sequential, None).unwrap() {
        repo.update_status(word.id, Status::Mastered).unwrap();
    }

    let summary = repo
        .list_libraries()
        .unwrap()
        .into_iter()
        .find(|l| l.id == id)
        .unwrap();
    assert_eq!(summary.word_count, 2);
}

#[test]
fn set_active_unknown_library_fails() {
    let repo = common::repo();
    assert!(matches!(
        repo.set_library_active(77, false),
        Err(DbError::LibraryNotFound(77))
    ));
}
