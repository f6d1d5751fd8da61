use super::*;
use crate::core::document::Chapter;
use crate::core::status_log::LogKind;
use crate::utils::test_utils::{create_empty_test_app, create_test_app, log_texts};

#[test]
fn empty_input_is_a_no_op() {
    let mut app = create_test_app();
    let before = app.document.current_chapter().unwrap().body().to_string();

    assert_eq!(process_input(&mut app, ""), CommandResult::Continue);
    assert_eq!(process_input(&mut app, "   \t "), CommandResult::Continue);

    assert!(app.status.is_empty());
    assert_eq!(app.document.current_chapter().unwrap().body(), before);
}

#[test]
fn repeated_new_commands_build_contiguous_chapters() {
    let mut app = create_empty_test_app();
    for _ in 0..4 {
        assert_eq!(
            process_input(&mut app, "new"),
            CommandResult::DocumentChanged
        );
    }

    let indices: Vec<usize> = app.document.chapters().iter().map(Chapter::index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);
    assert_eq!(app.document.current_chapter().map(Chapter::index), Some(4));
    assert_eq!(
        log_texts(&app),
        vec![
            "Created chapter 1",
            "Created chapter 2",
            "Created chapter 3",
            "Created chapter 4"
        ]
    );
}

#[test]
fn new_accepts_a_title_and_any_case() {
    let mut app = create_test_app();
    process_input(&mut app, "NEW   The Night Market  ");
    let chapter = app.document.current_chapter().unwrap();
    assert_eq!(chapter.index(), 2);
    assert_eq!(chapter.title(), "The Night Market");

    process_input(&mut app, "/new");
    assert_eq!(app.document.current_chapter().unwrap().title(), "Untitled");
}

#[test]
fn prose_without_chapters_logs_exactly_one_warning() {
    let mut app = create_empty_test_app();

    assert_eq!(
        process_input(&mut app, "Rain fell on Neo-Seoul."),
        CommandResult::Continue
    );

    assert_eq!(app.status.len(), 1);
    let entry = app.status.last().unwrap();
    assert_eq!(entry.text, "No active chapter");
    assert_eq!(entry.kind, LogKind::Warning);
}

#[test]
fn new_then_prose_fills_the_fresh_chapter_without_logging() {
    let mut app = create_test_app();

    process_input(&mut app, "new");
    assert_eq!(
        process_input(&mut app, "Rain fell on Neo-Seoul."),
        CommandResult::DocumentChanged
    );

    let tail: Vec<&str> = app.status.tail(2).iter().map(|e| e.text.as_str()).collect();
    assert_eq!(tail, vec!["Created chapter 2"]);
    assert_eq!(
        app.document.current_chapter().unwrap().body(),
        "Rain fell on Neo-Seoul."
    );
}

#[test]
fn prose_appends_to_the_opening_chapter_on_a_new_line() {
    let mut app = create_test_app();
    let opening = app.document.current_chapter().unwrap().body().to_string();

    process_input(&mut app, "Hello");
    process_input(&mut app, "Lee looked up.");

    let body = app.document.current_chapter().unwrap().body();
    assert_eq!(body, format!("{opening}\nHello\nLee looked up."));
    assert!(app.status.is_empty());
}

#[test]
fn unknown_words_and_misfit_arguments_fall_through_to_prose() {
    let mut app = create_empty_test_app();
    process_input(&mut app, "new");

    for line in [
        "Save the cat.",
        "quit it",
        "goto the market",
        "goto 0",
        "goto +1",
        "/unknown thing",
        "q?",
        "help me",
    ] {
        assert_eq!(process_input(&mut app, line), CommandResult::DocumentChanged);
    }

    let body = app.document.current_chapter().unwrap().body();
    assert_eq!(
        body,
        "Save the cat.\nquit it\ngoto the market\ngoto 0\ngoto +1\n/unknown thing\nq?\nhelp me"
    );
    assert_eq!(log_texts(&app), vec!["Created chapter 1"]);
}

#[test]
fn save_is_a_logged_stub() {
    let mut app = create_test_app();
    assert_eq!(process_input(&mut app, "Save"), CommandResult::Continue);
    assert_eq!(log_texts(&app), vec!["Saved (stub)"]);
    assert_eq!(app.document.len(), 1);
}

#[test]
fn quit_variants_request_termination_without_logging() {
    let mut app = create_test_app();
    for line in ["quit", "q", "QUIT", "/q", "  q  "] {
        assert_eq!(process_input(&mut app, line), CommandResult::Quit);
    }
    assert!(app.status.is_empty());
}

#[test]
fn goto_switches_the_prose_target() {
    let mut app = create_test_app();
    process_input(&mut app, "new Second");

    assert_eq!(process_input(&mut app, "goto 1"), CommandResult::DocumentChanged);
    process_input(&mut app, "Back to the start.");

    assert!(app.document.chapters()[0]
        .body()
        .ends_with("\nBack to the start."));
    assert!(app.document.chapters()[1].body().is_empty());
    assert_eq!(app.status.last().unwrap().text, "Switched to chapter 1");
}

#[test]
fn goto_out_of_range_warns_and_keeps_current() {
    let mut app = create_test_app();

    assert_eq!(process_input(&mut app, "goto 7"), CommandResult::Continue);

    let entry = app.status.last().unwrap();
    assert_eq!(entry.text, "No chapter 7 (have 1)");
    assert_eq!(entry.kind, LogKind::Warning);
    assert_eq!(app.document.current_chapter().map(Chapter::index), Some(1));
}

#[test]
fn chapters_lists_titles_and_marks_current() {
    let mut app = create_test_app();
    process_input(&mut app, "new Rain");
    process_input(&mut app, "goto 1");
    process_input(&mut app, "chapters");

    assert_eq!(
        app.status.last().unwrap().text,
        "Chapters: *1. The Awakening, 2. Rain"
    );

    let mut empty = create_empty_test_app();
    process_input(&mut empty, "chapters");
    assert_eq!(log_texts(&empty), vec!["No chapters yet"]);
}

#[test]
fn help_mentions_every_command() {
    let mut app = create_test_app();
    process_input(&mut app, "help");
    let text = &app.status.last().unwrap().text;
    for command in all_commands() {
        assert!(text.contains(command.usage), "missing {}", command.name);
    }
}

#[test]
fn bound_command_ids_match_typed_keywords() {
    let mut app = create_test_app();
    assert_eq!(
        execute_command(&mut app, CommandId::NewChapter),
        CommandResult::DocumentChanged
    );
    assert_eq!(execute_command(&mut app, CommandId::Save), CommandResult::Continue);
    assert_eq!(execute_command(&mut app, CommandId::Quit), CommandResult::Quit);
    assert_eq!(log_texts(&app), vec!["Created chapter 2", "Saved (stub)"]);
}
