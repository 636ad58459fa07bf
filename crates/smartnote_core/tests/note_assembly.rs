use chrono::{TimeZone, Utc};
use smartnote_core::{
    assemble_note, builtin_lexicon, classify, derive_title, extract_key_points, generate_tags,
    normalize, Note, NoteOrganizer, SourceDocument,
};

const BIOLOGY_LECTURE: &str = "Lecture 4:   Cell biology!\n\n\
    The cell membrane regulates transport of every protein and enzyme.   \
    Genetics explains how DNA encodes each protein in an organism. \
    Short aside. \
    Evolution shapes species over long periods of time?? \
    Metabolism converts nutrients into usable energy for the cell.";

#[test]
fn empty_text_yields_fallback_note() {
    let organizer = NoteOrganizer::default();
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    let note = organizer.assemble_at(&SourceDocument::new("", "lecture-notes.pdf"), now);

    assert_eq!(
        note,
        Note {
            title: "lecture-notes".to_string(),
            date: "2026-10-19".to_string(),
            subject: "General".to_string(),
            summary_points: vec!["Content extracted successfully".to_string()],
            full_text: String::new(),
            tags: vec!["general".to_string()],
        }
    );
}

#[test]
fn math_heavy_text_is_organized_as_math() {
    let raw = "The derivative of this equation involves calculus and algebra. \
               Each polynomial function has an integral we can calculate by formula.";
    let document = SourceDocument::new(raw, "math.txt").with_last_modified_ms(1_700_000_000_000);
    let note = NoteOrganizer::default().assemble(&document);

    assert_eq!(note.subject, "Math");
    assert_eq!(note.date, "2023-11-14");
    assert_eq!(note.title, "The derivative of this equation involves calcul...");
    assert_eq!(note.tags[0], "math");
    assert!(note.tags.len() <= 6);
}

#[test]
fn biology_lecture_pipeline_end_to_end() {
    let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    let document = SourceDocument::new(BIOLOGY_LECTURE, "bio.txt");
    let note = NoteOrganizer::default().assemble_at(&document, now);

    assert_eq!(note.subject, "Biology");
    assert_eq!(note.full_text, normalize(BIOLOGY_LECTURE));
    assert!(note.full_text.starts_with("Lecture 4: Cell biology! The cell membrane"));
    assert_eq!(note.title, "Lecture 4: Cell biology! The cell membrane regu...");
    assert_eq!(
        note.summary_points,
        vec![
            "The cell membrane regulates transport of every protein and enzyme",
            "Genetics explains how DNA encodes each protein in an organism",
            "Evolution shapes species over long periods of time",
            "Metabolism converts nutrients into usable energy for the cell",
        ]
    );
    assert_eq!(
        note.tags,
        vec!["biology", "cell", "organism", "evolution", "genetics", "DNA"]
    );
}

#[test]
fn note_serializes_to_flat_record_with_wire_field_names() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
    let note = NoteOrganizer::default().assemble_at(&SourceDocument::new("", "scan.png"), now);
    let json = serde_json::to_value(&note).unwrap();

    let object = json.as_object().expect("note should serialize to an object");
    let mut keys = object.keys().cloned().collect::<Vec<_>>();
    keys.sort();
    assert_eq!(
        keys,
        vec!["date", "full_text", "subject", "summary_points", "tags", "title"]
    );
    assert_eq!(json["title"], "scan");
    assert_eq!(json["summary_points"][0], "Content extracted successfully");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn free_function_matches_organizer() {
    let document = SourceDocument::new(BIOLOGY_LECTURE, "bio.txt").with_last_modified_ms(0);
    let via_fn = assemble_note(builtin_lexicon(), &document);
    let via_service = NoteOrganizer::default().assemble(&document);
    assert_eq!(via_fn, via_service);
}

#[test]
fn pipeline_invariants_hold_across_varied_inputs() {
    let samples = [
        "",
        "   ",
        "@@@ ### $$$",
        "one",
        "Supercalifragilisticexpialidociousandevenlongerwordwithoutanyspacesatallreally",
        "war war war. empire empire! treaty? revolution revolution revolution revolution.",
        "market supply demand inflation GDP recession investment profit revenue",
        BIOLOGY_LECTURE,
    ];
    for raw in samples {
        let normalized = normalize(raw);
        assert_eq!(normalize(&normalized), normalized, "idempotence: {raw:?}");

        let first = classify(&normalized, builtin_lexicon());
        let second = classify(&normalized, builtin_lexicon());
        assert_eq!(first, second, "determinism: {raw:?}");

        let points = extract_key_points(&normalized);
        assert!((1..=5).contains(&points.len()), "points: {raw:?}");

        let title = derive_title(&normalized, "fallback-name.txt");
        assert!(title.chars().count() <= 50, "title: {raw:?}");

        let tags = generate_tags(&normalized, &first.subject, builtin_lexicon());
        assert!(tags.len() <= 6, "tag count: {raw:?}");
        let mut unique = tags.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), tags.len(), "tag duplicates: {raw:?}");
    }
}

#[test]
fn documents_can_be_assembled_in_parallel() {
    let organizer = NoteOrganizer::default();
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
    let documents = (0..8)
        .map(|i| {
            SourceDocument::new(format!("{BIOLOGY_LECTURE} copy {i}"), format!("doc{i}.txt"))
        })
        .collect::<Vec<_>>();
    let expected = documents
        .iter()
        .map(|document| organizer.assemble_at(document, now))
        .collect::<Vec<_>>();

    let shared = &organizer;
    let parallel = std::thread::scope(|scope| {
        let handles = documents
            .iter()
            .map(|document| scope.spawn(move || shared.assemble_at(document, now)))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert_eq!(parallel, expected);
}
