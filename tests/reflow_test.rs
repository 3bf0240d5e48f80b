//! Integration tests for paragraph reconstruction and normalization.

use undoc::reflow::{
    classify, is_continuation, normalize, reassemble, reflow_block, LineKind, NormalizeOptions,
    Normalizer,
};
use undoc::{reflow_text, LogicalLine};

#[test]
fn test_classifier_is_total() {
    let cases = [
        ("", LineKind::Blank),
        ("Issue 12: budget", LineKind::Marker),
        ("Press Byte", LineKind::Marker),
        ("Actionable items", LineKind::Marker),
        ("• first", LineKind::ListItem),
        ("■ boxed", LineKind::ListItem),
        ("10. tenth", LineKind::ListItem),
        ("issue in lowercase", LineKind::Prose),
        ("10 without period", LineKind::Prose),
    ];
    for (line, expected) in cases {
        assert_eq!(classify(line), expected, "{line:?}");
    }
}

#[test]
fn test_continuation_rules() {
    assert!(!is_continuation("This is a sentence.", "Next starts here"));
    assert!(is_continuation("This is a", "continued sentence"));
    assert!(is_continuation("ends with:", "Capitalized next"));
    assert!(!is_continuation("anything", ""));
}

#[test]
fn test_wrapped_sentence_merges() {
    let lines = reassemble(["The quick brown fox", "jumps over the lazy dog."]);
    assert_eq!(
        lines,
        vec![LogicalLine::Paragraph(
            "The quick brown fox jumps over the lazy dog.".to_string()
        )]
    );
}

#[test]
fn test_marker_splits_paragraphs() {
    let lines = reassemble(["Some text.", "Issue: overview", "More text"]);
    assert_eq!(
        lines,
        vec![
            LogicalLine::Paragraph("Some text.".to_string()),
            LogicalLine::Marker("Issue: overview".to_string()),
            LogicalLine::Paragraph("More text".to_string()),
        ]
    );
}

#[test]
fn test_lists_keep_their_lines() {
    let text = reflow_block("Steps:\n1. open the file\n2. read it\n- note one\n- note two");
    assert_eq!(
        text,
        "Steps:\n1. open the file\n2. read it\n- note one\n- note two"
    );
}

#[test]
fn test_newsletter_page() {
    let page = "Brief 14\n\
                The council approved the\n\
                new transit plan on Monday,\n\
                Officials said work begins in May.\n\
                \n\
                Actionable\n\
                • Review the route map\n\
                • Submit comments by June";
    let expected = "Brief 14\n\
                    The council approved the new transit plan on Monday, Officials said work begins in May.\n\
                    Actionable\n\
                    • Review the route map\n\
                    • Submit comments by June";
    assert_eq!(reflow_block(page), expected);
}

#[test]
fn test_normalize_typography() {
    assert_eq!(normalize("“curly” — dash"), "\"curly\" - dash");
    assert_eq!(normalize("‘single’ end–to–end"), "'single' end-to-end");
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = [
        "  a  b \n\n\n\n c ",
        "“x”\u{00A0}\u{00A0}y\n \n \n z",
        "line\n\n\n",
        "",
        "\n\n\n",
    ];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "{sample:?}");
    }
}

#[test]
fn test_extended_normalizer() {
    let normalizer = Normalizer::new(NormalizeOptions::extended());
    assert_eq!(normalizer.process("e\u{FB01}ne caf\u{0065}\u{0301}\u{FFFD}"), "efine café");
}

#[test]
fn test_reflow_text_end_to_end() {
    let raw = "Issue 7\nPrices rose\nsharply this quarter.\n\n\n\nAnalysts expect\nrelief.";
    assert_eq!(
        reflow_text(raw),
        "Issue 7\nPrices rose sharply this quarter.\n\nAnalysts expect relief."
    );
}
