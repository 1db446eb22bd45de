use std::sync::Once;

use pretty_assertions::assert_eq;
use wordtree_core::{
    count_object_words, count_words, CollectingSink, CountOptions, Diagnostic, Node, NullPolicy,
    PathSegment, ResultNode, WordCount,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wordtree_logging::initialize_for_tests);
}

fn text(value: &str) -> Node {
    Node::Text(value.to_string())
}

fn mapping(entries: Vec<(&str, Node)>) -> Node {
    Node::Mapping(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

fn words<const N: usize>(pairs: [(&str, u64); N]) -> ResultNode {
    ResultNode::Words(WordCount::from(pairs))
}

#[test]
fn issue_record_counts_every_field() {
    init_logging();
    let documents = vec![mapping(vec![
        ("title", text("Bug: crash on start")),
        ("id", Node::Integer(7)),
    ])];
    let mut sink = CollectingSink::new();

    let results = count_words(&documents, &CountOptions::default(), &mut sink);

    assert_eq!(
        results,
        vec![ResultNode::Mapping(vec![
            (
                "title".to_string(),
                words([("bug", 1), ("crash", 1), ("on", 1), ("start", 1)])
            ),
            ("id".to_string(), words([("7", 1)])),
        ])]
    );
    assert!(sink.diagnostics.is_empty());
}

#[test]
fn mapping_keeps_source_key_order() {
    init_logging();
    let doc = mapping(vec![
        ("zeta", text("z")),
        ("alpha", text("a")),
        ("mid", Node::Boolean(true)),
    ]);
    let result = count_object_words(&doc, &CountOptions::default(), &mut CollectingSink::new())
        .unwrap();
    assert_eq!(result.keys(), vec!["zeta", "alpha", "mid"]);
    assert_eq!(result.get("mid"), Some(&words([("true", 1)])));
}

#[test]
fn null_mapping_values_are_omitted_by_default() {
    init_logging();
    let doc = mapping(vec![("title", text("x")), ("assignee", Node::Null)]);
    let result = count_object_words(&doc, &CountOptions::default(), &mut CollectingSink::new())
        .unwrap();
    assert_eq!(result.keys(), vec!["title"]);
}

#[test]
fn null_mapping_values_become_placeholders_when_configured() {
    init_logging();
    let doc = mapping(vec![("title", text("x")), ("assignee", Node::Null)]);
    let options = CountOptions {
        null_policy: NullPolicy::Placeholder,
        ..CountOptions::default()
    };
    let result = count_object_words(&doc, &options, &mut CollectingSink::new()).unwrap();
    assert_eq!(result.keys(), vec!["title", "assignee"]);
    assert_eq!(result.get("assignee"), Some(&ResultNode::empty_words()));
}

#[test]
fn null_node_produces_nothing() {
    let result = count_object_words(&Node::Null, &CountOptions::default(), &mut CollectingSink::new());
    assert_eq!(result, None);
}

#[test]
fn sequence_preserves_length_and_order() {
    init_logging();
    let doc = Node::Sequence(vec![
        text("first one"),
        Node::Null,
        Node::Float(2.5),
        mapping(vec![("k", text("v"))]),
    ]);
    let result = count_object_words(&doc, &CountOptions::default(), &mut CollectingSink::new())
        .unwrap();

    assert_eq!(
        result,
        ResultNode::Sequence(vec![
            words([("first", 1), ("one", 1)]),
            ResultNode::empty_words(),
            words([("2", 1), ("5", 1)]),
            ResultNode::Mapping(vec![("k".to_string(), words([("v", 1)]))]),
        ])
    );
}

#[test]
fn sequence_valued_keys_stay_sequences() {
    init_logging();
    let doc = mapping(vec![(
        "labels",
        Node::Sequence(vec![text("good first issue"), text("bug")]),
    )]);
    let result = count_object_words(&doc, &CountOptions::default(), &mut CollectingSink::new())
        .unwrap();
    let labels = result.get("labels").and_then(ResultNode::as_sequence).unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[1], words([("bug", 1)]));
}

#[test]
fn deep_sequence_nesting_is_preserved() {
    init_logging();
    let mut node = text("leaf word");
    for _ in 0..6 {
        node = Node::Sequence(vec![node]);
    }
    let result = count_object_words(&node, &CountOptions::default(), &mut CollectingSink::new())
        .unwrap();

    let mut current = &result;
    let mut depth = 0;
    while let Some(items) = current.as_sequence() {
        assert_eq!(items.len(), 1);
        current = &items[0];
        depth += 1;
    }
    assert_eq!(depth, 6);
    assert_eq!(current, &words([("leaf", 1), ("word", 1)]));
}

#[test]
fn scalars_use_canonical_strings() {
    init_logging();
    let doc = Node::Sequence(vec![
        Node::Integer(-15),
        Node::Boolean(false),
        Node::Float(1e21),
    ]);
    let result = count_object_words(&doc, &CountOptions::default(), &mut CollectingSink::new())
        .unwrap();
    let items = result.as_sequence().unwrap();
    assert_eq!(items[0], words([("15", 1)]));
    assert_eq!(items[1], words([("false", 1)]));
    assert_eq!(items[2], words([("1000000000000000000000", 1)]));
}

#[test]
fn unsupported_nodes_report_and_continue() {
    init_logging();
    let documents = vec![
        mapping(vec![
            ("blob", Node::Unsupported("bytes".to_string())),
            ("title", text("still counted")),
        ]),
        text("second document"),
    ];
    let mut sink = CollectingSink::new();

    let results = count_words(&documents, &CountOptions::default(), &mut sink);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].get("blob"), Some(&ResultNode::empty_words()));
    assert_eq!(
        results[0].get("title"),
        Some(&words([("still", 1), ("counted", 1)]))
    );
    assert_eq!(results[1], words([("second", 1), ("document", 1)]));
    assert_eq!(
        sink.diagnostics,
        vec![Diagnostic::UnsupportedType {
            path: vec![PathSegment::Index(0), PathSegment::Key("blob".to_string())],
            type_name: "bytes".to_string(),
        }]
    );
}

#[test]
fn null_documents_keep_their_slot() {
    init_logging();
    let documents = vec![text("a"), Node::Null, text("b")];
    let results = count_words(&documents, &CountOptions::default(), &mut CollectingSink::new());
    assert_eq!(
        results,
        vec![words([("a", 1)]), ResultNode::empty_words(), words([("b", 1)])]
    );
}

#[test]
fn depth_limit_truncates_with_diagnostic() {
    init_logging();
    let doc = Node::Sequence(vec![Node::Sequence(vec![Node::Sequence(vec![text("deep")])])]);
    let options = CountOptions {
        max_depth: 1,
        ..CountOptions::default()
    };
    let mut sink = CollectingSink::new();

    let result = count_object_words(&doc, &options, &mut sink).unwrap();

    assert_eq!(
        result,
        ResultNode::Sequence(vec![ResultNode::Sequence(vec![ResultNode::empty_words()])])
    );
    assert_eq!(sink.diagnostics.len(), 1);
    assert_eq!(sink.diagnostics[0].pointer(), "/0/0");
}

#[test]
fn null_past_depth_limit_is_still_omitted() {
    init_logging();
    let doc = mapping(vec![(
        "inner",
        mapping(vec![("gone", Node::Null), ("kept", text("deep words"))]),
    )]);
    let options = CountOptions {
        max_depth: 1,
        ..CountOptions::default()
    };
    let mut sink = CollectingSink::new();

    let result = count_object_words(&doc, &options, &mut sink).unwrap();

    let inner = result.get("inner").unwrap();
    assert_eq!(inner.keys(), vec!["kept"]);
    assert_eq!(inner.get("kept").and_then(ResultNode::as_words), Some(&WordCount::new()));
    assert_eq!(sink.diagnostics.len(), 1);
    assert_eq!(sink.diagnostics[0].pointer(), "/inner/kept");
}

#[test]
fn node_lookup_and_kind_names() {
    let doc = mapping(vec![("id", Node::Integer(3)), ("blob", Node::Unsupported("bytes".to_string()))]);
    assert_eq!(doc.kind_name(), "mapping");
    assert_eq!(doc.get("id"), Some(&Node::Integer(3)));
    assert_eq!(doc.get("blob").map(Node::kind_name), Some("bytes"));
    assert_eq!(doc.get("missing"), None);
    assert_eq!(text("x").get("id"), None);
}

#[test]
fn flatten_merges_all_leaves() {
    init_logging();
    let doc = mapping(vec![
        ("title", text("Crash on start")),
        ("body", text("crash again")),
        ("tags", Node::Sequence(vec![text("crash")])),
    ]);
    let result = count_object_words(&doc, &CountOptions::default(), &mut CollectingSink::new())
        .unwrap();
    let flat = result.flatten();
    assert_eq!(flat.get("crash"), Some(3));
    assert_eq!(flat.total(), 6);
}

#[test]
fn input_is_left_untouched() {
    let documents = vec![mapping(vec![("title", text("Same Text"))])];
    let before = documents.clone();
    let _ = count_words(&documents, &CountOptions::default(), &mut CollectingSink::new());
    assert_eq!(documents, before);
}
