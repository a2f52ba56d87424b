use dotc::identifier::{format_string, is_bare_identifier, quote_if_needed};
use dotc::{Attribute, Edge, Graph, Node};
use proptest::prelude::*;

/// Reverses DOT string escaping for a quoted ID's contents.
fn unescape(quoted: &str) -> String {
    let mut out = String::new();
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

proptest! {
    #[test]
    fn bare_names_pass_through(s in "[a-zA-Z_\u{c0}-\u{ff}][a-zA-Z0-9_\u{c0}-\u{ff}]{0,16}") {
        prop_assert!(is_bare_identifier(&s));
        prop_assert_eq!(&*quote_if_needed(&s, true), s.as_str());
    }

    #[test]
    fn bare_numerals_pass_through(s in "-?([0-9]{1,6}(\\.[0-9]{0,3})?|\\.[0-9]{1,3})") {
        prop_assert!(is_bare_identifier(&s));
        prop_assert_eq!(&*quote_if_needed(&s, true), s.as_str());
    }

    #[test]
    fn dangerous_strings_round_trip(
        prefix in "[^\r]{0,12}",
        special in prop_oneof![Just('"'), Just('\\')],
        suffix in "[^\r]{0,12}",
    ) {
        let s = format!("{prefix}{special}{suffix}");
        let quoted = quote_if_needed(&s, true);
        prop_assert!(quoted.len() >= 2);
        prop_assert!(quoted.starts_with('"') && quoted.ends_with('"'));
        let inner = &quoted[1..quoted.len() - 1];
        prop_assert_eq!(unescape(inner), s);
    }

    #[test]
    fn unformatted_strings_are_untouched(s in any::<String>()) {
        prop_assert_eq!(&*format_string(&s, false), s.as_str());
    }

    #[test]
    fn compile_is_deterministic(
        labels in prop::collection::vec("[a-zA-Z0-9 \"\\\\\n]{0,10}", 1..8),
        directed in any::<bool>(),
    ) {
        let mut graph = Graph::new("G").directed(directed);
        for (i, label) in labels.iter().enumerate() {
            graph.add(Node::new(format!("n{i}")).with(Attribute::label(label.clone())));
            if i > 0 {
                graph.add(Edge::new(format!("n{}", i - 1), format!("n{i}")));
            }
        }
        let first = graph.compile().unwrap();
        let second = graph.compile().unwrap();
        prop_assert_eq!(&first, &second);
        let op = if directed { " -> " } else { " -- " };
        prop_assert_eq!(first.matches(op).count(), labels.len() - 1);
    }
}
