use eel::{LogEntry, Severity};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "print", "warn", "error", "stop", "add", "sub", "mul", "div", "pow", "equals",
            "not", "set", "_LANG", "_VERSION", "true", "false", "\"1\"", "0",
        ])
        .prop_map(str::to_string),
        (-1000i32..1000).prop_map(|n| n.to_string()),
        "[a-z]{1,6}",
    ]
}

fn line() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 1..12).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    /// Arbitrary text never panics and never yields an empty log.
    #[test]
    fn parse_never_panics(s in "\\PC*") {
        let log = eel::parse(s);
        prop_assert!(!log.is_empty());
        for entry in &log {
            prop_assert!(LogEntry::decode(entry).is_some(), "undecodable entry {entry:?}");
        }
    }

    /// Errors and halts only ever end a program.
    #[test]
    fn halting_entries_come_last(lines in prop::collection::vec(line(), 0..8)) {
        let log: Vec<LogEntry> = eel::parse(lines)
            .iter()
            .filter_map(|entry| LogEntry::decode(entry))
            .collect();
        let halting = log
            .iter()
            .filter(|entry| matches!(entry.severity, Severity::Error | Severity::Halt))
            .count();
        prop_assert!(halting <= 1);
        if halting == 1 {
            prop_assert!(matches!(
                log.last().map(|entry| entry.severity),
                Some(Severity::Error | Severity::Halt)
            ));
        }
    }
}
