//! Output shape of the facade's log and metric operations.

use std::sync::Arc;
use std::thread;

use serde_json::Value;
use tfm_observability::facade::LogMessage;
use tfm_observability::{log_debug, log_error, log_info, log_warn, Facade};

mod common;

use common::{expected_line, Harness};

#[test]
fn test_info_joins_values_with_spaces() {
    let h = Harness::new(false);

    log_info!(h.facade, "request", 17, "served in", 3.25, "ms");

    assert_eq!(
        h.lines(),
        vec![expected_line("INFO ", "request 17 served in 3.25 ms")]
    );
}

#[test]
fn test_each_level_writes_one_line() {
    let h = Harness::new(false);

    log_error!(h.facade, "boom");
    log_warn!(h.facade, "careful");
    log_info!(h.facade, "fine");

    assert_eq!(
        h.lines(),
        vec![
            expected_line("ERROR ", "boom"),
            expected_line("WARN ", "careful"),
            expected_line("INFO ", "fine"),
        ]
    );
}

#[test]
fn test_no_values_gives_empty_details() {
    let h = Harness::new(false);

    log_info!(h.facade);

    assert_eq!(h.lines(), vec![expected_line("INFO ", "")]);
}

#[test]
fn test_line_is_prefixed_compact_json_with_two_fields() {
    let h = Harness::new(false);

    log_warn!(h.facade, "quote \" backslash \\ newline \n tab \t");

    let lines = h.lines();
    assert_eq!(lines.len(), 1);
    let json = lines[0].strip_prefix("TFMLOG:").expect("prefix");
    assert!(!json.contains('\n'));

    let value: Value = serde_json::from_str(json).expect("valid json");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 2);
    assert!(json.starts_with(r#"{"level":"WARN ","details":"#));

    let message: LogMessage = serde_json::from_str(json).expect("log message");
    assert_eq!(message.details, "quote \" backslash \\ newline \n tab \t");
}

#[test]
fn test_debug_silent_when_not_verbose() {
    let h = Harness::new(false);

    log_debug!(h.facade, "noise", 1);

    assert!(h.lines().is_empty());
}

#[test]
fn test_debug_matches_info_shape_when_verbose() {
    let quiet = Harness::new(false);
    let loud = Harness::new(true);

    for h in [&quiet, &loud] {
        log_info!(h.facade, "same", "text");
        log_debug!(h.facade, "same", "text");
    }

    assert_eq!(quiet.lines(), vec![expected_line("INFO ", "same text")]);
    assert_eq!(
        loud.lines(),
        vec![
            expected_line("INFO ", "same text"),
            expected_line("DEBUG_INFO ", "same text"),
        ]
    );
}

#[test]
fn test_add_metric_forwards_namespaced_sample() {
    let h = Harness::new(false);

    h.facade.add_metric("latency", 42.5);

    assert_eq!(h.metrics.samples(), vec![("tfm.latency".to_string(), 42.5)]);
    let lines = h.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(r#"TFMLOG:{"level":"INFO ""#));
    assert!(lines[0].contains("tfm.latency"));
    assert!(lines[0].contains("42.5"));
}

#[test]
fn test_add_metric_keeps_whole_numbers_short() {
    let h = Harness::new(false);

    h.facade.add_metric("jobs.done", 3.0);

    assert_eq!(h.metrics.samples(), vec![("tfm.jobs.done".to_string(), 3.0)]);
    assert_eq!(
        h.lines(),
        vec![expected_line("INFO ", "Pushing metric: tfm.jobs.done, value: 3")]
    );
}

#[test]
fn test_concurrent_calls_write_whole_lines() {
    let h = Harness::new(false);
    let facade: Arc<dyn Facade> = h.facade.clone();

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let facade = facade.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    log_info!(facade, "worker", worker, "line", i);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker panicked");
    }

    let lines = h.lines();
    assert_eq!(lines.len(), 200);
    for line in &lines {
        let json = line.strip_prefix("TFMLOG:").expect("prefix");
        let message: LogMessage = serde_json::from_str(json).expect("whole line");
        assert_eq!(message.level, "INFO ");
        assert!(message.details.starts_with("worker "));
    }
}
