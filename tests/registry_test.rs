mod common;
use common::*;
use pocket::lang::ErrorCode;
use pocket::mach::{Options, Registry};
use pretty_assertions::assert_eq;

#[test]
fn test_instances_share_nothing() {
    let mut registry = Registry::new();
    let first = Capture::default();
    let second = Capture::default();
    let a = registry
        .new_instance(Options::default(), Box::new(first.clone()))
        .unwrap();
    let b = registry
        .new_instance(Options::default(), Box::new(second.clone()))
        .unwrap();
    assert_eq!(registry.current_index(), Some(b));

    registry
        .get(a)
        .unwrap()
        .eval_string("var a = 1 print a", false, true)
        .unwrap();
    let error = registry
        .get(b)
        .unwrap()
        .eval_string("print a", false, true)
        .unwrap_err();
    assert_eq!(error.kind(), ErrorCode::UnknownSymbol);
    assert_eq!(first.out(), "1\n");
    assert_eq!(second.out(), "");
    assert!(second.err().starts_with("UNKNOWN SYMBOL"));
}

#[test]
fn test_select_by_name() {
    let mut registry = Registry::new();
    let named = Options {
        name: Some("calc".to_string()),
        ..Options::default()
    };
    registry.new_instance(named, Box::new(Capture::default())).unwrap();
    registry
        .new_instance(Options::default(), Box::new(Capture::default()))
        .unwrap();
    assert_eq!(registry.names(), vec!["calc", "pocket2"]);
    let index = registry.find("calc").unwrap();
    registry.set_current(index).unwrap();
    assert_eq!(registry.current().map(|r| r.name().to_string()), Some("calc".to_string()));
    assert_eq!(
        registry.set_current(5).map_err(|e| e.code()),
        Err(-9)
    );
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_failed_instance_does_not_use_a_name() {
    let mut registry = Registry::new();
    let tiny = Options {
        arena_size: 64,
        ..Options::default()
    };
    assert!(registry.new_instance(tiny, Box::new(Capture::default())).is_err());
    registry.new_instance(Options::default(), Box::new(Capture::default())).unwrap();
    assert_eq!(registry.names(), vec!["pocket1"]);
}
