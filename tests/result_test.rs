//! ResultWrapper and its failure channel.

use needful::prelude::*;

#[derive(Debug, PartialEq)]
enum LookupError {
    Missing(&'static str),
}

fn lookup(
    table: &[(&'static str, *const u8)],
    key: &'static str,
    failures: &mut FailureSink<LookupError>,
) -> ResultWrapper<*const u8> {
    for (k, v) in table {
        if *k == key {
            return (*v).into();
        }
    }
    ResultWrapper::fail_into(failures, LookupError::Missing(key))
}

fn touch(failures: &mut FailureSink<LookupError>, fail: bool) -> ResultWrapper<()> {
    if fail {
        ResultWrapper::fail_into(failures, LookupError::Missing("unit"))
    } else {
        ().into()
    }
}

#[test]
fn test_success_and_failure_paths() {
    let byte = 1u8;
    let table = [("one", &byte as *const u8)];
    let mut failures = FailureSink::new();

    let hit = lookup(&table, "one", &mut failures).resolve(&mut failures);
    assert_eq!(hit, Ok(&byte as *const u8));

    let miss = lookup(&table, "two", &mut failures);
    assert!(miss.is_placeholder());
    assert_eq!(miss.resolve(&mut failures), Err(LookupError::Missing("two")));
}

#[test]
fn test_produced_null_is_not_a_failure() {
    let mut failures: FailureSink<LookupError> = FailureSink::new();
    let r = ResultWrapper::from(core::ptr::null::<u8>());
    assert!(!failures.is_failed());
    assert_eq!(r.resolve(&mut failures), Ok(core::ptr::null()));
}

#[test]
fn test_placeholder_only_through_marker() {
    let r: ResultWrapper<u32> = FAIL.into();
    assert_eq!(r.into_payload(), 0);
}

#[test]
fn test_unit_result_is_absence_of_failure() {
    assert_eq!(core::mem::size_of::<ResultWrapper<()>>(), 0);
    let mut failures = FailureSink::default();
    assert_eq!(touch(&mut failures, false).resolve(&mut failures), Ok(()));
    assert_eq!(
        touch(&mut failures, true).resolve(&mut failures),
        Err(LookupError::Missing("unit"))
    );
}
