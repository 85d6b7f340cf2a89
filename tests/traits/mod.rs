use error_trail::{fields, Failure, Fault, FaultResult, FieldValue, ResultExt, Transience};
use std::fmt;
use std::io;

#[derive(Debug)]
struct PlainFailure;

impl fmt::Display for PlainFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plain failure")
    }
}

impl std::error::Error for PlainFailure {}

impl Failure for PlainFailure {}

#[test]
fn transience_from_flags_covers_all_combinations() {
    assert_eq!(Transience::from_flags(false, false), Transience::None);
    assert_eq!(Transience::from_flags(true, false), Transience::Timeout);
    assert_eq!(Transience::from_flags(false, true), Transience::Temporary);
    assert_eq!(Transience::from_flags(true, true), Transience::Both);

    assert!(Transience::Both.is_timeout());
    assert!(Transience::Both.is_temporary());
    assert!(!Transience::Timeout.is_temporary());
    assert!(!Transience::Temporary.is_timeout());
}

#[test]
fn failure_transience_defaults_to_none() {
    assert_eq!(PlainFailure.transience(), Transience::None);

    let fault = Fault::new(PlainFailure);
    assert!(!fault.is_timeout());
    assert!(!fault.is_temporary());
}

#[test]
fn io_error_kinds_classify_by_transience() {
    let timed_out = io::Error::from(io::ErrorKind::TimedOut);
    assert_eq!(timed_out.transience(), Transience::Both);

    let refused = io::Error::from(io::ErrorKind::ConnectionRefused);
    assert_eq!(refused.transience(), Transience::Temporary);

    let not_found = io::Error::from(io::ErrorKind::NotFound);
    assert_eq!(not_found.transience(), Transience::None);
}

#[test]
fn result_ext_passes_ok_through_untouched() {
    let result: Result<i32, io::Error> = Ok(7);
    assert_eq!(result.trace().unwrap(), 7);

    let result: Result<i32, io::Error> = Ok(7);
    assert_eq!(result.trace_field("k", "v").unwrap(), 7);
}

#[test]
fn result_ext_wraps_errors_with_one_frame() {
    let result: Result<(), io::Error> = Err(io::Error::other("link down"));
    let fault = result.trace().unwrap_err();

    assert!(fault.is_traced());
    assert_eq!(fault.frames().len(), 1);
    assert_eq!(fault.to_string(), "link down");
}

#[test]
fn result_ext_merges_fields_on_error() {
    let result: Result<(), io::Error> = Err(io::Error::other("link down"));
    let fault = result.trace_fields(fields!("code" => 503)).unwrap_err();
    assert_eq!(fault.fields().get("code"), Some(&FieldValue::from(503)));
}

#[test]
fn result_ext_keeps_identity_across_boundaries() {
    fn inner() -> FaultResult<()> {
        Err(io::Error::other("link down")).trace()
    }

    fn outer() -> FaultResult<()> {
        inner().trace_field("layer", "outer")
    }

    let fault = outer().unwrap_err();
    assert_eq!(fault.frames().len(), 2);
    assert!(fault.fields().contains_key("layer"));

    let original = Fault::from(fault.original());
    assert!(fault.is(&original));
}
