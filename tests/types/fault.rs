use error_trail::{trace, Fault, FaultResult, MessageError, ResultExt};
use std::io;

#[test]
fn plain_fault_has_no_fields_or_frames() {
    let fault = Fault::new(io::Error::other("link down"));
    assert!(fault.fields().is_empty());
    assert!(fault.frames().is_empty());
    assert!(!fault.is_traced());
}

#[test]
fn original_is_idempotent_on_plain_faults() {
    let fault = Fault::new(io::Error::other("link down"));
    assert!(fault.is(&fault));
    assert_eq!(fault.original().to_string(), "link down");
}

#[test]
fn tracing_preserves_identity() {
    let original = Fault::new(io::Error::other("disk full"));
    let mut fault = Some(original.clone());
    for _ in 0..4 {
        fault = trace(fault);
    }

    let fault = fault.unwrap();
    assert!(fault.is(&original));
    assert!(original.is(&fault));
    assert_eq!(fault.original().to_string(), "disk full");
}

#[test]
fn tracing_never_nests_wrappers() {
    let fault = trace(trace(Some(error_trail::new("boom")))).unwrap();

    // One resolution step reaches the plain failure: the resolved original
    // of the original is itself.
    let original = Fault::from(fault.original());
    assert!(fault.is(&original));
    assert!(!original.is_traced());
}

#[test]
fn distinct_failures_with_equal_messages_are_not_the_same() {
    let a = error_trail::new("boom");
    let b = error_trail::new("boom");
    assert!(!a.is(&b));
}

#[test]
fn probes_default_to_false_without_the_capability() {
    let fault = Fault::new(MessageError::new("boom"));
    assert!(!fault.is_timeout());
    assert!(!fault.is_temporary());
}

#[test]
fn io_timeout_exposes_both_capabilities() {
    let fault = Fault::new(io::Error::from(io::ErrorKind::TimedOut));
    assert!(fault.is_timeout());
    assert!(fault.is_temporary());
}

#[test]
fn traced_fault_probes_the_outer_value_only() {
    let fault = Fault::new(io::Error::from(io::ErrorKind::TimedOut));
    let traced = trace(Some(fault)).unwrap();
    assert!(!traced.is_timeout());
    assert!(!traced.is_temporary());
}

#[test]
fn fault_converts_from_failure_types_with_question_mark() {
    fn fails() -> FaultResult<()> {
        Err(io::Error::other("link down"))?;
        Ok(())
    }

    let fault = fails().unwrap_err();
    assert!(!fault.is_traced());
    assert_eq!(fault.to_string(), "link down");
}

#[test]
fn display_delegates_to_the_original_after_tracing() {
    let fault = trace(Some(error_trail::new("disk full"))).unwrap();
    assert_eq!(fault.to_string(), "disk full");
}

#[test]
fn result_ext_extends_a_traced_fault_in_place() {
    let result: FaultResult<()> = Err(error_trail::new("boom"));
    let result = result.trace().trace();

    let fault = result.unwrap_err();
    assert_eq!(fault.frames().len(), 3);
}
