// End-to-end scenarios through the public API only
use append_callback::{append_then_call, AppendConfig, Appender, CallbackError, Sequence, Value};
use std::cell::Cell;
use std::rc::Rc;

fn observe(initial: Sequence) -> Sequence {
    let shared = initial.into_shared();
    let mut observed = None;

    let seen = Rc::clone(&shared);
    append_then_call(&shared, || observed = Some(seen.borrow().clone()));

    observed.expect("callback was not invoked")
}

#[test]
fn names_get_numeric_literal() {
    let observed = observe(["Juan", "Karla", "Ricardo", "Pedro"].into_iter().collect());

    assert_eq!(observed.to_string(), "[ 'Juan', 'Karla', 'Ricardo', 'Pedro', 100 ]");
    assert_eq!(
        serde_json::to_string(&observed).unwrap(),
        r#"["Juan","Karla","Ricardo","Pedro",100]"#
    );
}

#[test]
fn empty_sequence_gets_literal() {
    let observed = observe(Sequence::new());
    assert_eq!(observed.into_inner(), vec![Value::Integer(100)]);
}

#[test]
fn any_initial_sequence_gains_exactly_one_trailing_literal() {
    let cases: Vec<Sequence> = vec![
        Sequence::new(),
        ["a"].into_iter().collect(),
        vec![Value::from(1), Value::from("two"), Value::from(3.5)].into(),
        std::iter::repeat("x").take(50).collect(),
    ];

    for initial in cases {
        let before = initial.clone();
        let observed = observe(initial);

        assert_eq!(observed.len(), before.len() + 1);
        assert_eq!(&observed.as_slice()[..before.len()], before.as_slice());
        assert_eq!(observed.last(), Some(&Value::Integer(100)));
    }
}

#[test]
fn repeated_calls_accumulate() {
    let shared = Sequence::new().into_shared();
    let calls = Cell::new(0);

    for _ in 0..3 {
        append_then_call(&shared, || calls.set(calls.get() + 1));
    }

    assert_eq!(calls.get(), 3);
    assert_eq!(shared.borrow().to_string(), "[ 100, 100, 100 ]");
}

#[test]
fn missing_callback_is_rejected() {
    let shared = Sequence::from_iter(["Juan"]).into_shared();
    let appender = Appender::new(AppendConfig::new().with_literal(false));

    let err = appender.try_append_then_call(&shared, None).unwrap_err();

    assert!(matches!(err, CallbackError::NotInvocable(_)));
    assert!(err.to_string().starts_with("Callback is not invocable"));
    assert_eq!(shared.borrow().len(), 1);
}
