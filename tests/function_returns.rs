use std::cell::Cell;

use function_assert::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

fn mirror(point: Point) -> Point {
    Point {
        x: point.y,
        y: point.x,
    }
}

#[test]
fn should_compare_by_value_not_identity() {
    assert_that_function(mirror)
        .on(Point { x: 1, y: 2 })
        .returns(Point { x: 2, y: 1 });
}

#[test]
#[should_panic(expected = "Expecting actual not to be null")]
fn should_fail_when_function_is_null() {
    FunctionAssert::<fn(Point) -> Point, Point>::null()
        .on(Point { x: 0, y: 0 })
        .returns(Point { x: 0, y: 0 });
}

#[test]
#[should_panic(expected = "[mirror] \nExpecting:\n  <given mirror>\nto return <Point { x: 1, y: 2 }>")]
fn description_and_function_name_appear_in_failure() {
    assert_that_function(mirror)
        .described_as("mirror")
        .on(Point { x: 1, y: 2 })
        .returns(Point { x: 1, y: 2 });
}

#[test]
fn failure_stops_the_chain_before_the_next_link() {
    let calls = Cell::new(0);
    let assertion = assert_that_function(|s: &str| {
        calls.set(calls.get() + 1);
        s.len()
    });

    let result = assertion
        .on("abc")
        .try_returns(4)
        .and_then(|assertion| assertion.on("de").try_returns(2));

    assert!(matches!(result, Err(AssertionError::ReturnMismatch { .. })));
    assert_eq!(calls.get(), 1);
}

#[test]
fn each_returns_reinvokes_the_function() {
    let calls = Cell::new(0);
    let assertion = assert_that_function(|n: u8| {
        calls.set(calls.get() + 1);
        n
    });

    assertion.on(1).returns(1).on(1).returns(1).on(2).returns(2);
    assert_eq!(calls.get(), 3);
}

#[test]
fn try_returns_composes_with_question_mark() -> Result<(), AssertionError> {
    let assertion = assert_that_function(|v: Vec<u8>| v.len());
    assertion
        .on(vec![1, 2])
        .try_returns(2)?
        .on(Vec::new())
        .try_returns(0)?;
    Ok(())
}
