use anyhow::{bail, Result};
use branded::{brand, make, make_asserting, make_with, Brand, Brander, Identity, Validated};
use std::cell::Cell;
use std::panic;

enum Positive {}
type PositiveNumber = Brand<i64, Positive>;

fn is_positive(v: &i64) -> Result<()> {
    if *v <= 0 {
        bail!("Non-positive: {v}");
    }
    Ok(())
}

#[test]
fn test_positive_number_end_to_end() {
    let brand = make_with::<PositiveNumber, _>(|v: &i64| -> Result<()> {
        if *v <= 0 {
            bail!("Non-positive: {v}");
        }
        Ok(())
    });

    let one = brand.brand(1).unwrap();
    assert_eq!(*one, 1);

    let err = brand.brand(-1).unwrap_err();
    assert_eq!(err.to_string(), "Non-positive: -1");
}

#[test]
fn test_validator_passthrough_preserves_reference() {
    let validator = is_positive;
    let brander = make_with::<PositiveNumber, _>(&validator);
    assert!(std::ptr::eq(*brander.validator(), &validator));

    let closure = |v: &i64| is_positive(v);
    let by_ref = make_with::<PositiveNumber, _>(&closure);
    assert!(std::ptr::eq(*by_ref.validator(), &closure));
}

#[test]
fn test_zero_argument_make_is_identity() {
    let brander: Identity<PositiveNumber> = make();
    assert_eq!(brander, Identity::new());
    // No validation: the identity brander accepts anything.
    assert_eq!(*brander.call(-1), -1);
}

#[test]
fn test_validator_error_is_not_wrapped() {
    #[derive(Debug, PartialEq)]
    struct OutOfRange {
        value: i64,
        limit: i64,
    }

    let limit = 10;
    let bounded = make_with::<PositiveNumber, _>(move |v: &i64| {
        if *v > limit {
            Err(OutOfRange { value: *v, limit })
        } else {
            Ok(())
        }
    });

    assert_eq!(
        bounded.brand(11).unwrap_err(),
        OutOfRange { value: 11, limit: 10 }
    );
    assert_eq!(*bounded.brand(10).unwrap(), 10);
}

#[test]
fn test_anyhow_error_chain_survives() {
    let brander = make_with::<PositiveNumber, _>(|v: &i64| {
        is_positive(v).map_err(|e| e.context("while branding an order total"))
    });

    let err = brander.brand(0).unwrap_err();
    let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
    assert_eq!(chain, ["while branding an order total", "Non-positive: 0"]);
}

#[test]
fn test_question_mark_propagation() {
    fn parse_total(raw: &str) -> Result<PositiveNumber> {
        let value: i64 = raw.trim().parse()?;
        make_with::<PositiveNumber, _>(is_positive).brand(value)
    }

    assert_eq!(*parse_total(" 25 ").unwrap(), 25);
    assert_eq!(parse_total("-3").unwrap_err().to_string(), "Non-positive: -3");
    assert!(parse_total("x").is_err());
}

#[test]
fn test_validator_runs_once_per_brand_call() {
    let calls = Cell::new(0_u32);
    let counting = make_with::<PositiveNumber, _>(|v: &i64| {
        calls.set(calls.get() + 1);
        is_positive(v)
    });

    assert_eq!(calls.get(), 0);
    let _ = counting.brand(1);
    let _ = counting.brand(-1);
    let _ = counting.brand_ref(&3);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_brand_ref_and_slice_validate() {
    let brander = make_with::<PositiveNumber, _>(is_positive);

    let value = 5_i64;
    let branded = brander.brand_ref(&value).unwrap();
    assert!(std::ptr::eq(branded.as_base(), &value));
    assert!(brander.brand_ref(&-5).is_err());

    let totals = [1_i64, 2, 3];
    assert_eq!(brander.brand_slice(&totals).unwrap().len(), 3);

    let mixed = [1_i64, -2, -3];
    assert_eq!(
        brander.brand_slice(&mixed).unwrap_err().to_string(),
        "Non-positive: -2"
    );
}

#[test]
fn test_asserting_brander_panics_with_validator_message() {
    let brander = make_asserting::<PositiveNumber, _>(|v| assert!(*v > 0, "Non-positive: {v}"));
    assert_eq!(*brander.call(1), 1);

    let payload = panic::catch_unwind(|| brander.call(-1)).unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .unwrap_or_default();
    assert_eq!(message, "Non-positive: -1");
}

#[test]
fn test_branders_are_copy_when_validator_is() {
    type CheckFn = fn(&i64) -> Result<()>;

    let brander: Validated<PositiveNumber, CheckFn> = make_with(is_positive as CheckFn);
    let copy = brander;
    assert!(brander.brand(1).is_ok());
    assert!(copy.brand(-1).is_err());
}

#[test]
fn test_macro_brands_with_validators() {
    brand! {
        type Percent = u8 as PercentTag;
        type Score = u8 as ScoreTag;
    }

    let percent = make_with::<Percent, _>(|v: &u8| {
        if *v > 100 {
            bail!("{v} is not a percentage");
        }
        Ok(())
    });
    let score = make::<Score>();

    let p = percent.brand(40).unwrap();
    let s = score.call(200);
    assert_eq!(u16::from(*p) + u16::from(*s), 240);
    assert_eq!(percent.brand(101).unwrap_err().to_string(), "101 is not a percentage");
}
