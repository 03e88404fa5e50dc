//! End-to-end pipelines: normalize, transform, then group and select.

use gander::foundation::{Error, ErrorKind, Type, Value};
use gander::group::Grouper;
use gander::table::Table;
use gander::transform::{
    ColumnFn, ColumnTransformConfig, Param, RowFn, RowTransformConfig, StrictMode,
    register_column_transform, register_row_transform,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn raw_orders() -> Table {
    Table::from_columns([
        (" Order ID", vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]),
        (
            "Unit Price ($)",
            vec![Value::from("2.50"), Value::from("4"), Value::from("n/a"), Value::Nil],
        ),
        ("Qty", vec![Value::Int(2), Value::Int(0), Value::Int(1), Value::Int(3)]),
    ])
    .unwrap()
}

fn line_total() -> RowFn {
    RowFn::new(
        "line_total",
        [
            Param::new("unit_price_").typed(Type::Float).with_default(0.0),
            Param::new("qty").typed(Type::Int),
        ],
        |args| Ok(Value::Float(args.float("unit_price_")? * args.float("qty")?)),
    )
}

#[test]
fn normalize_then_transform() {
    init_logging();
    let mut t = raw_orders();
    t.normalize_column_names().unwrap();
    assert_eq!(t.column_names(), ["order_id", "unit_price_", "qty"]);

    register_row_transform(&mut t, &line_total(), &RowTransformConfig::default()).unwrap();
    assert_eq!(
        t.column("line_total").unwrap().to_vec(),
        vec![Value::Float(5.0), Value::Float(0.0), Value::Float(0.0), Value::Float(0.0)]
    );

    let share = ColumnFn::new("share", ["line_total"], |cols| {
        let totals = cols.column("line_total")?;
        let sum = totals.sum()?;
        if sum == 0.0 {
            return Err(Error::new(ErrorKind::DivisionByZero));
        }
        Ok(totals.map(|v| Value::Float(v.as_number().unwrap_or(0.0) / sum)).into())
    });
    register_column_transform(&mut t, &share, &ColumnTransformConfig::default()).unwrap();
    assert_eq!(t.get(0, "share"), Some(&Value::Float(1.0)));
    assert_eq!(t.column_names(), ["order_id", "unit_price_", "qty", "line_total", "share"]);
}

#[test]
fn strict_pipeline_aborts_without_side_effects() {
    init_logging();
    let mut t = raw_orders();
    t.normalize_column_names().unwrap();
    let before = t.clone();

    let config = RowTransformConfig::strict().with_exception_fallback(Value::Nil);
    let err = register_row_transform(&mut t, &line_total(), &config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeCoercion { .. }));
    assert_eq!(err.context.and_then(|c| c.row), Some(2));
    assert_eq!(t, before);

    register_row_transform(&mut t, &line_total(), &config.with_strict_mode(StrictMode::Lenient))
        .unwrap();
    assert_eq!(t.get(2, "line_total"), Some(&Value::Nil));
}

#[test]
fn transformed_splits_are_grouped() {
    init_logging();
    let mut train = Table::from_columns([("a", vec![1i64, 2]), ("target", vec![0i64, 1])]).unwrap();
    let mut test = Table::from_columns([("a", vec![3i64])]).unwrap();

    let doubled = RowFn::new("a2", [Param::new("a").typed(Type::Int)], |args| {
        Ok(Value::Int(args.int("a")? * 2))
    });
    for split in [&mut train, &mut test] {
        register_row_transform(split, &doubled, &RowTransformConfig::default()).unwrap();
    }

    let grouper = Grouper::new()
        .with_column_group("x", ["a", "a2"])
        .with_column_group("y", ["target"])
        .with_table("train", train)
        .with_table("test", test);

    let x = grouper.select("x", vec!["train", "test"]).unwrap();
    assert_eq!(x.column_names(), ["a", "a2"]);
    assert_eq!(
        x.column("a2").unwrap().to_vec(),
        vec![Value::Int(2), Value::Int(4), Value::Int(6)]
    );

    let y = grouper.select("y", ()).unwrap();
    assert_eq!(y.column("target").unwrap().to_vec(), vec![Value::Int(0), Value::Int(1), Value::Nil]);
}
