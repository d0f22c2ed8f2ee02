use std::process::Command;

use approx::assert_relative_eq;
use tempfile::tempdir;

use gausstab::table::{self, QuadratureTable};

#[test]
fn cli_default_writes_the_order_ten_table() {
    let tmp = tempdir().expect("temporary directory");

    let exe = env!("CARGO_BIN_EXE_gausstab");
    let output = Command::new(exe)
        .current_dir(tmp.path())
        .output()
        .expect("run gausstab");
    assert!(
        output.status.success(),
        "CLI exited with status {:?}",
        output.status
    );

    let path = tmp.path().join("gauss_quad_points_10.dat");
    assert!(path.exists(), "table file missing");

    let table = QuadratureTable::load(&path).expect("parse table");
    assert_eq!(table.max_order(), 10);
}

#[test]
fn cli_writes_the_requested_orders() {
    let tmp = tempdir().expect("temporary directory");

    let exe = env!("CARGO_BIN_EXE_gausstab");
    let output = Command::new(exe)
        .current_dir(tmp.path())
        .arg("25")
        .output()
        .expect("run gausstab");
    assert!(
        output.status.success(),
        "CLI exited with status {:?}",
        output.status
    );

    let path = tmp.path().join(table::file_name(25));
    let table = QuadratureTable::load(&path).expect("parse table");
    assert_eq!(table.max_order(), 25);

    for order in 1..=25 {
        let rule = table.rule(order).expect("rule");
        assert_eq!(rule.order(), order);
        assert_relative_eq!(rule.weights.sum(), 2.0, epsilon = 1e-10);
        for &x in &rule.nodes {
            assert!(x > -1.0 && x < 1.0, "node {x} outside (-1, 1)");
        }
    }

    // Order 1 is the midpoint rule; order 2 puts its nodes at ±1/√3.
    let one = table.rule(1).expect("order 1");
    assert_relative_eq!(one.nodes[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(one.weights[0], 2.0, epsilon = 1e-12);

    let two = table.rule(2).expect("order 2");
    let x = 1.0 / 3.0_f64.sqrt();
    assert_relative_eq!(two.nodes[0], -x, epsilon = 1e-12);
    assert_relative_eq!(two.nodes[1], x, epsilon = 1e-12);
    assert_relative_eq!(two.weights[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(two.weights[1], 1.0, epsilon = 1e-12);
}

#[test]
fn cli_overwrites_an_existing_table() {
    let tmp = tempdir().expect("temporary directory");
    let path = tmp.path().join(table::file_name(3));
    std::fs::write(&path, "stale contents\n").expect("seed stale file");

    let exe = env!("CARGO_BIN_EXE_gausstab");
    let output = Command::new(exe)
        .current_dir(tmp.path())
        .arg("3")
        .output()
        .expect("run gausstab");
    assert!(output.status.success());

    let table = QuadratureTable::load(&path).expect("parse table");
    assert_eq!(table.max_order(), 3);
}

#[test]
fn cli_rejects_non_integer_and_zero_arguments() {
    let tmp = tempdir().expect("temporary directory");
    let exe = env!("CARGO_BIN_EXE_gausstab");

    for bad in ["abc", "0", "2.5"] {
        let output = Command::new(exe)
            .current_dir(tmp.path())
            .arg(bad)
            .output()
            .expect("run gausstab");
        assert!(
            !output.status.success(),
            "argument {bad:?} should be rejected"
        );
    }

    // No table file is left behind.
    let leftovers = std::fs::read_dir(tmp.path()).expect("read dir").count();
    assert_eq!(leftovers, 0);
}
