use std::process::Command;

fn run(args: &[&str]) -> (String, String, Option<i32>) {
    run_with_log(args, "warn")
}

fn run_with_log(args: &[&str], level: &str) -> (String, String, Option<i32>) {
    let output = Command::new(env!("CARGO_BIN_EXE_debt-payoff"))
        .args(args)
        .env("RUST_LOG", level)
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.code())
}

#[test]
fn single_debt_schedule() {
    let (stdout, stderr, code) = run(&["tests/fixtures/valid.csv", "avalanche", "100"]);

    assert_eq!(code, Some(0));
    assert!(stderr.is_empty());

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "month,debt_id,debt,payment,remaining_balance,interest");
    assert_eq!(lines[1], "1,card,Visa,100.00,910.00,10.00");
    assert_eq!(lines[2], "2,card,Visa,100.00,819.10,9.10");
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[11], "11,card,Visa,58.98,0.00,0.58");
}

#[test]
fn custom_order_pays_named_debt_first() {
    let (stdout, _, code) = run(&["tests/fixtures/two_debts.csv", "custom", "50", "b"]);

    assert_eq!(code, Some(0));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "1,b,Loan,40.00,60.00,0.00");
    assert_eq!(lines[2], "1,a,Store card,10.00,90.00,0.00");
    assert_eq!(lines[3], "2,b,Loan,40.00,20.00,0.00");
    assert_eq!(lines[5], "3,b,Loan,20.00,0.00,0.00");
}

#[test]
fn bad_rows_warn_but_do_not_block() {
    let (stdout, stderr, code) = run(&["tests/fixtures/with_errors.csv", "snowball", "20"]);

    assert_eq!(code, Some(0));
    assert!(stderr.contains("line 3"));
    assert!(stderr.contains("duplicate debt id a"));
    assert!(stderr.contains("balance -5.00 is negative"));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "1,a,Store card,10.00,90.00,0.00");
    assert_eq!(lines[2], "1,b,Loan,10.00,90.00,0.00");
    assert_eq!(lines.len(), 21);
}

#[test]
fn payment_below_minimums_is_rejected() {
    let (stdout, stderr, code) = run(&["tests/fixtures/valid.csv", "snowball", "20"]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("below the total minimum payments"));
}

#[test]
fn unknown_method_is_rejected() {
    let (stdout, stderr, code) = run(&["tests/fixtures/valid.csv", "fastest", "100"]);

    assert_eq!(code, Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown payoff method"));
}

#[test]
fn missing_arguments_print_usage() {
    let (_, stderr, code) = run(&["tests/fixtures/valid.csv"]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("usage: debt-payoff"));
}

#[test]
fn plan_stopped_at_month_cap_is_not_reported_debt_free() {
    let (stdout, stderr, code) =
        run_with_log(&["tests/fixtures/runaway.csv", "snowball", "10"], "info");

    assert_eq!(code, Some(0));
    assert_eq!(stdout.lines().count(), 601);
    assert!(stderr.contains("plan does not pay off every debt"));
    assert!(!stderr.contains("debt free"));
}

#[test]
fn completed_plan_logs_debt_type_label() {
    let (_, stderr, code) =
        run_with_log(&["tests/fixtures/valid.csv", "avalanche", "100"], "info");

    assert_eq!(code, Some(0));
    assert!(stderr.contains("Credit Card"));
    assert!(stderr.contains("debt free"));
}

#[test]
fn amounts_out_of_range_are_skipped() {
    let (stdout, stderr, code) = run(&["tests/fixtures/out_of_range.csv", "snowball", "10"]);

    assert_eq!(code, Some(0));
    assert!(stderr.contains("line 2: balance is out of range"));
    assert!(stderr.contains("line 3: balance is out of range"));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "1,c,Card,10.00,90.00,0.00");
    assert_eq!(lines.len(), 11);
}

#[test]
fn payment_out_of_range_is_rejected() {
    let (stdout, stderr, code) = run(&["tests/fixtures/valid.csv", "snowball", "1e300"]);

    assert_eq!(code, Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.contains("monthly payment must be a number within range"));
}
