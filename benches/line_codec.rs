//! Benchmark suite for the line codec and account queries
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Inputs are generated in memory so the benchmarks do not depend on fixture files.

use divan::Bencher;
use rust_ledger::io::{decode_line, encode_line};
use rust_ledger::{Ledger, Record};

const ACCOUNTS: [&str; 4] = ["Cash", "Checking", " savings ", "BROKERAGE"];

fn main() {
    divan::main();
}

fn generate_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let amount = if i % 3 == 0 { 250.0 } else { -(i as f64 % 97.0) - 0.5 };
            Record::new(
                i as i64,
                format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                ACCOUNTS[i % ACCOUNTS.len()],
                amount,
                format!("note {}, generated", i),
            )
        })
        .collect()
}

/// Decode already encoded lines
#[divan::bench(args = [100, 1_000, 100_000])]
fn decode(bencher: Bencher, count: usize) {
    let lines: Vec<String> = generate_records(count).iter().map(encode_line).collect();

    bencher.bench(|| {
        lines
            .iter()
            .filter_map(|line| decode_line(divan::black_box(line)).ok())
            .count()
    });
}

/// Encode records into lines
#[divan::bench(args = [100, 1_000, 100_000])]
fn encode(bencher: Bencher, count: usize) {
    let records = generate_records(count);

    bencher.bench(|| {
        records
            .iter()
            .map(|r| encode_line(divan::black_box(r)).len())
            .sum::<usize>()
    });
}

/// Balance of one account, including account name normalization
#[divan::bench(args = [1_000, 100_000])]
fn balance(bencher: Bencher, count: usize) {
    let ledger = Ledger::new(generate_records(count));

    bencher.bench(|| ledger.balance(divan::black_box("Savings")));
}

/// Transactions of one account on one date
#[divan::bench(args = [1_000, 100_000])]
fn transactions_on_date(bencher: Bencher, count: usize) {
    let ledger = Ledger::new(generate_records(count));

    bencher.bench(|| {
        ledger
            .transactions_on_date(divan::black_box("cash"), divan::black_box("2024-01-01"))
            .map(|records| records.len())
    });
}
