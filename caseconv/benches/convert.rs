use std::hint::black_box;

use caseconv::{
    to_delimited, to_kebab, to_screaming_delimited, to_screaming_kebab, to_screaming_snake,
    to_snake, to_snake_with_ignore,
};
use divan::Bencher;

// Representative mix of the shapes the converter branches on: camel, pascal, acronyms,
// digit runs, pre-existing separators.
const IDENTIFIERS: &[&str] = &[
    "testCase",
    "ManyManyWords",
    "AnyKind of_string",
    "numbers2and55with000",
    "JSONData",
    "userID",
    "AwesomeActivity.UserID",
    "AB1 AB2 AB3",
];

fn main() {
    divan::main();
}

#[divan::bench]
fn snake(bencher: Bencher) {
    bencher.bench_local(|| {
        for s in IDENTIFIERS {
            black_box(to_snake(black_box(s)));
        }
    });
}

#[divan::bench]
fn snake_with_ignore(bencher: Bencher) {
    bencher.bench_local(|| {
        for s in IDENTIFIERS {
            black_box(to_snake_with_ignore(black_box(s), "."));
        }
    });
}

#[divan::bench]
fn screaming_snake(bencher: Bencher) {
    bencher.bench_local(|| {
        for s in IDENTIFIERS {
            black_box(to_screaming_snake(black_box(s)));
        }
    });
}

#[divan::bench]
fn kebab(bencher: Bencher) {
    bencher.bench_local(|| {
        for s in IDENTIFIERS {
            black_box(to_kebab(black_box(s)));
        }
    });
}

#[divan::bench]
fn screaming_kebab(bencher: Bencher) {
    bencher.bench_local(|| {
        for s in IDENTIFIERS {
            black_box(to_screaming_kebab(black_box(s)));
        }
    });
}

#[divan::bench]
fn delimited(bencher: Bencher) {
    bencher.bench_local(|| {
        for s in IDENTIFIERS {
            black_box(to_delimited(black_box(s), '.'));
        }
    });
}

#[divan::bench]
fn screaming_delimited(bencher: Bencher) {
    bencher.bench_local(|| {
        for s in IDENTIFIERS {
            black_box(to_screaming_delimited(black_box(s), '.', " ", true));
        }
    });
}
