#![no_main]

use arbitrary::Arbitrary;
use casechain::switch;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Case(bool),
    Do,
    Break,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut matched = false;
    let mut in_pattern = false;
    let mut broken = false;
    let mut expected_actions = 0usize;

    let mut actions = 0usize;
    let mut chain = switch(());
    for op in &ops {
        chain = match op {
            Op::Case(outcome) => chain.case(|_| *outcome),
            Op::Do => chain.then(|_| actions += 1),
            Op::Break => chain.break_on_match(),
        };

        if broken {
            continue;
        }
        match op {
            Op::Case(outcome) => {
                if !(in_pattern && matched) {
                    matched = *outcome;
                }
                in_pattern = true;
            }
            Op::Do => {
                if matched {
                    expected_actions += 1;
                }
                in_pattern = false;
            }
            Op::Break => broken = matched && !in_pattern,
        }
    }

    let mut defaulted = false;
    chain.default(|_| defaulted = true);

    assert_eq!(actions, expected_actions);
    assert_eq!(defaulted, expected_actions == 0);
});
