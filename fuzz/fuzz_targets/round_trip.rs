#![no_main]

use libfuzzer_sys::fuzz_target;

use prettybnf::{parse, stringify};

fuzz_target!(|code: &str| {
    let Ok(grammar) = parse(code) else { return };
    assert!(grammar.is_well_formed());

    let canonical = stringify(&grammar);
    let reparsed = parse(&canonical).expect("canonical output must parse");

    assert_eq!(reparsed, grammar);
    assert_eq!(stringify(&reparsed), canonical);
});
