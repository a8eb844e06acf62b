#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;

use fibmemo_cli::presenter::ConsolePresenter;
use fibmemo_cli::session::Session;
use fibmemo_core::cache::FibCache;
use fibmemo_core::calculator::MemoizedCalculator;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a typed session: must never panic, only I/O may fail.
    let calc = MemoizedCalculator::new();
    let mut cache = FibCache::new();
    let mut output = Vec::new();
    let _ = Session::new(&calc, &mut cache, ConsolePresenter::default())
        .run(Cursor::new(data), &mut output);
});
