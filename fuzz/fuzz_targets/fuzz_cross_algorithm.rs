#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmemo_core::cache::FibCache;
use fibmemo_core::constants::FIB_TABLE;
use fibmemo_core::memoized::memoized_fib;
use fibmemo_core::naive::naive_fib;

fuzz_target!(|data: &[u8]| {
    // Each 8-byte chunk is one query against a shared cache.
    let mut cache = FibCache::new();
    for chunk in data.chunks_exact(8) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        let n = i64::from_le_bytes(bytes);

        let memo = memoized_fib(n, &mut cache);
        match usize::try_from(n) {
            Ok(index) if (1..FIB_TABLE.len()).contains(&index) => {
                assert_eq!(memo, Ok(FIB_TABLE[index]), "memoized wrong at n={n}");
                // Naive is exponential; only cross-check small indices.
                if index <= 25 {
                    assert_eq!(naive_fib(n), memo, "naive != memoized at n={n}");
                }
            }
            _ => assert!(memo.is_err(), "n={n} should be rejected"),
        }
    }
});
