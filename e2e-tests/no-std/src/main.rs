//! Test no-std application for Luhn number validation and generation.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use cortex_m_semihosting::{debug, hprintln, syscall};
#[cfg(target_arch = "arm")]
use panic_halt as _;
use rand_chacha::{rand_core::SeedableRng, ChaChaRng};

use luhn_algorithms::{
    check_digit, is_valid, is_valid_str, DomainError, Generator, ParseError, MAX_LENGTH,
};

const SAMPLES: &[(&str, bool)] = &[
    ("4444333322221111", true),
    ("4444333322221112", false),
    ("4716881992809921", true),
    ("372095199917337", true),
    ("0", true),
];

fn check_validation() {
    for &(input, expected) in SAMPLES {
        assert_eq!(is_valid_str(input), Ok(expected));
    }
    assert_eq!(is_valid_str(""), Err(ParseError::Empty));
    assert_eq!(is_valid_str("9223372036854775808"), Err(ParseError::Overflow));
    assert_eq!(check_digit(444_433_332_222_111), 1);
}

fn main_inner() {
    check_validation();

    let epoch_seconds = unsafe { syscall!(TIME) };
    // Using a timestamp as an RNG seed is unsecure and done for simplicity only.
    // Modern bare metal envs come with a hardware RNG peripheral that should be used instead.
    let rng = ChaChaRng::seed_from_u64(epoch_seconds as u64);
    let mut generator = Generator::new(rng);

    for length in 1..=MAX_LENGTH {
        let number = generator.generate_random(length).unwrap();
        hprintln!("[length {}] {}", length, number);
        assert!(is_valid(number));
    }

    let number = generator.generate_in_range(4, 4, 16).unwrap();
    hprintln!("[4xxx] {}", number);
    assert!(is_valid(number));
    assert_eq!(number / 1_000_000_000_000_000, 4);

    assert_eq!(generator.generate_random(0), Err(DomainError::ZeroLength));
}

#[entry]
fn main() -> ! {
    main_inner();

    debug::exit(debug::EXIT_SUCCESS);
    unreachable!("Program must exit by this point");
}
