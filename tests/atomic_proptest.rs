use proptest::prelude::*;
use wordcell::Atomic;

proptest! {
    #[test]
    fn swap_installs_and_returns_prior(initial: u32, next: u32) {
        let cell = Atomic::new(initial);
        prop_assert_eq!(cell.swap(next), initial);
        prop_assert_eq!(cell.load(), next);
    }

    #[test]
    fn cas_follows_the_narrow_contract(initial: u32, expected: u32, new: u32) {
        let cell = Atomic::new(initial);
        let returned = cell.compare_and_swap(expected, new);
        if initial == expected {
            prop_assert_eq!(returned, new);
            prop_assert_eq!(cell.load(), new);
        } else {
            prop_assert_eq!(returned, expected);
            prop_assert_eq!(cell.load(), initial);
        }
    }

    #[test]
    fn compare_exchange_reports_the_observed_value(initial: u8, current: u8, new: u8) {
        let cell = Atomic::new(initial);
        let result = cell.compare_exchange(current, new);
        if initial == current {
            prop_assert_eq!(result, Ok(initial));
            prop_assert_eq!(cell.load(), new);
        } else {
            prop_assert_eq!(result, Err(initial));
            prop_assert_eq!(cell.load(), initial);
        }
    }

    #[test]
    fn fetch_add_returns_pre_value_and_wraps(initial: u16, k: u16) {
        let cell = Atomic::new(initial);
        prop_assert_eq!(cell.fetch_add(k), initial);
        prop_assert_eq!(cell.load_relaxed(), initial.wrapping_add(k));
    }

    #[test]
    fn fetch_add_wraps_for_signed_types(initial: i16, k: i16) {
        let cell = Atomic::new(initial);
        prop_assert_eq!(cell.fetch_add(k), initial);
        prop_assert_eq!(cell.load(), initial.wrapping_add(k));
    }

    #[test]
    fn store_load_round_trips(value: isize) {
        let cell = Atomic::new(0isize);
        cell.store(value);
        prop_assert_eq!(cell.load(), value);
        prop_assert_eq!(cell.load_relaxed(), value);
    }

    #[test]
    fn narrow_and_wide_cas_agree(initial: u32, expected: u32, new: u32) {
        let narrow = Atomic::new(initial);
        let wide = Atomic::new(initial);
        let narrow_ret = narrow.compare_and_swap(expected, new);
        let wide_ret = match wide.compare_exchange(expected, new) {
            Ok(_) => new,
            Err(_) => expected,
        };
        prop_assert_eq!(narrow_ret, wide_ret);
        prop_assert_eq!(narrow.load(), wide.load());
    }
}
