//! Property-based tests for entry validation and totals.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::{CreateEntryInput, EntryType, EntryTypeInput};
use super::error::ValidationError;
use super::totals::Totals;
use super::validation::{MAX_AMOUNT_SCALE, validate_amount, validate_create};

/// Strategy to generate a positive amount (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a zero or negative amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![
        Just(EntryType::Purchase),
        Just(EntryType::Expense),
        Just(EntryType::Sale)
    ]
}

fn input(entry_type: EntryType, title: String, amount: Decimal) -> CreateEntryInput {
    CreateEntryInput {
        entry_type: Some(EntryTypeInput::Code(entry_type.code())),
        title,
        amount,
        notes: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_positive_amount_is_stored_as_given(
        entry_type in entry_type_strategy(),
        amount in positive_amount(),
    ) {
        let entry = validate_create(&input(entry_type, "Item".into(), amount)).unwrap();
        prop_assert_eq!(entry.amount, amount.abs());
        prop_assert!(entry.amount > Decimal::ZERO);
        prop_assert_eq!(entry.entry_type, entry_type);
    }

    #[test]
    fn prop_non_positive_amount_is_rejected(
        entry_type in entry_type_strategy(),
        amount in non_positive_amount(),
    ) {
        let result = validate_create(&input(entry_type, "Item".into(), amount));
        prop_assert_eq!(result, Err(ValidationError::NonPositiveAmount));
    }

    #[test]
    fn prop_accepted_amounts_fit_the_stored_scale(
        mantissa in 1i64..1_000_000_000i64,
        scale in 0u32..=8,
    ) {
        let amount = Decimal::new(mantissa, scale);
        match validate_amount(amount) {
            Ok(stored) => {
                prop_assert_eq!(stored, amount);
                prop_assert!(stored.scale() <= MAX_AMOUNT_SCALE);
            }
            Err(err) => {
                prop_assert_eq!(err, ValidationError::AmountTooPrecise { max_scale: MAX_AMOUNT_SCALE });
                prop_assert!(amount.normalize().scale() > MAX_AMOUNT_SCALE);
            }
        }
    }

    #[test]
    fn prop_title_is_trimmed(
        title in "[A-Za-z0-9]{1,20}",
        left in " {0,4}",
        right in "\t{0,4}",
    ) {
        let padded = format!("{left}{title}{right}");
        let entry = validate_create(&input(EntryType::Sale, padded, Decimal::ONE)).unwrap();
        prop_assert_eq!(entry.title, title);
    }

    #[test]
    fn prop_net_formula_holds_for_any_mix(
        movements in prop::collection::vec((entry_type_strategy(), positive_amount()), 0..50),
    ) {
        let mut totals = Totals::default();
        for (entry_type, amount) in &movements {
            totals.record(*entry_type, *amount);
        }

        prop_assert_eq!(
            totals.net_total,
            totals.sales_total - (totals.purchases_total + totals.expenses_total)
        );
        let halves: Totals = movements
            .chunks(2)
            .map(|chunk| {
                let mut part = Totals::default();
                for (entry_type, amount) in chunk {
                    part.record(*entry_type, *amount);
                }
                part
            })
            .sum();
        prop_assert_eq!(halves, totals);
    }
}
