//! Monte Carlo averaging harness.
//!
//! Arguments are passed as a single tuple so any arity can be averaged:
//! `make_averaged(|(n, die)| ..., 1000)?((2, &dice))`.

use num_traits::ToPrimitive;

use crate::error::HogError;

/// Return a function that calls `f` `num_samples` times with the same
/// arguments and returns the mean of its results.
///
/// # Errors
///
/// Returns [`HogError::NoSamples`] when `num_samples` is zero.
pub fn make_averaged<A, T, F>(
    mut f: F,
    num_samples: u32,
) -> Result<impl FnMut(A) -> f64, HogError>
where
    A: Clone,
    T: ToPrimitive,
    F: FnMut(A) -> T,
{
    if num_samples == 0 {
        return Err(HogError::NoSamples);
    }
    Ok(move |args: A| {
        let total: f64 = (0..num_samples)
            .map(|_| f(args.clone()).to_f64().unwrap_or(0.0))
            .sum();
        total / f64::from(num_samples)
    })
}

/// [`make_averaged`] for functions that can fail. The first error stops
/// sampling and is returned.
///
/// # Errors
///
/// Returns [`HogError::NoSamples`] when `num_samples` is zero.
pub fn make_averaged_fallible<A, T, E, F>(
    mut f: F,
    num_samples: u32,
) -> Result<impl FnMut(A) -> Result<f64, E>, HogError>
where
    A: Clone,
    T: ToPrimitive,
    F: FnMut(A) -> Result<T, E>,
{
    if num_samples == 0 {
        return Err(HogError::NoSamples);
    }
    Ok(move |args: A| {
        let mut total = 0.0_f64;
        for _ in 0..num_samples {
            total += f(args.clone())?.to_f64().unwrap_or(0.0);
        }
        Ok(total / f64::from(num_samples))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{Die, TestDice};
    use crate::rules::roll_dice;

    #[test]
    fn averages_a_cyclic_die() {
        let dice = TestDice::new(&[3, 1, 5, 6]).unwrap();
        let mut averaged_dice = make_averaged(|()| dice.roll(), 1000).unwrap();
        assert!((averaged_dice(()) - 3.75).abs() < f64::EPSILON);
    }

    #[test]
    fn averages_roll_dice_over_two_turn_scenarios() {
        // [3, 1] pigs out for 1, [5, 6] scores 11.
        let dice = TestDice::new(&[3, 1, 5, 6]).unwrap();
        let mut averaged =
            make_averaged_fallible(|(n, die): (u32, &TestDice)| roll_dice(n, die), 1000).unwrap();
        assert!((averaged((2, &dice)).unwrap() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn every_call_samples_afresh() {
        let dice = TestDice::new(&[2, 4]).unwrap();
        let mut averaged = make_averaged(|()| dice.roll(), 3).unwrap();
        // 2, 4, 2 then 4, 2, 4
        assert!((averaged(()) - 8.0 / 3.0).abs() < 1e-12);
        assert!((averaged(()) - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_samples_is_rejected() {
        assert!(matches!(
            make_averaged(|()| 1u32, 0).err(),
            Some(HogError::NoSamples)
        ));
    }

    #[test]
    fn errors_stop_sampling() {
        let dice = TestDice::new(&[4]).unwrap();
        let mut averaged =
            make_averaged_fallible(|(n, die): (u32, &TestDice)| roll_dice(n, die), 10).unwrap();
        assert_eq!(averaged((0, &dice)), Err(HogError::NonPositiveRolls));
        assert_eq!(dice.rolls(), 0);
    }
}
