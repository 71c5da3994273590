//! Walking the values of an [`Enumerated`] type in ordinal order.

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Range;

use crate::Enumerated;
use crate::cache::num_values;
use crate::error::{Error, Result};

fn at<T: Enumerated>(ordinal: usize) -> Result<T> {
    T::from_ordinal(ordinal).ok_or(Error::Inconsistent {
        type_name: T::type_signature(),
        ordinal,
    })
}

/// The value at ordinal 0.
pub fn first<T: Enumerated>() -> Result<T> {
    num_values::<T>()?;
    at(0)
}

/// The value at the highest ordinal.
pub fn last<T: Enumerated>() -> Result<T> {
    at(num_values::<T>()? - 1)
}

/// The value after `value`, or `None` past the last one.
pub fn next<T: Enumerated>(value: T) -> Option<T> {
    value.ordinal().checked_add(1).and_then(T::from_ordinal)
}

/// The value after `value`, wrapping from the last value to the first.
pub fn next_wrapping<T: Enumerated>(value: T) -> Result<T> {
    at((value.ordinal() + 1) % num_values::<T>()?)
}

/// All values of `T` in ordinal order.
pub fn values<T: Enumerated>() -> Result<Values<T>> {
    Ok(Values {
        ordinals: 0..num_values::<T>()?,
        _type: PhantomData,
    })
}

/// Iterator returned by [`values`].
#[derive(Debug, Clone)]
pub struct Values<T> {
    ordinals: Range<usize>,
    _type: PhantomData<fn() -> T>,
}

impl<T: Enumerated> Iterator for Values<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.ordinals.next().and_then(T::from_ordinal)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ordinals.size_hint()
    }
}

impl<T: Enumerated> DoubleEndedIterator for Values<T> {
    fn next_back(&mut self) -> Option<T> {
        self.ordinals.next_back().and_then(T::from_ordinal)
    }
}

impl<T: Enumerated> ExactSizeIterator for Values<T> {}

impl<T: Enumerated> FusedIterator for Values<T> {}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::value_name;

    crate::enumerated! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Suit {
            Clubs,
            Diamonds,
            Hearts,
            Spades,
        }
    }

    crate::enumerated! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Unit {
            Alone,
        }
    }

    #[test]
    fn bounds() {
        assert_eq!(first::<Suit>(), Ok(Suit::Clubs));
        assert_eq!(last::<Suit>(), Ok(Suit::Spades));
        assert_eq!(first::<Unit>(), last::<Unit>());
    }

    #[rstest]
    #[case(Suit::Clubs, Some(Suit::Diamonds))]
    #[case(Suit::Hearts, Some(Suit::Spades))]
    #[case(Suit::Spades, None)]
    fn successor(#[case] value: Suit, #[case] expected: Option<Suit>) {
        assert_eq!(next(value), expected);
    }

    #[rstest]
    #[case(Suit::Clubs, Suit::Diamonds)]
    #[case(Suit::Spades, Suit::Clubs)]
    fn wrapping_successor(#[case] value: Suit, #[case] expected: Suit) {
        assert_eq!(next_wrapping(value), Ok(expected));
    }

    #[test]
    fn wrapping_single_value() {
        assert_eq!(next_wrapping(Unit::Alone), Ok(Unit::Alone));
        assert_eq!(next(Unit::Alone), None);
    }

    #[test]
    fn successor_loop_visits_each_value_once() {
        let mut visited = Vec::new();
        let mut value = Some(first::<Suit>().unwrap());
        while let Some(current) = value {
            visited.push(value_name(current).unwrap());
            value = next(current);
        }
        assert_eq!(visited, vec!["Clubs", "Diamonds", "Hearts", "Spades"]);
    }

    #[test]
    fn iterates_both_ways() {
        let values = values::<Suit>().unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(
            values.clone().collect::<Vec<_>>(),
            vec![Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
        );
        assert_eq!(
            values.rev().collect::<Vec<_>>(),
            vec![Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
        );
    }
}
