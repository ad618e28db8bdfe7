use std::cmp::Ordering;

/// Three-way comparison used to order a heap.
/// `compare(a, b) == Less` means `a` belongs closer to the root than `b`.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// True if `a` must sit above `b`, i.e. strictly better
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Smallest element at the root
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinOrder;

/// Largest element at the root
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_order_prefers_smaller() {
        assert!(MinOrder.precedes(&1, &2));
        assert!(!MinOrder.precedes(&2, &1));
        assert!(!MinOrder.precedes(&2, &2));
    }

    #[test]
    fn test_max_order_prefers_larger() {
        assert!(MaxOrder.precedes(&2, &1));
        assert!(!MaxOrder.precedes(&1, &2));
        assert_eq!(MaxOrder.compare(&"a", &"a"), Ordering::Equal);
    }

    #[test]
    fn test_closure_order() {
        let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
        assert!(by_len.precedes(&"ab".to_string(), &"abc".to_string()));
        let floats = |a: &f64, b: &f64| a.total_cmp(b);
        assert!(floats.precedes(&-0.5, &0.25));
        assert!(!floats.precedes(&f64::NAN, &0.25));
    }
}
