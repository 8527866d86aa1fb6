use super::Key;

pub trait HeapOrder {
    /// Direction in which a parent must compare against its children.
    const ORDERING: std::cmp::Ordering;

    /// Capitalised name, used when printing heap contents
    const LABEL: &'static str;
    /// Lowercase name, used on the command line and in timing lines
    const NAME: &'static str;

    /// Keys in insertion order for `build_heap`
    type Generator: Iterator<Item = Key>;

    /// Worst-case input: the key that belongs at the bottom of the heap is
    /// inserted first and lands on the root before any restoration.
    fn generate(elements: usize) -> Self::Generator;

    /// `a` may sit above `b`. Equal keys are always acceptable.
    #[inline]
    fn is_better(a: &Key, b: &Key) -> bool {
        a.cmp(b) != Self::ORDERING.reverse()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MaxOrder;
impl HeapOrder for MaxOrder {
    // Parents compare greater than or equal to their children
    const ORDERING: std::cmp::Ordering = std::cmp::Ordering::Greater;
    const LABEL: &'static str = "Max";
    const NAME: &'static str = "max";

    type Generator = std::ops::Range<Key>;

    #[inline]
    fn generate(elements: usize) -> Self::Generator {
        // 0, 1, ..., n-1; the smallest key starts at the root
        0..elements as Key
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MinOrder;
impl HeapOrder for MinOrder {
    // Parents compare less than or equal to their children
    const ORDERING: std::cmp::Ordering = std::cmp::Ordering::Less;
    const LABEL: &'static str = "Min";
    const NAME: &'static str = "min";

    type Generator = std::iter::Rev<std::ops::RangeInclusive<Key>>;

    #[inline]
    fn generate(elements: usize) -> Self::Generator {
        // n, n-1, ..., 1; the largest key starts at the root
        (1..=elements as Key).rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_better() {
        assert!(MaxOrder::is_better(&4, &3));
        assert!(MaxOrder::is_better(&3, &3));
        assert!(!MaxOrder::is_better(&2, &3));

        assert!(MinOrder::is_better(&3, &4));
        assert!(MinOrder::is_better(&3, &3));
        assert!(!MinOrder::is_better(&4, &3));
    }

    #[test]
    fn test_generators() {
        assert_eq!(MaxOrder::generate(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(MinOrder::generate(5).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);

        assert_eq!(MaxOrder::generate(0).count(), 0);
        assert_eq!(MinOrder::generate(0).count(), 0);
    }
}
