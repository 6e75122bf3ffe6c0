// Pattern: Strategy
// The sort order is picked at runtime; the context never knows which
// algorithm it holds.

use crate::console::Console;
use tracing::debug;

pub const SAMPLE: [i32; 6] = [4, 2, 7, 1, 9, 3];

// ============================================================================
// Example: Strategy Pattern with Trait Objects
// ============================================================================

pub trait SortStrategy<T: Ord> {
    fn do_sort(&self, items: Vec<T>) -> Vec<T>;
    fn name(&self) -> &'static str;
}

pub struct StrategyAscent;

impl<T: Ord> SortStrategy<T> for StrategyAscent {
    fn do_sort(&self, mut items: Vec<T>) -> Vec<T> {
        items.sort();
        items
    }

    fn name(&self) -> &'static str {
        "ascent"
    }
}

pub struct StrategyDescent;

impl<T: Ord> SortStrategy<T> for StrategyDescent {
    fn do_sort(&self, mut items: Vec<T>) -> Vec<T> {
        items.sort_by(|a, b| b.cmp(a));
        items
    }

    fn name(&self) -> &'static str {
        "descent"
    }
}

pub struct Context<T: Ord> {
    strategy: Box<dyn SortStrategy<T>>,
}

impl<T: Ord> Context<T> {
    pub fn new(strategy: impl SortStrategy<T> + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Replaces the current strategy; the previous one is dropped.
    pub fn change(&mut self, strategy: impl SortStrategy<T> + 'static) {
        debug!(from = self.strategy.name(), to = strategy.name(), "changing strategy");
        self.strategy = Box::new(strategy);
    }

    pub fn execute_sort_strategy(&self, items: Vec<T>) -> Vec<T> {
        self.strategy.do_sort(items)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

pub fn drive(out: &mut dyn Console) {
    let mut cxt = Context::new(StrategyAscent);
    out.line(&format!("{:?}", cxt.execute_sort_strategy(SAMPLE.to_vec())));

    cxt.change(StrategyDescent);
    out.line(&format!("{:?}", cxt.execute_sort_strategy(SAMPLE.to_vec())));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use proptest::prelude::*;

    #[test]
    fn test_ascent_sorts_sample() {
        let cxt = Context::new(StrategyAscent);
        assert_eq!(cxt.execute_sort_strategy(SAMPLE.to_vec()), vec![1, 2, 3, 4, 7, 9]);
    }

    #[test]
    fn test_descent_sorts_sample() {
        let cxt = Context::new(StrategyDescent);
        assert_eq!(cxt.execute_sort_strategy(SAMPLE.to_vec()), vec![9, 7, 4, 3, 2, 1]);
    }

    #[test]
    fn test_change_uses_latest_strategy() {
        let mut cxt = Context::new(StrategyAscent);
        assert_eq!(cxt.strategy_name(), "ascent");

        cxt.change(StrategyDescent);
        cxt.change(StrategyAscent);
        cxt.change(StrategyDescent);
        assert_eq!(cxt.strategy_name(), "descent");
        assert_eq!(cxt.execute_sort_strategy(vec![1, 3, 2]), vec![3, 2, 1]);
    }

    #[test]
    fn test_works_for_any_ord_type() {
        let cxt = Context::new(StrategyAscent);
        let words = vec!["pear", "apple", "fig"];
        assert_eq!(cxt.execute_sort_strategy(words), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_empty_input() {
        let cxt: Context<i32> = Context::new(StrategyDescent);
        assert!(cxt.execute_sort_strategy(Vec::new()).is_empty());
    }

    #[test]
    fn test_drive_output() {
        let mut out = Transcript::new();
        drive(&mut out);
        assert_eq!(out.lines(), ["[1, 2, 3, 4, 7, 9]", "[9, 7, 4, 3, 2, 1]"]);
    }

    proptest! {
        #[test]
        fn prop_ascent_is_idempotent(items in prop::collection::vec(any::<i32>(), 0..64)) {
            let once = StrategyAscent.do_sort(items);
            let twice = StrategyAscent.do_sort(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_descent_is_reversed_ascent(items in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut ascending = StrategyAscent.do_sort(items.clone());
            ascending.reverse();
            prop_assert_eq!(StrategyDescent.do_sort(items), ascending);
        }

        #[test]
        fn prop_sort_keeps_length(items in prop::collection::vec(any::<i32>(), 0..64)) {
            let len = items.len();
            prop_assert_eq!(StrategyAscent.do_sort(items).len(), len);
        }
    }
}
