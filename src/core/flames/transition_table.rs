/// Slot count of every next-XForm table.
pub const TABLE_SIZE: usize = 1024;

/// Fixed-size lookup from a uniform slot to the next XForm index.
///
/// `None` slots mark a source XForm whose outgoing weights sum to zero; the
/// walk has to restart when it lands on one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    slots: Vec<Option<usize>>,
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self {
            slots: vec![None; TABLE_SIZE],
        }
    }
}

impl TransitionTable {
    /// Builds the table from the effective transition weights
    /// `tp[i] = weight[i] * modified_weight[i]`.
    #[must_use]
    pub fn build(tp: &[f64]) -> Self {
        let mut total = 0.0;
        for &weight in tp {
            total += weight;
        }

        if tp.is_empty() || !(total > 0.0) {
            return Self::default();
        }

        let last = tp.len() - 1;
        let step = total / TABLE_SIZE as f64;
        let mut cursor = 0.0;
        let mut slots = Vec::with_capacity(TABLE_SIZE);

        for _ in 0..TABLE_SIZE {
            let mut j = 0;
            let mut running = 0.0;
            loop {
                running += tp[j];
                if running > cursor || j == last {
                    break;
                }
                j += 1;
            }
            slots.push(Some(j));
            cursor += step;
        }

        Self { slots }
    }

    /// Next XForm index for `slot`, or `None` for a terminal source.
    #[must_use]
    pub fn next(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(table: &TransitionTable, idx: usize) -> usize {
        table.slots().iter().filter(|slot| **slot == Some(idx)).count()
    }

    #[test]
    fn test_entries_in_range() {
        let tp = [0.3, 0.0, 2.5, 1.2, 0.01];
        let table = TransitionTable::build(&tp);

        assert_eq!(table.slots().len(), TABLE_SIZE);
        for slot in table.slots() {
            let idx = slot.expect("positive total fills every slot");
            assert!(idx < tp.len());
        }
    }

    #[test]
    fn test_zero_total_is_all_sentinel() {
        let table = TransitionTable::build(&[0.0, 0.0, 0.0]);

        assert!(table.is_terminal());
        assert_eq!(table.next(0), None);
        assert_eq!(table.next(TABLE_SIZE - 1), None);
    }

    #[test]
    fn test_empty_weights_are_terminal() {
        assert!(TransitionTable::build(&[]).is_terminal());
    }

    #[test]
    fn test_equal_weights_split_evenly() {
        let table = TransitionTable::build(&[1.0, 1.0]);

        assert_eq!(count(&table, 0), 512);
        assert_eq!(count(&table, 1), 512);
        assert_eq!(table.next(0), Some(0));
        assert_eq!(table.next(511), Some(0));
        assert_eq!(table.next(512), Some(1));
    }

    #[test]
    fn test_zero_weight_xform_is_never_chosen() {
        let table = TransitionTable::build(&[1.0, 0.0, 3.0]);

        assert_eq!(count(&table, 1), 0);
        assert_eq!(count(&table, 0), 256);
        assert_eq!(count(&table, 2), 768);
    }

    #[test]
    fn test_single_xform_fills_table() {
        let table = TransitionTable::build(&[0.7]);

        assert_eq!(count(&table, 0), TABLE_SIZE);
    }

    #[test]
    fn test_out_of_range_slot_is_none() {
        let table = TransitionTable::build(&[1.0]);

        assert_eq!(table.next(TABLE_SIZE), None);
    }
}
