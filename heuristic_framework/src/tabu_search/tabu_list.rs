use std::collections::VecDeque;

/// Insertion-ordered list of forbidden moves. Without tenure nothing is ever evicted, otherwise
/// the oldest entry is dropped as soon as the list is longer than the tenure.
#[derive(Debug, Clone)]
pub struct TabuList<M> {
    entries: VecDeque<M>,
    tenure: Option<usize>,
}

impl<M: PartialEq> TabuList<M> {
    pub fn new(tenure: Option<usize>) -> TabuList<M> {
        TabuList {
            entries: VecDeque::new(),
            tenure,
        }
    }

    pub fn is_tabu(&self, mv: &M) -> bool {
        self.entries.contains(mv)
    }

    pub fn insert(&mut self, mv: M) {
        self.entries.push_back(mv);
        if let Some(tenure) = self.tenure {
            while self.entries.len() > tenure {
                self.entries.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::TabuList;

    #[test]
    fn without_tenure_nothing_is_evicted() {
        let mut tabu_list = TabuList::new(None);
        for i in 0..100 {
            tabu_list.insert(i);
        }
        assert_eq!(tabu_list.len(), 100);
        assert!(tabu_list.is_tabu(&0));
        assert!(tabu_list.is_tabu(&99));
        assert!(!tabu_list.is_tabu(&100));
    }

    #[test]
    fn tenure_evicts_oldest_first() {
        let mut tabu_list = TabuList::new(Some(2));
        tabu_list.insert("a");
        tabu_list.insert("b");
        tabu_list.insert("c");
        assert_eq!(tabu_list.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
        assert!(!tabu_list.is_tabu(&"a"));
    }
}
