use super::GeneticConfig;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An item that may be put into the knapsack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub weight: u32,
    pub value: u32,
}

impl Item {
    /// Creates a new item.
    pub fn new(weight: u32, value: u32) -> Item {
        Item { weight, value }
    }
}

/// A knapsack problem instance: a fixed catalog of
/// items and the weight capacity they must fit into.
///
/// An item's index in the catalog is its identity
/// for the whole run; chromosomes refer to items
/// only through it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: u32,
}

impl Knapsack {
    /// Creates a problem instance from explicit items.
    ///
    /// # Panics
    /// Panics if the total weight or the total value
    /// of all items does not fit in a `u32`.
    ///
    /// # Examples
    /// ```
    /// use memeknap::{Item, Knapsack};
    ///
    /// let knapsack = Knapsack::new(vec![Item::new(10, 60), Item::new(20, 100)], 25);
    ///
    /// assert_eq!(knapsack.len(), 2);
    /// assert_eq!(knapsack.capacity(), 25);
    /// ```
    pub fn new(items: Vec<Item>, capacity: u32) -> Knapsack {
        let totals = items.iter().try_fold((0u32, 0u32), |(weight, value), item| {
            Some((weight.checked_add(item.weight)?, value.checked_add(item.value)?))
        });
        assert!(totals.is_some(), "item totals overflow u32");
        Knapsack { items, capacity }
    }

    /// Generates `config.item_count` items with weights and
    /// values drawn uniformly from the configured bounds.
    ///
    /// # Panics
    /// Panics if `config` fails [validation].
    ///
    /// [validation]: GeneticConfig::validate
    ///
    /// # Examples
    /// ```
    /// use memeknap::{GeneticConfig, Knapsack};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let config = GeneticConfig::default();
    /// let knapsack = Knapsack::generate(&config, &mut StdRng::seed_from_u64(7));
    ///
    /// assert_eq!(knapsack.len(), 100);
    /// assert_eq!(knapsack.capacity(), 250);
    /// assert!(knapsack.items().iter().all(|i| (1..=25).contains(&i.weight)));
    /// assert!(knapsack.items().iter().all(|i| (2..=30).contains(&i.value)));
    /// ```
    pub fn generate<R: Rng + ?Sized>(config: &GeneticConfig, rng: &mut R) -> Knapsack {
        let (min_weight, max_weight) = config.weight_bounds;
        let (min_value, max_value) = config.value_bounds;
        let items: Vec<Item> = (0..config.item_count.get())
            .map(|_| {
                let weight = rng.gen_range(min_weight..=max_weight);
                let value = rng.gen_range(min_value..=max_value);
                Item::new(weight, value)
            })
            .collect();
        let knapsack = Knapsack::new(items, config.capacity);
        debug!(
            "generated {} items (total weight {}, total value {}) for capacity {}",
            knapsack.len(),
            knapsack.items.iter().map(|i| i.weight).sum::<u32>(),
            knapsack.max_value(),
            knapsack.capacity
        );
        knapsack
    }

    /// Returns the item catalog.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the weight capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the sum of all item values, an upper bound
    /// on any chromosome's fitness.
    pub fn max_value(&self) -> u32 {
        self.items.iter().map(|i| i.value).sum()
    }

    /// Returns the total weight of the items selected by `chromosome`.
    pub fn weight_of(&self, chromosome: &[bool]) -> u32 {
        self.totals(chromosome).0
    }

    /// Returns the total value of the items selected by `chromosome`,
    /// regardless of feasibility.
    pub fn value_of(&self, chromosome: &[bool]) -> u32 {
        self.totals(chromosome).1
    }

    /// Returns whether the items selected by `chromosome` fit.
    pub fn fits(&self, chromosome: &[bool]) -> bool {
        self.weight_of(chromosome) <= self.capacity
    }

    /// Computes the fitness of a chromosome: the total value
    /// of its selected items if they fit in the knapsack,
    /// otherwise 0.
    ///
    /// # Panics
    /// Panics if the chromosome's length differs from
    /// the number of items.
    ///
    /// # Examples
    /// ```
    /// use memeknap::{Item, Knapsack};
    ///
    /// let knapsack = Knapsack::new(vec![Item::new(10, 60), Item::new(20, 100)], 25);
    ///
    /// assert_eq!(knapsack.evaluate(&[true, false]), 60);
    /// assert_eq!(knapsack.evaluate(&[false, true]), 100);
    /// // Over capacity.
    /// assert_eq!(knapsack.evaluate(&[true, true]), 0);
    /// ```
    pub fn evaluate(&self, chromosome: &[bool]) -> u32 {
        let (weight, value) = self.totals(chromosome);
        if weight <= self.capacity {
            value
        } else {
            0
        }
    }

    /// Returns the total (weight, value) of the selected items.
    /// Neither can overflow, as [`Knapsack::new`] bounds
    /// the totals of the whole catalog.
    fn totals(&self, chromosome: &[bool]) -> (u32, u32) {
        assert_eq!(
            chromosome.len(),
            self.items.len(),
            "chromosome length does not match item count"
        );
        chromosome
            .iter()
            .zip(&self.items)
            .filter(|(&included, _)| included)
            .fold((0, 0), |(weight, value), (_, item)| {
                (weight + item.weight, value + item.value)
            })
    }
}
