//! Greedy repair of chromosomes, which turns the
//! genetic algorithm into a memetic one.

use super::Knapsack;

/// Performs a single forward pass over `chromosome`,
/// keeping a running total of the selected weight:
///
/// - An excluded item is included if it still fits.
/// - An included item is swapped for the first excluded item,
///   in index order, that is strictly more valuable and
///   keeps the total within capacity.
///
/// Changes made for earlier indices affect the options of
/// later ones. No index is visited twice.
pub(super) fn greedy_pass(chromosome: &mut [bool], knapsack: &Knapsack) {
    let items = knapsack.items();
    let capacity = knapsack.capacity();
    let mut total_weight = knapsack.weight_of(chromosome);

    for i in 0..items.len() {
        if !chromosome[i] {
            if total_weight + items[i].weight <= capacity {
                chromosome[i] = true;
                total_weight += items[i].weight;
            }
            continue;
        }

        let replacement = (0..items.len()).find(|&j| {
            !chromosome[j]
                && items[j].value > items[i].value
                && total_weight - items[i].weight + items[j].weight <= capacity
        });
        if let Some(j) = replacement {
            chromosome[i] = false;
            chromosome[j] = true;
            total_weight = total_weight - items[i].weight + items[j].weight;
        }
    }
}
