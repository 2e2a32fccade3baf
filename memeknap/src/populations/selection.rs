use crate::Individual;

use rand::Rng;

use std::num::NonZeroUsize;

/// Draws `size` individuals uniformly at random, with
/// replacement, and returns the fittest of them.
///
/// Ties go to whichever was drawn first.
///
/// # Panics
/// Panics if `population` is empty.
///
/// # Examples
/// ```
/// use memeknap::populations::tournament;
/// use memeknap::{Individual, Item, Knapsack};
/// use rand::{rngs::StdRng, SeedableRng};
/// use std::num::NonZeroUsize;
///
/// let knapsack = Knapsack::new(vec![Item::new(1, 1), Item::new(1, 5)], 1);
/// let population = vec![
///     Individual::new(vec![true, false], &knapsack),
///     Individual::new(vec![false, true], &knapsack),
/// ];
///
/// let winner = tournament(&population, NonZeroUsize::new(5).unwrap(), &mut StdRng::seed_from_u64(0));
/// assert!(population.contains(winner));
/// ```
pub fn tournament<'a, R: Rng + ?Sized>(
    population: &'a [Individual],
    size: NonZeroUsize,
    rng: &mut R,
) -> &'a Individual {
    assert!(!population.is_empty(), "tournament over an empty population");
    let mut winner = &population[rng.gen_range(0..population.len())];
    for _ in 1..size.get() {
        let contender = &population[rng.gen_range(0..population.len())];
        if contender.fitness() > winner.fitness() {
            winner = contender;
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Item, Knapsack};
    use rand::{rngs::StdRng, SeedableRng};

    fn population_with_fitnesses(fitnesses: &[u32]) -> (Knapsack, Vec<Individual>) {
        let knapsack = Knapsack::new(
            fitnesses.iter().map(|&v| Item::new(1, v.max(1))).collect(),
            1,
        );
        let population = fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut chromosome = vec![false; fitnesses.len()];
                if f > 0 {
                    chromosome[i] = true;
                }
                Individual::new(chromosome, &knapsack)
            })
            .collect();
        (knapsack, population)
    }

    #[test]
    fn picks_first_fittest_of_draws() {
        let (_, population) = population_with_fitnesses(&[3, 7, 7, 0, 5, 1, 7, 2]);
        let size = NonZeroUsize::new(5).unwrap();
        for seed in 0..100 {
            // Replay the draws the tournament is going to make.
            let mut replay = StdRng::seed_from_u64(seed);
            let draws: Vec<usize> = (0..5)
                .map(|_| replay.gen_range(0..population.len()))
                .collect();
            let mut expected = draws[0];
            for &d in &draws[1..] {
                if population[d].fitness() > population[expected].fitness() {
                    expected = d;
                }
            }

            let winner = tournament(&population, size, &mut StdRng::seed_from_u64(seed));
            assert!(std::ptr::eq(winner, &population[expected]));
        }
    }

    #[test]
    fn single_entrant_is_uniform_draw() {
        let (_, population) = population_with_fitnesses(&[1, 2, 3, 4]);
        let mut rng = StdRng::seed_from_u64(4);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let winner = tournament(&population, NonZeroUsize::new(1).unwrap(), &mut rng);
            seen[winner.fitness() as usize - 1] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn large_tournament_finds_best() {
        let (_, population) = population_with_fitnesses(&[4, 9, 2, 6]);
        let winner = tournament(
            &population,
            NonZeroUsize::new(200).unwrap(),
            &mut StdRng::seed_from_u64(12),
        );
        assert_eq!(winner.fitness(), 9);
    }

    #[test]
    #[should_panic]
    fn empty_population() {
        tournament(
            &[],
            NonZeroUsize::new(5).unwrap(),
            &mut StdRng::seed_from_u64(0),
        );
    }
}
