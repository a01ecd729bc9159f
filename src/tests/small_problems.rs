//! Properties that should hold for every method on a collection of small problems.
use crate::algorithm::{InitialSolution, Method, Russell, calculate_total_cost, is_balanced};
use crate::data::allocation::Allocation;

type T = i64;

/// Balanced problems as `(costs, supply, demand)`.
fn problems() -> Vec<(Vec<Vec<T>>, Vec<T>, Vec<T>)> {
    vec![
        (vec![vec![5]], vec![9], vec![9]),
        (vec![vec![3, 1, 2]], vec![6], vec![1, 2, 3]),
        (vec![vec![3], vec![1], vec![2]], vec![1, 2, 3], vec![6]),
        (
            vec![vec![2, 3, 11, 7], vec![1, 0, 6, 1], vec![5, 8, 15, 9]],
            vec![6, 1, 10],
            vec![7, 5, 3, 2],
        ),
        (
            vec![vec![19, 30, 50, 10], vec![70, 30, 40, 60], vec![40, 8, 70, 20]],
            vec![7, 9, 18],
            vec![5, 8, 7, 14],
        ),
        // Degenerate: partial sums of supply and demand coincide
        (
            vec![vec![4, 8, 8], vec![16, 24, 16], vec![8, 16, 24]],
            vec![76, 82, 77],
            vec![72, 102, 61],
        ),
        (vec![vec![1, 1], vec![1, 1]], vec![5, 5], vec![5, 5]),
        // Zero supply and demand
        (vec![vec![1, 2], vec![3, 4]], vec![0, 4], vec![4, 0]),
    ]
}

fn all_solutions(costs: &[Vec<T>], supply: &[T], demand: &[T]) -> Vec<(String, Allocation<T>)> {
    let mut solutions = Method::ALL.iter()
        .map(|method| (method.to_string(), method.solve(costs, supply, demand)))
        .collect::<Vec<_>>();
    solutions.push(("textbook Russell".to_string(), Russell::textbook().solve(costs, supply, demand)));

    solutions
}

#[test]
fn feasible() {
    for (costs, supply, demand) in problems() {
        assert!(is_balanced(&supply, &demand));
        for (name, solution) in all_solutions(&costs, &supply, &demand) {
            assert_eq!(solution.nr_rows(), supply.len());
            assert_eq!(solution.nr_columns(), demand.len());
            assert!(solution.satisfies(&supply, &demand), "{name} on {costs:?}");
            assert!(solution.rows().iter().flatten().all(|&value| value >= 0), "{name} on {costs:?}");
            assert!(solution.nr_allocated_cells() < supply.len() + demand.len(), "{name} on {costs:?}");
        }
    }
}

#[test]
fn deterministic() {
    for (costs, supply, demand) in problems() {
        assert_eq!(all_solutions(&costs, &supply, &demand), all_solutions(&costs, &supply, &demand));
    }
}

#[test]
fn total_cost_is_linear() {
    for (costs, supply, demand) in problems() {
        let scaled = costs.iter()
            .map(|row| row.iter().map(|cost| 7 * cost).collect())
            .collect::<Vec<Vec<_>>>();
        for (_, solution) in all_solutions(&costs, &supply, &demand) {
            assert_eq!(
                calculate_total_cost(&solution, &scaled),
                7 * calculate_total_cost(&solution, &costs),
            );
        }
        let nothing = Allocation::zeros(supply.len(), demand.len());
        assert_eq!(calculate_total_cost(&nothing, &costs), 0);
    }
}

#[test]
fn uniform_costs() {
    // When all costs are equal, every feasible solution costs the same
    let costs = vec![vec![3; 3]; 2];
    let (supply, demand) = (vec![4, 5], vec![2, 3, 4]);
    for (name, solution) in all_solutions(&costs, &supply, &demand) {
        assert_eq!(calculate_total_cost(&solution, &costs), 27, "{name}");
    }
}

#[test]
fn unbalanced() {
    let costs = vec![vec![1, 2, 3]];
    let (supply, demand) = (vec![10], vec![5, 5, 1]);

    assert!(!is_balanced(&supply, &demand));
    // Methods terminate, but the allocation can't match the problem
    for (name, solution) in all_solutions(&costs, &supply, &demand) {
        assert!(!solution.satisfies(&supply, &demand), "{name}");
        assert!(solution.row_sum(0) <= 10, "{name}");
    }
}
