use enum_map::EnumMap;

use transport::algorithm::{InitialSolution, Method, Russell};
use transport::algorithm::{calculate_total_cost, is_balanced, northwest_corner, russell_approximation, vogel_approximation};
use transport::data::allocation::Allocation;
use transport::data::error::{ShapeError, Unbalanced};
use transport::io::error::ImportError;
use transport::io::import;

use super::{get_test_file_path, read};

fn costs(solutions: &EnumMap<Method, Allocation<u64>>, costs: &[Vec<u64>]) -> Vec<u64> {
    solutions.values().map(|allocation| calculate_total_cost(allocation, costs)).collect()
}

#[test]
fn worked_example() {
    let problem = read("worked_example");
    assert!(problem.is_balanced());
    assert_eq!(problem.nr_sources(), 3);
    assert_eq!(problem.nr_destinations(), 4);

    let solutions = problem.solve_all().unwrap();
    assert_eq!(costs(&solutions, problem.costs()), vec![165_595, 152_535, 152_535]);
    assert_eq!(problem.cheapest(&solutions), (Method::Vogel, 152_535));
}

#[test]
fn classic() {
    let problem = read("classic");
    let (costs_matrix, supply, demand) = (problem.costs(), problem.supply(), problem.demand());
    assert!(is_balanced(supply, demand));

    let northwest = northwest_corner(supply, demand);
    assert_eq!(northwest, Allocation::from_rows(vec![
        vec![5, 2, 0, 0],
        vec![0, 6, 3, 0],
        vec![0, 0, 4, 14],
    ]));
    assert_eq!(calculate_total_cost(&northwest, costs_matrix), 1015);

    let vogel = vogel_approximation(costs_matrix, supply, demand);
    assert!(vogel.satisfies(supply, demand));
    assert_eq!(calculate_total_cost(&vogel, costs_matrix), 779);

    let russell = russell_approximation(costs_matrix, supply, demand);
    assert!(russell.satisfies(supply, demand));
    assert_eq!(calculate_total_cost(&russell, costs_matrix), 807);

    let textbook = Russell::textbook().solve(costs_matrix, supply, demand);
    assert!(textbook.satisfies(supply, demand));

    let solutions = problem.solve_all().unwrap();
    assert_eq!(costs(&solutions, costs_matrix), vec![1015, 779, 807]);
    assert_eq!(problem.cheapest(&solutions), (Method::Vogel, 779));
}

#[test]
fn unbalanced() {
    let problem = read("unbalanced");
    assert!(!problem.is_balanced());
    assert_eq!(
        problem.solve(Method::Vogel),
        Err(Unbalanced { total_supply: 10, total_demand: 11 }),
    );
    assert!(problem.solve_all().is_err());
}

#[test]
fn ragged() {
    match import::<u64>(&get_test_file_path("ragged")) {
        Err(ImportError::Shape(error)) => {
            assert_eq!(error, ShapeError::RaggedCosts { row: 1, expected: 2, found: 1 });
        },
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_file() {
    let result = import::<u64>(&get_test_file_path("does_not_exist"));
    assert!(matches!(result, Err(ImportError::IO(_))));
}

#[test]
fn unknown_extension() {
    // The file exists, its extension is not supported
    let path = get_test_file_path("test").with_extension("rs");
    assert!(matches!(import::<u64>(&path), Err(ImportError::FileExtension(_))));
}

#[test]
fn extension_checked_before_reading() {
    let path = get_test_file_path("does_not_exist").with_extension("mps");
    assert!(matches!(import::<u64>(&path), Err(ImportError::FileExtension(_))));

    let path = get_test_file_path("worked_example").with_extension("");
    assert!(matches!(import::<u64>(&path), Err(ImportError::FileExtension(_))));
}
