//! Linear solver behavior through the public API.

use ec_core::Tolerances;
use ec_solver::{LinearSolution, LinearSystem, SystemSize, solve_linear};
use proptest::prelude::*;

fn system(rows: &[&[f64]]) -> LinearSystem {
    LinearSystem::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

#[test]
fn reference_two_variable_cases() {
    let solution = solve_linear(&system(&[&[1.0, 1.0, 2.0], &[1.0, -1.0, 0.0]]));
    assert_eq!(solution.values(), Some(vec![1.0, 1.0]));

    let solution = solve_linear(&system(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]]));
    assert!(matches!(
        solution,
        LinearSolution::Degenerate { message } if message.contains("determinant is zero")
    ));
}

#[test]
fn declared_size_must_match_rows() {
    let rows = vec![vec![1.0, 1.0, 2.0], vec![1.0, -1.0, 0.0]];
    assert!(LinearSystem::with_size(SystemSize::Three, rows).is_err());
}

#[test]
fn repeated_solves_are_bit_identical() {
    let sys = system(&[
        &[0.3, -1.7, 2.2, 0.1],
        &[1.9, 0.4, -0.6, 3.3],
        &[-2.5, 1.1, 0.8, -0.7],
    ]);
    let first = solve_linear(&sys).values().unwrap();
    let second = solve_linear(&sys).values().unwrap();
    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&first), bits(&second));
}

proptest! {
    #[test]
    fn two_by_two_solutions_satisfy_both_equations(
        row0 in prop::collection::vec(-100.0_f64..100.0, 3),
        row1 in prop::collection::vec(-100.0_f64..100.0, 3),
    ) {
        let det = row0[0] * row1[1] - row1[0] * row0[1];
        prop_assume!(det.abs() > 1e-3);

        let sys = LinearSystem::new(vec![row0, row1]).unwrap();
        let values = solve_linear(&sys).values().unwrap();
        prop_assert!(sys.is_satisfied_by(&values, Tolerances::absolute(1e-6)));
    }

    #[test]
    fn three_by_three_solutions_satisfy_all_equations(
        rows in prop::collection::vec(prop::collection::vec(-10.0_f64..10.0, 4), 3),
    ) {
        let sys = LinearSystem::new(rows).unwrap();
        let solution = solve_linear(&sys);
        if let Some(values) = solution.values() {
            prop_assume!(values.iter().all(|v| v.abs() < 1e4));
            prop_assert!(sys.is_satisfied_by(&values, Tolerances::absolute(1e-6)));
        }
    }
}
