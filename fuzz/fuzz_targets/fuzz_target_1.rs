#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use magnitude::Matrix;

fuzz_target!(|setup: Setup| {
    let n = usize::from(setup.n % 8) + 1;
    let mut values = setup.values;
    values.resize(n * n, 0.0);
    let mut rhs = setup.rhs;
    rhs.resize(n, 1.0);
    let Ok(a) = Matrix::new(n, n, values) else {
        return;
    };
    let Ok(b) = Matrix::column_vector(rhs) else {
        return;
    };
    let _ = magnitude::scramble(&a, &b);
    let _ = magnitude::solve(&a, &b);
    let _ = magnitude::ls_solve(&a, &b);
});

#[derive(Debug, Arbitrary)]
struct Setup {
    n: u8,
    values: Vec<f64>,
    rhs: Vec<f64>,
}
