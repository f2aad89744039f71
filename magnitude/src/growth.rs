/// A growth rate which timing data can be compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthForm {
    /// 1
    Constant,
    /// n
    Linear,
    /// n²
    Quadratic,
    /// n³
    Cubic,
    /// ln n
    Logarithmic,
    /// n ln n
    LogLinear,
}

impl GrowthForm {
    /// Every form, in the order they're reported and tie-broken.
    pub const ALL: [GrowthForm; 6] = [
        GrowthForm::Constant,
        GrowthForm::Linear,
        GrowthForm::Quadratic,
        GrowthForm::Cubic,
        GrowthForm::Logarithmic,
        GrowthForm::LogLinear,
    ];

    /// Human-readable name.
    pub fn title(self) -> &'static str {
        match self {
            GrowthForm::Constant => "Constant",
            GrowthForm::Linear => "Linear",
            GrowthForm::Quadratic => "Quadratic",
            GrowthForm::Cubic => "Cubic",
            GrowthForm::Logarithmic => "Logarithmic",
            GrowthForm::LogLinear => "Log-Linear",
        }
    }

    /// Big-O notation for this form.
    pub fn big_o(self) -> &'static str {
        match self {
            GrowthForm::Constant => "O(1)",
            GrowthForm::Linear => "O(n)",
            GrowthForm::Quadratic => "O(n^2)",
            GrowthForm::Cubic => "O(n^3)",
            GrowthForm::Logarithmic => "O(log n)",
            GrowthForm::LogLinear => "O(n log n)",
        }
    }

    /// Value of this form's curve at task size `n`, with a coefficient of 1.
    pub fn eval(self, n: f64) -> f64 {
        match self {
            GrowthForm::Constant => 1.0,
            GrowthForm::Linear => n,
            GrowthForm::Quadratic => n * n,
            GrowthForm::Cubic => n * n * n,
            GrowthForm::Logarithmic => libm::log(n),
            GrowthForm::LogLinear => n * libm::log(n),
        }
    }
}

impl std::fmt::Display for GrowthForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval() {
        assert_eq!(GrowthForm::Constant.eval(50.0), 1.0);
        assert_eq!(GrowthForm::Linear.eval(50.0), 50.0);
        assert_eq!(GrowthForm::Quadratic.eval(3.0), 9.0);
        assert_eq!(GrowthForm::Cubic.eval(3.0), 27.0);
        assert_eq!(GrowthForm::Logarithmic.eval(1.0), 0.0);
        let e = std::f64::consts::E;
        assert!((GrowthForm::Logarithmic.eval(e) - 1.0).abs() < 1e-15);
        assert!((GrowthForm::LogLinear.eval(e) - e).abs() < 1e-15);
    }

    #[test]
    fn test_titles() {
        let titles: Vec<_> = GrowthForm::ALL.iter().map(|g| g.to_string()).collect();
        assert_eq!(
            titles,
            vec![
                "Constant",
                "Linear",
                "Quadratic",
                "Cubic",
                "Logarithmic",
                "Log-Linear"
            ]
        );
    }
}
