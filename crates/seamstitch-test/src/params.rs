//! Numbered regression checks
//!
//! A regression test runs many small checks in sequence. Each one bumps
//! the index so a failure message points at the exact check; failures are
//! collected rather than panicking so one run reports all of them.

use seamstitch_core::{Mask, render_mask};

/// State of one regression test run
pub struct RegParams {
    /// Test name, printed as `<name>_reg`
    pub test_name: String,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a run and print its banner
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("================ {}_reg ================", test_name);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks run so far
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// Equal values pass even when infinite; a NaN on either side always
    /// fails.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        let ok = expected == actual || diff <= delta;
        if !ok {
            self.fail(format!(
                "value mismatch: expected {}, got {} (diff {}, delta {})",
                expected, actual, diff, delta
            ));
        }
        ok
    }

    /// Record a boolean check described by `what`
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            self.fail(format!("check failed: {}", what));
        }
        condition
    }

    /// Compare two strings exactly
    pub fn compare_strings(&mut self, expected: &str, actual: &str) -> bool {
        self.index += 1;
        let ok = expected == actual;
        if !ok {
            self.fail(format!(
                "string mismatch\nexpected:\n{}\nactual:\n{}",
                expected, actual
            ));
        }
        ok
    }

    /// Compare a mask against its expected `.#AB` rendering
    pub fn compare_mask(&mut self, expected: &str, mask: &Mask) -> bool {
        self.compare_strings(expected, &render_mask(mask))
    }

    fn fail(&mut self, detail: String) {
        let msg = format!("{}_reg #{}: {}", self.test_name, self.index, detail);
        eprintln!("{}", msg);
        self.failures.push(msg);
    }

    /// Print the summary and consume the run
    ///
    /// Returns `true` if every check passed.
    pub fn cleanup(self) -> bool {
        let success = self.is_success();
        if success {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} checks failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        success
    }

    /// True while no check has failed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failure messages recorded so far
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seamstitch_core::{Label, Position};

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert!(rp.failures()[0].starts_with("test_reg #3:"));
    }

    #[test]
    fn test_compare_values_infinite() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(f64::INFINITY, f64::INFINITY, 0.0));
        assert!(rp.compare_values(f64::NEG_INFINITY, f64::NEG_INFINITY, 0.0));
        assert!(!rp.compare_values(f64::INFINITY, 1.0e300, 1.0));
        assert!(!rp.compare_values(f64::INFINITY, f64::NEG_INFINITY, 0.0));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_compare_values_nan_fails() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(1.0, f64::NAN, 10.0));
        assert!(!rp.compare_values(f64::NAN, f64::NAN, 10.0));
    }

    #[test]
    fn test_check_strings_and_masks() {
        let mut rp = RegParams::new("test");
        assert!(rp.check(true, "always"));
        assert!(rp.compare_strings("#B\nA#\n", "#B\nA#\n"));

        let mut mask = Mask::empty_mask(2, 1).unwrap();
        mask.set(Position::new(0, 0), Label::Seam).unwrap();
        assert!(rp.compare_mask("#.\n", &mask));
        assert!(!rp.compare_mask("##\n", &mask));

        assert_eq!(rp.index(), 4);
        assert!(!rp.cleanup());
    }
}
