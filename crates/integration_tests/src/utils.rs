use colored::Colorize;
use serde_json::Value;
use std::fmt;

/// Compares a normalized record with its expected JSON.
///
/// Paths ending in one of `ignore_fields` are skipped on both sides.
pub fn compare_json(actual: &Value, expected: &Value, ignore_fields: &[&str]) -> ComparisonResult {
    let mut differences = Vec::new();
    compare_json_recursive(actual, expected, ignore_fields, "", &mut differences);

    if differences.is_empty() {
        ComparisonResult::Match
    } else {
        ComparisonResult::Mismatch { differences }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Difference {
    ValueMismatch {
        path: String,
        expected: Value,
        actual: Value,
    },
    MissingField {
        path: String,
    },
    ExtraField {
        path: String,
    },
    ArrayLengthMismatch {
        path: String,
        expected_len: usize,
        actual_len: usize,
    },
}

impl Difference {
    pub fn path(&self) -> &str {
        match self {
            Difference::ValueMismatch { path, .. }
            | Difference::MissingField { path }
            | Difference::ExtraField { path }
            | Difference::ArrayLengthMismatch { path, .. } => path,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difference::ValueMismatch {
                path,
                expected,
                actual,
            } => write!(
                f,
                "{} {}\n    {} {}\n    {} {}",
                "~".yellow(),
                path.bright_white(),
                "-".red(),
                actual.to_string().red(),
                "+".green(),
                expected.to_string().green()
            ),
            Difference::MissingField { path } => {
                write!(f, "{} {} (missing)", "+".green(), path.green())
            }
            Difference::ExtraField { path } => {
                write!(f, "{} {} (unexpected)", "-".red(), path.red())
            }
            Difference::ArrayLengthMismatch {
                path,
                expected_len,
                actual_len,
            } => write!(
                f,
                "{} {}: expected {} items, got {}",
                "#".yellow(),
                path.bright_white(),
                expected_len,
                actual_len
            ),
        }
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn is_ignored(path: &str, ignore_fields: &[&str]) -> bool {
    ignore_fields.iter().any(|field| path.ends_with(field))
}

fn compare_json_recursive(
    actual: &Value,
    expected: &Value,
    ignore_fields: &[&str],
    path: &str,
    differences: &mut Vec<Difference>,
) {
    match (actual, expected) {
        (Value::Object(actual_obj), Value::Object(expected_obj)) => {
            for (key, expected_val) in expected_obj {
                let current_path = child_path(path, key);
                if is_ignored(&current_path, ignore_fields) {
                    continue;
                }

                match actual_obj.get(key) {
                    Some(actual_val) => compare_json_recursive(
                        actual_val,
                        expected_val,
                        ignore_fields,
                        &current_path,
                        differences,
                    ),
                    None => differences.push(Difference::MissingField { path: current_path }),
                }
            }

            for key in actual_obj.keys() {
                let current_path = child_path(path, key);
                if !expected_obj.contains_key(key) && !is_ignored(&current_path, ignore_fields) {
                    differences.push(Difference::ExtraField { path: current_path });
                }
            }
        }
        (Value::Array(actual_arr), Value::Array(expected_arr)) => {
            if actual_arr.len() != expected_arr.len() {
                differences.push(Difference::ArrayLengthMismatch {
                    path: path.to_string(),
                    expected_len: expected_arr.len(),
                    actual_len: actual_arr.len(),
                });
            }

            // Overlapping elements are still compared when lengths differ.
            for (i, (actual_val, expected_val)) in
                actual_arr.iter().zip(expected_arr).enumerate()
            {
                compare_json_recursive(
                    actual_val,
                    expected_val,
                    ignore_fields,
                    &format!("{}[{}]", path, i),
                    differences,
                );
            }
        }
        (actual_val, expected_val) => {
            if actual_val != expected_val {
                differences.push(Difference::ValueMismatch {
                    path: path.to_string(),
                    expected: expected_val.clone(),
                    actual: actual_val.clone(),
                });
            }
        }
    }
}

#[derive(Debug)]
pub enum ComparisonResult {
    Match,
    Mismatch { differences: Vec<Difference> },
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match)
    }

    pub fn differences(&self) -> &[Difference] {
        match self {
            ComparisonResult::Match => &[],
            ComparisonResult::Mismatch { differences } => differences,
        }
    }

    /// Colored, one-entry-per-difference report.
    pub fn report(&self, fixture: &str) -> String {
        if self.is_match() {
            return String::new();
        }

        let rule = "=".repeat(80);
        let mut output = vec![
            rule.bright_white().to_string(),
            format!(
                "{} {}",
                "FIXTURE MISMATCH".bright_yellow().bold(),
                fixture.bright_white()
            ),
            rule.bright_white().to_string(),
        ];
        output.extend(self.differences().iter().map(ToString::to_string));
        output.push(format!(
            "{} {}",
            "Total differences:".bright_cyan().bold(),
            self.differences().len()
        ));
        output.join("\n")
    }
}
