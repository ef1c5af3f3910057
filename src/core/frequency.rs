use crate::domain::model::{FrequencyOutcome, FrequencyReport, ValueCount, ValueProduct};
use crate::domain::ports::Analyzer;
use crate::utils::error::Result;
use crate::utils::scan::IntScanner;
use std::collections::HashSet;

/// Computes frequency statistics and the elimination-scan "solitary value"
/// over a whitespace-separated integer sequence.
pub struct FrequencyAnalyzer;

impl FrequencyAnalyzer {
    pub fn analyze(&self, text: &str) -> Result<FrequencyOutcome> {
        let mut scanner = IntScanner::new(text);
        let mut numbers = Vec::new();
        while let Some(n) = scanner.try_next_int() {
            numbers.push(n);
        }
        if numbers.is_empty() {
            return Ok(FrequencyOutcome::NoInput);
        }

        // Frequency table in first-occurrence order. The running maximum
        // keeps the first value to reach each new count, so ties stay with
        // the earlier value.
        let mut frequency: Vec<(i64, usize)> = Vec::new();
        let mut highest = i64::MIN;
        let mut lowest = i64::MAX;
        let mut most_frequent = ValueCount { value: 0, count: 0 };
        for &n in &numbers {
            let count = match frequency.iter_mut().find(|(value, _)| *value == n) {
                Some(entry) => {
                    entry.1 += 1;
                    entry.1
                }
                None => {
                    frequency.push((n, 1));
                    1
                }
            };
            if count > most_frequent.count {
                most_frequent = ValueCount { value: n, count };
            }
            if n > highest {
                highest = n;
            }
            if n < lowest {
                lowest = n;
            }
        }

        let solitary_value = match solitary_value(&numbers) {
            Some(value) => value,
            None => return Ok(FrequencyOutcome::NoUnique),
        };
        let solitary = ValueCount {
            value: solitary_value,
            count: count_of(&frequency, solitary_value),
        };

        let mut highest_product = ValueProduct {
            value: i64::MIN,
            count: 0,
            product: i64::MIN,
        };
        for &(value, count) in &frequency {
            let product = value * count as i64;
            if product > highest_product.product
                || (product == highest_product.product && value > highest_product.value)
            {
                highest_product = ValueProduct {
                    value,
                    count,
                    product,
                };
            }
        }

        let lowest_count = count_of(&frequency, lowest);
        let lowest_product = ValueProduct {
            value: lowest,
            count: lowest_count,
            product: lowest * lowest_count as i64,
        };

        Ok(FrequencyOutcome::Report(FrequencyReport {
            highest,
            lowest,
            most_frequent,
            solitary,
            highest_product,
            lowest_product,
        }))
    }
}

fn count_of(frequency: &[(i64, usize)], value: i64) -> usize {
    frequency
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, count)| *count)
        .unwrap_or(0)
}

/// Left-to-right elimination scan. A position whose value never occurs
/// again wins; finding a repeat eliminates the repeated value and every
/// value strictly between the pair, and the scan resumes past the repeat.
fn solitary_value(numbers: &[i64]) -> Option<i64> {
    let mut eliminated: HashSet<i64> = HashSet::new();
    let mut i = 0;
    while i < numbers.len() {
        let current = numbers[i];
        if eliminated.contains(&current) {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < numbers.len() && numbers[j] != current {
            j += 1;
        }
        if j < numbers.len() {
            for &skipped in &numbers[i + 1..j] {
                eliminated.insert(skipped);
            }
            eliminated.insert(current);
            i = j + 1;
        } else {
            return Some(current);
        }
    }
    None
}

impl Analyzer for FrequencyAnalyzer {
    type Report = FrequencyOutcome;

    fn name(&self) -> &'static str {
        "frekuensi"
    }

    fn run(&self, input: &str) -> Result<Self::Report> {
        self.analyze(input)
    }
}
