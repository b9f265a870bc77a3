//! Buckets command implementation.

use anyhow::Result;
use tickplan_lib::{BUCKETS, Bucket};

/// Print the span buckets in the order they are evaluated.
pub(crate) fn list_buckets() -> Result<()> {
    println!(
        "{:<3} {:<16} {:<12} {:<7} {:<5} {:<12} {:<14}",
        "#", "SPAN", "GRANULARITY", "UNIT", "STEP", "PLACEMENT", "LABEL"
    );
    println!("{}", "-".repeat(75));

    for (index, bucket) in BUCKETS.iter().enumerate() {
        println!("{}", row(index + 1, bucket));
    }

    println!("\nFirst matching row wins.");
    Ok(())
}

fn row(position: usize, bucket: &Bucket) -> String {
    let granularity = bucket.granularity;
    format!(
        "{:<3} {:<16} {:<12} {:<7} {:<5} {:<12} {:<14}",
        position,
        bucket.limit.to_string(),
        granularity.as_str(),
        granularity.unit().as_str(),
        granularity.step(),
        bucket.placement.to_string(),
        granularity.label_pattern()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_rows() {
        let first = row(1, &BUCKETS[0]);
        assert!(first.starts_with("1   < 4 hours"));
        assert!(first.contains("spread x4"));

        let last = row(BUCKETS.len(), BUCKETS.last().unwrap());
        assert!(last.contains("any"));
        assert!(last.contains("%Y"));
    }
}
