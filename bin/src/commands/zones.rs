//! Zones command implementation.

use anyhow::Result;
use chrono_tz::TZ_VARIANTS;

/// List IANA zone names, optionally filtered by a search pattern.
pub(crate) fn list_zones(search: Option<&str>) -> Result<()> {
    let zones = matching_zones(search);

    if zones.is_empty() {
        println!("No zones found.");
        return Ok(());
    }

    for zone in &zones {
        println!("{zone}");
    }

    println!("\nTotal: {} zones", zones.len());
    Ok(())
}

fn matching_zones(search: Option<&str>) -> Vec<&'static str> {
    let pattern = search.map(str::to_lowercase);
    TZ_VARIANTS
        .iter()
        .map(|tz| tz.name())
        .filter(|name| {
            pattern
                .as_deref()
                .is_none_or(|pattern| name.to_lowercase().contains(pattern))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let zones = matching_zones(Some("chicago"));
        assert_eq!(zones, vec!["America/Chicago"]);
    }

    #[test]
    fn test_no_filter_lists_everything() {
        let zones = matching_zones(None);
        assert_eq!(zones.len(), TZ_VARIANTS.len());
        assert!(zones.contains(&"UTC"));
    }

    #[test]
    fn test_no_match() {
        assert!(matching_zones(Some("Olympus")).is_empty());
    }
}
