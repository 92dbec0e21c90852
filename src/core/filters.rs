use crate::models::{Teacher, MatchCriteria};

/// Tags the teacher offers that were also requested, in the teacher's order
///
/// An empty request matches nothing.
#[inline]
pub fn matched_tags(offered: &[String], requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        return Vec::new();
    }

    offered
        .iter()
        .filter(|tag| requested.contains(tag))
        .cloned()
        .collect()
}

/// Locations shared between a teacher and the criteria
#[inline]
pub fn matched_locations(teacher: &Teacher, criteria: &MatchCriteria) -> Vec<String> {
    matched_tags(&teacher.preferred_locations, &criteria.location)
}

/// Availability windows shared between a teacher and the criteria
#[inline]
pub fn matched_availability(teacher: &Teacher, criteria: &MatchCriteria) -> Vec<String> {
    matched_tags(&teacher.available_days, &criteria.availability)
}
