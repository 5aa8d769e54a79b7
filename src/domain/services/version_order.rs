//! Version ordering
//!
//! Versions are split into segments on `.` and `-`. Numeric segments compare
//! numerically, a numeric segment ranks above a qualifier, and a trailing
//! qualifier ranks below the bare version (`1.0-SNAPSHOT < 1.0 < 1.0.1`).

use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Number(u64),
    Qualifier(&'a str),
}

fn segments(version: &str) -> Vec<Segment<'_>> {
    version
        .split(['.', '-'])
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<u64>() {
            Ok(n) => Segment::Number(n),
            Err(_) => Segment::Qualifier(s),
        })
        .collect()
}

fn compare_segment(a: &Segment<'_>, b: &Segment<'_>) -> Ordering {
    match (a, b) {
        (Segment::Number(x), Segment::Number(y)) => x.cmp(y),
        (Segment::Number(_), Segment::Qualifier(_)) => Ordering::Greater,
        (Segment::Qualifier(_), Segment::Number(_)) => Ordering::Less,
        (Segment::Qualifier(x), Segment::Qualifier(y)) => {
            x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase())
        }
    }
}

/// How a segment left over on the longer side ranks against "nothing"
fn compare_remainder(segment: &Segment<'_>) -> Ordering {
    match segment {
        Segment::Number(0) => Ordering::Equal,
        Segment::Number(_) => Ordering::Greater,
        Segment::Qualifier(_) => Ordering::Less,
    }
}

pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);

    for (x, y) in left.iter().zip(&right) {
        let ord = compare_segment(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    let common = left.len().min(right.len());
    for segment in &left[common..] {
        let ord = compare_remainder(segment);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    for segment in &right[common..] {
        let ord = compare_remainder(segment);
        if ord != Ordering::Equal {
            return ord.reverse();
        }
    }
    Ordering::Equal
}

/// The higher of two versions; `current` wins ties
pub fn max_version<'a>(current: &'a str, candidate: &'a str) -> &'a str {
    match compare_versions(candidate, current) {
        Ordering::Greater => candidate,
        _ => current,
    }
}
