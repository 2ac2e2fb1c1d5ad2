//! Compression of a page count into a short, scannable sequence of page labels.
//!
//! Long page runs collapse into a single ellipsis so the pager always fits in
//! [`MAX_PAGE_LABELS`] slots, while page 1, the last page, the current page and
//! its neighbours stay visible.

use std::fmt;

/// Upper bound on the number of labels returned by [`compress`]
pub const MAX_PAGE_LABELS: usize = 7;

/// Pages shown in a row next to the first or last page
const EDGE_RUN: usize = MAX_PAGE_LABELS - 2;

/// A single entry in the rendered page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLabel {
    /// A concrete page number (1-based)
    Number(usize),

    /// Stand-in for an omitted run of two or more pages
    Ellipsis,
}

impl PageLabel {
    /// Page number carried by this label, if any
    pub fn page(&self) -> Option<usize> {
        match self {
            PageLabel::Number(page) => Some(*page),
            PageLabel::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageLabel::Ellipsis)
    }
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::Number(page) => write!(f, "{}", page),
            PageLabel::Ellipsis => f.write_str("…"),
        }
    }
}

/// Compute the page labels for `total_pages` pages with `current_page`
/// (1-based) selected.
///
/// A `current_page` outside `1..=total_pages` is clamped into range.
pub fn compress(total_pages: usize, current_page: usize) -> Vec<PageLabel> {
    use self::PageLabel::{Ellipsis, Number};

    if total_pages == 0 {
        return Vec::new();
    }

    if total_pages <= MAX_PAGE_LABELS {
        return (1..=total_pages).map(Number).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let mut labels = Vec::with_capacity(MAX_PAGE_LABELS);

    if current < EDGE_RUN {
        labels.extend((1..=EDGE_RUN).map(Number));
        labels.push(Ellipsis);
        labels.push(Number(total_pages));
    } else if total_pages - current < EDGE_RUN - 1 {
        labels.push(Number(1));
        labels.push(Ellipsis);
        labels.extend((total_pages - (EDGE_RUN - 1)..=total_pages).map(Number));
    } else {
        labels.push(Number(1));
        labels.push(Ellipsis);
        labels.extend((current - 1..=current + 1).map(Number));
        labels.push(Ellipsis);
        labels.push(Number(total_pages));
    }

    labels
}

/// Render a label sequence the way the pager prints it, e.g. `1 … 9 10 11 … 20`
pub fn format_labels(labels: &[PageLabel]) -> String {
    labels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageLabel::{Ellipsis, Number};

    fn numbers(labels: &[PageLabel]) -> Vec<usize> {
        labels.iter().filter_map(PageLabel::page).collect()
    }

    #[test]
    fn test_empty_when_no_pages() {
        assert!(compress(0, 1).is_empty());
        assert!(compress(0, 0).is_empty());
    }

    #[test]
    fn test_small_totals_are_not_compressed() {
        assert_eq!(
            compress(5, 3),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
        assert_eq!(compress(1, 1), vec![Number(1)]);
        assert_eq!(compress(7, 7).len(), 7);
        assert!(!compress(7, 4).contains(&Ellipsis));
    }

    #[test]
    fn test_middle_page_has_two_ellipses() {
        assert_eq!(
            compress(20, 10),
            vec![
                Number(1),
                Ellipsis,
                Number(9),
                Number(10),
                Number(11),
                Ellipsis,
                Number(20)
            ]
        );
    }

    #[test]
    fn test_near_edges() {
        assert_eq!(
            compress(20, 1),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5), Ellipsis, Number(20)]
        );
        assert_eq!(
            compress(20, 4),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5), Ellipsis, Number(20)]
        );
        assert_eq!(
            compress(20, 17),
            vec![Number(1), Ellipsis, Number(16), Number(17), Number(18), Number(19), Number(20)]
        );
        assert_eq!(
            compress(20, 20),
            vec![Number(1), Ellipsis, Number(16), Number(17), Number(18), Number(19), Number(20)]
        );
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(compress(20, 0), compress(20, 1));
        assert_eq!(compress(20, 99), compress(20, 20));
    }

    #[test]
    fn test_structural_properties_hold_for_all_inputs() {
        for total in 1..=60 {
            for current in 1..=total {
                let labels = compress(total, current);
                let pages = numbers(&labels);

                assert!(labels.len() <= MAX_PAGE_LABELS, "{total}/{current}: {labels:?}");
                assert!(pages.windows(2).all(|w| w[0] < w[1]), "{total}/{current}: not ascending");
                assert_eq!(pages.first(), Some(&1));
                assert_eq!(pages.last(), Some(&total));
                assert!(pages.contains(&current));
                if current > 1 {
                    assert!(pages.contains(&(current - 1)));
                }
                if current < total {
                    assert!(pages.contains(&(current + 1)));
                }

                assert_ne!(labels.first(), Some(&Ellipsis));
                assert_ne!(labels.last(), Some(&Ellipsis));
                for (i, label) in labels.iter().enumerate() {
                    if label.is_ellipsis() {
                        // Neighbours are numbers and the omitted run is at least two pages
                        let before = labels[i - 1].page().unwrap();
                        let after = labels[i + 1].page().unwrap();
                        assert!(after - before - 1 >= 2, "{total}/{current}: {labels:?}");
                    }
                }

                // Labels never outnumber pages
                let shown = pages.len() + labels.iter().filter(|l| l.is_ellipsis()).count();
                assert!(shown <= total);
                if total <= MAX_PAGE_LABELS {
                    assert_eq!(pages, (1..=total).collect::<Vec<_>>());
                }
            }
        }
    }

    #[test]
    fn test_largest_page_count() {
        let max = usize::MAX;
        assert_eq!(
            compress(max, max),
            vec![
                Number(1),
                Ellipsis,
                Number(max - 4),
                Number(max - 3),
                Number(max - 2),
                Number(max - 1),
                Number(max)
            ]
        );
        assert_eq!(
            compress(max, max / 2),
            vec![
                Number(1),
                Ellipsis,
                Number(max / 2 - 1),
                Number(max / 2),
                Number(max / 2 + 1),
                Ellipsis,
                Number(max)
            ]
        );
        assert_eq!(
            compress(max, 1)[..5],
            [Number(1), Number(2), Number(3), Number(4), Number(5)]
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(compress(42, 17), compress(42, 17));
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(format_labels(&compress(20, 10)), "1 … 9 10 11 … 20");
        assert_eq!(format_labels(&compress(3, 2)), "1 2 3");
        assert_eq!(format_labels(&[]), "");
    }
}
