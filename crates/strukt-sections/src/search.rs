//! Lookup functions over ascending boundary slices.

/// Find the start of the section containing `point`.
///
/// Returns the greatest boundary at or below `point`. The last boundary is
/// special: it closes the final section rather than opening a new one, so it
/// maps to the start of the final section. Points outside
/// `[sections[0], sections[last]]` yield `None`.
///
/// `sections` must be ascending and hold at least two boundaries.
///
/// # Examples
///
/// ```
/// use strukt_sections::find_point_in_section;
///
/// let sections = [5, 8, 30, 31];
/// assert_eq!(find_point_in_section(4, &sections), None);
/// assert_eq!(find_point_in_section(5, &sections), Some(5));
/// assert_eq!(find_point_in_section(27, &sections), Some(8));
/// assert_eq!(find_point_in_section(31, &sections), Some(30));
/// assert_eq!(find_point_in_section(32, &sections), None);
/// ```
///
/// # Panics
///
/// May panic when `sections` holds fewer than two boundaries.
pub fn find_point_in_section<T: PartialOrd + Copy>(point: T, sections: &[T]) -> Option<T> {
    if point < sections[0] || point > sections[sections.len() - 1] {
        return None;
    }
    Some(sections[start_of_section(point, sections)])
}

/// Map a closed query range onto the half-open index range of the sections
/// it overlaps.
///
/// The indices point into `sections`; `(0, 0)` means the query range misses
/// every section. Both ends clamp to the covered domain, so a query spilling
/// past either end stops at the first or last section. The indices follow
/// slicing semantics: an inverted query range can yield a high index at or
/// below the low one, which selects nothing.
///
/// # Examples
///
/// ```
/// use strukt_sections::find_range_index_in_sections;
///
/// let sections = [5, 8, 30, 31];
/// assert_eq!(find_range_index_in_sections(3, 4, &sections), (0, 0));
/// assert_eq!(find_range_index_in_sections(6, 7, &sections), (0, 1));
/// assert_eq!(find_range_index_in_sections(7, 9, &sections), (0, 2));
/// assert_eq!(find_range_index_in_sections(7, 30, &sections), (0, 3));
/// assert_eq!(find_range_index_in_sections(7, 321, &sections), (0, 3));
/// assert_eq!(find_range_index_in_sections(4, 321, &sections), (0, 3));
/// ```
///
/// # Panics
///
/// May panic when `sections` holds fewer than two boundaries.
pub fn find_range_index_in_sections<T: PartialOrd + Copy>(
    start: T,
    end: T,
    sections: &[T],
) -> (usize, usize) {
    let last = sections.len() - 1;
    if start > sections[last] || end < sections[0] {
        return (0, 0);
    }
    let lo = start_of_section(start, sections);
    let hi = if end > sections[last] {
        last - 1
    } else {
        start_of_section(end, sections)
    };
    (lo, hi + 1)
}

/// Slice of the section starts overlapped by a closed query range.
///
/// This is [`find_range_index_in_sections`] applied back to `sections`; an
/// empty slice means no overlap. Inverted query ranges select nothing.
///
/// # Examples
///
/// ```
/// use strukt_sections::find_range_in_sections;
///
/// let sections = [5, 8, 30, 31];
/// assert_eq!(find_range_in_sections(3, 4, &sections), &[] as &[i32]);
/// assert_eq!(find_range_in_sections(6, 9, &sections), &[5, 8][..]);
/// assert_eq!(find_range_in_sections(7, 321, &sections), &[5, 8, 30][..]);
/// ```
///
/// # Panics
///
/// May panic when `sections` holds fewer than two boundaries.
pub fn find_range_in_sections<T: PartialOrd + Copy>(start: T, end: T, sections: &[T]) -> &[T] {
    let (lo, hi) = find_range_index_in_sections(start, end, sections);
    &sections[lo..hi.max(lo)]
}

/// Locate the half-open index range of the points inside a closed query
/// range.
///
/// Unlike the section functions, `points` are plain sorted values rather
/// than section boundaries. The result is `(first index with a point >=
/// start, first index with a point > end)`, so it is valid for empty slices
/// and for query ranges lying entirely outside the points.
///
/// # Examples
///
/// ```
/// use strukt_sections::find_range_index_in_points;
///
/// let points = [5, 8, 15];
/// assert_eq!(find_range_index_in_points(3, 7, &points), (0, 1));
/// assert_eq!(find_range_index_in_points(6, 321, &points), (1, 3));
/// assert_eq!(find_range_index_in_points(16, 20, &points), (3, 3));
/// assert_eq!(find_range_index_in_points(1, 2, &[] as &[i32]), (0, 0));
/// ```
pub fn find_range_index_in_points<T: PartialOrd>(start: T, end: T, points: &[T]) -> (usize, usize) {
    (
        points.partition_point(|p| *p < start),
        points.partition_point(|p| *p <= end),
    )
}

// Index of the boundary opening the section that contains `point`. Callers
// keep `point` at or below the last boundary; anything at or below the first
// boundary clamps to the first section.
fn start_of_section<T: PartialOrd + Copy>(point: T, sections: &[T]) -> usize {
    let last = sections.len() - 1;
    if point <= sections[0] {
        return 0;
    }
    if point == sections[last] {
        return last - 1;
    }
    sections.partition_point(|s| *s <= point) - 1
}
