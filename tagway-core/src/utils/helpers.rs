//! Small list helpers.

/// Returns the element `shift` places away from the first element matching `reference`.
///
/// With `wrap` the walk continues from the other end of the list, otherwise a shift past either
/// end finds nothing.
///
/// ```
/// let stack = [3, 5, 8];
/// let next = tagway_core::utils::helpers::relative_find(&stack, |&id| id == 8, 1, true);
/// assert_eq!(next, Some(&3));
/// ```
pub fn relative_find<T>(
    list: &[T],
    reference: impl Fn(&T) -> bool,
    shift: i32,
    wrap: bool,
) -> Option<&T> {
    let len = list.len() as i64;
    let target = list.iter().position(reference)? as i64 + i64::from(shift);
    let target = if wrap {
        target.rem_euclid(len)
    } else if (0..len).contains(&target) {
        target
    } else {
        return None;
    };
    list.get(usize::try_from(target).ok()?)
}
