//! Out-of-range index handling for neighborhood reads.

/// Mirror around the edge pixel without repeating it (`dcb|abcd|cba`).
pub fn reflect_101(index: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let last = crate::util::usize_to_isize(len - 1);
    let mut i = index;
    while i < 0 || i > last {
        if i < 0 {
            i = -i;
        }
        if i > last {
            i = 2 * last - i;
        }
    }
    usize::try_from(i).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_101_mirrors_without_edge_repeat() {
        let mapped: Vec<usize> = (-3..7).map(|i| reflect_101(i, 4)).collect();
        assert_eq!(mapped, vec![3, 2, 1, 0, 1, 2, 3, 2, 1, 0]);
    }

    #[test]
    fn reflect_101_handles_far_indices_and_single_pixel() {
        assert_eq!(reflect_101(-10, 3), 2);
        assert_eq!(reflect_101(12, 3), 0);
        assert_eq!(reflect_101(5, 1), 0);
        assert_eq!(reflect_101(-5, 1), 0);
    }
}
