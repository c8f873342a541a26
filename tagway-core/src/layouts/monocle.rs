use crate::models::Rect;

/// Layout which gives every window the full usable area. A monocle mode.
pub fn update(area: Rect, count: usize) -> Vec<Rect> {
    vec![area; count]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_window_fills_the_area() {
        let area = Rect::new(10, 20, 1000, 800);
        let rects = update(area, 3);
        assert_eq!(rects.len(), 3);
        assert!(rects.iter().all(|r| *r == area));
    }
}
