use crate::models::Rect;

/// Layout which splits the area into a master column on the left holding the first `nmaster`
/// windows and a stack column on the right for the others. Each column divides its height
/// between its windows, top to bottom.
///
/// Every row takes the remaining height divided by the remaining window count, rounded up, so
/// when the height does not divide evenly the earlier rows are one unit taller.
pub fn update(area: Rect, mfact: f64, nmaster: u32, count: usize) -> Vec<Rect> {
    if count == 0 {
        return vec![];
    }
    let nmaster = nmaster as usize;

    let master_width = if count > nmaster {
        if nmaster > 0 {
            (f64::from(area.w) * mfact) as i32
        } else {
            0
        }
    } else {
        area.w
    };
    let master_count = count.min(nmaster);

    let mut master_y = 0;
    let mut stack_y = 0;
    (0..count)
        .map(|i| {
            if i < master_count {
                let h = row_height(area.h - master_y, master_count - i);
                let rect = Rect::new(area.x, area.y + master_y, master_width, h);
                master_y += h;
                rect
            } else {
                let h = row_height(area.h - stack_y, count - i);
                let rect = Rect::new(
                    area.x + master_width,
                    area.y + stack_y,
                    area.w - master_width,
                    h,
                );
                stack_y += h;
                rect
            }
        })
        .collect()
}

fn row_height(remaining: i32, rows: usize) -> i32 {
    let rows = rows as i32;
    (remaining + rows - 1).div_euclid(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_windows_with_two_masters() {
        let rects = update(Rect::new(0, 0, 1000, 800), 0.5, 2, 5);
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 500, 400),
                Rect::new(0, 400, 500, 400),
                Rect::new(500, 0, 500, 267),
                Rect::new(500, 267, 500, 267),
                Rect::new(500, 534, 500, 266),
            ]
        );
    }

    #[test]
    fn the_rows_cover_the_full_height() {
        let rects = update(Rect::new(0, 30, 1000, 797), 0.55, 1, 8);
        let stack: i32 = rects.iter().skip(1).map(|r| r.h).sum();
        assert_eq!(stack, 797);
        let last = rects.last().map(|r| r.bottom());
        assert_eq!(last, Some(30 + 797));
    }

    #[test]
    fn a_single_window_takes_the_whole_area() {
        let area = Rect::new(5, 5, 640, 480);
        assert_eq!(update(area, 0.55, 1, 1), vec![area]);
    }

    #[test]
    fn fewer_windows_than_masters_use_one_full_width_column() {
        let rects = update(Rect::new(0, 0, 900, 600), 0.5, 3, 2);
        assert_eq!(
            rects,
            vec![Rect::new(0, 0, 900, 300), Rect::new(0, 300, 900, 300)]
        );
    }

    #[test]
    fn no_masters_puts_everything_in_the_stack() {
        let rects = update(Rect::new(0, 0, 900, 600), 0.5, 0, 2);
        assert_eq!(
            rects,
            vec![Rect::new(0, 0, 900, 300), Rect::new(0, 300, 900, 300)]
        );
    }

    #[test]
    fn no_windows_means_no_geometry() {
        assert!(update(Rect::new(0, 0, 100, 100), 0.5, 1, 0).is_empty());
    }
}
