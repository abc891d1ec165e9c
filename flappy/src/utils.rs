#[cfg(test)]
pub mod testing {
    use core::fmt;

    use crate::consts::{PIXEL_STRIDE, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::surface::{pixel_offset, Color, Rect};
    use crate::text::cell_offset;

    /// Asserts that every pixel of a region has one color, dumping the
    /// region on failure
    #[macro_export]
    macro_rules! assert_region {
        ($surface:expr, $rect:expr, $color:expr $(,)?) => {{
            let rect = $rect;
            let color = $color;
            assert!(
                $crate::utils::testing::region_is(&$surface, rect, color),
                "\nregion {:?} is not entirely {:?}:{:?}",
                rect,
                color,
                $crate::utils::testing::Dump::new(&$surface, rect),
            );
        }};
    }

    fn pixels(surface: &[u16], rect: Rect) -> impl Iterator<Item = u16> + '_ {
        let rect = rect.clip();
        (rect.y1..=rect.y2).flat_map(move |y| {
            (rect.x1..=rect.x2).map(move |x| surface[pixel_offset(x as usize, y as usize)])
        })
    }

    pub fn region_is(surface: &[u16], rect: Rect, color: Color) -> bool {
        pixels(surface, rect).all(|px| px == color.0)
    }

    /// Number of visible pixels of a given color
    pub fn count_color(surface: &[u16], color: Color) -> usize {
        assert!(surface.len() >= PIXEL_STRIDE * SCREEN_HEIGHT as usize);
        pixels(surface, Rect::new(0, 0, SCREEN_WIDTH - 1, SCREEN_HEIGHT - 1))
            .filter(|&px| px == color.0)
            .count()
    }

    pub fn text_at(grid: &[u8], col: usize, row: usize, len: usize) -> &str {
        let start = cell_offset(col, row);
        core::str::from_utf8(&grid[start..start + len]).unwrap()
    }

    /// Region of a surface printed one character per pixel
    pub struct Dump<'a> {
        surface: &'a [u16],
        rect: Rect,
    }

    impl<'a> Dump<'a> {
        pub fn new(surface: &'a [u16], rect: Rect) -> Self {
            Self {
                surface,
                rect: rect.clip(),
            }
        }
    }

    impl fmt::Debug for Dump<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f)?;
            for y in self.rect.y1..=self.rect.y2 {
                for x in self.rect.x1..=self.rect.x2 {
                    let px = Color(self.surface[pixel_offset(x as usize, y as usize)]);
                    let c = match px {
                        Color::BACKGROUND => '.',
                        Color::YELLOW => 'o',
                        Color::GREEN => '#',
                        Color::BLACK => ' ',
                        _ => '?',
                    };
                    write!(f, "{}", c)?;
                }
                writeln!(f)?;
            }
            Ok(())
        }
    }

    mod tests {
        use super::*;
        use crate::consts::SURFACE_LEN;
        use crate::surface::Surface;

        #[test]
        fn count_ignores_hidden_columns() {
            let mut surface = vec![0u16; SURFACE_LEN];
            surface[SCREEN_WIDTH as usize] = Color::WHITE.0;
            assert_eq!(count_color(&surface, Color::WHITE), 0);
            surface.set_pixel(0, 0, Color::WHITE).unwrap();
            assert_eq!(count_color(&surface, Color::WHITE), 1);
        }

        #[test]
        fn dump() {
            let mut surface = vec![Color::BACKGROUND.0; SURFACE_LEN];
            surface.set_pixel(1, 0, Color::YELLOW).unwrap();
            surface.set_pixel(0, 1, Color::GREEN).unwrap();
            let dump = format!("{:?}", Dump::new(&surface, Rect::new(0, 0, 2, 1)));
            assert_eq!(dump, "\n.o.\n#..\n");
        }
    }
}
