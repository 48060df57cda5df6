pub const TOTAL_PAGES: usize = 29;
pub const BLOCK_SIZE: usize = 10;
pub const AUTO_ADVANCE_MS: u32 = 4_000;

const IMAGE_BASE_PATH: &str =
    "https://huggingface.co/datasets/jen900704/portfolio-assets/resolve/main/art-therapy-portfolio-2023";

/// Slide ordinals are 1-based on the asset host.
pub fn slide_url(page: usize) -> String {
    format!("{IMAGE_BASE_PATH}/Slide{}.PNG", page + 1)
}

/// Current page over a fixed sequence of slides. Relative steps wrap
/// around the ends; explicit jumps clamp into range instead.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Flipbook {
    page: usize,
}

impl Flipbook {
    pub fn new() -> Self {
        Self { page: 0 }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1) % TOTAL_PAGES;
    }

    pub fn prev(&mut self) {
        self.page = (self.page + TOTAL_PAGES - 1) % TOTAL_PAGES;
    }

    pub fn go_to_page(&mut self, target: isize) {
        self.page = target.clamp(0, TOTAL_PAGES as isize - 1) as usize;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PagerControl {
    Nav {
        label: &'static str,
        target: usize,
        disabled: bool,
    },
    Page {
        index: usize,
        active: bool,
    },
}

/// Pager strip for the current block of page numbers:
/// First / « 10 / ‹ / numeric buttons / › / 10 » / Last.
/// The step arrows wrap and never disable; the block and endpoint
/// controls disable at their own boundary.
pub fn pager_controls(page: usize) -> Vec<PagerControl> {
    let block_start = (page / BLOCK_SIZE) * BLOCK_SIZE;
    let block_end = (block_start + BLOCK_SIZE - 1).min(TOTAL_PAGES - 1);
    let is_first_block = block_start == 0;
    let is_last_block = block_end == TOTAL_PAGES - 1;

    let mut controls = Vec::with_capacity(BLOCK_SIZE + 7);

    controls.push(PagerControl::Nav {
        label: "First",
        target: 0,
        disabled: page == 0,
    });
    controls.push(PagerControl::Nav {
        label: "« 10",
        target: block_start.saturating_sub(BLOCK_SIZE),
        disabled: is_first_block,
    });
    controls.push(PagerControl::Nav {
        label: "‹",
        target: (page + TOTAL_PAGES - 1) % TOTAL_PAGES,
        disabled: false,
    });

    for index in block_start..=block_end {
        controls.push(PagerControl::Page {
            index,
            active: index == page,
        });
    }

    controls.push(PagerControl::Nav {
        label: "›",
        target: (page + 1) % TOTAL_PAGES,
        disabled: false,
    });
    controls.push(PagerControl::Nav {
        label: "10 »",
        target: (block_start + BLOCK_SIZE).min(TOTAL_PAGES - 1),
        disabled: is_last_block,
    });
    controls.push(PagerControl::Nav {
        label: "Last",
        target: TOTAL_PAGES - 1,
        disabled: page == TOTAL_PAGES - 1,
    });

    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(controls: &[PagerControl], wanted: &str) -> (usize, bool) {
        controls
            .iter()
            .find_map(|control| match control {
                PagerControl::Nav {
                    label,
                    target,
                    disabled,
                } if *label == wanted => Some((*target, *disabled)),
                _ => None,
            })
            .unwrap_or_else(|| panic!("pager is missing the {wanted:?} control"))
    }

    fn page_indices(controls: &[PagerControl]) -> Vec<usize> {
        controls
            .iter()
            .filter_map(|control| match control {
                PagerControl::Page { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn advancing_wraps_from_last_page_to_first() {
        let mut book = Flipbook::new();
        book.go_to_page(TOTAL_PAGES as isize - 1);
        book.next();
        assert_eq!(book.page(), 0);
    }

    #[test]
    fn retreating_wraps_from_first_page_to_last() {
        let mut book = Flipbook::new();
        book.prev();
        assert_eq!(book.page(), TOTAL_PAGES - 1);
    }

    #[test]
    fn repeated_steps_follow_modular_arithmetic() {
        let start = 7;
        for steps in 0..(2 * TOTAL_PAGES) {
            let mut forward = Flipbook::new();
            forward.go_to_page(start as isize);
            let mut backward = forward;
            for _ in 0..steps {
                forward.next();
                backward.prev();
            }
            assert_eq!(forward.page(), (start + steps) % TOTAL_PAGES);
            assert_eq!(
                backward.page(),
                (start + steps * (TOTAL_PAGES - 1)) % TOTAL_PAGES
            );
        }
    }

    #[test]
    fn explicit_jumps_clamp_instead_of_wrapping() {
        let mut book = Flipbook::new();
        book.go_to_page(-5);
        assert_eq!(book.page(), 0);
        book.go_to_page(TOTAL_PAGES as isize + 71);
        assert_eq!(book.page(), TOTAL_PAGES - 1);
        book.go_to_page(7);
        assert_eq!(book.page(), 7);
    }

    #[test]
    fn wrap_then_clamp_then_wrap_scenario() {
        let mut book = Flipbook::new();
        book.prev();
        assert_eq!(book.page(), 28);
        book.go_to_page(100);
        assert_eq!(book.page(), 28);
        book.next();
        assert_eq!(book.page(), 0);
    }

    #[test]
    fn slide_urls_are_one_based() {
        assert!(slide_url(0).ends_with("/Slide1.PNG"));
        assert!(slide_url(TOTAL_PAGES - 1).ends_with("/Slide29.PNG"));
    }

    #[test]
    fn pager_shows_only_the_current_block() {
        let last_of_first_block = pager_controls(9);
        assert_eq!(page_indices(&last_of_first_block), (0..=9).collect::<Vec<_>>());

        let first_of_second_block = pager_controls(10);
        assert_eq!(
            page_indices(&first_of_second_block),
            (10..=19).collect::<Vec<_>>()
        );
    }

    #[test]
    fn final_block_is_partial() {
        let controls = pager_controls(TOTAL_PAGES - 1);
        assert_eq!(page_indices(&controls), (20..=28).collect::<Vec<_>>());
    }

    #[test]
    fn next_block_from_first_block_lands_on_page_ten() {
        let controls = pager_controls(9);
        let (target, disabled) = nav(&controls, "10 »");
        assert!(!disabled);
        assert_eq!(target, 10);

        let mut book = Flipbook::new();
        book.go_to_page(9);
        book.go_to_page(target as isize);
        assert_eq!(book.page(), 10);
    }

    #[test]
    fn boundary_controls_disable_at_their_boundaries() {
        let at_start = pager_controls(0);
        assert!(nav(&at_start, "First").1);
        assert!(nav(&at_start, "« 10").1);
        assert!(!nav(&at_start, "10 »").1);
        assert!(!nav(&at_start, "Last").1);

        let inside_first_block = pager_controls(5);
        assert!(!nav(&inside_first_block, "First").1);
        assert!(nav(&inside_first_block, "« 10").1);

        let at_end = pager_controls(TOTAL_PAGES - 1);
        assert!(!nav(&at_end, "First").1);
        assert!(!nav(&at_end, "« 10").1);
        assert!(nav(&at_end, "10 »").1);
        assert!(nav(&at_end, "Last").1);
    }

    #[test]
    fn step_controls_never_disable() {
        for page in [0, 9, 10, TOTAL_PAGES - 1] {
            let controls = pager_controls(page);
            let (prev_target, prev_disabled) = nav(&controls, "‹");
            let (next_target, next_disabled) = nav(&controls, "›");
            assert!(!prev_disabled);
            assert!(!next_disabled);
            assert_eq!(prev_target, (page + TOTAL_PAGES - 1) % TOTAL_PAGES);
            assert_eq!(next_target, (page + 1) % TOTAL_PAGES);
        }
    }

    #[test]
    fn block_navigation_targets_previous_block_start() {
        let controls = pager_controls(25);
        assert_eq!(nav(&controls, "« 10").0, 10);
        assert_eq!(nav(&controls, "First").0, 0);
        assert_eq!(nav(&controls, "Last").0, TOTAL_PAGES - 1);
    }
}
