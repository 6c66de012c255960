use nt_core::ArticleView;

/// Vertical extent of a rendered card, in rows from the top of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRect {
    pub top: usize,
    pub bottom: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(scroll: usize, height: usize) -> Self {
        Self { scroll, height }
    }

    /// A card is in view when any of it overlaps the visible rows.
    pub fn contains(&self, rect: CardRect) -> bool {
        rect.top < self.scroll.saturating_add(self.height) && rect.bottom > self.scroll
    }
}

/// Stacks cards of the given heights with `gap` blank rows between them.
pub fn stack_layout(heights: &[usize], gap: usize) -> Vec<CardRect> {
    let mut top = 0;
    heights
        .iter()
        .map(|&height| {
            let rect = CardRect { top, bottom: top + height };
            top += height + gap;
            rect
        })
        .collect()
}

/// Sets `in_view` on every view and returns how many are visible.
pub fn update_visibility(views: &mut [ArticleView], rects: &[CardRect], viewport: Viewport) -> usize {
    let mut visible = 0;
    for (view, rect) in views.iter_mut().zip(rects) {
        view.in_view = viewport.contains(*rect);
        if view.in_view {
            visible += 1;
        }
    }
    visible
}
