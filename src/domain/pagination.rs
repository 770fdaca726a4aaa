// Pagination - deterministic page slicing and navigation metadata

/// Pagination state for a rendered table.
///
/// Invariants: `total_pages == ceil(total_items / items_per_page)` (0 when the
/// collection is empty) and `1 <= current_page <= max(total_pages, 1)`.
/// Out-of-range inputs are clamped rather than rejected, so navigation
/// controls holding a stale page number never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PageDescriptor {
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        // items_per_page of 0 is coerced to 1 rather than raised
        let items_per_page = items_per_page.max(1);
        let total_pages = total_items.div_ceil(items_per_page);
        let current_page = current_page.clamp(1, total_pages.max(1));
        Self {
            current_page,
            items_per_page,
            total_items,
            total_pages,
        }
    }

    /// Changing the page size always returns the user to page 1.
    pub fn change_items_per_page(self, items_per_page: usize) -> Self {
        Self::new(1, items_per_page, self.total_items)
    }

    /// Clamps the requested page into the valid range; never fails.
    pub fn change_page(self, requested_page: usize) -> Self {
        Self::new(requested_page, self.items_per_page, self.total_items)
    }
}

/// Slice one page out of an ordered collection.
///
/// The page number is clamped the same way `PageDescriptor::new` clamps it, so
/// a valid page is returned whenever the collection is non-empty. Input order
/// is preserved and the input is never copied or mutated.
pub fn paginate<T>(data: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    let descriptor = PageDescriptor::new(current_page, items_per_page, data.len());
    let start = (descriptor.current_page - 1) * descriptor.items_per_page;
    if start >= data.len() {
        return &[];
    }
    let end = (start + descriptor.items_per_page).min(data.len());
    &data[start..end]
}

/// One entry in a rendered page-navigation strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Page(usize),
    Ellipsis,
}

/// Page numbers to render as navigation controls.
///
/// Always includes the first and last page, plus `window_radius` neighbors on
/// each side of the current page; non-adjacent runs are separated by a single
/// ellipsis marker. When `total_pages <= compact_threshold` every page is
/// listed. Pure function of its inputs, so two views given the same state
/// render identical controls.
pub fn visible_page_numbers(
    current_page: usize,
    total_pages: usize,
    window_radius: usize,
    compact_threshold: usize,
) -> Vec<PageControl> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= compact_threshold.max(1) {
        return (1..=total_pages).map(PageControl::Page).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let low = current.saturating_sub(window_radius).max(1);
    let high = (current + window_radius).min(total_pages);

    let mut kept: Vec<usize> = Vec::with_capacity(high - low + 3);
    kept.push(1);
    for page in low..=high {
        if page > 1 && page < total_pages {
            kept.push(page);
        }
    }
    kept.push(total_pages);

    let mut controls = Vec::with_capacity(kept.len() + 2);
    let mut previous = 0;
    for page in kept {
        if previous != 0 && page > previous + 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page(page));
        previous = page;
    }
    controls
}
