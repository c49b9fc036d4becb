use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::filter::{EntityType, FilterState, ViewMode};

pub const PAGE_SIZE: usize = 10;

/// One page of a filtered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

pub fn total_pages(total_items: usize) -> usize {
    total_items.div_ceil(PAGE_SIZE)
}

/// Slice `items` into page `page` (1-based). Pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Page<T> {
    let page = page.max(1);
    let total_items = items.len();
    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .collect();

    Page {
        items,
        page,
        page_size: PAGE_SIZE,
        total_items,
        total_pages: total_pages(total_items),
    }
}

/// Browsing state for one prospecting view: entity kind, criteria, current
/// page, and the ids the user has ticked.
///
/// Changing the entity kind, the view mode, or any criterion returns to page
/// one and clears the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectingSession {
    entity_type: EntityType,
    filters: FilterState,
    page: usize,
    selection: BTreeSet<String>,
}

impl ProspectingSession {
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            filters: FilterState::default(),
            page: 1,
            selection: BTreeSet::new(),
        }
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn selection(&self) -> &BTreeSet<String> {
        &self.selection
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.reset_position();
    }

    /// Edit the criteria in place.
    pub fn update_filters(&mut self, edit: impl FnOnce(&mut FilterState)) {
        edit(&mut self.filters);
        self.reset_position();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.filters.view_mode = view_mode;
        self.reset_position();
    }

    pub fn switch_entity(&mut self, entity_type: EntityType) {
        self.entity_type = entity_type;
        if entity_type == EntityType::Companies {
            self.filters.clear_people_only();
        }
        self.reset_position();
    }

    /// Overlay a saved search onto the current criteria.
    pub fn apply_saved_search(&mut self, filters: &FilterState) {
        self.filters.overlay(filters);
        self.reset_position();
    }

    /// Move to `page`, clamped to `1..=total_pages`. Keeps the selection.
    pub fn go_to_page(&mut self, page: usize, total_items: usize) {
        let last = total_pages(total_items).max(1);
        self.page = page.clamp(1, last);
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// Select every id on the visible page, or deselect them all when every
    /// one is already selected. Ids on other pages are untouched.
    pub fn toggle_page<'a, I>(&mut self, page_ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let page_ids: Vec<&str> = page_ids.into_iter().collect();
        let all_selected = page_ids.iter().all(|id| self.selection.contains(*id));
        for id in page_ids {
            if all_selected {
                self.selection.remove(id);
            } else {
                self.selection.insert(id.to_string());
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn reset_position(&mut self) {
        self.page = 1;
        self.selection.clear();
    }
}
