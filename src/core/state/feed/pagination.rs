//! Pagination state for the infinite-scroll mode.

/// Tracks the next synthesized page and the in-flight guard.
///
/// The guard makes near-bottom triggers idempotent: while a load is in
/// flight every further trigger is a no-op, and a mode switch never cancels
/// the load (completion only appends content and clears the flag).
#[derive(Debug, Clone)]
pub struct PaginationState {
    next_page: u32,
    loading: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        // Page 1 is the batch seeded at startup.
        Self {
            next_page: 2,
            loading: false,
        }
    }
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    /// Arm the guard and return the page to load.
    pub fn start_loading(&mut self) -> u32 {
        self.loading = true;
        self.next_page
    }

    /// Clear the guard and advance to the following page.
    pub fn finish_loading(&mut self) {
        self.loading = false;
        self.next_page += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_state() {
        let state = PaginationState::new();
        assert!(!state.is_loading());
        assert_eq!(state.next_page(), 2);
    }

    #[test]
    fn test_load_cycle_advances_page() {
        let mut state = PaginationState::new();

        let page = state.start_loading();
        assert_eq!(page, 2);
        assert!(state.is_loading());

        state.finish_loading();
        assert!(!state.is_loading());
        assert_eq!(state.next_page(), 3);
    }

    #[test]
    fn test_start_is_idempotent_on_page() {
        let mut state = PaginationState::new();
        assert_eq!(state.start_loading(), 2);
        // A second trigger while loading must not advance anything.
        assert_eq!(state.start_loading(), 2);
        state.finish_loading();
        assert_eq!(state.next_page(), 3);
    }
}
