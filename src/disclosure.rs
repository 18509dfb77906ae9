//! Visibility state for regions the visitor can open and close.
//!
//! A `Disclosure` is either closed or open on exactly one id, so opening a
//! second id implicitly closes the first. The menu overlay only has a single
//! id (`()`), which makes it a plain open/closed flag.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disclosure<T> {
    Closed,
    Open(T),
}

pub type MenuState = Disclosure<()>;
pub type FaqState = Disclosure<usize>;

impl<T> Default for Disclosure<T> {
    fn default() -> Self {
        Disclosure::Closed
    }
}

impl<T: Copy + PartialEq> Disclosure<T> {
    pub fn open(self, id: T) -> Self {
        Disclosure::Open(id)
    }

    pub fn close(self) -> Self {
        Disclosure::Closed
    }

    pub fn toggle(self, id: T) -> Self {
        if self.is_open(id) {
            self.close()
        } else {
            self.open(id)
        }
    }

    pub fn is_open(&self, id: T) -> bool {
        matches!(self, Disclosure::Open(current) if *current == id)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Disclosure::Closed)
    }

    pub fn open_id(&self) -> Option<T> {
        match self {
            Disclosure::Open(id) => Some(*id),
            Disclosure::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAQ_COUNT: usize = 5;

    #[test]
    fn starts_closed() {
        assert!(FaqState::default().is_closed());
        assert!(MenuState::default().is_closed());
        assert_eq!(FaqState::default().open_id(), None);
    }

    #[test]
    fn activating_a_closed_question_opens_only_that_question() {
        for state in [FaqState::Closed, FaqState::Open(0), FaqState::Open(3)] {
            for i in 0..FAQ_COUNT {
                if state.is_open(i) {
                    continue;
                }
                let next = state.toggle(i);
                let open: Vec<usize> = (0..FAQ_COUNT).filter(|j| next.is_open(*j)).collect();
                assert_eq!(open, vec![i]);
            }
        }
    }

    #[test]
    fn reactivating_the_open_question_closes_it() {
        let state = FaqState::default().toggle(2);
        assert!(state.toggle(2).is_closed());
    }

    #[test]
    fn faq_click_sequence() {
        let state = FaqState::default();
        let state = state.toggle(2);
        assert_eq!(state.open_id(), Some(2));
        let state = state.toggle(4);
        assert_eq!(state.open_id(), Some(4));
        assert!(!state.is_open(2));
        let state = state.toggle(4);
        assert_eq!(state.open_id(), None);
    }

    #[test]
    fn menu_button_then_nav_link() {
        let menu = MenuState::default();
        let menu = menu.open(());
        assert!(menu.is_open(()));
        let menu = menu.close();
        assert!(menu.is_closed());
    }

    #[test]
    fn opening_an_open_menu_keeps_it_open() {
        let menu = MenuState::default().open(()).open(());
        assert!(menu.is_open(()));
    }

    #[test]
    fn close_is_idempotent() {
        let menu = MenuState::default().close();
        assert_eq!(menu, MenuState::Closed);
        assert_eq!(menu.close(), menu);
    }

    #[test]
    fn menu_and_faq_states_are_independent() {
        let menu = MenuState::default();
        let faq = FaqState::default().toggle(1);
        let menu = menu.open(());
        assert_eq!(faq.open_id(), Some(1));
        let faq = faq.toggle(1);
        assert!(menu.is_open(()));
        assert!(faq.is_closed());
    }
}
