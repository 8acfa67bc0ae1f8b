//! Bullet / auto-numbered list nesting.
//!
//! Bullet and enumerated lists share one depth counter. Entering a list of the
//! other kind restarts the counter at 0 instead of nesting, and leaving it clears
//! the kind; the enclosing list's remaining items are then unmarked.

use super::error::{Result, TranslateError};
use crate::models::bullet::BulletMode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ListKind {
    #[default]
    None,
    Bullet,
    Numbered,
}

#[derive(Debug, Default)]
pub(crate) struct ListState {
    depth: u32,
    kind: ListKind,
    /// List nodes entered and not yet exited, whatever their kind.
    open: usize,
}

impl ListState {
    pub(crate) fn enter(&mut self, kind: ListKind) {
        if self.kind == kind {
            self.depth += 1;
        } else {
            self.kind = kind;
            self.depth = 0;
        }
        self.open += 1;
    }

    pub(crate) fn exit(&mut self) -> Result<()> {
        if self.open == 0 {
            return Err(TranslateError::ListUnderflow);
        }
        self.open -= 1;
        if self.depth > 0 {
            self.depth -= 1;
        } else {
            self.kind = ListKind::None;
        }
        Ok(())
    }

    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }

    pub(crate) fn kind(&self) -> ListKind {
        self.kind
    }

    /// Marker for a paragraph created now.
    pub(crate) fn bullet(&self) -> BulletMode {
        match self.kind {
            ListKind::None => BulletMode::None,
            ListKind::Bullet => BulletMode::Bullet,
            ListKind::Numbered => BulletMode::AutoNumber { start_at: 1 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_single_kind_nesting_balances() {
        for kind in [ListKind::Bullet, ListKind::Numbered] {
            let mut lists = ListState::default();
            for expected in 0..5 {
                lists.enter(kind);
                assert_eq!(lists.depth(), expected);
            }
            for _ in 0..5 {
                lists.exit().unwrap();
            }
            assert_eq!((lists.depth(), lists.kind()), (0, ListKind::None));
        }
    }

    #[test]
    fn markers_follow_kind() {
        let mut lists = ListState::default();
        assert_eq!(lists.bullet(), BulletMode::None);
        lists.enter(ListKind::Numbered);
        assert_eq!(lists.bullet(), BulletMode::AutoNumber { start_at: 1 });
        lists.enter(ListKind::Numbered);
        assert_eq!(lists.bullet(), BulletMode::AutoNumber { start_at: 1 });
        assert_eq!(lists.depth(), 1);
    }

    #[test]
    fn mixed_nesting_shares_the_counter() {
        let mut lists = ListState::default();
        lists.enter(ListKind::Bullet);
        lists.enter(ListKind::Bullet);
        assert_eq!(lists.depth(), 1);

        // An enumerated list inside restarts at depth 0 rather than nesting to 2.
        lists.enter(ListKind::Numbered);
        assert_eq!((lists.depth(), lists.kind()), (0, ListKind::Numbered));

        // Leaving it clears the kind: the enclosing bullet list is no longer marked.
        lists.exit().unwrap();
        assert_eq!((lists.depth(), lists.kind()), (0, ListKind::None));
        assert_eq!(lists.bullet(), BulletMode::None);

        lists.exit().unwrap();
        lists.exit().unwrap();
        assert_eq!((lists.depth(), lists.kind()), (0, ListKind::None));
    }

    #[test]
    fn exit_without_enter_is_a_fault() {
        let mut lists = ListState::default();
        assert_eq!(lists.exit(), Err(TranslateError::ListUnderflow));
    }
}
