//! Sidebar Selection Policy

use crate::models::{find_board, Workspace};

/// Board to show after the workspace tree is reloaded.
///
/// Keeps `current` while it still exists; otherwise falls back to the first
/// board of the first workspace that has one. `None` when no boards exist.
pub fn resolve_selection(workspaces: &[Workspace], current: Option<u32>) -> Option<u32> {
    match current {
        Some(id) if find_board(workspaces, id).is_some() => Some(id),
        _ => workspaces.iter().flat_map(|ws| ws.boards.iter()).next().map(|b| b.id),
    }
}

/// Workspace that owns `board_id`
pub fn workspace_of(workspaces: &[Workspace], board_id: u32) -> Option<u32> {
    workspaces
        .iter()
        .find(|ws| ws.boards.iter().any(|b| b.id == board_id))
        .map(|ws| ws.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Board;

    fn ws(id: u32, board_ids: &[u32]) -> Workspace {
        Workspace {
            id,
            title: format!("WS {}", id),
            icon: "💼".into(),
            boards: board_ids
                .iter()
                .map(|&b| Board { id: b, title: format!("Board {}", b), description: None, workspace_id: Some(id) })
                .collect(),
        }
    }

    #[test]
    fn test_keeps_existing_selection() {
        let tree = vec![ws(1, &[10, 11]), ws(2, &[20])];
        assert_eq!(resolve_selection(&tree, Some(20)), Some(20));
    }

    #[test]
    fn test_auto_selects_first_board() {
        let tree = vec![ws(1, &[]), ws(2, &[20, 21])];
        assert_eq!(resolve_selection(&tree, None), Some(20));
    }

    #[test]
    fn test_deleted_selection_falls_back() {
        let tree = vec![ws(1, &[10])];
        assert_eq!(resolve_selection(&tree, Some(99)), Some(10));
    }

    #[test]
    fn test_no_boards_clears_selection() {
        assert_eq!(resolve_selection(&[], Some(10)), None);
        assert_eq!(resolve_selection(&[ws(1, &[])], None), None);
    }

    #[test]
    fn test_workspace_of() {
        let tree = vec![ws(1, &[10]), ws(2, &[20])];
        assert_eq!(workspace_of(&tree, 20), Some(2));
        assert_eq!(workspace_of(&tree, 30), None);
    }
}
