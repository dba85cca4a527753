//! UI Components
//!
//! Reusable Leptos components.

mod add_list;
mod board_modal;
mod delete_confirm_button;
mod editor_target;
mod kanban_board;
mod kanban_column;
mod modal_shell;
mod settings_modal;
mod task_card;
mod task_modal;
mod workspace_modal;
mod workspace_sidebar;

pub use add_list::AddList;
pub use board_modal::BoardModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use editor_target::EditTarget;
pub use kanban_board::{BoardHeader, KanbanBoard};
pub use kanban_column::KanbanColumn;
pub use modal_shell::{FormErrorLine, ModalShell};
pub use settings_modal::SettingsModal;
pub use task_card::TaskCard;
pub use task_modal::{open_new_task, TaskModal};
pub use workspace_modal::WorkspaceModal;
pub use workspace_sidebar::WorkspaceSidebar;
