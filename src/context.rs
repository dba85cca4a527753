//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::components::EditTarget;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the workspace tree - read
    pub structure_trigger: ReadSignal<u32>,
    /// Trigger to reload the workspace tree - write
    set_structure_trigger: WriteSignal<u32>,
    /// Trigger to reload the current board - read
    pub board_trigger: ReadSignal<u32>,
    /// Trigger to reload the current board - write
    set_board_trigger: WriteSignal<u32>,
    /// Open modal, if any - read
    pub editing_target: ReadSignal<Option<EditTarget>>,
    /// Open modal, if any - write
    set_editing_target: WriteSignal<Option<EditTarget>>,
}

impl AppContext {
    pub fn new() -> Self {
        let (structure_trigger, set_structure_trigger) = signal(0u32);
        let (board_trigger, set_board_trigger) = signal(0u32);
        let (editing_target, set_editing_target) = signal(None::<EditTarget>);
        Self {
            structure_trigger,
            set_structure_trigger,
            board_trigger,
            set_board_trigger,
            editing_target,
            set_editing_target,
        }
    }

    /// Re-fetch the sidebar tree
    pub fn reload_structure(&self) {
        self.set_structure_trigger.update(|v| *v += 1);
    }

    /// Re-fetch columns and tasks of the current board
    pub fn reload_board(&self) {
        self.set_board_trigger.update(|v| *v += 1);
    }

    pub fn open(&self, target: EditTarget) {
        self.set_editing_target.set(Some(target));
    }

    pub fn close(&self) {
        self.set_editing_target.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
