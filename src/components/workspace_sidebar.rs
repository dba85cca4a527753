//! Workspace Sidebar Component
//!
//! Left sidebar: workspaces with their boards, create/edit/delete actions,
//! and the example data loader.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{DeleteConfirmButton, EditTarget};
use crate::context::{use_app_context, AppContext};
use crate::models::{Board, Workspace};
use crate::sidebar::workspace_of;
use crate::store::{store_select_board, use_app_store, AppStateStoreFields};

/// Ask, seed the backend, reload the tree
fn load_example_data(ctx: AppContext) {
    if !gloo::dialogs::confirm("This creates an example structure (a company with two projects). Continue?") {
        return;
    }
    spawn_local(async move {
        match commands::seed_example_data().await {
            Ok(()) => {
                tracing::info!("example data created");
                ctx.reload_structure();
            }
            Err(err) => {
                tracing::error!(error = %err, "seeding failed");
                gloo::dialogs::alert("Could not create the example data. Is the backend running?");
            }
        }
    });
}

/// One board row inside a workspace
#[component]
fn BoardRow(board: Board) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = board.id;
    let is_active = move || store.current_board_id().get() == Some(id);
    let edit_board = board.clone();

    let select = move |_| {
        if store.current_board_id().get_untracked() == Some(id) {
            ctx.reload_board();
        } else {
            tracing::debug!(board_id = id, "board selected");
            store_select_board(&store, Some(id));
        }
    };

    let delete = Callback::new(move |_| {
        spawn_local(async move {
            match commands::delete_board(id).await {
                Ok(()) => tracing::info!(board_id = id, "board deleted"),
                Err(err) if err.is_not_found() => tracing::warn!(board_id = id, "board was already gone"),
                Err(err) => {
                    tracing::error!(error = %err, board_id = id, "failed to delete board");
                    return;
                }
            }
            if store.current_board_id().get_untracked() == Some(id) {
                store_select_board(&store, None);
            }
            ctx.reload_structure();
        });
    });

    view! {
        <div class=move || if is_active() { "board-item active" } else { "board-item" }>
            <div class="board-select" on:click=select>
                <span class="board-hash">"#"</span>
                <span class="board-title">{board.title.clone()}</span>
            </div>
            <div class="sidebar-actions">
                <button
                    class="btn-sidebar-icon"
                    title="Edit board"
                    on:click=move |_| ctx.open(EditTarget::Board(edit_board.clone()))
                >
                    "✎"
                </button>
                <DeleteConfirmButton
                    button_class="btn-sidebar-icon danger"
                    prompt="Delete this board and all its tasks?"
                    on_confirm=delete
                />
            </div>
        </div>
    }
}

/// Collapsible workspace node with its boards
#[component]
fn WorkspaceNode(
    workspace: Workspace,
    collapsed: ReadSignal<Vec<u32>>,
    set_collapsed: WriteSignal<Vec<u32>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = workspace.id;
    let is_expanded = move || !collapsed.get().contains(&id);
    let toggle = move |_| {
        set_collapsed.update(|ids| match ids.iter().position(|x| *x == id) {
            Some(pos) => {
                ids.remove(pos);
            }
            None => ids.push(id),
        })
    };

    // Boards come from the store; the node key covers workspace fields only
    let boards = move || {
        store
            .workspaces()
            .get()
            .into_iter()
            .find(|ws| ws.id == id)
            .map(|ws| ws.boards)
            .unwrap_or_default()
    };

    let edit_workspace = workspace.clone();
    let delete = Callback::new(move |_| {
        spawn_local(async move {
            let held_current = store
                .current_board_id()
                .get_untracked()
                .is_some_and(|board_id| workspace_of(&store.workspaces().get_untracked(), board_id) == Some(id));

            match commands::delete_workspace(id).await {
                Ok(()) => tracing::info!(workspace_id = id, "workspace deleted"),
                Err(err) if err.is_not_found() => tracing::warn!(workspace_id = id, "workspace was already gone"),
                Err(err) => {
                    tracing::error!(error = %err, workspace_id = id, "failed to delete workspace");
                    return;
                }
            }
            if held_current {
                store_select_board(&store, None);
            }
            ctx.reload_structure();
        });
    });

    view! {
        <div class=move || if is_expanded() { "workspace-item expanded" } else { "workspace-item" }>
            <div class="workspace-header" on:click=toggle>
                <div class="ws-title-container">
                    <span class="arrow-icon">{move || if is_expanded() { "▼" } else { "▶" }}</span>
                    <span class="ws-title">{workspace.label()}</span>
                </div>
                <div class="sidebar-actions" on:click=|ev| ev.stop_propagation()>
                    <button
                        class="btn-sidebar-icon"
                        title="New board"
                        on:click=move |_| ctx.open(EditTarget::NewBoard { workspace_id: id })
                    >
                        "+"
                    </button>
                    <button
                        class="btn-sidebar-icon"
                        title="Edit workspace"
                        on:click=move |_| ctx.open(EditTarget::Workspace(edit_workspace.clone()))
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="btn-sidebar-icon danger"
                        prompt="Delete this workspace with ALL its boards and tasks?"
                        on_confirm=delete
                    />
                </div>
            </div>
            <Show when=is_expanded>
                <div class="boards-container">
                    <Show
                        when=move || !boards().is_empty()
                        fallback=|| view! { <div class="boards-empty">"Empty"</div> }
                    >
                        <For
                            each=boards
                            key=|board| (board.id, board.title.clone(), board.description.clone())
                            children=move |board| view! { <BoardRow board=board /> }
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Sidebar listing every workspace
#[component]
pub fn WorkspaceSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (collapsed, set_collapsed) = signal(Vec::<u32>::new());
    let has_workspaces = move || !store.workspaces().get().is_empty();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h3>"Workspaces"</h3>
                <button
                    class="btn-sidebar-icon"
                    title="New workspace"
                    on:click=move |_| ctx.open(EditTarget::NewWorkspace)
                >
                    "+"
                </button>
            </div>

            <div class="sidebar-content">
                <Show
                    when=has_workspaces
                    fallback=move || view! {
                        <div class="sidebar-empty">
                            <p>"No workspaces yet."</p>
                            <button class="btn-secondary" on:click=move |_| load_example_data(ctx)>
                                "Load example data"
                            </button>
                        </div>
                    }
                >
                    <For
                        each=move || store.workspaces().get()
                        key=|ws| (ws.id, ws.title.clone(), ws.icon.clone())
                        children=move |ws| view! {
                            <WorkspaceNode workspace=ws collapsed=collapsed set_collapsed=set_collapsed />
                        }
                    />
                </Show>
            </div>

            <div class="sidebar-footer">
                <button class="btn-secondary" on:click=move |_| load_example_data(ctx)>"Example data"</button>
                <button class="btn-secondary" on:click=move |_| ctx.open(EditTarget::Settings)>"⚙ Settings"</button>
            </div>
        </aside>
    }
}
