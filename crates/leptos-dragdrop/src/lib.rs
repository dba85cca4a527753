//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for Leptos.
//! Draggable items carry their id in the DataTransfer payload, drop containers
//! are tagged with `data-drop-container="<key>"` and resolved by walking up
//! from the event target.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, EventTarget, Node};

/// Attribute marking an element as a drop container. Its value is the container key.
pub const DROP_CONTAINER_ATTR: &str = "data-drop-container";

/// MIME type used for the drag payload
const PAYLOAD_FORMAT: &str = "text/plain";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Container currently hovered by a dragged item
    pub over_container_read: ReadSignal<Option<u32>>,
    pub over_container_write: WriteSignal<Option<u32>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_container_read, over_container_write) = signal(None::<u32>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_container_read,
        over_container_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_container_write.set(None);
}

/// Parse a drop container key as written in [`DROP_CONTAINER_ATTR`]
pub fn parse_container_key(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Parse the dragged item id out of a DataTransfer payload
pub fn parse_payload(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Walk up from `target` to the nearest drop container and return its key.
///
/// Returns `None` when the walk reaches `<body>` or the document root
/// without meeting a container.
pub fn resolve_drop_container(target: Option<EventTarget>) -> Option<u32> {
    let node = target?.dyn_into::<Node>().ok()?;
    let mut current = match node.dyn_into::<Element>() {
        Ok(el) => Some(el),
        // Text nodes: start from their parent
        Err(node) => node.parent_element(),
    };

    let ancestors = std::iter::from_fn(move || {
        let el = current.take()?;
        current = el.parent_element();
        Some((el.tag_name(), el.get_attribute(DROP_CONTAINER_ATTR)))
    });
    first_container_key(ancestors)
}

/// Container key of the nearest ancestor, given `(tag name, container attribute)`
/// pairs ordered from the event target upwards.
///
/// The walk stops at `<body>`; the first attribute met decides, even if unparsable.
pub fn first_container_key<I, S>(ancestors: I) -> Option<u32>
where
    I: IntoIterator<Item = (S, Option<S>)>,
    S: AsRef<str>,
{
    for (tag, attr) in ancestors {
        if tag.as_ref().eq_ignore_ascii_case("body") {
            return None;
        }
        if let Some(raw) = attr {
            return parse_container_key(raw.as_ref());
        }
    }
    None
}

/// Create dragstart handler for draggable items
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            if let Err(err) = dt.set_data(PAYLOAD_FORMAT, &item_id.to_string()) {
                tracing::warn!(?err, item_id, "failed writing drag payload");
            }
            dt.set_effect_allowed("move");
        }
        tracing::debug!(item_id, "drag started");
        dnd.dragging_id_write.set(Some(item_id));
    }
}

/// Create dragend handler. Fires after drop or on native drag-cancel.
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
    }
}

/// Create dragover handler for a drop container.
/// Calling `preventDefault` is what makes the element accept drops.
pub fn make_on_dragover(dnd: DndSignals, container_key: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if dnd.over_container_read.get_untracked() != Some(container_key) {
            dnd.over_container_write.set(Some(container_key));
        }
    }
}

/// Create dragleave handler for a drop container
pub fn make_on_dragleave(dnd: DndSignals, container_key: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.over_container_read.get_untracked() == Some(container_key) {
            dnd.over_container_write.set(None);
        }
    }
}

/// Create drop handler. `on_drop` receives `(dragged_id, container_key)`.
///
/// The container is resolved from the event target, not from the element the
/// handler is bound to, so nested cards inside a container resolve correctly.
pub fn make_on_drop<F>(dnd: DndSignals, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(u32, u32) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();

        let dragged = dnd.dragging_id_read.get_untracked().or_else(|| {
            ev.data_transfer()
                .and_then(|dt| dt.get_data(PAYLOAD_FORMAT).ok())
                .and_then(|raw| parse_payload(&raw))
        });
        let container = resolve_drop_container(ev.target());
        end_drag(&dnd);

        match (dragged, container) {
            (Some(dragged), Some(container)) => on_drop(dragged, container),
            (dragged, container) => {
                tracing::debug!(?dragged, ?container, "drop ignored, no item or container");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_container_key() {
        assert_eq!(parse_container_key("5"), Some(5));
        assert_eq!(parse_container_key(" 42 "), Some(42));
        assert_eq!(parse_container_key("list-5"), None);
        assert_eq!(parse_container_key(""), None);
        assert_eq!(parse_container_key("-1"), None);
    }

    fn el(tag: &'static str, attr: Option<&'static str>) -> (&'static str, Option<&'static str>) {
        (tag, attr)
    }

    #[test]
    fn test_first_container_key_nearest_wins() {
        let path = [el("H3", None), el("DIV", None), el("DIV", Some("7")), el("DIV", Some("1")), el("BODY", None)];
        assert_eq!(first_container_key(path), Some(7));
    }

    #[test]
    fn test_first_container_key_stops_at_body() {
        let path = [el("SPAN", None), el("BODY", None), el("HTML", Some("3"))];
        assert_eq!(first_container_key(path), None);
        assert_eq!(first_container_key([el("body", Some("3"))]), None);
    }

    #[test]
    fn test_first_container_key_no_container() {
        assert_eq!(first_container_key([el("DIV", None), el("HTML", None)]), None);
        assert_eq!(first_container_key(Vec::<(String, Option<String>)>::new()), None);
    }

    #[test]
    fn test_first_container_key_bad_attribute() {
        let path = [el("DIV", Some("list-2")), el("DIV", Some("2"))];
        assert_eq!(first_container_key(path), None);
    }

    #[test]
    fn test_drop_container_attr_name() {
        // Views write the attribute literally in `view!`
        assert_eq!(DROP_CONTAINER_ATTR, "data-drop-container");
    }

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload("17"), Some(17));
        assert_eq!(parse_payload("task-17"), None);
    }
}
