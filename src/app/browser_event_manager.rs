// src/app/browser_event_manager.rs
//! Handles attaching and detaching the browser mouse listeners that feed the table's state machine.

use std::sync::{Arc, Mutex};

use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent};

use crate::app::event_handler::{self, MouseAction};
use crate::app::renderer::{self, CardFaces};
use crate::logic::table::Table;

/// 登録したリスナー1つ分。外す時に同じ target と closure が必要なので全部持っておくよ。
pub struct Listener {
    target: EventTarget,
    event_name: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Attaches mousedown / dblclick to the canvas and mousemove / mouseup to the window.
///
/// Every event is converted to canvas coordinates, dispatched to the table, and the canvas is
/// repainted when the outcome changed something.
pub(crate) fn attach_listeners(
    table_arc: &Arc<Mutex<Table>>,
    faces_arc: &Arc<Mutex<CardFaces>>,
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
) -> Result<Vec<Listener>, JsValue> {
    let window = window().ok_or("Failed to get window")?;
    let mut listeners = Vec::with_capacity(MouseAction::ALL.len());

    for action in MouseAction::ALL {
        // Clone handles for the closure
        let table_arc = Arc::clone(table_arc);
        let faces_arc = Arc::clone(faces_arc);
        let canvas_for_closure = canvas.clone();
        let context = context.clone();

        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
                error!("Failed to cast event to MouseEvent in {} listener", action.dom_event());
                return;
            };
            if action == MouseAction::Down {
                // テキスト選択が始まらないように
                mouse_event.prevent_default();
            }
            let (x, y) = event_handler::canvas_point(&canvas_for_closure, &mouse_event);
            let outcome = event_handler::dispatch(&table_arc, action.to_pointer(x, y));
            if outcome.needs_redraw() {
                if let Err(e) = renderer::render_table(&table_arc, &faces_arc, &context) {
                    error!("Failed to render after {}: {:?}", action.dom_event(), e);
                }
            }
        }) as Box<dyn FnMut(Event)>);

        let target: EventTarget = if action.listens_on_canvas() {
            canvas.clone().into()
        } else {
            window.clone().into()
        };
        target.add_event_listener_with_callback(action.dom_event(), closure.as_ref().unchecked_ref())?;
        debug!("  Attached {} listener.", action.dom_event());

        listeners.push(Listener { target, event_name: action.dom_event(), closure });
    }

    info!("Attached {} mouse listeners", listeners.len());
    Ok(listeners)
}

/// Detaches every listener returned by `attach_listeners`. The closures are dropped afterwards.
pub(crate) fn detach_listeners(listeners: Vec<Listener>) -> Result<(), JsValue> {
    for listener in listeners {
        listener
            .target
            .remove_event_listener_with_callback(listener.event_name, listener.closure.as_ref().unchecked_ref())?;
        debug!("  Detached {} listener.", listener.event_name);
    }
    Ok(())
}
