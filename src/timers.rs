use crate::core::{RoundController, Scheduler, TaskHandle};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Where fired timers are delivered. Bound after the controller exists,
/// since the controller owns the scheduler that holds this target.
#[derive(Clone, Default)]
pub struct TimerTarget(Rc<RefCell<Weak<RefCell<RoundController>>>>);

impl TimerTarget {
    pub fn bind(&self, controller: &Rc<RefCell<RoundController>>) {
        *self.0.borrow_mut() = Rc::downgrade(controller);
    }

    fn fire(&self, handle: TaskHandle) {
        let Some(controller) = self.0.borrow().upgrade() else {
            return;
        };
        match controller.try_borrow_mut() {
            Ok(mut c) => c.on_timer(handle),
            Err(_) => log::warn!("[timers] controller busy; dropped {:?}", handle),
        }
    }
}

struct Entry {
    js_id: i32,
    repeating: bool,
    closure: Closure<dyn FnMut()>,
}

/// [`Scheduler`] over `setInterval` / `setTimeout`.
///
/// Closures are never dropped while they might be executing: cancelled ones
/// are parked in `retired` and fired one-shots are recorded in `fired`; both
/// are released on the next schedule call.
pub struct WebScheduler {
    window: web::Window,
    target: TimerTarget,
    next_id: u32,
    live: HashMap<TaskHandle, Entry>,
    fired: Rc<RefCell<Vec<TaskHandle>>>,
    retired: Vec<Closure<dyn FnMut()>>,
}

impl WebScheduler {
    pub fn new(window: web::Window, target: TimerTarget) -> Self {
        Self {
            window,
            target,
            next_id: 1,
            live: HashMap::new(),
            fired: Rc::new(RefCell::new(Vec::new())),
            retired: Vec::new(),
        }
    }

    fn collect(&mut self) {
        self.retired.clear();
        let fired: Vec<TaskHandle> = self.fired.borrow_mut().drain(..).collect();
        for handle in fired {
            self.live.remove(&handle);
        }
    }

    fn schedule(&mut self, ms: u32, repeating: bool) -> TaskHandle {
        self.collect();
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let target = self.target.clone();
        let fired = self.fired.clone();
        let closure = Closure::wrap(Box::new(move || {
            if !repeating {
                fired.borrow_mut().push(handle);
            }
            target.fire(handle);
        }) as Box<dyn FnMut()>);

        let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
        let scheduled = if repeating {
            self.window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    timeout,
                )
        } else {
            self.window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    timeout,
                )
        };
        match scheduled {
            Ok(js_id) => {
                self.live.insert(
                    handle,
                    Entry {
                        js_id,
                        repeating,
                        closure,
                    },
                );
            }
            Err(e) => log::error!("[timers] could not schedule {:?}: {:?}", handle, e),
        }
        handle
    }
}

impl Scheduler for WebScheduler {
    fn every(&mut self, interval_ms: u32) -> TaskHandle {
        self.schedule(interval_ms, true)
    }

    fn after(&mut self, delay_ms: u32) -> TaskHandle {
        self.schedule(delay_ms, false)
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if let Some(entry) = self.live.remove(&handle) {
            if entry.repeating {
                self.window.clear_interval_with_handle(entry.js_id);
            } else {
                self.window.clear_timeout_with_handle(entry.js_id);
            }
            self.retired.push(entry.closure);
        }
    }
}
