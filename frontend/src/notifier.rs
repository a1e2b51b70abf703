//! Transient toast messages. Only one toast exists at a time: a new one
//! replaces whatever is on screen.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::ToastTiming;
use crate::dom::{Document, DomError, Element};
use crate::scheduler::Scheduler;

const SHOW_CLASS: &str = "show";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

struct ActiveToast<E> {
    id: u64,
    element: E,
}

struct Inner<D: Document, S> {
    document: D,
    scheduler: S,
    timing: ToastTiming,
    current: RefCell<Option<ActiveToast<D::Element>>>,
    next_id: Cell<u64>,
}

impl<D: Document, S> Inner<D, S> {
    fn dismiss_current(&self) {
        if let Some(toast) = self.current.borrow_mut().take() {
            toast.element.remove();
        }
    }

    fn hide(&self, id: u64) {
        if let Some(toast) = self.current.borrow().as_ref().filter(|t| t.id == id) {
            toast.element.remove_class(SHOW_CLASS);
        }
    }

    fn retire(&self, id: u64) {
        let mut current = self.current.borrow_mut();
        if current.as_ref().map_or(false, |t| t.id == id) {
            if let Some(toast) = current.take() {
                toast.element.remove();
            }
        }
    }
}

pub struct Notifier<D: Document, S> {
    inner: Rc<Inner<D, S>>,
}

impl<D: Document, S> Clone for Notifier<D, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D, S> Notifier<D, S>
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    pub fn new(document: D, scheduler: S, timing: ToastTiming) -> Self {
        Self {
            inner: Rc::new(Inner {
                document,
                scheduler,
                timing,
                current: RefCell::new(None),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Shows `message`, fading it in on the next frame and out after the
    /// dwell time. The element is dropped once the exit transition is over.
    pub fn notify(&self, message: &str, kind: ToastKind) -> Result<(), DomError> {
        let inner = &self.inner;
        inner.dismiss_current();

        let element = inner.document.create_element("div")?;
        element.set_class_name(&format!("toast {}", kind.class()));
        element.set_text(message);
        inner
            .document
            .body()
            .ok_or(DomError::NoBody)?
            .append_child(&element)?;

        let id = inner.next_id.get() + 1;
        inner.next_id.set(id);
        *inner.current.borrow_mut() = Some(ActiveToast {
            id,
            element: element.clone(),
        });

        inner
            .scheduler
            .next_frame(Box::new(move || element.add_class(SHOW_CLASS)));

        let exit_ms = inner.timing.exit_ms;
        let weak: Weak<Inner<D, S>> = Rc::downgrade(inner);
        inner.scheduler.after(
            inner.timing.dwell_ms,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                inner.hide(id);
                let weak = Rc::downgrade(&inner);
                inner.scheduler.after(
                    exit_ms,
                    Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.retire(id);
                        }
                    }),
                );
            }),
        );
        Ok(())
    }
}
