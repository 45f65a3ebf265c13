use parking_lot::Mutex;

/// Deferred event buffer between the host callback context and the frame.
///
/// Unbounded: a host that floods events faster than frames render grows it
/// without limit.
pub struct EventQueue<T> {
    buf: Mutex<Vec<T>>,
}

impl<T> EventQueue<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: Mutex::new(Vec::new()),
        }
    }

    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Mutex::new(Vec::with_capacity(cap)),
        }
    }

    #[inline]
    pub fn push(&self, ev: T) {
        self.buf.lock().push(ev);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    /// Move everything queued so far into `out` in arrival order and leave the
    /// queue empty, in one critical section.
    ///
    /// `out` must be empty; its capacity is handed back to the queue so
    /// steady-state frames do not allocate.
    #[inline]
    pub fn drain_into(&self, out: &mut Vec<T>) {
        debug_assert!(out.is_empty());
        out.clear();
        std::mem::swap(&mut *self.buf.lock(), out);
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
