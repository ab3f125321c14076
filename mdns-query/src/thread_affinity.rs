use std::thread::ThreadId;

/// Captures the thread a [`crate::builder::QueryBuilder`] was created
/// on. The builder's `Weak<dyn Transport>` upgrade and the planner's
/// cache reads are not meant to cross threads (§9); this catches a
/// misuse early instead of producing a confusing transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerThread(ThreadId);

impl OwnerThread {
    pub fn current() -> Self {
        Self(std::thread::current().id())
    }

    pub fn assert_on_owner_thread(&self) {
        let current = std::thread::current().id();
        if current != self.0 {
            unreachable!("query builder used from a thread other than the one that created it");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_thread_passes_assertion() {
        let owner = OwnerThread::current();
        owner.assert_on_owner_thread();
    }
}
