use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

std::thread_local! {
    static KEY_STACK: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

/// Runs `f` with `key` pushed onto the key stack of the current thread.
///
/// The key is popped whether `f` succeeds or not.
pub(crate) fn with_key<R>(key: &'static str, f: impl FnOnce() -> R) -> R {
    KEY_STACK.with_borrow_mut(|stack| stack.push(key));
    let output = f();
    KEY_STACK.with_borrow_mut(|stack| stack.pop());
    output
}

/// The keys of the fields currently being coded, outermost first, joined by `.`.
pub(crate) fn key_path() -> Option<String> {
    KEY_STACK.with_borrow(|stack| (!stack.is_empty()).then(|| stack.join(".")))
}

#[cfg(test)]
mod tests {
    use super::{key_path, with_key};

    #[test]
    fn nesting() {
        assert_eq!(key_path(), None);
        let inner = with_key("outer", || with_key("inner", key_path));
        assert_eq!(inner.as_deref(), Some("outer.inner"));
        assert_eq!(key_path(), None);
    }
}
