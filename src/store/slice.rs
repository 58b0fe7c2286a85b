/// State owned by one slice: the records in insertion order plus request
/// status flags.
///
/// `loading` and `error` are kept apart only by the reducers; nothing here
/// stops both from being set at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for SliceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> SliceState<T> {
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub(crate) fn fetch_start(self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self
        }
    }

    pub(crate) fn fetch_success(self, items: Vec<T>) -> Self {
        Self {
            items,
            loading: false,
            ..self
        }
    }

    pub(crate) fn fetch_failure(self, message: String) -> Self {
        Self {
            error: Some(message),
            loading: false,
            ..self
        }
    }

    pub(crate) fn append(mut self, item: T) -> Self {
        self.items.push(item);
        self
    }

    pub(crate) fn remove_where(mut self, predicate: impl Fn(&T) -> bool) -> Self {
        self.items.retain(|item| !predicate(item));
        self
    }
}
