use crate::search::SearchItem;

/// Screens of the application, carrying the item they display
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Detail(SearchItem),
    Player(SearchItem),
}

impl Route {
    #[must_use]
    pub fn item(&self) -> Option<&SearchItem> {
        match self {
            Self::Home => None,
            Self::Detail(item) | Self::Player(item) => Some(item),
        }
    }
}

/// Back stack rooted at [`Route::Home`]
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop the current screen; the root is never popped
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
