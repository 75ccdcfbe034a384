//! Screen routes and the back stack that drives them.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Splash,
    WeatherSearch,
    /// Forecast for a location query (name or "lat,lon").
    WeatherDetail { location: String },
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    stack: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new(Route::Splash)
    }
}

impl NavStack {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> &Route {
        // The stack is never empty: `pop` refuses to remove the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Go back one screen. Returns false when already at the root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Swap the current screen without growing the stack (splash -> search).
    pub fn replace_top(&mut self, route: Route) {
        let last = self.stack.len() - 1;
        self.stack[last] = route;
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_splash() {
        let nav = NavStack::default();
        assert_eq!(nav.current(), &Route::Splash);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn splash_is_replaced_by_search() {
        let mut nav = NavStack::default();
        nav.replace_top(Route::WeatherSearch);

        assert_eq!(nav.current(), &Route::WeatherSearch);
        assert!(!nav.pop(), "search is the root once splash is gone");
    }

    #[test]
    fn detail_pops_back_to_search() {
        let mut nav = NavStack::new(Route::WeatherSearch);
        nav.push(Route::WeatherDetail { location: "4.71,-74.23".into() });
        assert_eq!(nav.depth(), 2);

        assert!(nav.pop());
        assert_eq!(nav.current(), &Route::WeatherSearch);
    }
}
