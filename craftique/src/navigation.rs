use std::fmt;

use tracing::info;

/// Pages known to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Dashboard,
    Login,
    Register,
    ForgotPassword,
    Products,
    Orders,
    Wishlist,
    Cart,
    Profile,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::Dashboard,
        Page::Login,
        Page::Register,
        Page::ForgotPassword,
        Page::Products,
        Page::Orders,
        Page::Wishlist,
        Page::Cart,
        Page::Profile,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::Login => "login",
            Self::Register => "register",
            Self::ForgotPassword => "forgot-password",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Wishlist => "wishlist",
            Self::Cart => "cart",
            Self::Profile => "profile",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.token() == token)
    }

    /// Token with its first letter uppercased, used as page title.
    pub fn title(&self) -> String {
        let token = self.token();
        let mut chars = token.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The current page token. Any string is accepted, unknown ones are resolved by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: String,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Page::Home.token().to_string(),
        }
    }

    pub fn navigate(&mut self, token: impl Into<String>) {
        let token = token.into();
        info!("navigating from {} to {}", self.current, token);
        self.current = token;
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn page(&self) -> Option<Page> {
        Page::from_token(&self.current)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_token(page.token()), Some(page));
        }
        assert_eq!(Page::from_token("Cart"), None);
        assert_eq!(Page::from_token("checkout"), None);
    }

    #[test]
    fn titles() {
        assert_eq!(Page::Cart.title(), "Cart");
        assert_eq!(Page::Wishlist.title(), "Wishlist");
        assert_eq!(Page::ForgotPassword.title(), "Forgot-password");
    }

    #[test]
    fn navigate_accepts_any_token() {
        let mut nav = Navigator::new();
        assert_eq!(nav.current(), "home");
        assert_eq!(nav.page(), Some(Page::Home));

        nav.navigate("checkout");
        assert_eq!(nav.current(), "checkout");
        assert_eq!(nav.page(), None);

        nav.navigate(Page::Cart.token());
        assert_eq!(nav.page(), Some(Page::Cart));
    }
}
