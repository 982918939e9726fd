//! Table-driven page dispatch.

use crate::navigation::Page;

/// What the shell renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Dashboard,
    Login,
    Register,
    ForgotPassword,
    /// Authenticated page still under construction, titled after the page.
    Placeholder(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    /// View rendered for an authenticated session.
    pub view: View,
    /// View rendered without a session.
    pub anonymous: View,
}

impl Route {
    const fn public(page: Page, view: View) -> Self {
        Self {
            page,
            view,
            anonymous: view,
        }
    }

    const fn gated(page: Page) -> Self {
        Self {
            page,
            view: View::Placeholder(page),
            anonymous: View::Login,
        }
    }

    /// True if an anonymous visitor is sent to the login view.
    pub fn requires_auth(&self) -> bool {
        self.anonymous == View::Login && self.view != View::Login
    }

    pub fn resolve(&self, authenticated: bool) -> View {
        if authenticated {
            self.view
        } else {
            self.anonymous
        }
    }
}

pub static ROUTES: [Route; 10] = [
    Route::public(Page::Login, View::Login),
    Route::public(Page::Register, View::Register),
    Route::public(Page::ForgotPassword, View::ForgotPassword),
    Route {
        page: Page::Home,
        view: View::Dashboard,
        anonymous: View::Landing,
    },
    Route {
        page: Page::Dashboard,
        view: View::Dashboard,
        anonymous: View::Landing,
    },
    Route::gated(Page::Products),
    Route::gated(Page::Orders),
    Route::gated(Page::Wishlist),
    Route::gated(Page::Cart),
    Route::gated(Page::Profile),
];

/// Route used for any token missing from [`ROUTES`].
pub static FALLBACK: Route = Route {
    page: Page::Home,
    view: View::Landing,
    anonymous: View::Landing,
};

pub fn route(token: &str) -> &'static Route {
    ROUTES
        .iter()
        .find(|route| route.page.token() == token)
        .unwrap_or(&FALLBACK)
}

pub fn dispatch(token: &str, authenticated: bool) -> View {
    route(token).resolve(authenticated)
}
