// Route path constants - single source of truth for all API paths
//
// Shared by the HTTP client and the server. Nothing in here logs or allocates,
// except `users::by_id` which builds a `String`.

use std::fmt;

/// Authentication endpoints
pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const LOGOUT: &str = "/auth/logout";
    pub const REFRESH: &str = "/auth/refresh";
}

/// User endpoints
pub mod users {
    pub const ME: &str = "/users/me";

    /// Prefix shared by `BY_ID` and [`by_id`].
    pub const PREFIX: &str = "/users";

    /// Server-side template for [`by_id`], in axum capture syntax.
    pub const BY_ID: &str = "/users/{id}";

    /// Name of the capture in [`BY_ID`].
    pub const BY_ID_PARAM: &str = "id";

    /// Build the path for a single user.
    ///
    /// The identifier is inserted verbatim: it is not validated or percent-encoded,
    /// so `by_id("a/b")` yields `/users/a/b`. Callers are expected to pass
    /// identifiers that are already safe to use as one path segment.
    pub fn by_id(id: &str) -> String {
        format!("{PREFIX}/{id}")
    }
}

/// The full route table.
///
/// `API_ROUTES` is an immutable `static`, so entries cannot be reassigned:
///
/// ```compile_fail
/// shared_routes::API_ROUTES.auth.login = "/elsewhere";
/// ```
///
/// Neither can a whole group:
///
/// ```compile_fail
/// use shared_routes::routes::AuthRoutes;
///
/// shared_routes::API_ROUTES.auth = AuthRoutes {
///     login: "/a",
///     register: "/b",
///     logout: "/c",
///     refresh: "/d",
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ApiRoutes {
    pub auth: AuthRoutes,
    pub users: UserRoutes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRoutes {
    pub login: &'static str,
    pub register: &'static str,
    pub logout: &'static str,
    pub refresh: &'static str,
}

#[derive(Clone, Copy)]
pub struct UserRoutes {
    pub me: &'static str,
    pub by_id: fn(&str) -> String,
}

impl fmt::Debug for UserRoutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRoutes")
            .field("me", &self.me)
            .field("by_id", &users::BY_ID)
            .finish()
    }
}

pub static API_ROUTES: ApiRoutes = ApiRoutes {
    auth: AuthRoutes {
        login: auth::LOGIN,
        register: auth::REGISTER,
        logout: auth::LOGOUT,
        refresh: auth::REFRESH,
    },
    users: UserRoutes {
        me: users::ME,
        by_id: users::by_id,
    },
};
