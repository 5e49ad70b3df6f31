//! Static routing table for the storefront views.
//!
//! Paths are matched segment by segment and case-insensitively; `:name`
//! segments capture a parameter. The query string and trailing slashes are
//! ignored.

pub mod guard;

pub use self::guard::{evaluate, navigate, Access, Decision, Navigation};

/// Access requirement attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    Public,
    Authenticated,
    AdminOnly,
}

impl Protection {
    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Public)
    }

    #[must_use]
    pub const fn admin_only(self) -> bool {
        matches!(self, Self::AdminOnly)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub name: &'static str,
    pub pattern: &'static str,
    pub protection: Protection,
    /// Index routes that only forward somewhere else.
    pub redirect: Option<&'static str>,
}

const fn route(name: &'static str, pattern: &'static str, protection: Protection) -> RouteDef {
    RouteDef {
        name,
        pattern,
        protection,
        redirect: None,
    }
}

pub const ROUTES: &[RouteDef] = &[
    route("home", "/", Protection::Public),
    route("product-details", "/ProductDetails", Protection::Public),
    route("products", "/Products", Protection::Public),
    route("cart", "/Cart", Protection::Authenticated),
    route("checkout", "/Checkout", Protection::Authenticated),
    route("wishlist", "/Wishlist", Protection::Authenticated),
    route("login", "/Login", Protection::Public),
    route("register", "/Register", Protection::Public),
    route("otp", "/Otp", Protection::Public),
    route("general-otp", "/GeneralOtp", Protection::Public),
    route("update-password", "/UpdatePassword", Protection::Public),
    route("forget-password", "/ForgetPassword", Protection::Public),
    route("order-success", "/OrderSuccess", Protection::Public),
    route("order-failed", "/OrderFailed", Protection::Public),
    RouteDef {
        name: "admin",
        pattern: "/Admin",
        protection: Protection::AdminOnly,
        redirect: Some("/Admin/AdminDashboard"),
    },
    route("admin-dashboard", "/Admin/AdminDashboard", Protection::AdminOnly),
    route("admin-add-product", "/Admin/AddProduct", Protection::AdminOnly),
    route("admin-add-variant", "/Admin/AddProductColor", Protection::AdminOnly),
    route("admin-add-images", "/Admin/AddProductImage", Protection::AdminOnly),
    route("admin-orders", "/Admin/Orders", Protection::AdminOnly),
    route("admin-customers", "/Admin/Customers", Protection::AdminOnly),
    route("admin-products", "/Admin/AdminProducts", Protection::AdminOnly),
    route(
        "admin-product-details",
        "/Admin/ProductDetails/:productId",
        Protection::AdminOnly,
    ),
    route(
        "admin-order-details",
        "/Admin/OrderDetails/:orderId",
        Protection::AdminOnly,
    ),
    route("admin-add-color", "/Admin/AddColor", Protection::AdminOnly),
    route("admin-add-size", "/Admin/AddSize", Protection::AdminOnly),
];

/// A resolved route with its captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteDef,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Look up a route by name.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|route| route.name == name)
}

/// Match `path` against the routing table.
#[must_use]
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let segments = split(path);

    ROUTES.iter().find_map(|route| {
        let pattern = split(route.pattern);
        if pattern.len() != segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (expected, actual) in pattern.into_iter().zip(&segments) {
            if let Some(name) = expected.strip_prefix(':') {
                params.push((name, (*actual).to_string()));
            } else if !expected.eq_ignore_ascii_case(actual) {
                return None;
            }
        }

        Some(RouteMatch { route, params })
    })
}

fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}
