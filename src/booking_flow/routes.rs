use crate::http_handler::common::Role;

/// Navigation targets of the client. The string forms mirror the paths the
/// web front-end routes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    UserDashboard,
    AdminDashboard,
    MyBookings,
    CarDetails(usize),
    BookingForm(usize),
    Payment(usize),
    BookingSuccess(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Landing => String::from("/"),
            Route::Login => String::from("/login"),
            Route::UserDashboard => String::from("/user/dashboard"),
            Route::AdminDashboard => String::from("/admin/dashboard"),
            Route::MyBookings => String::from("/user/my-bookings"),
            Route::CarDetails(id) => format!("/user/cars/{id}"),
            Route::BookingForm(id) => format!("/user/booking/{id}"),
            Route::Payment(booking_id) => format!("/user/payment/{booking_id}"),
            Route::BookingSuccess(reference) => format!("/user/booking-success/{reference}"),
        }
    }

    /// Where a fresh login lands: admins on the admin dashboard, everyone
    /// else on the standard one.
    pub fn landing_for_role(role: Role) -> Route {
        match role {
            Role::Admin => Route::AdminDashboard,
            Role::User => Route::UserDashboard,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_user_lands_on_the_user_dashboard() {
        assert_eq!(Route::landing_for_role(Role::from("USER")), Route::UserDashboard);
        assert_eq!(Route::landing_for_role(Role::from("USER")).path(), "/user/dashboard");
    }

    #[test]
    fn admin_lands_on_the_admin_dashboard() {
        assert_eq!(Route::landing_for_role(Role::Admin), Route::AdminDashboard);
        assert_eq!(Route::landing_for_role(Role::Admin).path(), "/admin/dashboard");
    }

    #[test]
    fn parameterized_paths_render_their_ids() {
        assert_eq!(Route::CarDetails(4).path(), "/user/cars/4");
        assert_eq!(Route::Payment(12).path(), "/user/payment/12");
        assert_eq!(
            Route::BookingSuccess(String::from("REF-12")).to_string(),
            "/user/booking-success/REF-12"
        );
    }
}
